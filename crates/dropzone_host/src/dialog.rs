//! Native file-dialog request/selection models and the host dialog contract.

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`FileDialogService`].
pub type FileDialogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Extension filter group shown in the native picker.
pub struct DialogFilter {
    /// Display label for the filter group.
    pub name: String,
    /// Allowed extensions without the leading dot.
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Configuration for one native file/folder picker invocation.
pub struct FileDialogRequest {
    /// Dialog window title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whether multiple entries may be selected.
    pub multiple: bool,
    /// Whether the picker selects directories instead of files.
    pub directory: bool,
    /// Extension filter groups; empty means "all files".
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<DialogFilter>,
}

#[derive(Debug, Clone, PartialEq)]
/// Outcome of a native picker invocation.
///
/// Cancellation is a result, not an error: callers that receive [`Self::Cancelled`]
/// simply perform no state update.
pub enum DialogSelection {
    /// The dialog was dismissed without a choice.
    Cancelled,
    /// A single path was chosen.
    Single(String),
    /// Multiple paths were chosen, in selection order.
    Multiple(Vec<String>),
}

impl DialogSelection {
    /// Returns `true` when the dialog was dismissed without a choice.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Normalizes the selection into a path list; [`Self::Cancelled`] becomes empty.
    pub fn into_paths(self) -> Vec<String> {
        match self {
            Self::Cancelled => Vec::new(),
            Self::Single(path) => vec![path],
            Self::Multiple(paths) => paths,
        }
    }
}

/// Host service exposing the native file/folder picker.
pub trait FileDialogService {
    /// Opens the native picker and resolves once the user confirms or dismisses it.
    fn pick<'a>(
        &'a self,
        request: FileDialogRequest,
    ) -> FileDialogFuture<'a, Result<DialogSelection, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op dialog service for unsupported targets and baseline tests.
pub struct NoopFileDialogService;

impl FileDialogService for NoopFileDialogService {
    fn pick<'a>(
        &'a self,
        _request: FileDialogRequest,
    ) -> FileDialogFuture<'a, Result<DialogSelection, String>> {
        Box::pin(async { Err("file dialog unavailable: pick".to_string()) })
    }
}
