//! File metadata lookup contract and a scriptable in-memory implementation.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`FileMetadataService`].
pub type FileMetadataFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Stat-style metadata returned by the host for one absolute path.
pub struct FileMetadata {
    /// File size in bytes.
    pub size: u64,
    /// Creation time in unix milliseconds when the host reports one.
    pub created_at_unix_ms: Option<u64>,
    /// Last-modified time in unix milliseconds when the host reports one.
    pub modified_at_unix_ms: Option<u64>,
    /// Whether the path points at a directory.
    pub is_directory: bool,
}

/// Host service for stat-style file metadata lookups.
pub trait FileMetadataService {
    /// Retrieves metadata for an absolute path.
    fn stat<'a>(&'a self, path: &'a str) -> FileMetadataFuture<'a, Result<FileMetadata, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op metadata service for unsupported targets and baseline tests.
pub struct NoopFileMetadataService;

impl FileMetadataService for NoopFileMetadataService {
    fn stat<'a>(&'a self, _path: &'a str) -> FileMetadataFuture<'a, Result<FileMetadata, String>> {
        Box::pin(async { Err("file metadata unavailable: stat".to_string()) })
    }
}

#[derive(Debug, Default)]
/// In-memory metadata service used by contract tests.
pub struct MemoryFileMetadataService {
    entries: RefCell<HashMap<String, FileMetadata>>,
}

impl MemoryFileMetadataService {
    /// Creates a service preloaded with one entry.
    pub fn with_entry(path: &str, metadata: FileMetadata) -> Self {
        let service = Self::default();
        service.insert(path, metadata);
        service
    }

    /// Inserts or replaces the metadata stored for `path`.
    pub fn insert(&self, path: &str, metadata: FileMetadata) {
        self.entries.borrow_mut().insert(path.to_string(), metadata);
    }
}

impl FileMetadataService for MemoryFileMetadataService {
    fn stat<'a>(&'a self, path: &'a str) -> FileMetadataFuture<'a, Result<FileMetadata, String>> {
        Box::pin(async move {
            self.entries
                .borrow()
                .get(path)
                .copied()
                .ok_or_else(|| format!("path not found: {path}"))
        })
    }
}
