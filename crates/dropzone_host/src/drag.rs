//! Drag lifecycle payload models and the host drag-event subscription contract.

use std::{future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`DragEventSource`].
pub type DragSourceFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Shared handler invoked for every normalized drag lifecycle notification.
pub type DragEventHandler = Rc<dyn Fn(DragLifecycleEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Cursor position in screen coordinates carried by drag notifications.
pub struct DragPosition {
    /// Horizontal cursor coordinate.
    pub x: f64,
    /// Vertical cursor coordinate.
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
/// Normalized drag lifecycle notification delivered by the host runtime.
pub enum DragLifecycleEvent {
    /// The cursor entered the window while dragging files.
    Enter {
        /// Cursor position at entry.
        position: DragPosition,
    },
    /// The cursor moved inside the window while dragging files.
    Over {
        /// Current cursor position.
        position: DragPosition,
    },
    /// The cursor left the window, or the host cancelled the drag.
    Leave,
    /// Files were released inside the window.
    Drop {
        /// Cursor position at release.
        position: DragPosition,
        /// Ordered absolute paths of the dropped files.
        #[serde(default)]
        paths: Vec<String>,
    },
}

impl DragLifecycleEvent {
    /// Returns the cursor position carried by the notification, if any.
    pub fn position(&self) -> Option<DragPosition> {
        match self {
            Self::Enter { position } | Self::Over { position } | Self::Drop { position, .. } => {
                Some(*position)
            }
            Self::Leave => None,
        }
    }
}

/// Active drag-event subscription guard.
///
/// Dropping the guard runs every registered unlisten closure, so teardown is guaranteed
/// on any path that releases the subscription.
pub struct DragSubscription {
    unlisten: Vec<Box<dyn FnOnce()>>,
}

impl DragSubscription {
    /// Builds a guard from host unlisten closures.
    pub fn new(unlisten: Vec<Box<dyn FnOnce()>>) -> Self {
        Self { unlisten }
    }

    /// Guard with no host registrations behind it.
    pub fn empty() -> Self {
        Self {
            unlisten: Vec::new(),
        }
    }

    /// Explicitly tears the subscription down.
    pub fn unsubscribe(self) {}
}

impl Drop for DragSubscription {
    fn drop(&mut self) {
        for unlisten in self.unlisten.drain(..) {
            unlisten();
        }
    }
}

impl std::fmt::Debug for DragSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragSubscription")
            .field("unlisten", &self.unlisten.len())
            .finish()
    }
}

/// Host source of drag lifecycle notifications.
pub trait DragEventSource {
    /// Subscribes `handler` to all drag lifecycle notifications.
    ///
    /// The returned guard must be kept alive for the lifetime of the subscription.
    fn subscribe<'a>(
        &'a self,
        handler: DragEventHandler,
    ) -> DragSourceFuture<'a, Result<DragSubscription, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op drag source for targets without host drag notifications.
pub struct NoopDragEventSource;

impl DragEventSource for NoopDragEventSource {
    fn subscribe<'a>(
        &'a self,
        _handler: DragEventHandler,
    ) -> DragSourceFuture<'a, Result<DragSubscription, String>> {
        Box::pin(async { Ok(DragSubscription::empty()) })
    }
}
