//! Provider and context wiring for the shared registry and host service bundle.

use std::rc::Rc;

use leptos::*;

use dropzone_core::{DropzoneRegistry, SharedDropzoneRegistry};
use dropzone_host::{DragEventSource, FileAssetService, FileDialogService, FileMetadataService};
use dropzone_host_web::{
    drag_event_source, file_asset_service, file_dialog_service, file_metadata_service,
};

#[derive(Clone)]
/// Host service bundle consumed by dropzone components.
pub struct DropzoneHostContext {
    dialogs: Rc<dyn FileDialogService>,
    metadata: Rc<dyn FileMetadataService>,
    assets: Rc<dyn FileAssetService>,
    drag_events: Rc<dyn DragEventSource>,
}

impl Default for DropzoneHostContext {
    fn default() -> Self {
        Self {
            dialogs: Rc::new(file_dialog_service()),
            metadata: Rc::new(file_metadata_service()),
            assets: Rc::new(file_asset_service()),
            drag_events: Rc::new(drag_event_source()),
        }
    }
}

impl DropzoneHostContext {
    /// Builds a bundle from explicit services; used by tests and host embedders.
    pub fn new(
        dialogs: Rc<dyn FileDialogService>,
        metadata: Rc<dyn FileMetadataService>,
        assets: Rc<dyn FileAssetService>,
        drag_events: Rc<dyn DragEventSource>,
    ) -> Self {
        Self {
            dialogs,
            metadata,
            assets,
            drag_events,
        }
    }

    /// Returns the configured native-dialog service.
    pub fn file_dialog_service(&self) -> Rc<dyn FileDialogService> {
        self.dialogs.clone()
    }

    /// Returns the configured file metadata service.
    pub fn file_metadata_service(&self) -> Rc<dyn FileMetadataService> {
        self.metadata.clone()
    }

    /// Returns the configured asset-URL service.
    pub fn file_asset_service(&self) -> Rc<dyn FileAssetService> {
        self.assets.clone()
    }

    /// Returns the configured drag-notification source.
    pub fn drag_event_source(&self) -> Rc<dyn DragEventSource> {
        self.drag_events.clone()
    }
}

#[derive(Clone, Copy)]
/// Leptos context exposing the shared registry and host bundle to dropzone components.
pub struct DropzoneRuntimeContext {
    /// Process-wide dropzone routing table.
    pub registry: StoredValue<SharedDropzoneRegistry>,
    /// Host service bundle for dialogs, metadata, previews, and drag events.
    pub host: StoredValue<DropzoneHostContext>,
}

#[component]
/// Provides [`DropzoneRuntimeContext`] to descendant components.
///
/// Mount once near the application root, together with a single
/// [`crate::DropzoneEventBridge`]. The registry lives for the provider's lifetime; it is
/// not torn down explicitly because it only holds callbacks and bounds accessors that
/// become unreachable once their owning components unregister.
pub fn DropzoneProvider(
    /// Host bundle override; defaults to the Tauri adapters for the active target.
    #[prop(optional)]
    host: Option<DropzoneHostContext>,
    children: Children,
) -> impl IntoView {
    let registry = store_value(DropzoneRegistry::new_shared());
    let host = store_value(host.unwrap_or_default());
    provide_context(DropzoneRuntimeContext { registry, host });
    children().into_view()
}

/// Returns the current [`DropzoneRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DropzoneProvider`].
pub fn use_dropzone_runtime() -> DropzoneRuntimeContext {
    use_context::<DropzoneRuntimeContext>().expect("DropzoneRuntimeContext not provided")
}
