//! Concrete Tauri-webview adapters and factory wiring for dropzone host services.

use dropzone_host::{
    DialogSelection, DragEventHandler, DragEventSource, DragSourceFuture, DragSubscription,
    FileAssetService, FileDialogFuture, FileDialogRequest, FileDialogService, FileMetadata,
    FileMetadataFuture, FileMetadataService,
};

#[derive(Debug, Clone, Copy, Default)]
/// Native-dialog adapter backed by the Tauri dialog plugin.
pub struct TauriFileDialogService;

impl FileDialogService for TauriFileDialogService {
    fn pick<'a>(
        &'a self,
        request: FileDialogRequest,
    ) -> FileDialogFuture<'a, Result<DialogSelection, String>> {
        Box::pin(async move { crate::bridge::dialog_open(&request).await })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Metadata adapter backed by the Tauri fs plugin's stat call.
pub struct TauriFileMetadataService;

impl FileMetadataService for TauriFileMetadataService {
    fn stat<'a>(&'a self, path: &'a str) -> FileMetadataFuture<'a, Result<FileMetadata, String>> {
        Box::pin(async move { crate::bridge::file_stat(path).await })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Asset-URL adapter backed by Tauri's asset protocol.
///
/// When the conversion is unavailable the path is returned unchanged, which keeps
/// preview rendering total.
pub struct TauriFileAssetService;

impl FileAssetService for TauriFileAssetService {
    fn file_src(&self, path: &str) -> String {
        crate::bridge::convert_file_src(path)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Drag-notification adapter backed by the Tauri event API.
pub struct TauriDragEventSource;

impl DragEventSource for TauriDragEventSource {
    fn subscribe<'a>(
        &'a self,
        handler: DragEventHandler,
    ) -> DragSourceFuture<'a, Result<DragSubscription, String>> {
        Box::pin(async move { crate::bridge::listen_drag_events(handler).await })
    }
}

/// Returns the native-dialog service for the active target.
pub fn file_dialog_service() -> TauriFileDialogService {
    TauriFileDialogService
}

/// Returns the file metadata service for the active target.
pub fn file_metadata_service() -> TauriFileMetadataService {
    TauriFileMetadataService
}

/// Returns the asset-URL service for the active target.
pub fn file_asset_service() -> TauriFileAssetService {
    TauriFileAssetService
}

/// Returns the drag-notification source for the active target.
pub fn drag_event_source() -> TauriDragEventSource {
    TauriDragEventSource
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_dialog_adapter_matches_bridge_fallback_behavior() {
        let dialogs = TauriFileDialogService;
        let dialogs_obj: &dyn FileDialogService = &dialogs;
        let err = block_on(dialogs_obj.pick(FileDialogRequest::default())).expect_err("pick");
        assert!(err.contains("wasm32"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_metadata_adapter_matches_bridge_fallback_behavior() {
        let metadata = TauriFileMetadataService;
        let metadata_obj: &dyn FileMetadataService = &metadata;
        let err = block_on(metadata_obj.stat("/tmp/a.png")).expect_err("stat");
        assert!(err.contains("wasm32"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_asset_adapter_passes_paths_through() {
        let assets = TauriFileAssetService;
        let assets_obj: &dyn FileAssetService = &assets;
        assert_eq!(assets_obj.file_src("/tmp/a.png"), "/tmp/a.png");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_drag_source_yields_an_inert_subscription() {
        let source = TauriDragEventSource;
        let source_obj: &dyn DragEventSource = &source;
        let guard = block_on(source_obj.subscribe(Rc::new(|_| {}))).expect("subscribe");
        drop(guard);
    }
}
