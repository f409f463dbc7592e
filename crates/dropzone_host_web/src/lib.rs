//! Webview (`wasm32`) implementations of [`dropzone_host`] service contracts over the
//! Tauri global API.
//!
//! The WASM/JS interop layer lives in `bridge` with a non-wasm fallback shim, so adapter
//! contract tests run on native targets. Concrete adapters and factory wiring live in
//! [`services`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bridge;
pub mod services;

pub use services::{
    drag_event_source, file_asset_service, file_dialog_service, file_metadata_service,
    TauriDragEventSource, TauriFileAssetService, TauriFileDialogService, TauriFileMetadataService,
};
