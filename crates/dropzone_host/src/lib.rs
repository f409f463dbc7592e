//! Typed host-domain contracts and shared models for file drag-and-drop UI surfaces.
//!
//! This crate is the API-first boundary between dropzone UI code and the webview host
//! runtime. It owns drag lifecycle payload models, dialog request/selection models, file
//! metadata and descriptor models, and the object-safe service traits whose concrete
//! webview adapters live in `dropzone_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod assets;
pub mod dialog;
pub mod drag;
pub mod files;
pub mod metadata;
pub mod time;

pub use assets::{FileAssetService, PassthroughFileAssetService};
pub use dialog::{
    DialogFilter, DialogSelection, FileDialogFuture, FileDialogRequest, FileDialogService,
    NoopFileDialogService,
};
pub use drag::{
    DragEventHandler, DragEventSource, DragLifecycleEvent, DragPosition, DragSourceFuture,
    DragSubscription, NoopDragEventSource,
};
pub use files::{
    categorize_mime, file_extension, file_name_from_path, mime_for_extension,
    resolve_file_details, FileCategory, FileDescriptor, OCTET_STREAM_MIME,
};
pub use metadata::{
    FileMetadata, FileMetadataFuture, FileMetadataService, MemoryFileMetadataService,
    NoopFileMetadataService,
};
pub use time::unix_time_ms_now;
