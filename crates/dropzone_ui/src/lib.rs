//! Leptos components for accepting files via drag-and-drop or the native picker.
//!
//! Mount [`DropzoneProvider`] once near the application root with a single
//! [`DropzoneEventBridge`] inside it, then place [`FileDropzone`] and
//! [`NativeFileInput`] instances anywhere below. The provider owns the shared
//! [`dropzone_core::DropzoneRegistry`] and the host service bundle; components reach
//! both through [`use_dropzone_runtime`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod context;
mod dropzone;
mod event_bridge;
mod format;
mod icon;
mod native_input;

pub use context::{
    use_dropzone_runtime, DropzoneHostContext, DropzoneProvider, DropzoneRuntimeContext,
};
pub use dropzone::FileDropzone;
pub use event_bridge::DropzoneEventBridge;
pub use format::format_file_size;
pub use icon::{Icon, IconName, IconSize};
pub use native_input::{NativeFileInput, PickerMode};
