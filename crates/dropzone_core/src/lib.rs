//! Coordinate-based routing core for file dropzones.
//!
//! This crate owns the process-wide dropzone registry, its hit-testing geometry, and the
//! drag-event routing policy. It has no UI or webview dependencies beyond the shared
//! payload models in [`dropzone_host`], which keeps every routing rule unit-testable on
//! native targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bridge;
pub mod geometry;
pub mod registry;

pub use bridge::route_drag_event;
pub use geometry::ZoneRect;
pub use registry::{
    BoundsAccessor, DropCallback, DropzoneRegistry, HighlightCallback, SharedDropzoneRegistry,
};
