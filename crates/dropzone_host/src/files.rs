//! File descriptor models, MIME resolution rules, and the file-details resolver.

use serde::{Deserialize, Serialize};

use crate::{metadata::FileMetadataService, time::unix_time_ms_now};

/// Fallback MIME type for extensions the registry does not know.
pub const OCTET_STREAM_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Coarse category derived from a file's MIME type.
pub enum FileCategory {
    /// `video/*` MIME types.
    Video,
    /// `image/*` MIME types.
    Image,
    /// Textual and office-document MIME types.
    Document,
    /// Everything else.
    Other,
}

impl FileCategory {
    /// Stable string token for diagnostics and DOM attributes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
            Self::Document => "document",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Resolved, immutable description of one file on the host filesystem.
pub struct FileDescriptor {
    /// Absolute path on the host filesystem.
    pub path: String,
    /// Base name including the extension.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Resolved MIME type.
    pub mime: String,
    /// Extension without the leading dot; empty when absent.
    pub extension: String,
    /// Creation time in unix milliseconds.
    pub created_at_unix_ms: u64,
    /// Last-modified time in unix milliseconds.
    pub modified_at_unix_ms: u64,
    /// Coarse category derived from the MIME type.
    pub category: FileCategory,
    /// Whether the path points at a directory.
    pub is_directory: bool,
}

/// Returns the MIME type for an extension, case-insensitively, falling back to
/// [`OCTET_STREAM_MIME`] for unknown extensions.
pub fn mime_for_extension(extension: &str) -> String {
    let lowered = extension.to_ascii_lowercase();
    mime_guess::from_ext(&lowered)
        .first_raw()
        .map(str::to_string)
        .unwrap_or_else(|| OCTET_STREAM_MIME.to_string())
}

/// Maps a MIME type onto the coarse category used by dropzone UI surfaces.
pub fn categorize_mime(mime: &str) -> FileCategory {
    if mime.starts_with("image/") {
        return FileCategory::Image;
    }
    if mime.starts_with("video/") {
        return FileCategory::Video;
    }
    if mime.starts_with("text/")
        || mime.contains("document")
        || mime.contains("pdf")
        || mime.contains("spreadsheet")
        || mime.contains("presentation")
    {
        return FileCategory::Document;
    }
    FileCategory::Other
}

/// Extracts the base name from a path, accepting both separator styles.
pub fn file_name_from_path(path: &str) -> String {
    path.replace('\\', "/")
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Extracts the extension (without the dot) from a file name; empty when absent.
pub fn file_extension(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((_, extension)) => extension.to_string(),
        None => String::new(),
    }
}

/// Resolves the full [`FileDescriptor`] for an absolute path.
///
/// The host metadata lookup is awaited before any derivation happens and lookup failures
/// propagate unchanged. Missing host timestamps fall back to the modification time and
/// then to the current wall-clock time, so a descriptor is always fully populated.
pub async fn resolve_file_details(
    metadata: &dyn FileMetadataService,
    path: &str,
) -> Result<FileDescriptor, String> {
    let stat = metadata.stat(path).await?;
    let name = file_name_from_path(path);
    let extension = file_extension(&name);
    let mime = mime_for_extension(&extension);
    let category = categorize_mime(&mime);
    let now = unix_time_ms_now();

    Ok(FileDescriptor {
        path: path.to_string(),
        name,
        size: stat.size,
        mime,
        extension,
        created_at_unix_ms: stat
            .created_at_unix_ms
            .or(stat.modified_at_unix_ms)
            .unwrap_or(now),
        modified_at_unix_ms: stat.modified_at_unix_ms.unwrap_or(now),
        category,
        is_directory: stat.is_directory,
    })
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::metadata::{FileMetadata, MemoryFileMetadataService, NoopFileMetadataService};

    #[test]
    fn mime_lookup_is_case_insensitive() {
        assert_eq!(mime_for_extension("PNG"), "image/png");
        assert_eq!(mime_for_extension("jpg"), "image/jpeg");
        assert_eq!(mime_for_extension("Mp4"), "video/mp4");
    }

    #[test]
    fn unknown_extensions_fall_back_to_octet_stream() {
        assert_eq!(mime_for_extension("xyz123"), OCTET_STREAM_MIME);
        assert_eq!(mime_for_extension(""), OCTET_STREAM_MIME);
    }

    #[test]
    fn categorization_follows_the_mime_prefix_rules() {
        assert_eq!(categorize_mime("image/png"), FileCategory::Image);
        assert_eq!(categorize_mime("video/quicktime"), FileCategory::Video);
        assert_eq!(categorize_mime("text/plain"), FileCategory::Document);
        assert_eq!(categorize_mime("application/pdf"), FileCategory::Document);
        assert_eq!(
            categorize_mime(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            FileCategory::Document
        );
        assert_eq!(
            categorize_mime("application/vnd.ms-excel"),
            FileCategory::Other
        );
        assert_eq!(
            categorize_mime(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            ),
            FileCategory::Document
        );
        assert_eq!(categorize_mime(OCTET_STREAM_MIME), FileCategory::Other);
    }

    #[test]
    fn file_names_resolve_for_both_separator_styles() {
        assert_eq!(file_name_from_path("/home/user/photo.PNG"), "photo.PNG");
        assert_eq!(file_name_from_path("C:\\Users\\user\\photo.png"), "photo.png");
        assert_eq!(file_name_from_path("photo.png"), "photo.png");
    }

    #[test]
    fn extensions_resolve_from_the_last_dot() {
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("README"), "");
        assert_eq!(file_extension(".gitignore"), "gitignore");
    }

    #[test]
    fn resolver_populates_every_descriptor_field() {
        let metadata = MemoryFileMetadataService::with_entry(
            "/home/user/photo.PNG",
            FileMetadata {
                size: 2_048,
                created_at_unix_ms: Some(1_000),
                modified_at_unix_ms: Some(2_000),
                is_directory: false,
            },
        );

        let details =
            block_on(resolve_file_details(&metadata, "/home/user/photo.PNG")).expect("resolve");
        assert_eq!(details.path, "/home/user/photo.PNG");
        assert_eq!(details.name, "photo.PNG");
        assert_eq!(details.size, 2_048);
        assert_eq!(details.mime, "image/png");
        assert_eq!(details.extension, "PNG");
        assert_eq!(details.created_at_unix_ms, 1_000);
        assert_eq!(details.modified_at_unix_ms, 2_000);
        assert_eq!(details.category, FileCategory::Image);
        assert!(!details.is_directory);
    }

    #[test]
    fn resolver_backfills_missing_timestamps() {
        let metadata = MemoryFileMetadataService::with_entry(
            "/data/report.pdf",
            FileMetadata {
                size: 10,
                created_at_unix_ms: None,
                modified_at_unix_ms: Some(5_000),
                is_directory: false,
            },
        );
        let details = block_on(resolve_file_details(&metadata, "/data/report.pdf")).expect("resolve");
        assert_eq!(details.created_at_unix_ms, 5_000);

        let metadata = MemoryFileMetadataService::with_entry(
            "/data/blob.xyz123",
            FileMetadata {
                size: 0,
                created_at_unix_ms: None,
                modified_at_unix_ms: None,
                is_directory: false,
            },
        );
        let details = block_on(resolve_file_details(&metadata, "/data/blob.xyz123")).expect("resolve");
        assert!(details.created_at_unix_ms > 0);
        assert_eq!(details.created_at_unix_ms, details.modified_at_unix_ms);
        assert_eq!(details.mime, OCTET_STREAM_MIME);
        assert_eq!(details.category, FileCategory::Other);
    }

    #[test]
    fn resolver_propagates_stat_failures() {
        let err = block_on(resolve_file_details(&NoopFileMetadataService, "/tmp/a.png"))
            .expect_err("stat failure should propagate");
        assert!(err.contains("stat"));
    }

    #[test]
    fn category_serde_tokens_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&FileCategory::Document).expect("serialize"),
            "\"document\""
        );
        let category: FileCategory = serde_json::from_str("\"image\"").expect("deserialize");
        assert_eq!(category, FileCategory::Image);
        assert_eq!(FileCategory::Video.as_str(), "video");
    }
}
