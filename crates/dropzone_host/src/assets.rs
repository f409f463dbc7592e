//! Path-to-displayable-URL conversion contract for inline previews.

/// Converts absolute host paths into URLs the webview can render.
pub trait FileAssetService {
    /// Returns a URL for `path` suitable for `img`/`video` sources.
    fn file_src(&self, path: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
/// Identity adapter for targets without an asset protocol.
pub struct PassthroughFileAssetService;

impl FileAssetService for PassthroughFileAssetService {
    fn file_src(&self, path: &str) -> String {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_asset_service_returns_the_path_unchanged() {
        let assets = PassthroughFileAssetService;
        let assets_obj: &dyn FileAssetService = &assets;
        assert_eq!(assets_obj.file_src("/tmp/a.png"), "/tmp/a.png");
    }
}
