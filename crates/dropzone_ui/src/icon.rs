//! Minimal inline-SVG icon set used by dropzone surfaces.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon glyphs used by dropzone components.
pub enum IconName {
    /// Generic file glyph.
    File,
    /// Folder glyph.
    Folder,
    /// Small "x" used on file cards.
    Remove,
    /// Trash can used by the clear-all action.
    Trash,
}

impl IconName {
    fn token(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
            Self::Remove => "remove",
            Self::Trash => "trash",
        }
    }

    fn path_data(self) -> &'static str {
        match self {
            Self::File => "M6 2h9l5 5v14a1 1 0 0 1-1 1H6a1 1 0 0 1-1-1V3a1 1 0 0 1 1-1zm8 1.5V8h4.5L14 3.5z",
            Self::Folder => "M3 5a1 1 0 0 1 1-1h5l2 2h9a1 1 0 0 1 1 1v11a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V5z",
            Self::Remove => "M6.2 4.8 12 10.6l5.8-5.8 1.4 1.4-5.8 5.8 5.8 5.8-1.4 1.4-5.8-5.8-5.8 5.8-1.4-1.4 5.8-5.8-5.8-5.8z",
            Self::Trash => "M9 3h6l1 2h4v2H4V5h4l1-2zM6 9h12l-1 12a1 1 0 0 1-1 1H8a1 1 0 0 1-1-1L6 9z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Dense icon.
    Sm,
    /// Default icon.
    Md,
    /// Large icon for empty states and generic thumbnails.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn px(self) -> &'static str {
        match self {
            Self::Sm => "16",
            Self::Md => "24",
            Self::Lg => "48",
        }
    }
}

#[component]
/// Inline SVG icon with the shared `data-ui-*` DOM contract.
pub fn Icon(
    /// Glyph to render.
    icon: IconName,
    /// Sizing token.
    #[prop(default = IconSize::Md)]
    size: IconSize,
) -> impl IntoView {
    view! {
        <svg
            class="ui-icon"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
            width=size.px()
            height=size.px()
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d=icon.path_data() />
        </svg>
    }
}
