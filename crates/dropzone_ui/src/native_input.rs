//! Button-based native file/folder picker with resolved-file display.

use leptos::*;

use dropzone_host::{resolve_file_details, DialogFilter, FileDescriptor, FileDialogRequest};

use crate::{
    context::use_dropzone_runtime,
    format::format_file_size,
    icon::{Icon, IconName, IconSize},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Selection target for [`NativeFileInput`].
pub enum PickerMode {
    /// Pick a single file.
    #[default]
    File,
    /// Pick a single folder.
    Folder,
}

impl PickerMode {
    const fn is_folder(self) -> bool {
        matches!(self, Self::Folder)
    }

    const fn default_title(self) -> &'static str {
        match self {
            Self::File => "Select File",
            Self::Folder => "Select Folder",
        }
    }

    const fn icon(self) -> IconName {
        match self {
            Self::File => IconName::File,
            Self::Folder => IconName::Folder,
        }
    }
}

#[component]
/// Native file/folder picker button showing the accepted selection.
///
/// The dialog result is fully resolved into a [`FileDescriptor`] before the owner
/// callback runs: the dialog settles first, then the metadata lookup, then the callback.
/// Returning `false` from the callback rejects the selection and keeps the previous one;
/// a cancelled dialog changes nothing.
pub fn NativeFileInput(
    /// Owner acceptance callback; return `true` to accept the resolved file.
    on_file_change: Callback<FileDescriptor, bool>,
    /// Dialog title; defaults per mode.
    #[prop(optional)]
    dialog_title: Option<String>,
    /// Allowed extensions without the leading dot; `None` accepts everything.
    #[prop(optional)]
    extension_filter: Option<Vec<String>>,
    /// File or folder selection.
    #[prop(optional)]
    mode: PickerMode,
) -> impl IntoView {
    let runtime = use_dropzone_runtime();
    let current_file = create_rw_signal(None::<FileDescriptor>);

    let title = dialog_title.unwrap_or_else(|| mode.default_title().to_string());
    let button_label = title.clone();

    let open_dialog = Callback::new({
        let host = runtime.host.get_value();
        move |_: ()| {
            let filters = match (&extension_filter, mode.is_folder()) {
                (Some(extensions), false) => vec![DialogFilter {
                    name: String::new(),
                    extensions: extensions.clone(),
                }],
                _ => Vec::new(),
            };
            let request = FileDialogRequest {
                title: Some(title.clone()),
                multiple: false,
                directory: mode.is_folder(),
                filters,
            };
            let dialogs = host.file_dialog_service();
            let metadata = host.file_metadata_service();
            spawn_local(async move {
                let selection = match dialogs.pick(request).await {
                    Ok(selection) => selection,
                    Err(err) => {
                        logging::warn!("file dialog failed: {err}");
                        return;
                    }
                };
                let Some(path) = selection.into_paths().into_iter().next() else {
                    return;
                };
                match resolve_file_details(metadata.as_ref(), &path).await {
                    Ok(details) => {
                        if on_file_change.call(details.clone()) {
                            current_file.set(Some(details));
                        }
                    }
                    Err(err) => {
                        logging::warn!("file details lookup failed for `{path}`: {err}");
                    }
                }
            });
        }
    });

    view! {
        <button
            type="button"
            class="ui-native-file-input"
            data-ui-primitive="true"
            data-ui-kind="native-file-input"
            data-ui-state=move || {
                if current_file.with(Option::is_some) { "selected" } else { "idle" }
            }
            on:click=move |_| open_dialog.call(())
        >
            <Icon icon=mode.icon() size=IconSize::Sm />
            <span>{button_label}</span>
            {move || {
                current_file.get().map(|file| {
                    let show_size = !file.is_directory && !mode.is_folder();
                    view! {
                        <span data-ui-slot="picker-selection">
                            <span data-ui-slot="picker-file-name">{file.name.clone()}</span>
                            {show_size
                                .then(|| {
                                    view! {
                                        <span data-ui-slot="picker-file-size">
                                            {format_file_size(file.size)}
                                        </span>
                                    }
                                })}
                        </span>
                    }
                })
            }}
        </button>
    }
}
