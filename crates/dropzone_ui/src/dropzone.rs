//! Drag-and-drop file picker surface backed by the shared dropzone registry.

use std::rc::Rc;

use leptos::*;

use dropzone_core::{BoundsAccessor, DropCallback, HighlightCallback, ZoneRect};
use dropzone_host::{DialogFilter, FileDescriptor, FileDialogRequest};

use crate::{
    context::use_dropzone_runtime,
    format::format_file_size,
    icon::{Icon, IconName, IconSize},
};

/// Raster/vector extensions rendered as inline previews even when the MIME lookup is
/// inconclusive.
const IMAGE_PREVIEW_EXTENSIONS: [&str; 8] =
    ["jpg", "jpeg", "png", "webp", "ico", "bmp", "gif", "svg"];

fn is_previewable_image(file: &FileDescriptor) -> bool {
    file.mime.starts_with("image/")
        || IMAGE_PREVIEW_EXTENSIONS.contains(&file.extension.to_ascii_lowercase().as_str())
}

/// Merges newly selected paths into the existing list, keeping order and dropping
/// duplicates.
fn merge_paths(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut merged = existing.to_vec();
    for path in incoming {
        if !merged.contains(path) {
            merged.push(path.clone());
        }
    }
    merged
}

#[component]
/// Drag-and-drop area with a native-dialog fallback and file-card previews.
///
/// The component registers itself with the shared registry while mounted and enabled;
/// redundant re-registration replaces the prior entry, and unmounting (or disabling)
/// unregisters it. The owner keeps the file list and receives `(id, merged_paths)`
/// whenever files are added or removed.
pub fn FileDropzone(
    /// Unique identifier for this dropzone instance.
    #[prop(into)]
    id: String,
    /// Currently selected files, resolved by the owner.
    #[prop(into)]
    files: Signal<Vec<FileDescriptor>>,
    /// Owner callback receiving the dropzone id and the merged path list.
    on_files_change: Callback<(String, Vec<String>)>,
    /// Extension filter groups for the native dialog.
    #[prop(optional)]
    filters: Vec<DialogFilter>,
    /// Disables registration and the dialog button.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let runtime = use_dropzone_runtime();
    let registry = runtime.registry.get_value();
    let dropzone_ref = create_node_ref::<html::Div>();
    let hovered = create_rw_signal(false);

    let bounds: BoundsAccessor = Rc::new(move || {
        dropzone_ref.get_untracked().map(|element| {
            let rect = element.get_bounding_client_rect();
            ZoneRect {
                left: rect.left(),
                top: rect.top(),
                right: rect.right(),
                bottom: rect.bottom(),
            }
        })
    });

    let existing_paths =
        move || files.with_untracked(|files| files.iter().map(|file| file.path.clone()).collect::<Vec<_>>());

    let on_drop: DropCallback = {
        let id = id.clone();
        Rc::new(move |paths: &[String]| {
            let merged = merge_paths(&existing_paths(), paths);
            on_files_change.call((id.clone(), merged));
        })
    };
    let on_highlight: HighlightCallback = Rc::new(move |inside| hovered.set(inside));

    create_effect({
        let registry = registry.clone();
        let id = id.clone();
        let bounds = bounds.clone();
        let on_drop = on_drop.clone();
        let on_highlight = on_highlight.clone();
        move |_| {
            let currently_disabled = disabled.get();
            {
                let mut registry = registry.borrow_mut();
                if currently_disabled {
                    registry.unregister(&id);
                } else {
                    registry.register(
                        id.clone(),
                        bounds.clone(),
                        on_drop.clone(),
                        Some(on_highlight.clone()),
                    );
                }
            }
            if currently_disabled {
                hovered.set(false);
            }
        }
    });

    on_cleanup({
        let registry = registry.clone();
        let id = id.clone();
        move || registry.borrow_mut().unregister(&id)
    });

    let open_dialog = Callback::new({
        let id = id.clone();
        let host = runtime.host.get_value();
        move |_: ()| {
            if disabled.get_untracked() {
                return;
            }
            let id = id.clone();
            let request = FileDialogRequest {
                title: Some("Select Files".to_string()),
                multiple: true,
                directory: false,
                filters: filters.clone(),
            };
            let dialogs = host.file_dialog_service();
            spawn_local(async move {
                match dialogs.pick(request).await {
                    Ok(selection) => {
                        let picked = selection.into_paths();
                        if picked.is_empty() {
                            return;
                        }
                        let merged = merge_paths(&existing_paths(), &picked);
                        on_files_change.call((id, merged));
                    }
                    Err(err) => logging::warn!("file dialog failed: {err}"),
                }
            });
        }
    });

    let remove_file = Callback::new({
        let id = id.clone();
        move |remove_path: String| {
            let remaining = files.with_untracked(|files| {
                files
                    .iter()
                    .map(|file| file.path.clone())
                    .filter(|path| *path != remove_path)
                    .collect::<Vec<_>>()
            });
            on_files_change.call((id.clone(), remaining));
        }
    });

    let clear_all = Callback::new({
        let id = id.clone();
        move |_: ()| on_files_change.call((id.clone(), Vec::new()))
    });

    let has_files = Signal::derive(move || !files.with(Vec::is_empty));

    view! {
        <div class="ui-dropzone" data-ui-primitive="true" data-ui-kind="dropzone">
            <Show when=move || has_files.get() fallback=|| ()>
                <div data-ui-slot="dropzone-actions">
                    <button
                        type="button"
                        title="Clear all"
                        on:click=move |_| clear_all.call(())
                    >
                        <span>"Clear All"</span>
                        <Icon icon=IconName::Trash size=IconSize::Sm />
                    </button>
                </div>
            </Show>
            <div
                node_ref=dropzone_ref
                data-ui-slot="dropzone-surface"
                data-ui-state=move || if hovered.get() { "hovered" } else { "idle" }
                data-ui-disabled=move || disabled.get().to_string()
            >
                <Show
                    when=move || has_files.get()
                    fallback=move || {
                        view! {
                            <div data-ui-slot="dropzone-empty">
                                <Icon icon=IconName::File size=IconSize::Md />
                                <button
                                    type="button"
                                    on:click=move |_| open_dialog.call(())
                                    disabled=move || disabled.get()
                                >
                                    "Drag & drop files here"
                                </button>
                            </div>
                        }
                    }
                >
                    <FileCardGrid files=files remove_file=remove_file />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn FileCardGrid(files: Signal<Vec<FileDescriptor>>, remove_file: Callback<String>) -> impl IntoView {
    let assets = use_dropzone_runtime().host.get_value().file_asset_service();

    view! {
        <div data-ui-slot="dropzone-grid">
            <For
                each=move || files.get()
                key=|file| file.path.clone()
                children=move |file: FileDescriptor| {
                    let preview = is_previewable_image(&file);
                    let src = assets.file_src(&file.path);
                    let remove_path = file.path.clone();
                    view! {
                        <div data-ui-slot="file-card" data-ui-category=file.category.as_str()>
                            <button
                                type="button"
                                title="Remove"
                                data-ui-slot="file-remove"
                                on:click=move |_| remove_file.call(remove_path.clone())
                            >
                                <Icon icon=IconName::Remove size=IconSize::Sm />
                            </button>
                            <div data-ui-slot="file-thumbnail">
                                {if preview {
                                    view! { <img src=src alt=file.name.clone() /> }.into_view()
                                } else {
                                    view! { <Icon icon=IconName::File size=IconSize::Lg /> }
                                        .into_view()
                                }}
                            </div>
                            <div data-ui-slot="file-caption">
                                <div data-ui-slot="file-name">{file.name.clone()}</div>
                                <div data-ui-slot="file-size">{format_file_size(file.size)}</div>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
