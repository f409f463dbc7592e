//! Tauri global-API bridge for dialog, metadata, asset, and drag-event transport.
//!
//! This module contains the WASM/JS interop layer and a non-WASM fallback shim. The JS
//! side talks to `window.__TAURI__` (the dialog and fs plugins plus the core event and
//! asset APIs), normalizes payload shapes, and hands back JSON-compatible values the
//! Rust side decodes with serde.

use dropzone_host::{
    DialogSelection, DragEventHandler, DragSubscription, FileDialogRequest, FileMetadata,
};

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::*;
    use js_sys::Promise;
    use serde::Serialize;
    use serde_wasm_bindgen::{from_value, Serializer};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    use dropzone_host::DragLifecycleEvent;

    #[wasm_bindgen(inline_js = r#"
function tauriGlobal() {
  const api = typeof window !== 'undefined' ? window.__TAURI__ : undefined;
  if (!api) {
    throw new Error('Tauri global API is unavailable; enable app.withGlobalTauri');
  }
  return api;
}

export async function jsDialogOpen(options) {
  const api = tauriGlobal();
  if (!api.dialog || typeof api.dialog.open !== 'function') {
    throw new Error('Tauri dialog plugin is unavailable');
  }
  return await api.dialog.open(options);
}

export async function jsFileStat(path) {
  const api = tauriGlobal();
  if (!api.fs || typeof api.fs.stat !== 'function') {
    throw new Error('Tauri fs plugin is unavailable');
  }
  const metadata = await api.fs.stat(path);
  const toUnixMs = (value) => {
    if (value === null || value === undefined) return null;
    const ms = new Date(value).getTime();
    return Number.isNaN(ms) ? null : ms;
  };
  return {
    size: metadata.size ?? 0,
    created_at_unix_ms: toUnixMs(metadata.birthtime),
    modified_at_unix_ms: toUnixMs(metadata.mtime),
    is_directory: !!metadata.isDirectory,
  };
}

export function jsConvertFileSrc(path) {
  return tauriGlobal().core.convertFileSrc(path);
}

export async function jsListenDragEvents(handler) {
  const { listen } = tauriGlobal().event;
  const positionOf = (payload) => {
    const position = (payload && payload.position) || { x: 0, y: 0 };
    return { x: position.x ?? 0, y: position.y ?? 0 };
  };
  const unlistenFns = [];
  unlistenFns.push(await listen('tauri://drag-enter', (event) =>
    handler({ type: 'enter', position: positionOf(event.payload) })));
  unlistenFns.push(await listen('tauri://drag-over', (event) =>
    handler({ type: 'over', position: positionOf(event.payload) })));
  unlistenFns.push(await listen('tauri://drag-leave', () =>
    handler({ type: 'leave' })));
  unlistenFns.push(await listen('tauri://drag-drop', (event) =>
    handler({
      type: 'drop',
      position: positionOf(event.payload),
      paths: (event.payload && event.payload.paths) || [],
    })));
  return () => {
    for (const unlisten of unlistenFns) {
      unlisten();
    }
  };
}
"#)]
    extern "C" {
        #[wasm_bindgen(js_name = jsDialogOpen)]
        fn js_dialog_open(options: JsValue) -> Promise;
        #[wasm_bindgen(js_name = jsFileStat)]
        fn js_file_stat(path: &str) -> Promise;
        #[wasm_bindgen(js_name = jsConvertFileSrc, catch)]
        fn js_convert_file_src(path: &str) -> Result<JsValue, JsValue>;
        #[wasm_bindgen(js_name = jsListenDragEvents)]
        fn js_listen_drag_events(handler: &js_sys::Function) -> Promise;
    }

    async fn await_promise(promise: Promise) -> Result<JsValue, String> {
        JsFuture::from(promise).await.map_err(js_error_to_string)
    }

    fn js_error_to_string(err: JsValue) -> String {
        if let Some(text) = err.as_string() {
            return text;
        }
        if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return text;
            }
        }
        format!("{err:?}")
    }

    fn decode_dialog_selection(value: JsValue) -> DialogSelection {
        if value.is_null() || value.is_undefined() {
            return DialogSelection::Cancelled;
        }
        if let Some(path) = value.as_string() {
            return DialogSelection::Single(path);
        }
        if js_sys::Array::is_array(&value) {
            let paths: Vec<String> = js_sys::Array::from(&value)
                .iter()
                .filter_map(|entry| entry.as_string())
                .collect();
            return DialogSelection::Multiple(paths);
        }
        DialogSelection::Cancelled
    }

    pub async fn dialog_open(request: &FileDialogRequest) -> Result<DialogSelection, String> {
        let options = request
            .serialize(&Serializer::json_compatible())
            .map_err(|e| e.to_string())?;
        let value = await_promise(js_dialog_open(options)).await?;
        Ok(decode_dialog_selection(value))
    }

    pub async fn file_stat(path: &str) -> Result<FileMetadata, String> {
        let value = await_promise(js_file_stat(path)).await?;
        from_value(value).map_err(|e| e.to_string())
    }

    pub fn convert_file_src(path: &str) -> String {
        match js_convert_file_src(path) {
            Ok(value) => value.as_string().unwrap_or_else(|| path.to_string()),
            Err(_) => path.to_string(),
        }
    }

    pub async fn listen_drag_events(
        handler: DragEventHandler,
    ) -> Result<DragSubscription, String> {
        let callback = Closure::<dyn FnMut(JsValue)>::wrap(Box::new(move |value: JsValue| {
            // Malformed payloads are dropped; routing stays total.
            if let Ok(event) = from_value::<DragLifecycleEvent>(value) {
                handler(event);
            }
        }));
        let unlisten = await_promise(js_listen_drag_events(callback.as_ref().unchecked_ref()))
            .await?;
        let unlisten: js_sys::Function = unlisten
            .dyn_into()
            .map_err(|_| "drag listener returned a non-function unlisten handle".to_string())?;

        // The closure must stay alive for the lifetime of the host registration; it is
        // released together with the unlisten call when the guard drops.
        Ok(DragSubscription::new(vec![Box::new(move || {
            let _ = unlisten.call0(&JsValue::NULL);
            drop(callback);
        })]))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::*;

    fn unsupported(op: &str) -> String {
        format!("Tauri host APIs are only available when compiled for wasm32: {op}")
    }

    pub async fn dialog_open(_request: &FileDialogRequest) -> Result<DialogSelection, String> {
        Err(unsupported("dialog_open"))
    }

    pub async fn file_stat(_path: &str) -> Result<FileMetadata, String> {
        Err(unsupported("file_stat"))
    }

    pub fn convert_file_src(path: &str) -> String {
        path.to_string()
    }

    pub async fn listen_drag_events(
        _handler: DragEventHandler,
    ) -> Result<DragSubscription, String> {
        Ok(DragSubscription::empty())
    }
}

pub(crate) async fn dialog_open(request: &FileDialogRequest) -> Result<DialogSelection, String> {
    imp::dialog_open(request).await
}

pub(crate) async fn file_stat(path: &str) -> Result<FileMetadata, String> {
    imp::file_stat(path).await
}

pub(crate) fn convert_file_src(path: &str) -> String {
    imp::convert_file_src(path)
}

pub(crate) async fn listen_drag_events(
    handler: DragEventHandler,
) -> Result<DragSubscription, String> {
    imp::listen_drag_events(handler).await
}
