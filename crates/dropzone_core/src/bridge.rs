//! Drag lifecycle routing policy over the shared registry.

use dropzone_host::DragLifecycleEvent;

use crate::registry::SharedDropzoneRegistry;

/// Applies one host drag notification to the registry.
///
/// Enter and over share a policy: every highlight is cleared before the zone under the
/// cursor is re-lit, so moving from a zone into a gap leaves nothing highlighted. Leave
/// clears everything. Drop dispatches to the zone at the release point and always clears
/// highlights afterwards, whether or not a zone matched.
///
/// Registry borrows are released before any callback runs, so a callback may re-enter
/// the registry (for example to re-register its own zone) without panicking.
pub fn route_drag_event(registry: &SharedDropzoneRegistry, event: DragLifecycleEvent) {
    match event {
        DragLifecycleEvent::Enter { position } | DragLifecycleEvent::Over { position } => {
            clear_highlights(registry);
            let states = registry.borrow().highlight_states(position.x, position.y);
            for (on_highlight, inside) in states {
                on_highlight(inside);
            }
        }
        DragLifecycleEvent::Leave => clear_highlights(registry),
        DragLifecycleEvent::Drop { position, paths } => {
            let target = registry.borrow().drop_target(position.x, position.y);
            if let Some(on_drop) = target {
                on_drop(&paths);
            }
            clear_highlights(registry);
        }
    }
}

fn clear_highlights(registry: &SharedDropzoneRegistry) {
    let callbacks = registry.borrow().highlight_callbacks();
    for on_highlight in callbacks {
        on_highlight(false);
    }
}
