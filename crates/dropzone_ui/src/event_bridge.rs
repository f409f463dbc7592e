//! Mount-once subscriber translating host drag notifications into registry calls.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use leptos::*;

use dropzone_core::route_drag_event;
use dropzone_host::{DragEventHandler, DragSubscription};

use crate::context::use_dropzone_runtime;

#[component]
/// Global drag-event listener.
///
/// Mount exactly once at the application root, inside [`crate::DropzoneProvider`].
/// Subscribes to the host's drag-enter/over/leave/drop notifications on mount and tears
/// the subscription down on unmount; unmounting before the subscription resolves also
/// releases it, so no host registration outlives the bridge.
pub fn DropzoneEventBridge() -> impl IntoView {
    let runtime = use_dropzone_runtime();

    let handler: DragEventHandler = {
        let registry = runtime.registry.get_value();
        Rc::new(move |event| route_drag_event(&registry, event))
    };

    let subscription = Rc::new(RefCell::new(None::<DragSubscription>));
    let mounted = Rc::new(Cell::new(true));

    spawn_local({
        let subscription = subscription.clone();
        let mounted = mounted.clone();
        let host = runtime.host.get_value();
        async move {
            let drag_events = host.drag_event_source();
            match drag_events.subscribe(handler).await {
                Ok(guard) => {
                    if mounted.get() {
                        *subscription.borrow_mut() = Some(guard);
                    }
                    // When the bridge is already gone the guard drops here, which
                    // unsubscribes immediately.
                }
                Err(err) => logging::warn!("drag event subscription failed: {err}"),
            }
        }
    });

    on_cleanup(move || {
        mounted.set(false);
        subscription.borrow_mut().take();
    });
}
