//! Process-wide registry routing drag/drop dispatch to registered dropzones.

use std::{cell::RefCell, rc::Rc};

use crate::geometry::ZoneRect;

/// Callback invoked with the ordered dropped file paths.
pub type DropCallback = Rc<dyn Fn(&[String])>;

/// Callback invoked with the zone's current "cursor inside" state.
pub type HighlightCallback = Rc<dyn Fn(bool)>;

/// Capability returning the zone's current screen-space bounds.
///
/// Bounds are queried at dispatch time, never cached, so layout changes between
/// registration and a later drag event are honored. `None` means the owning element is
/// not currently mounted and is treated as "contains no point".
pub type BoundsAccessor = Rc<dyn Fn() -> Option<ZoneRect>>;

/// Shared single-threaded handle to the process-wide registry.
pub type SharedDropzoneRegistry = Rc<RefCell<DropzoneRegistry>>;

struct DropzoneEntry {
    id: String,
    bounds: BoundsAccessor,
    on_drop: DropCallback,
    on_highlight: Option<HighlightCallback>,
}

impl DropzoneEntry {
    fn contains(&self, x: f64, y: f64) -> bool {
        (self.bounds)().map(|rect| rect.contains(x, y)).unwrap_or(false)
    }
}

#[derive(Default)]
/// Routing table mapping dropzone ids to spatial hit-test records.
///
/// Zones are dispatched in insertion order. Every operation is total: calls against an
/// empty registry, or against zones whose elements are unmounted, degrade to "no
/// dispatch".
pub struct DropzoneRegistry {
    zones: Vec<DropzoneEntry>,
}

impl DropzoneRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry behind the shared single-threaded handle.
    pub fn new_shared() -> SharedDropzoneRegistry {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Inserts or replaces the zone registered under `id`.
    ///
    /// Replacement keeps the prior entry's iteration position, so redundant
    /// re-registration during render cycles never reorders dispatch or accumulates
    /// duplicate entries.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        bounds: BoundsAccessor,
        on_drop: DropCallback,
        on_highlight: Option<HighlightCallback>,
    ) {
        let zone = DropzoneEntry {
            id: id.into(),
            bounds,
            on_drop,
            on_highlight,
        };
        match self.zones.iter().position(|existing| existing.id == zone.id) {
            Some(index) => self.zones[index] = zone,
            None => self.zones.push(zone),
        }
    }

    /// Removes the zone registered under `id`; no-op when absent.
    pub fn unregister(&mut self, id: &str) {
        self.zones.retain(|zone| zone.id != id);
    }

    /// Routes dropped file paths to the first zone whose current bounds contain the
    /// point.
    ///
    /// Containment is inclusive on all four edges. At most one zone receives a given
    /// drop; when no zone contains the point the drop is silently discarded. Zones are
    /// expected not to overlap; with overlapping zones the earliest registered match
    /// wins, which is an assumption rather than a guarantee.
    pub fn handle_drop(&self, x: f64, y: f64, file_paths: &[String]) {
        if let Some(on_drop) = self.drop_target(x, y) {
            on_drop(file_paths);
        }
    }

    /// Recomputes the highlight state of every zone that declared a highlight callback.
    ///
    /// Unlike drop dispatch this evaluates all zones, since each zone's visual state
    /// must reflect its own containment test.
    pub fn highlight_dropzone(&self, x: f64, y: f64) {
        let states = self.highlight_states(x, y);
        for (on_highlight, inside) in states {
            on_highlight(inside);
        }
    }

    /// Turns highlighting off for every zone that declared a highlight callback.
    pub fn clear_highlights(&self) {
        let callbacks = self.highlight_callbacks();
        for on_highlight in callbacks {
            on_highlight(false);
        }
    }

    /// Number of currently registered zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns whether no zones are registered.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Insertion-ordered snapshot of the registered zone ids.
    pub fn zone_ids(&self) -> Vec<String> {
        self.zones.iter().map(|zone| zone.id.clone()).collect()
    }

    /// Drop callback of the first zone containing the point, if any.
    ///
    /// Callbacks are returned rather than invoked so callers holding a [`RefCell`]
    /// borrow can release it before dispatching.
    pub(crate) fn drop_target(&self, x: f64, y: f64) -> Option<DropCallback> {
        self.zones
            .iter()
            .find(|zone| zone.contains(x, y))
            .map(|zone| zone.on_drop.clone())
    }

    /// Highlight callbacks paired with their zone's containment state for the point.
    pub(crate) fn highlight_states(&self, x: f64, y: f64) -> Vec<(HighlightCallback, bool)> {
        self.zones
            .iter()
            .filter_map(|zone| {
                zone.on_highlight
                    .clone()
                    .map(|on_highlight| (on_highlight, zone.contains(x, y)))
            })
            .collect()
    }

    /// Every registered highlight callback, in insertion order.
    pub(crate) fn highlight_callbacks(&self) -> Vec<HighlightCallback> {
        self.zones
            .iter()
            .filter_map(|zone| zone.on_highlight.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixed_bounds(left: f64, top: f64, right: f64, bottom: f64) -> BoundsAccessor {
        let rect = ZoneRect {
            left,
            top,
            right,
            bottom,
        };
        Rc::new(move || Some(rect))
    }

    fn unmounted_bounds() -> BoundsAccessor {
        Rc::new(|| None)
    }

    fn recording_drop(log: &Rc<RefCell<Vec<String>>>, id: &str) -> DropCallback {
        let log = log.clone();
        let id = id.to_string();
        Rc::new(move |paths: &[String]| {
            log.borrow_mut().push(format!("{id}:drop:{}", paths.join(",")));
        })
    }

    fn recording_highlight(log: &Rc<RefCell<Vec<String>>>, id: &str) -> HighlightCallback {
        let log = log.clone();
        let id = id.to_string();
        Rc::new(move |inside: bool| {
            log.borrow_mut().push(format!("{id}:highlight:{inside}"));
        })
    }

    fn paths(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn drop_dispatches_to_the_single_containing_zone() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = DropzoneRegistry::new();
        registry.register(
            "left",
            fixed_bounds(0.0, 0.0, 100.0, 100.0),
            recording_drop(&log, "left"),
            None,
        );
        registry.register(
            "right",
            fixed_bounds(200.0, 0.0, 300.0, 100.0),
            recording_drop(&log, "right"),
            None,
        );

        registry.handle_drop(50.0, 50.0, &paths(&["a.png"]));
        assert_eq!(*log.borrow(), vec!["left:drop:a.png"]);
    }

    #[test]
    fn drop_between_zones_dispatches_nothing() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = DropzoneRegistry::new();
        registry.register(
            "left",
            fixed_bounds(0.0, 0.0, 100.0, 100.0),
            recording_drop(&log, "left"),
            None,
        );
        registry.register(
            "right",
            fixed_bounds(200.0, 0.0, 300.0, 100.0),
            recording_drop(&log, "right"),
            None,
        );

        registry.handle_drop(150.0, 50.0, &paths(&["a.png"]));
        assert_eq!(*log.borrow(), Vec::<String>::new());
    }

    #[test]
    fn drop_dispatch_is_independent_of_registration_order() {
        for reversed in [false, true] {
            let log = Rc::new(RefCell::new(Vec::new()));
            let mut registry = DropzoneRegistry::new();
            let zones = [
                ("a", fixed_bounds(0.0, 0.0, 100.0, 100.0)),
                ("b", fixed_bounds(200.0, 0.0, 300.0, 100.0)),
            ];
            let order: Vec<_> = if reversed {
                zones.iter().rev().collect()
            } else {
                zones.iter().collect()
            };
            for (id, bounds) in order {
                registry.register(*id, bounds.clone(), recording_drop(&log, id), None);
            }

            registry.handle_drop(50.0, 50.0, &paths(&["a.png"]));
            assert_eq!(*log.borrow(), vec!["a:drop:a.png"]);
        }
    }

    #[test]
    fn drop_on_a_shared_edge_is_inclusive() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = DropzoneRegistry::new();
        registry.register(
            "zone",
            fixed_bounds(0.0, 0.0, 100.0, 100.0),
            recording_drop(&log, "zone"),
            None,
        );

        registry.handle_drop(100.0, 100.0, &paths(&["edge.txt"]));
        assert_eq!(*log.borrow(), vec!["zone:drop:edge.txt"]);
    }

    #[test]
    fn overlapping_zones_resolve_to_the_first_registered_match() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = DropzoneRegistry::new();
        registry.register(
            "under",
            fixed_bounds(0.0, 0.0, 100.0, 100.0),
            recording_drop(&log, "under"),
            None,
        );
        registry.register(
            "over",
            fixed_bounds(50.0, 50.0, 150.0, 150.0),
            recording_drop(&log, "over"),
            None,
        );

        registry.handle_drop(75.0, 75.0, &paths(&["a.png"]));
        assert_eq!(*log.borrow(), vec!["under:drop:a.png"]);
    }

    #[test]
    fn unmounted_bounds_never_match() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = DropzoneRegistry::new();
        registry.register(
            "ghost",
            unmounted_bounds(),
            recording_drop(&log, "ghost"),
            Some(recording_highlight(&log, "ghost")),
        );

        registry.handle_drop(0.0, 0.0, &paths(&["a.png"]));
        registry.highlight_dropzone(0.0, 0.0);
        assert_eq!(*log.borrow(), vec!["ghost:highlight:false"]);
    }

    #[test]
    fn unregistered_zones_are_ignored_mid_gesture() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = DropzoneRegistry::new();
        registry.register(
            "keep",
            fixed_bounds(200.0, 0.0, 300.0, 100.0),
            recording_drop(&log, "keep"),
            Some(recording_highlight(&log, "keep")),
        );
        registry.register(
            "gone",
            fixed_bounds(0.0, 0.0, 100.0, 100.0),
            recording_drop(&log, "gone"),
            Some(recording_highlight(&log, "gone")),
        );

        registry.unregister("gone");
        registry.handle_drop(50.0, 50.0, &paths(&["a.png"]));
        registry.highlight_dropzone(50.0, 50.0);
        registry.clear_highlights();

        assert_eq!(
            *log.borrow(),
            vec!["keep:highlight:false", "keep:highlight:false"]
        );
        assert_eq!(registry.zone_ids(), vec!["keep"]);
    }

    #[test]
    fn unregistering_an_unknown_id_is_a_noop() {
        let mut registry = DropzoneRegistry::new();
        registry.unregister("missing");
        assert!(registry.is_empty());
    }

    #[test]
    fn reregistering_an_id_keeps_one_entry_with_the_latest_callbacks() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = DropzoneRegistry::new();
        registry.register(
            "zone",
            fixed_bounds(0.0, 0.0, 100.0, 100.0),
            recording_drop(&log, "first"),
            Some(recording_highlight(&log, "first")),
        );
        registry.register(
            "zone",
            fixed_bounds(0.0, 0.0, 100.0, 100.0),
            recording_drop(&log, "second"),
            Some(recording_highlight(&log, "second")),
        );

        assert_eq!(registry.len(), 1);
        registry.handle_drop(50.0, 50.0, &paths(&["a.png"]));
        registry.highlight_dropzone(50.0, 50.0);
        assert_eq!(
            *log.borrow(),
            vec!["second:drop:a.png", "second:highlight:true"]
        );
    }

    #[test]
    fn replacement_keeps_the_original_iteration_position() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = DropzoneRegistry::new();
        registry.register(
            "first",
            fixed_bounds(0.0, 0.0, 100.0, 100.0),
            recording_drop(&log, "first"),
            None,
        );
        registry.register(
            "second",
            fixed_bounds(0.0, 0.0, 100.0, 100.0),
            recording_drop(&log, "second"),
            None,
        );
        registry.register(
            "first",
            fixed_bounds(0.0, 0.0, 100.0, 100.0),
            recording_drop(&log, "first-replaced"),
            None,
        );

        assert_eq!(registry.zone_ids(), vec!["first", "second"]);
        registry.handle_drop(50.0, 50.0, &paths(&["a.png"]));
        assert_eq!(*log.borrow(), vec!["first-replaced:drop:a.png"]);
    }

    #[test]
    fn highlight_updates_every_zone_independently() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = DropzoneRegistry::new();
        registry.register(
            "left",
            fixed_bounds(0.0, 0.0, 100.0, 100.0),
            recording_drop(&log, "left"),
            Some(recording_highlight(&log, "left")),
        );
        registry.register(
            "right",
            fixed_bounds(200.0, 0.0, 300.0, 100.0),
            recording_drop(&log, "right"),
            Some(recording_highlight(&log, "right")),
        );

        registry.highlight_dropzone(250.0, 50.0);
        assert_eq!(
            *log.borrow(),
            vec!["left:highlight:false", "right:highlight:true"]
        );
    }

    #[test]
    fn zones_without_highlight_callbacks_are_skipped() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = DropzoneRegistry::new();
        registry.register(
            "silent",
            fixed_bounds(0.0, 0.0, 100.0, 100.0),
            recording_drop(&log, "silent"),
            None,
        );
        registry.register(
            "lit",
            fixed_bounds(0.0, 0.0, 100.0, 100.0),
            recording_drop(&log, "lit"),
            Some(recording_highlight(&log, "lit")),
        );

        registry.highlight_dropzone(50.0, 50.0);
        registry.clear_highlights();
        assert_eq!(*log.borrow(), vec!["lit:highlight:true", "lit:highlight:false"]);
    }

    #[test]
    fn clear_then_outside_query_leaves_false_as_the_last_state() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = DropzoneRegistry::new();
        registry.register(
            "zone",
            fixed_bounds(0.0, 0.0, 100.0, 100.0),
            recording_drop(&log, "zone"),
            Some(recording_highlight(&log, "zone")),
        );

        registry.highlight_dropzone(50.0, 50.0);
        registry.clear_highlights();
        registry.highlight_dropzone(500.0, 500.0);

        assert_eq!(
            log.borrow().last().map(String::as_str),
            Some("zone:highlight:false")
        );
    }

    #[test]
    fn empty_registry_operations_are_total() {
        let registry = DropzoneRegistry::new();
        registry.handle_drop(10.0, 10.0, &paths(&["a.png"]));
        registry.highlight_dropzone(10.0, 10.0);
        registry.clear_highlights();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.zone_ids(), Vec::<String>::new());
    }

    #[test]
    fn bounds_are_queried_at_dispatch_time() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let current = Rc::new(RefCell::new(Some(ZoneRect::from_ltwh(0.0, 0.0, 100.0, 100.0))));
        let bounds: BoundsAccessor = {
            let current = current.clone();
            Rc::new(move || *current.borrow())
        };

        let mut registry = DropzoneRegistry::new();
        registry.register("zone", bounds, recording_drop(&log, "zone"), None);

        // Layout moved after registration; the drop must honor the new rect.
        *current.borrow_mut() = Some(ZoneRect::from_ltwh(500.0, 500.0, 100.0, 100.0));
        registry.handle_drop(50.0, 50.0, &paths(&["a.png"]));
        registry.handle_drop(550.0, 550.0, &paths(&["b.png"]));

        assert_eq!(*log.borrow(), vec!["zone:drop:b.png"]);
    }
}
