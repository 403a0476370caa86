//! Headless viewport
//!
//! An in-memory [`ObserverHost`]: elements are rectangles in document
//! coordinates and the viewport is a window onto the document that can be
//! scrolled and resized. Nothing is rendered.
//!
//! Reporting mirrors browser intersection observers. A freshly observed
//! element gets one initial entry on the next flush; after that an entry is
//! produced only when the element crosses its threshold in either
//! direction. Elements that are not attached to the document never report.

use crate::visibility::{ElementId, IntersectionEntry, ObservationId, ObserverHost, Threshold};
use folio_core::{visible_fraction, Point, Rect, Size};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Entries produced by one flush
pub type EntryBatch = SmallVec<[IntersectionEntry; 8]>;

#[derive(Clone, Debug)]
struct Observed {
    element: ElementId,
    threshold: Threshold,
    /// Whether the threshold was met at the last report, `None` before the first
    last_met: Option<bool>,
}

/// Scrollable in-memory document
pub struct HeadlessViewport {
    size: Size,
    scroll: Point,
    /// Attached elements and their document rects
    elements: FxHashMap<ElementId, Rect>,
    observations: IndexMap<ObservationId, Observed>,
    next_element: u64,
    next_observation: u64,
}

impl HeadlessViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            scroll: Point::ZERO,
            elements: FxHashMap::default(),
            observations: IndexMap::new(),
            next_element: 0,
            next_observation: 0,
        }
    }

    /// Allocate an element handle that is not in the document yet
    pub fn create_element(&mut self) -> ElementId {
        self.next_element += 1;
        ElementId(self.next_element)
    }

    /// Place an element in the document, or move it if already placed
    pub fn attach_element(&mut self, element: ElementId, rect: Rect) {
        self.elements.insert(element, rect);
    }

    /// Create an element and place it in one step
    pub fn insert_element(&mut self, rect: Rect) -> ElementId {
        let element = self.create_element();
        self.attach_element(element, rect);
        element
    }

    /// Take an element out of the document
    ///
    /// Its observations stay registered but stop reporting until it is
    /// attached again.
    pub fn detach_element(&mut self, element: ElementId) -> bool {
        self.elements.remove(&element).is_some()
    }

    pub fn element_rect(&self, element: ElementId) -> Option<Rect> {
        self.elements.get(&element).copied()
    }

    pub fn is_attached(&self, element: ElementId) -> bool {
        self.elements.contains_key(&element)
    }

    /// The visible window in document coordinates
    pub fn bounds(&self) -> Rect {
        Rect {
            origin: self.scroll,
            size: self.size,
        }
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.y
    }

    /// Scroll vertically and report threshold crossings
    pub fn scroll_to(&mut self, y: f32) -> EntryBatch {
        self.scroll.y = y.max(0.0);
        self.flush()
    }

    pub fn scroll_by(&mut self, dy: f32) -> EntryBatch {
        self.scroll_to(self.scroll.y + dy)
    }

    /// Change the viewport size and report threshold crossings
    pub fn resize(&mut self, width: f32, height: f32) -> EntryBatch {
        self.size = Size::new(width, height);
        self.flush()
    }

    /// Report every observation whose threshold state changed
    pub fn flush(&mut self) -> EntryBatch {
        let bounds = self.bounds();
        let mut batch = EntryBatch::new();

        for (&observation, observed) in self.observations.iter_mut() {
            let Some(rect) = self.elements.get(&observed.element) else {
                continue;
            };
            let entry = IntersectionEntry {
                observation,
                ratio: visible_fraction(rect, &bounds),
                is_intersecting: rect.touches(&bounds),
            };
            let met = observed.threshold.is_met(&entry);
            if observed.last_met != Some(met) {
                observed.last_met = Some(met);
                batch.push(entry);
            }
        }

        if !batch.is_empty() {
            tracing::trace!(count = batch.len(), scroll = self.scroll.y, "intersection batch");
        }
        batch
    }

    /// Number of live observations
    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }

    /// Whether any live observation targets `element`
    pub fn is_observing(&self, element: ElementId) -> bool {
        self.observations.values().any(|o| o.element == element)
    }
}

impl ObserverHost for HeadlessViewport {
    fn observe(&mut self, element: ElementId, threshold: Threshold) -> ObservationId {
        self.next_observation += 1;
        let id = ObservationId(self.next_observation);
        self.observations.insert(
            id,
            Observed {
                element,
                threshold,
                last_met: None,
            },
        );
        id
    }

    fn unobserve(&mut self, observation: ObservationId) {
        self.observations.shift_remove(&observation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_entry_then_crossings_only() {
        let mut viewport = HeadlessViewport::new(800.0, 600.0);
        let element = viewport.insert_element(Rect::new(0.0, 800.0, 800.0, 200.0));
        let observation = viewport.observe(element, Threshold::HALF);

        let initial = viewport.flush();
        assert_eq!(initial.len(), 1);
        assert_eq!(initial[0].observation, observation);
        assert!(!initial[0].is_intersecting);

        // Still below threshold: nothing new
        assert!(viewport.scroll_to(250.0).is_empty());

        let crossed = viewport.scroll_to(400.0);
        assert_eq!(crossed.len(), 1);
        assert!(crossed[0].ratio >= 0.5);

        // Moving back out crosses again
        assert_eq!(viewport.scroll_to(0.0).len(), 1);
    }

    #[test]
    fn test_detached_elements_never_report() {
        let mut viewport = HeadlessViewport::new(800.0, 600.0);
        let element = viewport.create_element();
        viewport.observe(element, Threshold::HALF);

        assert!(viewport.flush().is_empty());
        assert!(viewport.scroll_to(10_000.0).is_empty());
        assert_eq!(viewport.observation_count(), 1);
    }

    #[test]
    fn test_unobserve_is_idempotent() {
        let mut viewport = HeadlessViewport::new(800.0, 600.0);
        let element = viewport.insert_element(Rect::new(0.0, 0.0, 10.0, 10.0));
        let observation = viewport.observe(element, Threshold::HALF);

        viewport.unobserve(observation);
        viewport.unobserve(observation);
        assert_eq!(viewport.observation_count(), 0);
        assert!(viewport.flush().is_empty());
    }

    #[test]
    fn test_resize_reports() {
        let mut viewport = HeadlessViewport::new(800.0, 300.0);
        let element = viewport.insert_element(Rect::new(0.0, 400.0, 800.0, 100.0));
        viewport.observe(element, Threshold::FULL);
        viewport.flush();

        let entries = viewport.resize(800.0, 600.0);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].ratio, 1.0);
    }

    #[test]
    fn test_negative_scroll_clamps_to_top() {
        let mut viewport = HeadlessViewport::new(800.0, 600.0);
        viewport.scroll_to(-50.0);
        assert_eq!(viewport.scroll_offset(), 0.0);
    }
}
