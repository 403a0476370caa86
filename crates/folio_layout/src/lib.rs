//! Folio Layout
//!
//! Scroll-driven reveal for page items.
//!
//! - **Visibility**: [`VisibilityRegistry`] owns one-shot triggers that flip
//!   to revealed the first time their element is visible enough, then stop
//!   observing
//! - **Headless viewport**: [`HeadlessViewport`] is an in-memory
//!   [`ObserverHost`] that computes intersections from rectangles
//! - **Bindings**: per-item adapters that map a trigger's state and the
//!   current palette to a style
//!
//! # Example
//!
//! ```rust
//! use folio_core::Rect;
//! use folio_layout::{HeadlessViewport, VisibilityRegistry};
//!
//! let mut viewport = HeadlessViewport::new(800.0, 600.0);
//! let card = viewport.insert_element(Rect::new(0.0, 900.0, 800.0, 200.0));
//!
//! let mut registry = VisibilityRegistry::new(viewport);
//! let trigger = registry.attach(card, 0.5).unwrap();
//!
//! let entries = registry.host_mut().scroll_to(500.0);
//! registry.deliver_all(entries);
//!
//! assert!(registry.is_revealed(trigger));
//! assert_eq!(registry.host().observation_count(), 0);
//! ```

pub mod bindings;
pub mod headless;
pub mod visibility;

pub use bindings::{
    project_card_style, timeline_entry_style, MeterStyle, ProjectCardStyle, RevealList,
    RevealStyle, Side, SkillMeter, TimelineEntryStyle, REVEAL_THRESHOLD,
};
pub use headless::HeadlessViewport;
pub use visibility::{
    ElementId, IntersectionEntry, ObservationId, ObserverHost, Threshold, TriggerEvent, TriggerId,
    TriggerState, VisibilityRegistry,
};
