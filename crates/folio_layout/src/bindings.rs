//! Presentational bindings
//!
//! Every rendered list item (timeline entry, skill meter, project card) owns
//! exactly one visibility trigger for as long as it is mounted. The parent
//! list keeps those triggers in a [`RevealList`] keyed by a stable item
//! identity, so item state never depends on render order.
//!
//! Styles are pure functions of the trigger state and the current palette.

use crate::visibility::{ElementId, ObserverHost, Threshold, TriggerId, VisibilityRegistry};
use folio_core::{Color, ConfigError};
use folio_theme::Palette;
use indexmap::IndexMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Threshold used by every item binding on the site
pub const REVEAL_THRESHOLD: f32 = 0.5;

/// Binary reveal state of an item
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealStyle {
    #[default]
    Hidden,
    Shown,
}

impl RevealStyle {
    /// Duration of the fade between the two states
    pub const TRANSITION_MS: u32 = 1_000;

    pub fn from_revealed(revealed: bool) -> Self {
        if revealed {
            RevealStyle::Shown
        } else {
            RevealStyle::Hidden
        }
    }

    pub fn is_shown(self) -> bool {
        self == RevealStyle::Shown
    }

    pub fn opacity(self) -> f32 {
        match self {
            RevealStyle::Hidden => 0.0,
            RevealStyle::Shown => 1.0,
        }
    }

    /// Utility class applied to the item root
    pub fn class(self) -> &'static str {
        match self {
            RevealStyle::Hidden => "opacity-0",
            RevealStyle::Shown => "opacity-100",
        }
    }
}

/// Triggers for a list of mounted items, keyed by item identity
pub struct RevealList<K> {
    threshold: Threshold,
    items: IndexMap<K, TriggerId>,
}

impl<K: Hash + Eq + Clone + Debug> RevealList<K> {
    pub fn new(threshold: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            threshold: Threshold::new(threshold)?,
            items: IndexMap::new(),
        })
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Mount an item, attaching its trigger
    ///
    /// Mounting a key that is already mounted keeps the existing trigger.
    pub fn mount<H: ObserverHost>(
        &mut self,
        registry: &mut VisibilityRegistry<H>,
        key: K,
        element: ElementId,
    ) -> TriggerId {
        if let Some(&existing) = self.items.get(&key) {
            tracing::warn!(?key, "item already mounted, keeping its trigger");
            return existing;
        }
        let trigger = registry.attach_with(element, self.threshold);
        self.items.insert(key, trigger);
        trigger
    }

    /// Unmount an item, releasing its trigger whether or not it revealed
    pub fn unmount<H: ObserverHost>(&mut self, registry: &mut VisibilityRegistry<H>, key: &K) -> bool {
        match self.items.shift_remove(key) {
            Some(trigger) => {
                registry.release(trigger);
                true
            }
            None => false,
        }
    }

    /// Unmount every item
    pub fn unmount_all<H: ObserverHost>(&mut self, registry: &mut VisibilityRegistry<H>) {
        for (_, trigger) in self.items.drain(..) {
            registry.release(trigger);
        }
    }

    /// Keep only the items for which `keep` returns true
    pub fn retain<H: ObserverHost>(
        &mut self,
        registry: &mut VisibilityRegistry<H>,
        mut keep: impl FnMut(&K) -> bool,
    ) {
        let dropped: Vec<K> = self.items.keys().filter(|k| !keep(*k)).cloned().collect();
        for key in dropped {
            self.unmount(registry, &key);
        }
    }

    pub fn trigger(&self, key: &K) -> Option<TriggerId> {
        self.items.get(key).copied()
    }

    pub fn is_revealed<H: ObserverHost>(&self, registry: &VisibilityRegistry<H>, key: &K) -> bool {
        self.trigger(key)
            .is_some_and(|trigger| registry.is_revealed(trigger))
    }

    pub fn style<H: ObserverHost>(&self, registry: &VisibilityRegistry<H>, key: &K) -> RevealStyle {
        RevealStyle::from_revealed(self.is_revealed(registry, key))
    }

    /// Key owning `trigger`, if mounted here
    pub fn key_for(&self, trigger: TriggerId) -> Option<&K> {
        self.items
            .iter()
            .find_map(|(key, t)| (*t == trigger).then_some(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.items.keys()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =========================================================================
// Timeline entries
// =========================================================================

/// Which side of the timeline rail an entry sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Entries alternate, starting on the left
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEntryStyle {
    pub reveal: RevealStyle,
    pub side: Side,
    pub title: Color,
    pub body: Color,
    pub date: Color,
    pub marker: Color,
}

pub fn timeline_entry_style(index: usize, revealed: bool, palette: &Palette) -> TimelineEntryStyle {
    TimelineEntryStyle {
        reveal: RevealStyle::from_revealed(revealed),
        side: Side::for_index(index),
        title: palette.accent,
        body: palette.text_primary,
        date: palette.text_secondary,
        marker: palette.timeline_rail,
    }
}

// =========================================================================
// Skill meters
// =========================================================================

/// A progress bar that fills to its target once revealed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillMeter {
    target_percent: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeterStyle {
    pub fill_percent: u8,
    pub track: Color,
    pub fill: Color,
    pub transition_ms: u32,
}

impl SkillMeter {
    pub fn new(target_percent: u8) -> Result<Self, ConfigError> {
        if target_percent > 100 {
            return Err(ConfigError::InvalidPercent(target_percent));
        }
        Ok(Self { target_percent })
    }

    pub fn target_percent(&self) -> u8 {
        self.target_percent
    }

    /// Rendered fill: zero until revealed, the target afterwards
    pub fn fill_percent(&self, revealed: bool) -> u8 {
        if revealed {
            self.target_percent
        } else {
            0
        }
    }

    pub fn style(&self, revealed: bool, palette: &Palette) -> MeterStyle {
        MeterStyle {
            fill_percent: self.fill_percent(revealed),
            track: palette.chip_background,
            fill: palette.accent,
            transition_ms: RevealStyle::TRANSITION_MS,
        }
    }
}

// =========================================================================
// Project cards
// =========================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCardStyle {
    pub reveal: RevealStyle,
    /// Vertical offset the card slides up from while hidden
    pub offset_y: f32,
    pub background: Color,
    pub title: Color,
    pub body: Color,
    pub chip_background: Color,
    pub chip_text: Color,
    pub link: Color,
}

pub fn project_card_style(revealed: bool, palette: &Palette) -> ProjectCardStyle {
    let reveal = RevealStyle::from_revealed(revealed);
    ProjectCardStyle {
        reveal,
        offset_y: if reveal.is_shown() { 0.0 } else { 20.0 },
        background: palette.card_background,
        title: palette.accent,
        body: palette.text_primary,
        chip_background: palette.chip_background,
        chip_text: palette.chip_text,
        link: palette.accent,
    }
}
