//! One-shot visibility triggers
//!
//! A trigger watches one element through an [`ObserverHost`] and flips to
//! [`TriggerState::Revealed`] the first time the element intersects the
//! viewport by at least its threshold. At that moment the observation is
//! handed back to the host, so later scrolling cannot produce a second
//! transition.
//!
//! Every trigger must be released when its owner unmounts, revealed or not.
//! Releasing an unknown or already-released trigger does nothing.

use folio_core::ConfigError;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to an attached trigger
    pub struct TriggerId;
}

/// Opaque handle to a renderable element, allocated by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Host-side observation handle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObservationId(pub u64);

/// Fraction of an element's area that must be visible, in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Threshold(f32);

impl Threshold {
    pub const ZERO: Threshold = Threshold(0.0);
    pub const HALF: Threshold = Threshold(0.5);
    pub const FULL: Threshold = Threshold(1.0);

    pub fn new(value: f32) -> Result<Self, ConfigError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidThreshold(value))
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether an intersection entry satisfies this threshold
    pub fn is_met(self, entry: &IntersectionEntry) -> bool {
        entry.is_intersecting && entry.ratio >= self.0
    }
}

impl TryFrom<f32> for Threshold {
    type Error = ConfigError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One intersection report from the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub observation: ObservationId,
    /// Visible fraction of the element, in `[0, 1]`
    pub ratio: f32,
    /// Whether the element touches the viewport at all
    pub is_intersecting: bool,
}

/// The environment that knows where elements are
///
/// Implementations report intersections asynchronously; the owner of the
/// [`VisibilityRegistry`] forwards them through
/// [`VisibilityRegistry::deliver`].
pub trait ObserverHost {
    /// Begin reporting intersections for `element`
    fn observe(&mut self, element: ElementId, threshold: Threshold) -> ObservationId;

    /// Stop reporting and free the observation. Must tolerate repeats.
    fn unobserve(&mut self, observation: ObservationId);
}

/// Lifecycle of a trigger while it is attached
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerState {
    /// Waiting for the element to become visible
    Observing,
    /// Terminal: the element has been seen
    Revealed,
}

/// Inputs that move a trigger between states
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    /// An intersection entry met the threshold
    ThresholdMet,
    /// An intersection entry fell short of the threshold
    ThresholdMissed,
}

impl TriggerState {
    /// Handle an event and return the new state, or None if no transition
    pub fn on_event(&self, event: TriggerEvent) -> Option<Self> {
        match (self, event) {
            (TriggerState::Observing, TriggerEvent::ThresholdMet) => Some(TriggerState::Revealed),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
struct Trigger {
    element: ElementId,
    threshold: Threshold,
    state: TriggerState,
    /// Live host observation, `None` once revealed
    observation: Option<ObservationId>,
}

/// Owner of every attached trigger and of the host they observe through
pub struct VisibilityRegistry<H: ObserverHost> {
    host: H,
    triggers: SlotMap<TriggerId, Trigger>,
    by_observation: FxHashMap<ObservationId, TriggerId>,
}

impl<H: ObserverHost> VisibilityRegistry<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            triggers: SlotMap::with_key(),
            by_observation: FxHashMap::default(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Start watching `element`
    ///
    /// Fails fast if `threshold` is outside `[0, 1]`.
    pub fn attach(&mut self, element: ElementId, threshold: f32) -> Result<TriggerId, ConfigError> {
        let threshold = Threshold::new(threshold)?;
        Ok(self.attach_with(element, threshold))
    }

    pub fn attach_with(&mut self, element: ElementId, threshold: Threshold) -> TriggerId {
        let observation = self.host.observe(element, threshold);
        let id = self.triggers.insert(Trigger {
            element,
            threshold,
            state: TriggerState::Observing,
            observation: Some(observation),
        });
        self.by_observation.insert(observation, id);
        tracing::debug!(?id, ?element, threshold = threshold.value(), "trigger attached");
        id
    }

    /// Stop watching and forget the trigger
    ///
    /// Returns `true` if the trigger was attached. Safe to call any number
    /// of times.
    pub fn release(&mut self, id: TriggerId) -> bool {
        let Some(trigger) = self.triggers.remove(id) else {
            return false;
        };
        if let Some(observation) = trigger.observation {
            self.by_observation.remove(&observation);
            self.host.unobserve(observation);
        }
        tracing::debug!(?id, state = ?trigger.state, "trigger released");
        true
    }

    /// Release every trigger
    pub fn release_all(&mut self) {
        let ids: Vec<TriggerId> = self.triggers.keys().collect();
        for id in ids {
            self.release(id);
        }
    }

    /// Feed one intersection entry from the host
    ///
    /// Returns the trigger that was revealed by this entry, if any. Entries
    /// for unknown or finished observations are ignored.
    pub fn deliver(&mut self, entry: IntersectionEntry) -> Option<TriggerId> {
        let Some(&id) = self.by_observation.get(&entry.observation) else {
            tracing::trace!(observation = ?entry.observation, "stale intersection entry ignored");
            return None;
        };
        let trigger = self.triggers.get_mut(id)?;

        let event = if trigger.threshold.is_met(&entry) {
            TriggerEvent::ThresholdMet
        } else {
            TriggerEvent::ThresholdMissed
        };
        tracing::trace!(?id, ratio = entry.ratio, ?event, "intersection delivered");

        let next = trigger.state.on_event(event)?;
        trigger.state = next;

        if next == TriggerState::Revealed {
            if let Some(observation) = trigger.observation.take() {
                self.by_observation.remove(&observation);
                self.host.unobserve(observation);
            }
            tracing::debug!(?id, element = ?trigger.element, "trigger revealed");
            return Some(id);
        }
        None
    }

    /// Feed a batch of entries, returning the triggers revealed by it
    pub fn deliver_all(
        &mut self,
        entries: impl IntoIterator<Item = IntersectionEntry>,
    ) -> SmallVec<[TriggerId; 4]> {
        entries
            .into_iter()
            .filter_map(|entry| self.deliver(entry))
            .collect()
    }

    /// Whether the trigger has revealed; `false` for released triggers
    pub fn is_revealed(&self, id: TriggerId) -> bool {
        self.state(id) == Some(TriggerState::Revealed)
    }

    pub fn state(&self, id: TriggerId) -> Option<TriggerState> {
        self.triggers.get(id).map(|t| t.state)
    }

    pub fn element(&self, id: TriggerId) -> Option<ElementId> {
        self.triggers.get(id).map(|t| t.element)
    }

    /// Number of attached triggers
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Number of triggers still holding a host observation
    pub fn pending_observations(&self) -> usize {
        self.by_observation.len()
    }
}
