//! Event types and sinks for observing placement passes.
//!
//! This module defines [`PlacementEvent`] and a set of sinks and adapters to
//! emit, collect, or forward events while executing a pass via
//! [`crate::placement::engine::PlacementEngine`] or
//! [`crate::placement::engine::place_items`].
use crate::placement::ItemKey;

/// Discriminant for [`PlacementEvent`], used to gate emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementEventKind {
    PassStarted,
    ItemPlaced,
    PlaceholderFilled,
    SpiralExtended,
    PassFinished,
    Warning,
}

/// Describes events emitted by a placement pass.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum PlacementEvent {
    /// Emitted when a pass starts.
    PassStarted {
        /// Number of real input items.
        item_count: usize,
        /// Slots available before any extension.
        slot_count: usize,
    },

    /// Emitted when a real item is assigned to a slot.
    ItemPlaced {
        /// Slot index the item landed on.
        slot: usize,
        /// Ring of the slot.
        ring: u32,
        /// Item identity.
        key: ItemKey,
        /// Bucket queue the item was drawn from.
        bucket: usize,
    },

    /// Emitted when an empty slot receives a placeholder.
    PlaceholderFilled {
        /// Slot index of the placeholder.
        slot: usize,
        /// Ring of the slot.
        ring: u32,
    },

    /// Emitted when the spiral ran out of slots and a ring was appended.
    SpiralExtended {
        /// New outermost ring.
        rings: usize,
        /// Total slots after the extension.
        slot_count: usize,
    },

    /// Emitted when the pass completes.
    PassFinished {
        /// Real items placed.
        placed: usize,
        /// Placeholders emitted.
        placeholders: usize,
    },

    /// Non-fatal warning generated during placement.
    Warning {
        /// Context string (e.g. an item key).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

impl PlacementEvent {
    /// Discriminant of this event.
    pub fn kind(&self) -> PlacementEventKind {
        match self {
            PlacementEvent::PassStarted { .. } => PlacementEventKind::PassStarted,
            PlacementEvent::ItemPlaced { .. } => PlacementEventKind::ItemPlaced,
            PlacementEvent::PlaceholderFilled { .. } => PlacementEventKind::PlaceholderFilled,
            PlacementEvent::SpiralExtended { .. } => PlacementEventKind::SpiralExtended,
            PlacementEvent::PassFinished { .. } => PlacementEventKind::PassFinished,
            PlacementEvent::Warning { .. } => PlacementEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`PlacementEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: PlacementEvent);

    /// Whether the sink cares about events of the given kind. Emitters may
    /// skip building events the sink does not want.
    fn wants(&self, _kind: PlacementEventKind) -> bool {
        true
    }

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = PlacementEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: PlacementEvent) {}

    #[inline]
    fn wants(&self, _kind: PlacementEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(PlacementEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(PlacementEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(PlacementEvent),
{
    #[inline]
    fn send(&mut self, event: PlacementEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<PlacementEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
        }
    }

    pub fn into_inner(self) -> Vec<PlacementEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[PlacementEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: PlacementEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::with_capacity(2);
        assert!(sink.is_empty());
        sink.send(PlacementEvent::Warning {
            context: "a".into(),
            message: "m".into(),
        });
        sink.send(PlacementEvent::Warning {
            context: "b".into(),
            message: "n".into(),
        });
        assert_eq!(sink.len(), 2);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(PlacementEvent::PassFinished {
            placed: 0,
            placeholders: 0,
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn noop_sink_wants_nothing() {
        let sink = ();
        assert!(!sink.wants(PlacementEventKind::Warning));
        assert!(!sink.wants(PlacementEventKind::ItemPlaced));
    }

    #[test]
    fn event_kind_matches_variant() {
        let e = PlacementEvent::PlaceholderFilled { slot: 9, ring: 2 };
        assert_eq!(e.kind(), PlacementEventKind::PlaceholderFilled);
    }
}
