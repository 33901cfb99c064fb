#![forbid(unsafe_code)]
//! hex_windmill: windmill-spiral placement of ranked, color-bucketed items
//! on a hexagonal grid.
//!
//! Modules:
//! - grid: axial coordinates, hex/pixel projection, and spiral enumeration
//! - placement: ranking, bucket-queue placement, events, position smoothing
//!
//! A placement pass ranks the input items, pins the top of the ranking to
//! the slots nearest the origin, and deals the remainder into color-bucket
//! sectors along the spiral. Collaborators project the resulting slot
//! indices to pixels (and back, for hit-testing) through
//! [`grid::GridProjection`].
pub mod error;
pub mod grid;
pub mod placement;

/// Convenient re-exports for common types. Import with `use hex_windmill::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::coord::AxialCoord;
    pub use crate::grid::projection::{GridProjection, Orientation};
    pub use crate::grid::spiral::{
        slot_count, SectorLayout, SlotIndex, SpiralEnumerator, SpiralSlot, CORE_SECTOR,
    };
    pub use crate::placement::engine::{
        place_items, PartitionStrategy, PlacementConfig, PlacementEngine, PlacementResult,
    };
    pub use crate::placement::events::{
        EventSink, FnSink, PlacementEvent, PlacementEventKind, VecSink,
    };
    pub use crate::placement::rank::RankKey;
    pub use crate::placement::stabilizer::{
        MemoryStore, PositionStabilizer, PositionStore, DEFAULT_MAX_SHIFT,
    };
    pub use crate::placement::{Item, ItemKey, PLACEHOLDER_KEY};
}
