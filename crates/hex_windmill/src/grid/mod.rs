//! Hexagonal lattice geometry: axial coordinates, pixel projection, and
//! spiral enumeration.
//!
//! This module defines the coordinate value type used throughout the crate,
//! the bidirectional hex/pixel mapping consumed by rendering and hit-testing
//! collaborators, and the windmill spiral that orders slots for placement.
pub mod coord;
pub mod projection;
pub mod spiral;

pub use coord::AxialCoord;
pub use projection::{GridProjection, Orientation};
pub use spiral::{SectorLayout, SlotIndex, SpiralEnumerator, SpiralSlot, CORE_SECTOR};
