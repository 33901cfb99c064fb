//! Windmill spiral enumeration of hex slots.
//!
//! [`SpiralEnumerator`] produces the canonical visiting order of lattice
//! positions: the origin, then each ring walked counter-clockwise from its
//! rightmost hex. Every slot outside the core carries a sector label that
//! partitions the ring among a configured number of buckets, either
//! proportionally along the walk (windmill) or by fixed angular wedges.
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::grid::coord::AxialCoord;

/// Sector label reserved for the non-sectored core slot.
pub const CORE_SECTOR: i32 = -1;

/// Direction sequence for walking a ring counter-clockwise, starting from
/// the ring's rightmost hex `(n, 0)`.
const RING_DIRECTIONS: [AxialCoord; 6] = [
    AxialCoord { q: -1, r: 1 },
    AxialCoord { q: -1, r: 0 },
    AxialCoord { q: 0, r: -1 },
    AxialCoord { q: 1, r: -1 },
    AxialCoord { q: 1, r: 0 },
    AxialCoord { q: 0, r: 1 },
];

/// One position in the spiral visiting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralSlot {
    /// Dense index in visiting order, 0 = origin.
    pub index: usize,
    /// Lattice position of this slot.
    pub coord: AxialCoord,
    /// Bucket sector this slot belongs to; [`CORE_SECTOR`] for the core.
    pub sector: i32,
}

/// How ring slots are divided into bucket sectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectorLayout {
    /// Contiguous arcs proportional to ring size; sector boundaries rotate
    /// consistently outward. Every bucket is serviced by every ring large
    /// enough to hold all buckets.
    #[default]
    Windmill,
    /// Fixed angular wedges of `2π / bucket_count`, labeled by the angle of
    /// the hex center. Wedge lengths are uneven within a ring.
    FixedAngular,
}

/// Generates spiral slot sequences for a fixed bucket count and layout.
#[derive(Clone, Copy, Debug)]
pub struct SpiralEnumerator {
    bucket_count: usize,
    layout: SectorLayout,
}

impl SpiralEnumerator {
    /// Creates an enumerator, rejecting a zero bucket count.
    pub fn try_new(bucket_count: usize, layout: SectorLayout) -> Result<Self> {
        if bucket_count == 0 {
            return Err(Error::InvalidConfig("bucket_count must be > 0".into()));
        }
        Ok(Self {
            bucket_count,
            layout,
        })
    }

    /// Creates an enumerator without the runtime validity check.
    pub fn new(bucket_count: usize, layout: SectorLayout) -> Self {
        debug_assert!(bucket_count > 0, "bucket_count must be > 0");
        Self {
            bucket_count,
            layout,
        }
    }

    /// Windmill enumerator, the canonical layout.
    pub fn windmill(bucket_count: usize) -> Self {
        Self::new(bucket_count, SectorLayout::Windmill)
    }

    /// Number of bucket sectors per ring.
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Configured sector layout.
    pub fn layout(&self) -> SectorLayout {
        self.layout
    }

    /// Generates all slots of rings `0..=max_rings` in visiting order.
    /// Slot indices are dense from 0 and rings never decrease.
    pub fn generate(&self, max_rings: usize) -> Vec<SpiralSlot> {
        let mut slots = Vec::with_capacity(slot_count(max_rings));
        for ring in 0..=max_rings {
            self.push_ring(ring, &mut slots);
        }
        slots
    }

    /// Generates the slots of a single ring, carrying the global indices the
    /// ring has inside a full spiral. Lets callers extend an exhausted
    /// spiral ring by ring without regenerating earlier slots.
    pub fn ring(&self, ring: usize) -> Vec<SpiralSlot> {
        let mut slots = Vec::with_capacity(if ring == 0 { 1 } else { 6 * ring });
        self.push_ring(ring, &mut slots);
        slots
    }

    /// The visiting order without sector labels.
    pub fn coordinates(&self, max_rings: usize) -> Vec<AxialCoord> {
        self.generate(max_rings).iter().map(|s| s.coord).collect()
    }

    fn push_ring(&self, ring: usize, out: &mut Vec<SpiralSlot>) {
        if ring == 0 {
            out.push(SpiralSlot {
                index: 0,
                coord: AxialCoord::ORIGIN,
                sector: CORE_SECTOR,
            });
            return;
        }

        let base = slot_count(ring - 1);
        let ring_len = 6 * ring;
        let mut coord = AxialCoord::new(ring as i32, 0);
        let mut position_in_ring = 0usize;

        for dir in RING_DIRECTIONS {
            for _ in 0..ring {
                out.push(SpiralSlot {
                    index: base + position_in_ring,
                    coord,
                    sector: self.sector_for(coord, position_in_ring, ring_len),
                });
                coord = coord + dir;
                position_in_ring += 1;
            }
        }
    }

    fn sector_for(&self, coord: AxialCoord, position_in_ring: usize, ring_len: usize) -> i32 {
        match self.layout {
            SectorLayout::Windmill => {
                ((position_in_ring * self.bucket_count / ring_len) % self.bucket_count) as i32
            }
            SectorLayout::FixedAngular => angular_sector(coord, self.bucket_count),
        }
    }
}

/// Total slots in a spiral of `max_rings` rings: `1 + 3n(n+1)`.
pub fn slot_count(max_rings: usize) -> usize {
    1 + 3 * max_rings * (max_rings + 1)
}

/// Sector of a hex under the fixed angular layout: the wedge containing the
/// angle of the hex center in a unit pointy-top projection.
fn angular_sector(coord: AxialCoord, bucket_count: usize) -> i32 {
    let x = 3.0f64.sqrt() * (coord.q as f64 + coord.r as f64 / 2.0);
    let y = 1.5 * coord.r as f64;
    let tau = std::f64::consts::TAU;
    // Nudge centers that sit exactly on a wedge boundary into the wedge
    // they open.
    let theta = (y.atan2(x) + 1e-6).rem_euclid(tau);
    let wedge = tau / bucket_count as f64;
    ((theta / wedge) as usize % bucket_count) as i32
}

/// Coordinate-to-slot lookup built from a generated slot sequence.
///
/// Hit-testing a coordinate that is not part of the sequence is a normal
/// outcome (the point lies outside the populated spiral) and yields `None`.
#[derive(Clone, Debug, Default)]
pub struct SlotIndex {
    map: HashMap<AxialCoord, usize>,
}

impl SlotIndex {
    /// Builds the lookup from a slot sequence.
    pub fn from_slots(slots: &[SpiralSlot]) -> Self {
        Self {
            map: slots.iter().map(|s| (s.coord, s.index)).collect(),
        }
    }

    /// Slot index of the given coordinate, if the coordinate is enumerated.
    pub fn get(&self, coord: AxialCoord) -> Option<usize> {
        self.map.get(&coord).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
