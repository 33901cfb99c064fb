//! Axial coordinates on the hexagonal lattice.
//!
//! A coordinate is an integer pair `(q, r)`; the implicit cube component
//! `s = -q - r` keeps the cube-coordinate invariant `q + r + s = 0`.
use std::ops::Add;

/// A lattice point in axial hex coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxialCoord {
    /// Column component.
    pub q: i32,
    /// Row component.
    pub r: i32,
}

/// Axial deltas to the six neighbors of any hex.
pub const NEIGHBOR_DELTAS: [AxialCoord; 6] = [
    AxialCoord { q: 1, r: 0 },
    AxialCoord { q: -1, r: 0 },
    AxialCoord { q: 0, r: 1 },
    AxialCoord { q: 0, r: -1 },
    AxialCoord { q: 1, r: -1 },
    AxialCoord { q: -1, r: 1 },
];

impl AxialCoord {
    /// The lattice origin.
    pub const ORIGIN: AxialCoord = AxialCoord { q: 0, r: 0 };

    /// Creates a coordinate from its axial components.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Implicit third cube component, `-q - r`.
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Ring number: the cube-coordinate distance from the origin.
    /// Ring 0 is the origin itself, ring n holds `6n` hexes.
    pub fn ring(&self) -> u32 {
        self.q
            .abs()
            .max(self.r.abs())
            .max(self.s().abs()) as u32
    }

    /// The six adjacent lattice points. Always distinct, never `self`.
    pub fn neighbors(&self) -> [AxialCoord; 6] {
        NEIGHBOR_DELTAS.map(|d| *self + d)
    }
}

impl Add for AxialCoord {
    type Output = AxialCoord;

    fn add(self, rhs: AxialCoord) -> AxialCoord {
        AxialCoord::new(self.q + rhs.q, self.r + rhs.r)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn origin_has_ring_zero() {
        assert_eq!(AxialCoord::ORIGIN.ring(), 0);
    }

    #[test]
    fn adjacent_hex_has_ring_one() {
        assert_eq!(AxialCoord::new(1, 0).ring(), 1);
    }

    #[test]
    fn diagonal_hex_ring_uses_cube_distance() {
        assert_eq!(AxialCoord::new(2, -1).ring(), 2);
        // max(|-2|, |-1|, |3|) = 3
        assert_eq!(AxialCoord::new(-2, -1).ring(), 3);
        assert_eq!(AxialCoord::new(3, 0).ring(), 3);
    }

    #[test]
    fn s_component_closes_cube_sum() {
        let c = AxialCoord::new(3, -1);
        assert_eq!(c.s(), -2);
        assert_eq!(c.q + c.r + c.s(), 0);
    }

    #[test]
    fn neighbors_are_six_distinct_points() {
        for base in [
            AxialCoord::ORIGIN,
            AxialCoord::new(1, 1),
            AxialCoord::new(-4, 2),
        ] {
            let neighbors = base.neighbors();
            let unique: HashSet<_> = neighbors.iter().copied().collect();
            assert_eq!(unique.len(), 6);
            assert!(!unique.contains(&base));
        }
    }

    #[test]
    fn neighbors_stay_within_one_ring() {
        let base = AxialCoord::new(-2, 3);
        let base_ring = base.ring() as i64;
        for n in base.neighbors() {
            let diff = (n.ring() as i64 - base_ring).abs();
            assert!(diff <= 1, "neighbor {n:?} jumped {diff} rings");
        }
    }
}
