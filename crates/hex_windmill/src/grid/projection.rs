//! Bidirectional hex/pixel mapping for a hexagonal tiling.
//!
//! [`GridProjection`] converts [`AxialCoord`]s to pixel positions and back,
//! parameterized by the tiling radius (hex center to vertex) and the tiling
//! [`Orientation`]. The inverse mapping resolves fractional lattice
//! coordinates with cube rounding, so points near hex boundaries land on the
//! correct nearest hex.
use glam::Vec2;
use mint::Vector2;

use crate::error::{Error, Result};
use crate::grid::coord::AxialCoord;

const SQRT_3: f32 = 1.732_050_8;

/// Hex tiling orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Vertex at the top.
    #[default]
    PointyTop,
    /// Edge at the top.
    FlatTop,
}

/// Hex-to-pixel projection for a tiling of the given radius and orientation.
#[derive(Clone, Copy, Debug)]
pub struct GridProjection {
    hex_radius: f32,
    orientation: Orientation,
}

impl GridProjection {
    /// Creates a projection, returning an error unless `hex_radius` is
    /// positive and finite.
    pub fn try_new(hex_radius: f32, orientation: Orientation) -> Result<Self> {
        if !hex_radius.is_finite() || hex_radius <= 0.0 {
            return Err(Error::InvalidConfig(
                "hex_radius must be positive and finite".into(),
            ));
        }
        Ok(Self {
            hex_radius,
            orientation,
        })
    }

    /// Creates a projection without the runtime validity check.
    pub fn new(hex_radius: f32, orientation: Orientation) -> Self {
        debug_assert!(
            hex_radius.is_finite() && hex_radius > 0.0,
            "hex_radius must be positive and finite"
        );
        Self {
            hex_radius,
            orientation,
        }
    }

    /// Tiling radius in pixels, hex center to vertex.
    pub fn hex_radius(&self) -> f32 {
        self.hex_radius
    }

    /// Tiling orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Converts an axial coordinate to the pixel position of its hex center,
    /// relative to the given origin pixel.
    pub fn to_pixel(&self, coord: AxialCoord, origin: Vector2<f32>) -> Vector2<f32> {
        let origin = Vec2::from(origin);
        let q = coord.q as f32;
        let r = coord.r as f32;
        let offset = match self.orientation {
            Orientation::PointyTop => Vec2::new(
                self.hex_radius * SQRT_3 * (q + r / 2.0),
                self.hex_radius * 1.5 * r,
            ),
            Orientation::FlatTop => Vec2::new(
                self.hex_radius * 1.5 * q,
                self.hex_radius * SQRT_3 * (r + q / 2.0),
            ),
        };
        (origin + offset).into()
    }

    /// Converts a pixel position to the axial coordinate of the nearest hex.
    pub fn to_hex(&self, point: Vector2<f32>, origin: Vector2<f32>) -> AxialCoord {
        let p = Vec2::from(point) - Vec2::from(origin);
        let (q, r) = match self.orientation {
            Orientation::PointyTop => (
                (SQRT_3 / 3.0 * p.x - p.y / 3.0) / self.hex_radius,
                (2.0 / 3.0 * p.y) / self.hex_radius,
            ),
            Orientation::FlatTop => (
                (2.0 / 3.0 * p.x) / self.hex_radius,
                (-p.x / 3.0 + SQRT_3 / 3.0 * p.y) / self.hex_radius,
            ),
        };
        axial_round(q, r)
    }

    /// Pixel offsets of the six hex vertices relative to the hex center.
    /// Pointy-top corners sit at `60°·i − 30°`, flat-top corners at `60°·i`.
    pub fn corner_offsets(&self) -> [Vector2<f32>; 6] {
        let start_deg = match self.orientation {
            Orientation::PointyTop => -30.0f32,
            Orientation::FlatTop => 0.0f32,
        };
        std::array::from_fn(|i| {
            let angle = (start_deg + 60.0 * i as f32).to_radians();
            Vec2::new(
                self.hex_radius * angle.cos(),
                self.hex_radius * angle.sin(),
            )
            .into()
        })
    }
}

/// Rounds fractional axial coordinates to the nearest lattice point.
///
/// Rounds the three cube components independently, then recomputes the one
/// with the largest rounding error from the other two so that `q + r + s = 0`
/// holds exactly. Independent rounding alone breaks the zero-sum invariant
/// near hex boundaries and picks the wrong neighbor.
pub(crate) fn axial_round(q: f32, r: f32) -> AxialCoord {
    let s = -q - r;
    let mut rq = q.round();
    let mut rr = r.round();
    let rs = s.round();

    let q_diff = (rq - q).abs();
    let r_diff = (rr - r).abs();
    let s_diff = (rs - s).abs();

    if q_diff > r_diff && q_diff > s_diff {
        rq = -rr - rs;
    } else if r_diff > s_diff {
        rr = -rq - rs;
    }

    AxialCoord::new(rq as i32, rr as i32)
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use super::*;

    #[test]
    fn try_new_rejects_degenerate_radius() {
        assert!(GridProjection::try_new(0.0, Orientation::PointyTop).is_err());
        assert!(GridProjection::try_new(-5.0, Orientation::PointyTop).is_err());
        assert!(GridProjection::try_new(f32::NAN, Orientation::PointyTop).is_err());
        assert!(GridProjection::try_new(48.0, Orientation::PointyTop).is_ok());
    }

    #[test]
    fn origin_maps_to_origin_pixel() {
        let proj = GridProjection::new(32.0, Orientation::PointyTop);
        let center = Vec2::new(540.0, 960.0);
        let p = Vec2::from(proj.to_pixel(AxialCoord::ORIGIN, center.into()));
        assert_eq!(p, center);
    }

    #[test]
    fn pointy_top_axis_spacing() {
        let proj = GridProjection::new(10.0, Orientation::PointyTop);
        let origin = Vec2::ZERO.into();
        let east = Vec2::from(proj.to_pixel(AxialCoord::new(1, 0), origin));
        assert!((east.x - 10.0 * SQRT_3).abs() < 1e-4);
        assert!(east.y.abs() < 1e-4);

        let south_east = Vec2::from(proj.to_pixel(AxialCoord::new(0, 1), origin));
        assert!((south_east.x - 10.0 * SQRT_3 / 2.0).abs() < 1e-4);
        assert!((south_east.y - 15.0).abs() < 1e-4);
    }

    #[test]
    fn flat_top_swaps_axis_roles() {
        let proj = GridProjection::new(10.0, Orientation::FlatTop);
        let origin = Vec2::ZERO.into();
        let p = Vec2::from(proj.to_pixel(AxialCoord::new(1, 0), origin));
        assert!((p.x - 15.0).abs() < 1e-4);
        assert!((p.y - 10.0 * SQRT_3 / 2.0).abs() < 1e-4);
    }

    #[test]
    fn hex_centers_round_trip_exactly() {
        for orientation in [Orientation::PointyTop, Orientation::FlatTop] {
            let proj = GridProjection::new(24.0, orientation);
            let origin = Vec2::new(300.0, 400.0).into();
            for q in -6..=6 {
                for r in -6..=6 {
                    let coord = AxialCoord::new(q, r);
                    let pixel = proj.to_pixel(coord, origin);
                    assert_eq!(proj.to_hex(pixel, origin), coord);
                }
            }
        }
    }

    #[test]
    fn random_points_land_within_one_radius() {
        let proj = GridProjection::new(20.0, Orientation::PointyTop);
        let origin = Vec2::ZERO.into();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let p = Vec2::new(
                rng.random_range(-500.0..500.0),
                rng.random_range(-500.0..500.0),
            );
            let hex = proj.to_hex(p.into(), origin);
            let center = Vec2::from(proj.to_pixel(hex, origin));
            assert!(
                p.distance(center) <= 20.0 + 1e-3,
                "point {p:?} resolved to hex center {center:?}"
            );
        }
    }

    #[test]
    fn axial_round_restores_zero_sum() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let q: f32 = rng.random_range(-30.0..30.0);
            let r: f32 = rng.random_range(-30.0..30.0);
            let rounded = axial_round(q, r);
            assert_eq!(rounded.q + rounded.r + rounded.s(), 0);
        }
    }

    #[test]
    fn axial_round_keeps_exact_lattice_points() {
        assert_eq!(axial_round(2.0, -1.0), AxialCoord::new(2, -1));
        assert_eq!(axial_round(0.0, 0.0), AxialCoord::ORIGIN);
    }

    #[test]
    fn corner_offsets_lie_on_the_radius() {
        for orientation in [Orientation::PointyTop, Orientation::FlatTop] {
            let proj = GridProjection::new(48.0, orientation);
            let corners = proj.corner_offsets();
            assert_eq!(corners.len(), 6);
            for c in corners {
                let len = Vec2::from(c).length();
                assert!((len - 48.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn pointy_top_has_vertex_straight_up() {
        let proj = GridProjection::new(10.0, Orientation::PointyTop);
        let has_top = proj
            .corner_offsets()
            .iter()
            .any(|c| c.x.abs() < 1e-3 && (c.y.abs() - 10.0).abs() < 1e-3);
        assert!(has_top);
    }
}
