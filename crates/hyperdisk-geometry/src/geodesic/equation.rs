//! Full geodesics through two unit-disk points in equation form.

use serde::{Deserialize, Serialize};

use crate::point::DiskPoint;

/// Tolerance for the diameter test and for membership checks.
pub const GEODESIC_TOLERANCE: f64 = 1e-6;

/// Geodesic of the unit Poincare disk.
///
/// A non-diameter geodesic is the circle `x² + y² + ax + by + 1 = 0`, which
/// meets the unit circle at right angles for any `a² + b² > 4`. A diameter
/// is the line `ax + by = 0` through the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geodesic {
    pub a: f64,
    pub b: f64,
    pub diameter: bool,
}

impl Geodesic {
    /// Circle geodesic with the given coefficients.
    pub fn circle(a: f64, b: f64) -> Self {
        Self { a, b, diameter: false }
    }

    /// Diameter with normal `(a, b)`.
    pub fn with_normal(a: f64, b: f64) -> Self {
        Self { a, b, diameter: true }
    }

    /// Geodesic through `u` and `v`.
    ///
    /// Solves `|p|² + a·p.x + b·p.y + 1 = 0` for `p = u` and `p = v`. When
    /// `u` and `v` are (nearly) collinear with the origin the system is
    /// singular and the diameter through both points is returned.
    pub fn from_two_points(u: &DiskPoint, v: &DiskPoint) -> Self {
        let det = u.cross(v);

        if det.abs() < GEODESIC_TOLERANCE {
            return Self::with_normal(u.y - v.y, v.x - u.x);
        }

        let a_rhs = -1.0 - u.norm_squared();
        let b_rhs = -1.0 - v.norm_squared();

        Self::circle(
            (a_rhs * v.y - b_rhs * u.y) / det,
            (b_rhs * u.x - a_rhs * v.x) / det,
        )
    }

    /// Residual of the geodesic equation at `point`; zero on the geodesic.
    pub fn residual(&self, point: &DiskPoint) -> f64 {
        let linear = self.a * point.x + self.b * point.y;
        if self.diameter {
            linear
        } else {
            point.norm_squared() + linear + 1.0
        }
    }

    /// Whether `point` lies on the geodesic within [`GEODESIC_TOLERANCE`].
    pub fn contains(&self, point: &DiskPoint) -> bool {
        self.residual(point).abs() < GEODESIC_TOLERANCE
    }

    /// Center of the supporting circle, `None` for a diameter.
    pub fn euclidean_center(&self) -> Option<DiskPoint> {
        if self.diameter {
            return None;
        }
        Some(DiskPoint::new(-self.a / 2.0, -self.b / 2.0))
    }

    /// Radius of the supporting circle, `None` for a diameter.
    pub fn euclidean_radius(&self) -> Option<f64> {
        if self.diameter {
            return None;
        }
        Some((self.a * self.a + self.b * self.b - 4.0).sqrt() / 2.0)
    }

    /// The two points where the geodesic meets the unit circle.
    ///
    /// For a circle geodesic the chord between them is perpendicular to the
    /// center direction, at distance `2 / |(a, b)|` from the origin. Returns
    /// NaN coordinates for coefficients that describe no geodesic
    /// (`a² + b² < 4`, or a zero diameter normal).
    pub fn ideal_points(&self) -> [DiskPoint; 2] {
        let n_sq = self.a * self.a + self.b * self.b;

        if self.diameter {
            let n = n_sq.sqrt();
            let along = DiskPoint::new(-self.b / n, self.a / n);
            return [along, -along];
        }

        let mid = DiskPoint::new(self.a, self.b).scale(-2.0 / n_sq);
        let half_chord = (1.0 - 4.0 / n_sq).sqrt();
        let n = n_sq.sqrt();
        let along = DiskPoint::new(-self.b / n, self.a / n).scale(half_chord);
        [mid + along, mid - along]
    }
}
