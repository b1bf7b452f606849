//! Point operations.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_complex::Complex64;

use super::types::{DiskPoint, HyperboloidPoint, POINT_TOLERANCE};

impl DiskPoint {
    /// The disk center.
    pub const ORIGIN: DiskPoint = DiskPoint { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn origin() -> Self {
        Self::ORIGIN
    }

    /// Point at Euclidean distance `r` from the origin in direction `theta`.
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// Interprets a complex number `re + i·im` as the point `(re, im)`.
    #[inline]
    pub fn from_complex(z: Complex64) -> Self {
        Self::new(z.re, z.im)
    }

    #[inline]
    pub fn to_complex(self) -> Complex64 {
        Complex64::new(self.x, self.y)
    }

    /// Squared Euclidean norm. Prefer this over `norm()` for comparisons.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    #[inline]
    pub fn dot(&self, other: &DiskPoint) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2x2 determinant `x1*y2 - y1*x2`.
    #[inline]
    pub fn cross(&self, other: &DiskPoint) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &DiskPoint) -> f64 {
        (*self - *other).norm()
    }

    /// Signed area test of `self` against the directed line `a -> b`.
    ///
    /// Positive when `self` is to the left of `a -> b`, negative to the
    /// right, zero when collinear.
    #[inline]
    pub fn orientation(&self, a: &DiskPoint, b: &DiskPoint) -> f64 {
        (b.x - a.x) * (self.y - a.y) - (b.y - a.y) * (self.x - a.x)
    }

    #[inline]
    pub fn scale(&self, alpha: f64) -> Self {
        Self::new(self.x * alpha, self.y * alpha)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Coordinate-wise comparison within [`POINT_TOLERANCE`].
    #[inline]
    pub fn approx_eq(&self, other: &DiskPoint) -> bool {
        self.approx_eq_within(other, POINT_TOLERANCE)
    }

    #[inline]
    pub fn approx_eq_within(&self, other: &DiskPoint, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }
}

impl Add for DiskPoint {
    type Output = DiskPoint;

    fn add(self, rhs: DiskPoint) -> DiskPoint {
        DiskPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for DiskPoint {
    type Output = DiskPoint;

    fn sub(self, rhs: DiskPoint) -> DiskPoint {
        DiskPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for DiskPoint {
    type Output = DiskPoint;

    fn neg(self) -> DiskPoint {
        DiskPoint::new(-self.x, -self.y)
    }
}

impl Mul<f64> for DiskPoint {
    type Output = DiskPoint;

    fn mul(self, alpha: f64) -> DiskPoint {
        self.scale(alpha)
    }
}

impl From<Complex64> for DiskPoint {
    fn from(z: Complex64) -> Self {
        DiskPoint::from_complex(z)
    }
}

impl From<DiskPoint> for Complex64 {
    fn from(p: DiskPoint) -> Self {
        p.to_complex()
    }
}

impl From<(f64, f64)> for DiskPoint {
    fn from((x, y): (f64, f64)) -> Self {
        DiskPoint::new(x, y)
    }
}

impl fmt::Display for DiskPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

impl HyperboloidPoint {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Apex of the upper sheet, the image of the disk center.
    #[inline]
    pub fn apex() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Minkowski quadratic form `x² + y² - z²`; equals -1 on the hyperboloid.
    #[inline]
    pub fn minkowski_norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y - self.z * self.z
    }

    /// True when the point lies on the upper sheet within `tolerance`.
    pub fn is_on_upper_sheet(&self, tolerance: f64) -> bool {
        self.z > 0.0 && (self.minkowski_norm_squared() + 1.0).abs() < tolerance
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn approx_eq_within(&self, other: &HyperboloidPoint, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance
            && (self.y - other.y).abs() < tolerance
            && (self.z - other.z).abs() < tolerance
    }
}

impl fmt::Display for HyperboloidPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
