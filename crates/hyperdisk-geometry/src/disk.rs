//! Disk of arbitrary radius tying the geometry modules together.
//!
//! Free functions in the other modules work either on the unit disk or take
//! the radius from a [`DiskConfig`]. [`PoincareDisk`] wraps a config,
//! rejects points outside the disk and rescales to and from the unit disk
//! where a unit-disk formula is used.

use crate::config::DiskConfig;
use crate::distance::{hyperbolic_distance, hyperbolic_distance_to_center};
use crate::error::GeometryResult;
use crate::geodesic::{construct_segment, Geodesic, GeodesicSegment};
use crate::inversion::{CircleInversion, GeodesicReflection, Reflection};
use crate::mobius::{DiskAutomorphism, DiskScale, MobiusRotation, MobiusTranslation};
use crate::point::{DiskPoint, HyperboloidPoint};
use crate::projection::{disk_to_hyperboloid, hyperboloid_to_disk, Projection};

/// Poincare disk of radius `config.radius` centred at the origin.
///
/// # Example
///
/// ```
/// use hyperdisk_geometry::{DiskConfig, DiskPoint, PoincareDisk};
///
/// let disk = PoincareDisk::new(DiskConfig::with_radius(3.0));
/// let seg = disk
///     .geodesic(&DiskPoint::new(1.0, 0.0), &DiskPoint::new(-1.0, 0.0))
///     .unwrap();
/// assert!(seg.curve.is_line());
///
/// assert!(disk.geodesic(&DiskPoint::new(3.0, 0.0), &DiskPoint::ORIGIN).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PoincareDisk {
    config: DiskConfig,
}

impl PoincareDisk {
    /// Wrap `config` without validating it.
    #[inline]
    pub fn new(config: DiskConfig) -> Self {
        Self { config }
    }

    /// Wrap `config` after [`DiskConfig::validate`].
    pub fn validated(config: DiskConfig) -> GeometryResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &DiskConfig {
        &self.config
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.config.radius
    }

    #[inline]
    pub fn scale(&self) -> DiskScale {
        DiskScale::new(self.config.radius)
    }

    /// Geodesic segment between two interior points.
    ///
    /// # Errors
    ///
    /// `PointOutsideDisk`/`InvalidInput` for bad endpoints, and
    /// `PrecisionLoss` under the strict fallback policy.
    pub fn geodesic(&self, p1: &DiskPoint, p2: &DiskPoint) -> GeometryResult<GeodesicSegment> {
        self.config.validate_point(p1)?;
        self.config.validate_point(p2)?;
        construct_segment(p1, p2, &self.config)
    }

    /// Project a hyperboloid point into this disk.
    pub fn project_hyperboloid(&self, point: &HyperboloidPoint) -> GeometryResult<DiskPoint> {
        let unit = hyperboloid_to_disk(point, self.config.eps)?;
        Ok(unit.scale(self.config.radius))
    }

    /// Lift a point of this disk onto the hyperboloid.
    pub fn lift(&self, point: &DiskPoint) -> GeometryResult<HyperboloidPoint> {
        self.config.validate_point(point)?;
        disk_to_hyperboloid(&point.scale(1.0 / self.config.radius), self.config.eps)
    }

    /// Rotate `point` by `angle` radians about the interior point `center`.
    pub fn rotate(
        &self,
        point: &DiskPoint,
        center: &DiskPoint,
        angle: f64,
    ) -> GeometryResult<DiskPoint> {
        self.config.validate_point(center)?;
        let scale = self.scale();
        let rotation = MobiusRotation::new(scale.to_unit(center), angle, self.config.mobius_eps)?;
        self.transform(point, &rotation)
    }

    /// Translate `point` by the isometry that moves the disk center to `by`.
    pub fn translate(&self, point: &DiskPoint, by: &DiskPoint) -> GeometryResult<DiskPoint> {
        self.config.validate_point(by)?;
        let translation = MobiusTranslation::new(self.scale().to_unit(by), self.config.mobius_eps)?;
        self.transform(point, &translation)
    }

    /// Apply a unit-disk automorphism to a point of this disk.
    pub fn transform<M: DiskAutomorphism>(
        &self,
        point: &DiskPoint,
        map: &M,
    ) -> GeometryResult<DiskPoint> {
        self.config.validate_point(point)?;
        let scale = self.scale();
        Ok(scale.from_unit(map.apply(scale.to_unit(point))))
    }

    /// Reflect `point` across the geodesic whose supporting circle is
    /// centred at `geodesic_center` (outside the disk).
    pub fn reflect(
        &self,
        point: &DiskPoint,
        geodesic_center: &DiskPoint,
    ) -> GeometryResult<Reflection> {
        self.config.validate_point(point)?;
        let inversion = CircleInversion::for_geodesic_center(
            *geodesic_center,
            self.config.radius,
            self.config.inversion_eps,
        )?;
        Ok(inversion.apply(point))
    }

    /// Reflect `point` across the geodesic through `a` and `b`.
    pub fn reflect_across(
        &self,
        point: &DiskPoint,
        a: &DiskPoint,
        b: &DiskPoint,
    ) -> GeometryResult<DiskPoint> {
        for p in [point, a, b] {
            self.config.validate_point(p)?;
        }
        let scale = self.scale();
        let unit = |p: &DiskPoint| DiskPoint::from_complex(scale.to_unit(p));
        let geodesic = Geodesic::from_two_points(&unit(a), &unit(b));
        let reflection = GeodesicReflection::with_eps(geodesic, self.config.inversion_eps)?;
        Ok(scale.from_unit(reflection.apply(&unit(point))?.to_complex()))
    }

    /// Hyperbolic distance between two interior points.
    pub fn distance(&self, u: &DiskPoint, v: &DiskPoint) -> GeometryResult<f64> {
        self.config.validate_point(u)?;
        self.config.validate_point(v)?;
        let r = self.config.radius;
        Ok(hyperbolic_distance(&u.scale(1.0 / r), &v.scale(1.0 / r)))
    }

    /// Hyperbolic distance from the disk center.
    pub fn distance_to_center(&self, point: &DiskPoint) -> GeometryResult<f64> {
        self.config.validate_point(point)?;
        Ok(hyperbolic_distance_to_center(&point.scale(1.0 / self.config.radius)))
    }

    /// Re-project an interior point into another disk model, at this radius.
    pub fn project(&self, point: &DiskPoint, projection: Projection) -> GeometryResult<DiskPoint> {
        self.config.validate_point(point)?;
        let r = self.config.radius;
        Ok(projection.apply(&point.scale(1.0 / r)).scale(r))
    }
}

static_assertions::assert_impl_all!(PoincareDisk: Send, Sync, Clone);
