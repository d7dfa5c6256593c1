use log::{debug, warn};
use nalgebra::Point2;

use reflected_regions_core::{
    ExclusionTest, PixCircleRegion, PixRegionList, Projection, SkyCircleRegion, SkyPoint,
    SkyRegionList,
};

use crate::sweep::AngularSweep;
use crate::{FindError, FinderParams};

/// Reflected background-region finder.
///
/// Holds only tuning; one finder can serve any number of searches, and a
/// search touches nothing but its own local state and the read-only
/// collaborators, so independent searches may run concurrently.
pub struct ReflectedRegionsFinder {
    params: FinderParams,
}

impl ReflectedRegionsFinder {
    pub fn new(params: FinderParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &FinderParams {
        &self.params
    }

    /// Place reflected regions around `center`, congruent to `region`.
    ///
    /// Candidates are swept through one turn of the position angle, each
    /// validated against `exclusion`; accepted regions come back in sky
    /// coordinates in discovery order.
    ///
    /// An empty list is a legitimate outcome (no free slot exists under
    /// this mask and tuning) and callers should respond by relaxing
    /// parameters, not by treating it as a failure. Geometry and parameter
    /// errors are raised before the first sweep step; projection errors
    /// propagate unchanged.
    pub fn find<P, E>(
        &self,
        region: &SkyCircleRegion,
        center: &SkyPoint,
        projection: &P,
        exclusion: &E,
    ) -> Result<SkyRegionList, FindError>
    where
        P: Projection,
        E: ExclusionTest + ?Sized,
    {
        self.params.validate()?;
        if !(region.radius_deg > 0.0 && region.radius_deg.is_finite()) {
            return Err(FindError::InvalidRadius(region.radius_deg));
        }

        let pix_region = region.to_pixel(projection)?;
        let pix_center = projection.sky_to_pixel(center)?;

        let offset = pix_region.offset_to(&pix_center);
        if !(offset.is_finite() && offset > pix_region.radius) {
            return Err(FindError::InvalidGeometry {
                offset,
                radius: pix_region.radius,
            });
        }

        let position_angle = pix_region.position_angle_from(&pix_center);
        // Small-angle approximation of the non-overlap arc; adjacent
        // accepted regions may still overlap slightly once the radius is
        // no longer small against the offset.
        let min_step = 2.0 * pix_region.radius / offset;

        debug!(
            "sweep: offset {offset:.3} px, position angle {position_angle:.4} rad, \
             min step {min_step:.4} rad, increment {:.4} rad",
            self.params.angle_increment_rad
        );

        let mut sweep = AngularSweep::new(
            position_angle,
            min_step,
            self.params.angle_increment_rad,
            self.params.min_distance_rad,
        );
        if sweep.remaining() <= 0.0 {
            warn!(
                "empty sweep window (min step {min_step:.4} rad, buffer {:.4} rad): \
                 no room for reflected regions",
                self.params.min_distance_rad
            );
        }

        let mut accepted = PixRegionList::new();
        while let Some(angle) = sweep.current() {
            let candidate = PixCircleRegion::new(
                position_at(&pix_center, offset, angle),
                pix_region.radius,
            );
            if exclusion.intersects_excluded(&candidate) {
                sweep.reject();
            } else {
                accepted.push(candidate);
                sweep.accept();
            }
        }

        debug!("accepted {} reflected regions", accepted.len());
        Ok(accepted.to_sky(projection)?)
    }
}

/// Pixel position at `offset` from `center` along position angle `angle`,
/// measured from the +y pixel axis toward +x.
#[inline]
fn position_at(center: &Point2<f64>, offset: f64, angle: f64) -> Point2<f64> {
    Point2::new(center.x + offset * angle.sin(), center.y + offset * angle.cos())
}

/// One-call entry point with the default tuning (0.1 rad increment, no
/// extra buffer).
pub fn find_reflected_regions<P, E>(
    region: &SkyCircleRegion,
    center: &SkyPoint,
    projection: &P,
    exclusion: &E,
) -> Result<SkyRegionList, FindError>
where
    P: Projection,
    E: ExclusionTest + ?Sized,
{
    ReflectedRegionsFinder::new(FinderParams::default()).find(region, center, projection, exclusion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use reflected_regions_core::ProjectionError;

    /// Identity-style projection: longitude ↔ x, latitude ↔ y. Good enough
    /// for exercising the sweep without a sky model.
    struct FlatProjection;

    impl Projection for FlatProjection {
        fn sky_to_pixel(&self, point: &SkyPoint) -> Result<Point2<f64>, ProjectionError> {
            Ok(Point2::new(point.lon_deg, point.lat_deg))
        }

        fn pixel_to_sky(&self, point: &Point2<f64>) -> Result<SkyPoint, ProjectionError> {
            Ok(SkyPoint::new(point.x, point.y))
        }
    }

    fn source_at_offset(offset: f64, radius: f64) -> (SkyCircleRegion, SkyPoint) {
        let center = SkyPoint::new(100.0, 0.0);
        // Region north of the center: position angle 0.
        let region = SkyCircleRegion::new(SkyPoint::new(100.0, offset), radius);
        (region, center)
    }

    #[test]
    fn free_sweep_packs_at_the_minimal_step() {
        let (region, center) = source_at_offset(10.0, 1.0);
        let free = |_: &PixCircleRegion| false;
        let result = find_reflected_regions(&region, &center, &FlatProjection, &free).unwrap();

        // min step 0.2 rad over a (2π − 0.4) window.
        let expected = ((std::f64::consts::TAU - 0.4) / 0.2).floor() as usize + 1;
        assert_eq!(result.len(), expected);
    }

    #[test]
    fn rejected_candidates_advance_by_the_increment() {
        let (region, center) = source_at_offset(10.0, 1.0);
        // Exclude everything: the sweep must still terminate, empty.
        let everything = |_: &PixCircleRegion| true;
        let result = find_reflected_regions(&region, &center, &FlatProjection, &everything).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn center_on_region_boundary_is_degenerate() {
        let (region, center) = source_at_offset(1.0, 1.0);
        let free = |_: &PixCircleRegion| false;
        let err = find_reflected_regions(&region, &center, &FlatProjection, &free).unwrap_err();
        assert!(matches!(err, FindError::InvalidGeometry { .. }));
    }

    #[test]
    fn center_inside_region_is_degenerate() {
        let (region, center) = source_at_offset(0.5, 1.0);
        let free = |_: &PixCircleRegion| false;
        let err = find_reflected_regions(&region, &center, &FlatProjection, &free).unwrap_err();
        assert!(matches!(
            err,
            FindError::InvalidGeometry { offset, radius } if offset < radius
        ));
    }

    #[test]
    fn bad_parameters_fail_before_any_exclusion_query() {
        let (region, center) = source_at_offset(10.0, 1.0);
        let queried = std::cell::Cell::new(false);
        let spy = |_: &PixCircleRegion| {
            queried.set(true);
            false
        };
        let finder = ReflectedRegionsFinder::new(FinderParams {
            angle_increment_rad: -0.1,
            ..FinderParams::default()
        });
        let err = finder
            .find(&region, &center, &FlatProjection, &spy)
            .unwrap_err();
        assert!(matches!(err, FindError::InvalidAngleIncrement(_)));
        assert!(!queried.get());
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let center = SkyPoint::new(100.0, 0.0);
        let region = SkyCircleRegion::new(SkyPoint::new(100.0, 10.0), 0.0);
        let free = |_: &PixCircleRegion| false;
        let err = find_reflected_regions(&region, &center, &FlatProjection, &free).unwrap_err();
        assert!(matches!(err, FindError::InvalidRadius(_)));
    }

    #[test]
    fn oversized_buffer_yields_empty_list_not_an_error() {
        let (region, center) = source_at_offset(10.0, 1.0);
        let free = |_: &PixCircleRegion| false;
        let finder = ReflectedRegionsFinder::new(FinderParams {
            min_distance_rad: 4.0,
            ..FinderParams::default()
        });
        let result = finder.find(&region, &center, &FlatProjection, &free).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn first_region_clears_the_source_by_the_guard_arc() {
        let (region, center) = source_at_offset(10.0, 1.0);
        let free = |_: &PixCircleRegion| false;
        let result = find_reflected_regions(&region, &center, &FlatProjection, &free).unwrap();

        // First accepted position angle is the source angle plus min step.
        let first = result.as_slice()[0];
        let dx = first.center.lon_deg - 100.0;
        let dy = first.center.lat_deg;
        assert_abs_diff_eq!(dx.atan2(dy), 0.2, epsilon = 1e-9);
    }
}
