use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SkyPoint;

/// Errors reported by a [`Projection`] implementation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// The sky position is 90° or more from the tangent point, where the
    /// gnomonic forward mapping is undefined.
    #[error("sky position ({lon_deg:.4}, {lat_deg:.4}) deg is 90 deg or more from the tangent point")]
    BehindTangentPlane { lon_deg: f64, lat_deg: f64 },
}

/// Bidirectional sky ↔ pixel mapping.
///
/// Implementations must be bijective and continuous over the region of
/// interest and use a **one-based** pixel origin, matching the indexing of
/// the exclusion grid: pixel `(1.0, 1.0)` is the center of the first cell.
///
/// Failures (a point outside the mapping's domain) are reported to the
/// caller unchanged; the finder never retries or suppresses them.
pub trait Projection {
    fn sky_to_pixel(&self, point: &SkyPoint) -> Result<Point2<f64>, ProjectionError>;
    fn pixel_to_sky(&self, point: &Point2<f64>) -> Result<SkyPoint, ProjectionError>;
}

/// Gnomonic (tangent-plane) projection for small fields of view.
///
/// Pixel `x` grows with longitude and `y` with latitude around the tangent
/// point; `ref_pixel` is the one-based pixel position of the tangent point.
/// The forward direction is defined on the hemisphere facing the tangent
/// point and errors beyond it; the inverse is total.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TanProjection {
    center: SkyPoint,
    scale_deg_per_pix: f64,
    ref_pixel: Point2<f64>,
}

impl TanProjection {
    /// `scale_deg_per_pix` must be positive and finite.
    pub fn new(center: SkyPoint, scale_deg_per_pix: f64, ref_pixel: Point2<f64>) -> Self {
        Self {
            center,
            scale_deg_per_pix,
            ref_pixel,
        }
    }

    /// Tangent point of the projection.
    #[inline]
    pub fn center(&self) -> SkyPoint {
        self.center
    }

    /// Angular size of one pixel, degrees.
    #[inline]
    pub fn scale_deg_per_pix(&self) -> f64 {
        self.scale_deg_per_pix
    }
}

impl Projection for TanProjection {
    fn sky_to_pixel(&self, point: &SkyPoint) -> Result<Point2<f64>, ProjectionError> {
        let (sin_lat0, cos_lat0) = self.center.lat_deg.to_radians().sin_cos();
        let (sin_lat, cos_lat) = point.lat_deg.to_radians().sin_cos();
        let (sin_dlon, cos_dlon) = (point.lon_deg - self.center.lon_deg)
            .to_radians()
            .sin_cos();

        let cos_c = sin_lat0 * sin_lat + cos_lat0 * cos_lat * cos_dlon;
        if cos_c <= 0.0 {
            return Err(ProjectionError::BehindTangentPlane {
                lon_deg: point.lon_deg,
                lat_deg: point.lat_deg,
            });
        }

        // Standard-coordinate (xi, eta) plane, radians.
        let xi = cos_lat * sin_dlon / cos_c;
        let eta = (cos_lat0 * sin_lat - sin_lat0 * cos_lat * cos_dlon) / cos_c;

        let scale = self.scale_deg_per_pix.to_radians();
        Ok(Point2::new(
            self.ref_pixel.x + xi / scale,
            self.ref_pixel.y + eta / scale,
        ))
    }

    fn pixel_to_sky(&self, point: &Point2<f64>) -> Result<SkyPoint, ProjectionError> {
        let scale = self.scale_deg_per_pix.to_radians();
        let xi = (point.x - self.ref_pixel.x) * scale;
        let eta = (point.y - self.ref_pixel.y) * scale;

        let rho = (xi * xi + eta * eta).sqrt();
        if rho == 0.0 {
            return Ok(self.center);
        }

        let (sin_c, cos_c) = rho.atan().sin_cos();
        let (sin_lat0, cos_lat0) = self.center.lat_deg.to_radians().sin_cos();

        let lat = (cos_c * sin_lat0 + eta * sin_c * cos_lat0 / rho).asin();
        let lon = self.center.lon_deg.to_radians()
            + (xi * sin_c).atan2(rho * cos_lat0 * cos_c - eta * sin_lat0 * sin_c);

        Ok(SkyPoint::new(lon.to_degrees(), lat.to_degrees()))
    }
}
