use serde::{Deserialize, Serialize};

/// A position on the celestial sphere, spherical coordinates in degrees.
///
/// The frame is whatever the surrounding [`Projection`](crate::Projection)
/// speaks (ICRS, galactic, ...); this type only does sphere geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkyPoint {
    /// Longitude-like coordinate (RA, GLON, ...), degrees.
    pub lon_deg: f64,
    /// Latitude-like coordinate (Dec, GLAT, ...), degrees in `[-90, 90]`.
    pub lat_deg: f64,
}

impl SkyPoint {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }

    /// Great-circle separation to `other`, degrees.
    ///
    /// Vincenty form of the angular distance, stable for both very small
    /// and near-antipodal separations.
    pub fn separation_deg(&self, other: &SkyPoint) -> f64 {
        let (sin_a, cos_a) = self.lat_deg.to_radians().sin_cos();
        let (sin_b, cos_b) = other.lat_deg.to_radians().sin_cos();
        let (sin_dl, cos_dl) = (other.lon_deg - self.lon_deg).to_radians().sin_cos();

        let cross = ((cos_b * sin_dl).powi(2)
            + (cos_a * sin_b - sin_a * cos_b * cos_dl).powi(2))
        .sqrt();
        let dot = sin_a * sin_b + cos_a * cos_b * cos_dl;
        cross.atan2(dot).to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn separation_of_coincident_points_is_zero() {
        let p = SkyPoint::new(83.63, 22.01);
        assert_abs_diff_eq!(p.separation_deg(&p), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn separation_along_equator_equals_longitude_difference() {
        let a = SkyPoint::new(10.0, 0.0);
        let b = SkyPoint::new(55.0, 0.0);
        assert_abs_diff_eq!(a.separation_deg(&b), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn separation_pole_to_equator_is_ninety() {
        let pole = SkyPoint::new(123.0, 90.0);
        let eq = SkyPoint::new(0.0, 0.0);
        assert_abs_diff_eq!(pole.separation_deg(&eq), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn small_separation_is_accurate() {
        // 3.6 arcsec in latitude.
        let a = SkyPoint::new(200.0, -45.0);
        let b = SkyPoint::new(200.0, -45.001);
        assert_abs_diff_eq!(a.separation_deg(&b), 0.001, epsilon = 1e-12);
    }
}
