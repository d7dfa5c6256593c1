use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::{Projection, ProjectionError, SkyPoint};

/// Circular region in pixel coordinates.
///
/// Immutable once constructed; the finder never moves a region, it builds a
/// fresh one per candidate position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixCircleRegion {
    pub center: Point2<f64>,
    pub radius: f64,
}

impl PixCircleRegion {
    pub fn new(center: Point2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Euclidean distance from the region center to `point`.
    #[inline]
    pub fn offset_to(&self, point: &Point2<f64>) -> f64 {
        (self.center - point).norm()
    }

    /// Position angle of the region center as seen from `point`, radians.
    ///
    /// Measured from the +y pixel axis toward +x, so a region placed at
    /// `point + (offset·sin θ, offset·cos θ)` has position angle `θ`.
    #[inline]
    pub fn position_angle_from(&self, point: &Point2<f64>) -> f64 {
        let d = self.center - point;
        d.x.atan2(d.y)
    }

    /// Convert to a sky region through `projection`.
    ///
    /// The sky radius is the angular separation between the deprojected
    /// center and a deprojected point one pixel radius away along +x.
    pub fn to_sky(&self, projection: &impl Projection) -> Result<SkyCircleRegion, ProjectionError> {
        let center = projection.pixel_to_sky(&self.center)?;
        let edge =
            projection.pixel_to_sky(&Point2::new(self.center.x + self.radius, self.center.y))?;
        Ok(SkyCircleRegion::new(center, center.separation_deg(&edge)))
    }
}

/// Circular region on the sky, radius in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkyCircleRegion {
    pub center: SkyPoint,
    pub radius_deg: f64,
}

impl SkyCircleRegion {
    pub fn new(center: SkyPoint, radius_deg: f64) -> Self {
        Self { center, radius_deg }
    }

    /// Convert to a pixel region through `projection`.
    ///
    /// The projection contract maps points only, so the pixel radius is the
    /// distance between the projected center and a projected edge point one
    /// radius away in latitude. The edge point is taken toward the equator,
    /// which keeps it on the sphere for regions near a pole.
    pub fn to_pixel(&self, projection: &impl Projection) -> Result<PixCircleRegion, ProjectionError> {
        let center = projection.sky_to_pixel(&self.center)?;
        let dlat = if self.center.lat_deg >= 0.0 {
            -self.radius_deg
        } else {
            self.radius_deg
        };
        let edge = SkyPoint::new(self.center.lon_deg, self.center.lat_deg + dlat);
        let radius = (projection.sky_to_pixel(&edge)? - center).norm();
        Ok(PixCircleRegion::new(center, radius))
    }
}

/// Ordered list of pixel regions, insertion order preserved.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PixRegionList {
    regions: Vec<PixCircleRegion>,
}

impl PixRegionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, region: PixCircleRegion) {
        self.regions.push(region);
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PixCircleRegion> {
        self.regions.iter()
    }

    pub fn as_slice(&self) -> &[PixCircleRegion] {
        &self.regions
    }

    /// Convert every region to sky coordinates, preserving order.
    pub fn to_sky(&self, projection: &impl Projection) -> Result<SkyRegionList, ProjectionError> {
        self.regions
            .iter()
            .map(|r| r.to_sky(projection))
            .collect::<Result<Vec<_>, _>>()
            .map(SkyRegionList::from)
    }
}

impl From<Vec<PixCircleRegion>> for PixRegionList {
    fn from(regions: Vec<PixCircleRegion>) -> Self {
        Self { regions }
    }
}

impl FromIterator<PixCircleRegion> for PixRegionList {
    fn from_iter<I: IntoIterator<Item = PixCircleRegion>>(iter: I) -> Self {
        Self {
            regions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PixRegionList {
    type Item = PixCircleRegion;
    type IntoIter = std::vec::IntoIter<PixCircleRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.into_iter()
    }
}

impl<'a> IntoIterator for &'a PixRegionList {
    type Item = &'a PixCircleRegion;
    type IntoIter = std::slice::Iter<'a, PixCircleRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

/// Ordered list of sky regions, insertion order preserved.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SkyRegionList {
    regions: Vec<SkyCircleRegion>,
}

impl SkyRegionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, region: SkyCircleRegion) {
        self.regions.push(region);
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SkyCircleRegion> {
        self.regions.iter()
    }

    pub fn as_slice(&self) -> &[SkyCircleRegion] {
        &self.regions
    }
}

impl From<Vec<SkyCircleRegion>> for SkyRegionList {
    fn from(regions: Vec<SkyCircleRegion>) -> Self {
        Self { regions }
    }
}

impl FromIterator<SkyCircleRegion> for SkyRegionList {
    fn from_iter<I: IntoIterator<Item = SkyCircleRegion>>(iter: I) -> Self {
        Self {
            regions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SkyRegionList {
    type Item = SkyCircleRegion;
    type IntoIter = std::vec::IntoIter<SkyCircleRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.into_iter()
    }
}

impl<'a> IntoIterator for &'a SkyRegionList {
    type Item = &'a SkyCircleRegion;
    type IntoIter = std::slice::Iter<'a, SkyCircleRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
