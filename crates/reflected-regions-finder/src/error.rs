use reflected_regions_core::ProjectionError;

/// Errors returned by the reflected-region search.
///
/// All variants are raised before the first sweep step; there are no
/// partial results. An empty region list is *not* an error (see
/// [`ReflectedRegionsFinder::find`](crate::ReflectedRegionsFinder::find)).
#[derive(thiserror::Error, Debug)]
pub enum FindError {
    /// The rotation center lies on or inside the source region, so the
    /// minimal angular step `2·radius/offset` is undefined.
    #[error("rotation center at offset {offset:.3} px lies on or inside the source region (radius {radius:.3} px)")]
    InvalidGeometry { offset: f64, radius: f64 },
    #[error("source region radius {0} deg must be positive and finite")]
    InvalidRadius(f64),
    #[error("angle increment {0} rad must be positive and finite")]
    InvalidAngleIncrement(f64),
    #[error("minimal distance {0} rad must be non-negative and finite")]
    InvalidMinDistance(f64),
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}
