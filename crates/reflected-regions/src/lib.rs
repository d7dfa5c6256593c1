//! High-level facade crate for the `reflected-regions-*` workspace.
//!
//! Reflected-region background estimation for pointed observations: rotate
//! copies of the source region around the pointing center and keep every
//! position that stays clear of the exclusion mask. The accepted regions
//! sample the same offset from the pointing as the source, so they see the
//! same acceptance, and their counts estimate the background under the
//! source region.
//!
//! ## Quickstart
//!
//! ```
//! use nalgebra::Point2;
//! use reflected_regions::{
//!     find_reflected_regions, ExclusionMask, SkyCircleRegion, SkyPoint, TanProjection,
//! };
//!
//! # fn main() -> Result<(), reflected_regions::FindError> {
//! let pointing = SkyPoint::new(83.63, 22.01);
//! let projection = TanProjection::new(pointing, 0.01, Point2::new(120.5, 120.5));
//! let mut mask = ExclusionMask::new(240, 240);
//! mask.exclude_circle(&Point2::new(130.5, 120.5), 5.0);
//!
//! let source = SkyCircleRegion::new(SkyPoint::new(83.63, 22.11), 0.01);
//! let regions = find_reflected_regions(&source, &pointing, &projection, &mask)?;
//! println!("placed {} background regions", regions.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `reflected_regions::core`: sky/pixel types, region lists, the
//!   [`Projection`] and [`ExclusionTest`] collaborator traits, and the
//!   bundled [`TanProjection`] / [`ExclusionMask`] implementations.
//! - `reflected_regions::finder`: [`ReflectedRegionsFinder`],
//!   [`FinderParams`], [`FindError`] and the one-call
//!   [`find_reflected_regions`].

pub use reflected_regions_core as core;
pub use reflected_regions_finder as finder;

pub use reflected_regions_core::{
    ExclusionMask, ExclusionTest, PixCircleRegion, PixRegionList, Projection, ProjectionError,
    SkyCircleRegion, SkyPoint, SkyRegionList, TanProjection,
};
pub use reflected_regions_finder::{
    find_reflected_regions, FindError, FinderParams, ReflectedRegionsFinder,
};
