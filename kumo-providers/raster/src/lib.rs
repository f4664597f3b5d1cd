//! Raster provider: binary masks and the mask-to-points adapter.
//!
//! Bridges the preprocessing world (a thresholded single-channel image) and
//! the clustering core: a [`Mask`] holds the raster, and [`nonzero_points`]
//! turns it into the ordered point sequence [`kumo_core::Clusterer`]
//! consumes.

mod errors;
mod mask;
mod points;

pub use errors::RasterError;
pub use mask::Mask;
pub use points::nonzero_points;
