//! Mask-to-points adapter.

use kumo_core::Point;

use crate::mask::Mask;

/// Lists the coordinates of every non-zero pixel in row-major order.
///
/// Rows are scanned top to bottom, columns left to right, and each hit is
/// emitted as `(x, y)` with `x` the column and `y` the row, widened to
/// `f64`. The output order is therefore deterministic for a given mask, and
/// every coordinate lies in `[0, width) x [0, height)`.
///
/// # Examples
/// ```
/// use kumo_core::Point;
/// use kumo_providers_raster::{Mask, nonzero_points};
///
/// let mask = Mask::new(3, 2, vec![0, 0, 5, 1, 0, 0]);
/// let points = nonzero_points(&mask);
/// assert_eq!(points, vec![Point::new(2.0, 0.0), Point::new(0.0, 1.0)]);
/// ```
#[must_use]
pub fn nonzero_points(mask: &Mask) -> Vec<Point> {
    let mut points = Vec::new();
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            if mask.sample(x, y).is_some_and(|sample| sample != 0) {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "raster dimensions stay far below 2^52"
                )]
                points.push(Point::new(x as f64, y as f64));
            }
        }
    }
    points
}
