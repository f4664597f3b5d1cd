//! Planar point type shared across the clustering pipeline.

/// A point in the plane.
///
/// Coordinates are `f64`; pixel coordinates produced by the raster adapter
/// arrive widened to float. Points are immutable once the input sequence is
/// built, and their position in that sequence is the identity the clustering
/// core operates on.
///
/// # Examples
/// ```
/// use kumo_core::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(a.squared_distance(b), 25.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the squared Euclidean distance to `other`.
    ///
    /// Distance tests in the clusterer compare squared distances against a
    /// squared radius, so the square root is never taken.
    #[must_use]
    pub fn squared_distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}
