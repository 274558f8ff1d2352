//! Point-in-triangle test returning triangle-local coordinates.

use crate::bounds::Aabb2;
use crate::primitives::Point2;
use num_traits::Float;

/// Coordinates of a point relative to a triangle `[t0, t1, t2]`:
/// `p = t0 + u·(t1 - t0) + v·(t2 - t0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalCoords<F> {
    /// Weight along the edge `t0 → t1`.
    pub u: F,
    /// Weight along the edge `t0 → t2`.
    pub v: F,
}

impl<F: Float> LocalCoords<F> {
    /// Barycentric weights of `t0`, `t1`, `t2`.
    #[inline]
    pub fn weights(&self) -> [F; 3] {
        [F::one() - self.u - self.v, self.u, self.v]
    }

    /// Interpolates per-vertex values with these coordinates.
    #[inline]
    pub fn interpolate(&self, values: [F; 3]) -> F {
        values[0] + (values[1] - values[0]) * self.u + (values[2] - values[0]) * self.v
    }
}

/// Tests whether `p` lies inside the triangle `tri`.
///
/// Returns the local coordinates of `p` when it is inside or on the boundary,
/// `None` when it is outside or the triangle is degenerate (zero
/// determinant).
///
/// # Example
///
/// ```
/// use trisweep::triangulation::triangle_contains;
/// use trisweep::Point2;
///
/// let tri = [
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(0.0, 4.0),
/// ];
///
/// let uv = triangle_contains(tri, Point2::new(1.0, 2.0)).unwrap();
/// assert_eq!((uv.u, uv.v), (0.25, 0.5));
///
/// assert!(triangle_contains(tri, Point2::new(3.0, 3.0)).is_none());
/// ```
pub fn triangle_contains<F: Float>(tri: [Point2<F>; 3], p: Point2<F>) -> Option<LocalCoords<F>> {
    // Quick rejection: beyond every vertex on one side of either axis.
    let bounds = Aabb2::from_points(tri)?;
    if !bounds.contains_point(p) {
        return None;
    }

    let e1 = tri[1] - tri[0];
    let e2 = tri[2] - tri[0];
    let det = e1.cross(e2);

    if det == F::zero() {
        return None;
    }

    let d = p - tri[0];
    let u = d.cross(e2) / det;
    let v = e1.cross(d) / det;

    if u < F::zero() || v < F::zero() || u + v > F::one() {
        return None;
    }

    Some(LocalCoords { u, v })
}
