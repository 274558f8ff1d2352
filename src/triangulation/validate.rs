//! Empty-circumcircle checks for finished triangulations.
//!
//! These are brute-force O(triangles · points) scans intended for tests and
//! debugging, not for production paths.

use crate::primitives::Point2;
use num_traits::Float;

use super::mesh::{Triangle, Triangulation};

/// A point found strictly inside the circumcircle of an output triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelaunayViolation {
    /// The offending triangle.
    pub triangle: Triangle,
    /// Index of the point inside its circumcircle.
    pub point: usize,
}

/// Circumcenter and squared radius from the closed-form determinant
/// expression. Independent of the bisector construction used by the sweep.
///
/// Returns `None` for (nearly) collinear triangles.
fn reference_circle<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Option<(Point2<F>, F)> {
    let two = F::one() + F::one();

    let d = two * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < F::epsilon() {
        return None;
    }

    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;

    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;

    let center = Point2::new(ux, uy);
    Some((center, center.distance_squared(a)))
}

/// Finds the first point lying inside the circumcircle of some triangle.
///
/// A point counts as inside when its squared distance to the circumcenter is
/// below the squared radius by more than `eps`. Vertices of the triangle
/// itself are skipped, and so are degenerate triangles.
///
/// # Panics
///
/// Panics if `triangulation` refers to indices outside `points`.
///
/// # Example
///
/// ```
/// use trisweep::triangulation::{find_delaunay_violation, triangulate};
/// use trisweep::Point2;
///
/// let points = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
///     Point2::new(1.0, 0.8),
/// ];
/// let mesh = triangulate(&points).unwrap();
/// assert!(find_delaunay_violation(&points, &mesh, 1e-9).is_none());
/// ```
pub fn find_delaunay_violation<F: Float>(
    points: &[Point2<F>],
    triangulation: &Triangulation,
    eps: F,
) -> Option<DelaunayViolation> {
    triangulation.triangles().find_map(|triangle| {
        let [a, b, c] = triangle.vertices(points);
        let (center, radius_squared) = reference_circle(a, b, c)?;

        points
            .iter()
            .enumerate()
            .find(|&(i, &p)| {
                !triangle.contains_vertex(i) && center.distance_squared(p) < radius_squared - eps
            })
            .map(|(point, _)| DelaunayViolation { triangle, point })
    })
}

/// Returns `true` if no point lies inside any triangle's circumcircle.
///
/// See [`find_delaunay_violation`].
pub fn is_delaunay<F: Float>(points: &[Point2<F>], triangulation: &Triangulation, eps: F) -> bool {
    find_delaunay_violation(points, triangulation, eps).is_none()
}
