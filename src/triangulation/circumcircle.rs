//! Circumcircle construction for the incremental sweep.

use crate::error::{DelaunayError, Result};
use crate::primitives::Point2;
use num_traits::Float;

/// The circle through the three vertices of a triangle.
///
/// The radius is kept squared; every consumer compares squared distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle<F> {
    /// Circumcenter.
    pub center: Point2<F>,
    /// Squared circumradius.
    pub radius_squared: F,
}

impl<F: Float> Circumcircle<F> {
    /// Computes the circumcircle of `a`, `b`, `c` by intersecting
    /// perpendicular bisectors.
    ///
    /// Bisector slopes are `-(dx / dy)`, so a pair whose y-coordinates differ
    /// by less than `eps` is never used for a slope: if `a`/`b` are level the
    /// center lies on `x = (a.x + b.x) / 2` and the `b`/`c` bisector gives y,
    /// and symmetrically for `b`/`c`. When both pairs are level the points
    /// are coincident or horizontally collinear and `None` is returned.
    ///
    /// Collinear points that are not horizontal produce a non-finite circle.
    /// Such a circle fails every "outside" test in the sweep, so the triangle
    /// is discarded by the next insertion.
    ///
    /// # Example
    ///
    /// ```
    /// use trisweep::triangulation::Circumcircle;
    /// use trisweep::Point2;
    ///
    /// let circle = Circumcircle::from_points(
    ///     Point2::new(0.0_f64, 0.0),
    ///     Point2::new(4.0, 0.0),
    ///     Point2::new(0.0, 4.0),
    ///     1e-6,
    /// )
    /// .unwrap();
    /// assert_eq!(circle.center, Point2::new(2.0, 2.0));
    /// assert_eq!(circle.radius_squared, 8.0);
    ///
    /// let level = Circumcircle::from_points(
    ///     Point2::new(0.0_f64, 1.0),
    ///     Point2::new(1.0, 1.0),
    ///     Point2::new(2.0, 1.0),
    ///     1e-6,
    /// );
    /// assert!(level.is_none());
    /// ```
    pub fn from_points(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Option<Self> {
        let two = F::one() + F::one();
        let dy_ab = (a.y - b.y).abs();
        let dy_bc = (b.y - c.y).abs();

        if dy_ab < eps && dy_bc < eps {
            return None;
        }

        let (xc, yc) = if dy_ab < eps {
            let m2 = -((c.x - b.x) / (c.y - b.y));
            let mx2 = (b.x + c.x) / two;
            let my2 = (b.y + c.y) / two;
            let xc = (b.x + a.x) / two;
            (xc, m2 * (xc - mx2) + my2)
        } else if dy_bc < eps {
            let m1 = -((b.x - a.x) / (b.y - a.y));
            let mx1 = (a.x + b.x) / two;
            let my1 = (a.y + b.y) / two;
            let xc = (c.x + b.x) / two;
            (xc, m1 * (xc - mx1) + my1)
        } else {
            let m1 = -((b.x - a.x) / (b.y - a.y));
            let m2 = -((c.x - b.x) / (c.y - b.y));
            let mx1 = (a.x + b.x) / two;
            let mx2 = (b.x + c.x) / two;
            let my1 = (a.y + b.y) / two;
            let my2 = (b.y + c.y) / two;
            let xc = (m1 * mx1 - m2 * mx2 + my2 - my1) / (m1 - m2);
            // Evaluate y on the bisector with the larger dy, i.e. the smaller slope.
            let yc = if dy_ab > dy_bc {
                m1 * (xc - mx1) + my1
            } else {
                m2 * (xc - mx2) + my2
            };
            (xc, yc)
        };

        let dx = b.x - xc;
        let dy = b.y - yc;
        Some(Self {
            center: Point2::new(xc, yc),
            radius_squared: dx * dx + dy * dy,
        })
    }

    /// Signed excess of the squared distance from `p` to the center over the
    /// squared radius. Negative inside, positive outside.
    #[inline]
    pub fn power(&self, p: Point2<F>) -> F {
        self.center.distance_squared(p) - self.radius_squared
    }

    /// Returns `true` unless `p` is outside the circle by more than `eps`.
    ///
    /// Points on the circle, and points up to `eps` beyond it in squared
    /// distance, count as inside.
    #[inline]
    #[allow(clippy::neg_cmp_op_on_partial_ord)] // NaN power must count as inside
    pub fn contains(&self, p: Point2<F>, eps: F) -> bool {
        !(self.power(p) > eps)
    }

    /// Returns `true` when `x` lies strictly to the right of the circle.
    ///
    /// Once the sweep reaches such an x no later point can fall inside.
    #[inline]
    pub fn is_left_of(&self, x: F) -> bool {
        let dx = x - self.center.x;
        dx > F::zero() && dx * dx > self.radius_squared
    }
}

/// Computes the circumcircle of `points[i]`, `points[j]`, `points[k]`.
///
/// # Errors
///
/// Returns [`DelaunayError::CoincidentPoints`] carrying the three indices when
/// both consecutive pairs are level within `eps`.
///
/// # Example
///
/// ```
/// use trisweep::triangulation::circumcircle;
/// use trisweep::{DelaunayError, Point2};
///
/// let points = vec![
///     Point2::new(0.0_f64, 2.0),
///     Point2::new(3.0, 2.0),
///     Point2::new(5.0, 2.0),
/// ];
/// let err = circumcircle(&points, 0, 1, 2, 1e-6).unwrap_err();
/// assert_eq!(err, DelaunayError::CoincidentPoints { i: 0, j: 1, k: 2 });
/// ```
pub fn circumcircle<F: Float>(
    points: &[Point2<F>],
    i: usize,
    j: usize,
    k: usize,
    eps: F,
) -> Result<Circumcircle<F>> {
    Circumcircle::from_points(points[i], points[j], points[k], eps).ok_or_else(|| {
        tracing::warn!(i, j, k, "circumcircle: coincident points");
        DelaunayError::CoincidentPoints { i, j, k }
    })
}
