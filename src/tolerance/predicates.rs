//! Geometric predicates with explicit tolerance.

use crate::primitives::Point2;
use num_traits::Float;

/// Default absolute tolerance, 2^-20.
///
/// Two y-coordinates closer than this are treated as equal by the
/// circumcircle construction, and a point whose squared distance to a
/// circumcenter exceeds the squared radius by no more than this is treated
/// as lying on the circle. Changing it changes which borderline points end
/// up inside a circumcircle.
pub const EPS: f64 = 1.0 / 1_048_576.0;

/// Returns [`EPS`] converted to `F`.
///
/// 2^-20 is exactly representable in both `f32` and `f64`.
#[inline]
pub fn default_eps<F: Float>() -> F {
    F::from(EPS).unwrap_or_else(F::epsilon)
}

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// Returns the orientation of the triangle formed by points `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if twice the signed area is within `eps` of zero
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}
