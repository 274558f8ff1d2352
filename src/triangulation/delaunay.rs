//! Delaunay triangulation by sweep-ordered incremental insertion.
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. It has the property that no
//! point lies inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! A Bowyer-Watson variant:
//! 1. Enclose all points in a large super-triangle
//! 2. Insert points by ascending x. Every open triangle whose circumcircle
//!    contains the new point is removed; the boundary of the resulting cavity
//!    is re-triangulated as a fan around the point
//! 3. A triangle whose circumcircle lies entirely left of the current point
//!    can never be touched again and moves to a closed list, keeping the
//!    open list small
//! 4. Drop every triangle that uses a super-triangle vertex
//!
//! # Complexity
//!
//! - Time: O(n²) worst case, close to O(n^1.5) for uniformly spread points
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use trisweep::triangulation::triangulate;
//! use trisweep::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//!     Point2::new(0.5, 0.3),
//! ];
//!
//! let mesh = triangulate(&points).unwrap();
//! assert_eq!(mesh.len(), 3);
//!
//! // Three indices per triangle, all referring to the input
//! assert_eq!(mesh.indices().len(), 9);
//! assert!(mesh.indices().iter().all(|&i| i < points.len()));
//! ```

use std::cmp::Ordering;

use num_traits::Float;

use crate::bounds::Aabb2;
use crate::error::{DelaunayError, Result};
use crate::primitives::Point2;

use super::circumcircle::{circumcircle, Circumcircle};
use super::config::TriangulationConfig;
use super::edges::EdgeBuffer;
use super::mesh::Triangulation;

/// A working triangle with its cached circumcircle.
#[derive(Debug, Clone, Copy)]
struct SweepTriangle<F> {
    i: usize,
    j: usize,
    k: usize,
    circle: Circumcircle<F>,
}

impl<F: Float> SweepTriangle<F> {
    fn new(vertices: &[Point2<F>], i: usize, j: usize, k: usize, eps: F) -> Result<Self> {
        Ok(Self {
            i,
            j,
            k,
            circle: circumcircle(vertices, i, j, k, eps)?,
        })
    }

    /// `true` if no vertex belongs to the super-triangle.
    #[inline]
    fn is_real(&self, n: usize) -> bool {
        self.i < n && self.j < n && self.k < n
    }
}

/// Computes the three vertices of a triangle enclosing `bounds`.
///
/// With `d` the larger box dimension and `m` the box center the vertices are
/// `(m.x - margin·d, m.y - d)`, `(m.x, m.y + margin·d)` and
/// `(m.x + margin·d, m.y - d)`. A zero-sized box gives a degenerate triangle.
pub fn super_triangle<F: Float>(bounds: Aabb2<F>, margin: F) -> [Point2<F>; 3] {
    let d = bounds.max_extent();
    let mid = bounds.center();

    [
        Point2::new(mid.x - margin * d, mid.y - d),
        Point2::new(mid.x, mid.y + margin * d),
        Point2::new(mid.x + margin * d, mid.y - d),
    ]
}

/// Delaunay triangulator with a fixed configuration.
///
/// Holds no state between calls; one triangulator can serve any number of
/// point sets, from any number of threads.
///
/// # Example
///
/// ```
/// use trisweep::triangulation::{TriangulationConfig, Triangulator};
/// use trisweep::Point2;
///
/// let config = TriangulationConfig::<f64>::builder()
///     .super_triangle_margin(100.0)
///     .unwrap()
///     .build();
/// let triangulator = Triangulator::new(config);
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// assert_eq!(triangulator.triangulate(&points).unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Triangulator<F> {
    config: TriangulationConfig<F>,
}

impl<F: Float> Default for Triangulator<F> {
    fn default() -> Self {
        Self::new(TriangulationConfig::default())
    }
}

impl<F: Float> Triangulator<F> {
    /// Creates a triangulator with the given configuration.
    pub fn new(config: TriangulationConfig<F>) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TriangulationConfig<F> {
        &self.config
    }

    /// Computes the Delaunay triangulation of `points`.
    ///
    /// Returns an empty triangulation for fewer than 3 points. Indices in the
    /// result refer to `points`; triangle order and winding are unspecified.
    ///
    /// # Errors
    ///
    /// - [`DelaunayError::NonFinitePoint`] if a coordinate is NaN or infinite.
    /// - [`DelaunayError::CoincidentPoints`] if a triangle formed during the
    ///   sweep has all three vertices level within `eps`, which includes
    ///   three or more identical input points.
    pub fn triangulate(&self, points: &[Point2<F>]) -> Result<Triangulation> {
        let n = points.len();
        if n < 3 {
            return Ok(Triangulation::new());
        }

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(DelaunayError::NonFinitePoint { index });
        }

        let eps = self.config.eps;
        let margin = self.config.super_triangle_margin;

        tracing::debug!(
            points = n,
            margin = margin.to_f64().unwrap_or(f64::NAN),
            "triangulate: starting"
        );

        // Insertion order: descending x with ties by ascending index, consumed
        // back to front. The closing test below relies on x never decreasing.
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            points[b]
                .x
                .partial_cmp(&points[a].x)
                .unwrap_or(Ordering::Equal)
                .then(a.cmp(&b))
        });

        let bounds = match Aabb2::from_points(points.iter().copied()) {
            Some(bounds) => bounds,
            None => return Ok(Triangulation::new()),
        };

        let mut vertices = Vec::with_capacity(n + 3);
        vertices.extend_from_slice(points);
        vertices.extend(super_triangle(bounds, margin));

        let mut open = vec![SweepTriangle::new(&vertices, n, n + 1, n + 2, eps)?];
        let mut closed: Vec<SweepTriangle<F>> = Vec::new();
        let mut edges = EdgeBuffer::new();

        for &c in order.iter().rev() {
            let p = vertices[c];
            let mut carved = 0usize;

            // Reverse scan: swap_remove only pulls in already visited entries.
            for t in (0..open.len()).rev() {
                let tri = open[t];

                if tri.circle.is_left_of(p.x) {
                    closed.push(open.swap_remove(t));
                    continue;
                }

                if !tri.circle.contains(p, eps) {
                    continue;
                }

                edges.push_triangle(tri.i, tri.j, tri.k);
                open.swap_remove(t);
                carved += 1;
            }

            edges.dedup();

            tracing::trace!(
                point = c,
                carved,
                boundary = edges.len(),
                open = open.len(),
                "triangulate: inserting point"
            );

            for (a, b) in edges.drain_rev() {
                open.push(SweepTriangle::new(&vertices, a, b, c, eps)?);
            }
        }

        let closed_early = closed.len();
        closed.extend(open.into_iter().rev());

        let mut result = Triangulation::with_capacity(closed.len());
        for tri in closed.iter().rev().filter(|tri| tri.is_real(n)) {
            result.push(tri.i, tri.j, tri.k);
        }

        tracing::debug!(
            triangles = result.len(),
            closed_early,
            "triangulate: finished"
        );

        Ok(result)
    }
}

/// Computes the Delaunay triangulation of a set of points with the default
/// configuration.
///
/// See [`Triangulator::triangulate`].
///
/// # Example
///
/// ```
/// use trisweep::triangulation::triangulate;
/// use trisweep::Point2;
///
/// // Square with center point
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
/// ];
///
/// let mesh = triangulate(&points).unwrap();
///
/// // Square with center point should produce 4 triangles
/// assert_eq!(mesh.len(), 4);
/// ```
pub fn triangulate<F: Float>(points: &[Point2<F>]) -> Result<Triangulation> {
    Triangulator::default().triangulate(points)
}

/// Triangulates records that carry a position.
///
/// `key` extracts the point for each item; indices in the result refer to
/// `items`.
///
/// # Example
///
/// ```
/// use trisweep::triangulation::triangulate_by;
/// use trisweep::Point2;
///
/// struct Station {
///     name: &'static str,
///     lon: f64,
///     lat: f64,
/// }
///
/// let stations = [
///     Station { name: "north", lon: 0.0, lat: 2.0 },
///     Station { name: "west", lon: -1.0, lat: 0.0 },
///     Station { name: "east", lon: 1.0, lat: 0.0 },
/// ];
///
/// let mesh = triangulate_by(&stations, |s| Point2::new(s.lon, s.lat)).unwrap();
/// assert_eq!(mesh.len(), 1);
///
/// let tri = mesh.triangle(0).unwrap();
/// assert!(tri.indices().iter().any(|&i| stations[i].name == "north"));
/// ```
pub fn triangulate_by<T, F, K>(items: &[T], key: K) -> Result<Triangulation>
where
    F: Float,
    K: FnMut(&T) -> Point2<F>,
{
    let points: Vec<Point2<F>> = items.iter().map(key).collect();
    triangulate(&points)
}
