//! Index-based triangle types returned by the triangulator.

use crate::primitives::Point2;
use crate::tolerance::{orient2d, Orientation};
use num_traits::Float;

use super::contains::{triangle_contains, LocalCoords};

/// A triangle represented by indices into a point array.
///
/// Winding is whatever the sweep produced; see
/// [`Triangle::to_counter_clockwise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
}

impl Triangle {
    /// Creates a new triangle from vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the vertex indices as an array.
    #[inline]
    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the three edges of this triangle as pairs of indices.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Checks if the triangle contains a specific vertex index.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    /// Looks up the three vertices in `points`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds for `points`.
    #[inline]
    pub fn vertices<F: Float>(&self, points: &[Point2<F>]) -> [Point2<F>; 3] {
        [points[self.a], points[self.b], points[self.c]]
    }

    /// Returns the same triangle with counter-clockwise winding.
    ///
    /// Clockwise triangles have `b` and `c` swapped; counter-clockwise and
    /// degenerate triangles are returned unchanged.
    pub fn to_counter_clockwise<F: Float>(self, points: &[Point2<F>]) -> Self {
        let [pa, pb, pc] = self.vertices(points);
        match orient2d(pa, pb, pc, F::zero()) {
            Orientation::Clockwise => Self::new(self.a, self.c, self.b),
            Orientation::CounterClockwise | Orientation::Collinear => self,
        }
    }
}

/// The output of a triangulation: a flat list of point indices, three per
/// triangle.
///
/// # Example
///
/// ```
/// use trisweep::triangulation::triangulate;
/// use trisweep::Point2;
///
/// let points = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.5, 1.0),
/// ];
/// let mesh = triangulate(&points).unwrap();
///
/// assert_eq!(mesh.len(), 1);
/// assert_eq!(mesh.indices().len(), 3);
///
/// let hit = mesh.locate(&points, Point2::new(0.5, 0.25));
/// assert!(hit.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Triangulation {
    indices: Vec<usize>,
}

impl Triangulation {
    /// Creates an empty triangulation.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(triangles: usize) -> Self {
        Self {
            indices: Vec::with_capacity(triangles * 3),
        }
    }

    pub(crate) fn push(&mut self, i: usize, j: usize, k: usize) {
        self.indices.extend([i, j, k]);
    }

    /// The flat index list; its length is always a multiple of 3.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Consumes the triangulation and returns the flat index list.
    #[inline]
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    /// Number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if there are no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the `n`-th triangle, if present.
    pub fn triangle(&self, n: usize) -> Option<Triangle> {
        self.indices
            .get(n * 3..n * 3 + 3)
            .map(|t| Triangle::new(t[0], t[1], t[2]))
    }

    /// Iterates over the triangles in output order.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|t| Triangle::new(t[0], t[1], t[2]))
    }

    /// Finds the first triangle containing `p`.
    ///
    /// `points` must be the slice that was triangulated. Returns the triangle's
    /// position in [`triangles`](Self::triangles) together with the local
    /// coordinates of `p` relative to its first vertex. Linear in the number
    /// of triangles.
    pub fn locate<F: Float>(
        &self,
        points: &[Point2<F>],
        p: Point2<F>,
    ) -> Option<(usize, LocalCoords<F>)> {
        self.triangles()
            .enumerate()
            .find_map(|(n, tri)| triangle_contains(tri.vertices(points), p).map(|uv| (n, uv)))
    }
}

impl From<Triangulation> for Vec<usize> {
    fn from(triangulation: Triangulation) -> Self {
        triangulation.into_indices()
    }
}
