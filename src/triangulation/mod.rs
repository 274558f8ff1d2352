//! Delaunay triangulation of 2D point sets.
//!
//! [`triangulate`] builds the triangulation; [`triangle_contains`] answers
//! point-in-triangle queries against its output. The two are independent:
//! the triangulator never calls the containment test, and the test works on
//! any three points.

mod circumcircle;
mod config;
mod contains;
mod delaunay;
mod edges;
mod mesh;
mod validate;

pub use circumcircle::{circumcircle, Circumcircle};
pub use config::{
    TriangulationConfig, TriangulationConfigBuilder, DEFAULT_SUPER_TRIANGLE_MARGIN,
    MIN_SUPER_TRIANGLE_MARGIN,
};
pub use contains::{triangle_contains, LocalCoords};
pub use delaunay::{super_triangle, triangulate, triangulate_by, Triangulator};
pub use mesh::{Triangle, Triangulation};
pub use validate::{find_delaunay_violation, is_delaunay, DelaunayViolation};
