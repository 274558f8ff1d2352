//! trisweep - Delaunay triangulation of 2D point sets
//!
//! Points are inserted left to right into a mesh seeded by a large
//! super-triangle. Triangles whose circumcircles fall behind the sweep are
//! retired early, so the working set stays small. The result is a flat list
//! of indices into the input, three per triangle.
//!
//! # Quick Start
//!
//! ```
//! use trisweep::{triangle_contains, triangulate, Point2};
//!
//! let points = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 3.0),
//!     Point2::new(0.0, 3.0),
//!     Point2::new(2.0, 1.0),
//! ];
//!
//! let mesh = triangulate(&points)?;
//! assert_eq!(mesh.len(), 4);
//!
//! // Look up each triangle and test a point against it
//! let query = Point2::new(2.0, 0.5);
//! let hits = mesh
//!     .triangles()
//!     .filter(|tri| triangle_contains(tri.vertices(&points), query).is_some())
//!     .count();
//! assert_eq!(hits, 1);
//! # Ok::<(), trisweep::DelaunayError>(())
//! ```
//!
//! # Tolerance
//!
//! All predicates use an absolute tolerance, [`tolerance::EPS`] (2^-20) by
//! default. It is an absolute value: inputs with coordinates far below 1
//! should be scaled up first. See
//! [`TriangulationConfig`](triangulation::TriangulationConfig) to change it.
//!
//! # Logging
//!
//! The triangulator reports progress through `tracing` at `debug` and `trace`
//! level; install any subscriber to see it.

pub mod bounds;
pub mod error;
pub mod primitives;
pub mod tolerance;
pub mod triangulation;

pub use error::{DelaunayError, Result};
pub use primitives::{Point2, Vec2};
pub use triangulation::{
    triangle_contains, triangulate, triangulate_by, LocalCoords, Triangle, Triangulation,
    Triangulator,
};
