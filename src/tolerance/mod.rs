//! Epsilon-aware geometric predicates.
//!
//! Predicates take an explicit tolerance parameter. [`EPS`] is the tolerance
//! the triangulation uses unless configured otherwise.

mod predicates;

pub use predicates::{default_eps, orient2d, Orientation, EPS};
