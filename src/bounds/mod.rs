//! Bounding volumes for point sets.

mod aabb;

pub use aabb::Aabb2;
