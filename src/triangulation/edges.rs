//! Boundary-edge bookkeeping for the cavity left by removed triangles.

use std::collections::HashMap;

/// An edge represented by two vertex indices, normalized so the smaller index
/// comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Edge(pub(crate) usize, pub(crate) usize);

impl Edge {
    pub(crate) fn new(a: usize, b: usize) -> Self {
        if a < b {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }
}

/// Directed edges recorded while carving out a cavity.
///
/// An edge shared by two removed triangles is interior to the cavity and is
/// recorded once in each direction; [`EdgeBuffer::dedup`] cancels such pairs
/// so only the cavity boundary remains. The buffer is reused across
/// insertions to avoid reallocating.
#[derive(Debug, Default)]
pub(crate) struct EdgeBuffer {
    edges: Vec<(usize, usize)>,
    counts: HashMap<Edge, usize>,
}

impl EdgeBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records the three edges of triangle `(i, j, k)`.
    pub(crate) fn push_triangle(&mut self, i: usize, j: usize, k: usize) {
        self.edges.push((i, j));
        self.edges.push((j, k));
        self.edges.push((k, i));
    }

    /// Cancels edges that were recorded an even number of times.
    ///
    /// Occurrences cancel in pairs, so an edge recorded an odd number of
    /// times survives once, at its first position. Surviving edges keep their
    /// recorded direction and relative order.
    pub(crate) fn dedup(&mut self) {
        self.counts.clear();
        for &(a, b) in &self.edges {
            *self.counts.entry(Edge::new(a, b)).or_insert(0) += 1;
        }

        let counts = &mut self.counts;
        self.edges.retain(|&(a, b)| match counts.get_mut(&Edge::new(a, b)) {
            Some(count) if *count % 2 == 1 => {
                // Zero it so later occurrences of the same edge are dropped.
                *count = 0;
                true
            }
            _ => false,
        });
    }

    /// Removes and yields the recorded edges, last recorded first.
    pub(crate) fn drain_rev(&mut self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.drain(..).rev()
    }

    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }
}
