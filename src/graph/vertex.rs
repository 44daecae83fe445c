//! Vertex storage: identity plus closed neighborhood

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable index of a vertex inside its graph's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl VertexId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex and its closed neighborhood (the vertex itself is always a member)
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Unique identity string
    id: String,

    /// Arena slot of this vertex
    index: VertexId,

    /// Closed neighborhood, ordered by arena index
    neighbors: BTreeSet<VertexId>,
}

impl Vertex {
    pub(crate) fn new(id: impl Into<String>, index: VertexId) -> Self {
        let mut neighbors = BTreeSet::new();
        neighbors.insert(index);
        Self {
            id: id.into(),
            index,
            neighbors,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn index(&self) -> VertexId {
        self.index
    }

    /// Add `other` to the neighborhood. Returns false if it was already there.
    pub(crate) fn add_neighbor(&mut self, other: VertexId) -> bool {
        self.neighbors.insert(other)
    }

    /// Remove `other` from the neighborhood. The vertex itself can't be removed.
    pub(crate) fn remove_neighbor(&mut self, other: VertexId) -> bool {
        if other == self.index {
            return false;
        }
        self.neighbors.remove(&other)
    }

    /// Closed neighborhood, self included
    pub fn closed_neighbors(&self) -> &BTreeSet<VertexId> {
        &self.neighbors
    }

    /// Neighbors other than the vertex itself
    pub fn open_neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        let me = self.index;
        self.neighbors.iter().copied().filter(move |&n| n != me)
    }

    pub fn has_neighbor(&self, other: VertexId) -> bool {
        self.neighbors.contains(&other)
    }

    /// Size of the closed neighborhood
    pub fn closed_size(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of neighbors excluding the vertex itself
    pub fn degree(&self) -> usize {
        self.neighbors.len() - 1
    }

    /// Total order by identity string
    pub fn cmp_identity(&self, other: &Vertex) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {{", self.id)?;
        for (i, n) in self.neighbors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", n)?;
        }
        write!(f, "}}")
    }
}
