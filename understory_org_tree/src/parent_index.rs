// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::{NodeId, OrgNode};

/// Side index from a node id to its parent id.
///
/// Nodes do not store back-references; ancestor walks go through this index
/// instead. It is rebuilt from scratch whenever the tree structure changes,
/// never patched.
#[derive(Clone, Debug, Default)]
pub struct ParentIndex {
    parents: HashMap<NodeId, NodeId>,
}

impl ParentIndex {
    /// Builds the index over the materialized part of `roots`.
    #[must_use]
    pub fn build(roots: &[OrgNode]) -> Self {
        let mut index = Self::default();
        index.rebuild(roots);
        index
    }

    /// Clears and rebuilds the index over the materialized part of `roots`.
    pub fn rebuild(&mut self, roots: &[OrgNode]) {
        self.parents.clear();
        let mut stack: alloc::vec::Vec<&OrgNode> = roots.iter().collect();
        while let Some(node) = stack.pop() {
            for child in node.materialized_children() {
                self.parents.insert(child.id.clone(), node.id.clone());
                stack.push(child);
            }
        }
    }

    /// Returns the parent of `id`, or `None` for roots and unknown ids.
    #[must_use]
    pub fn parent(&self, id: &NodeId) -> Option<&NodeId> {
        self.parents.get(id)
    }

    /// Iterates the ancestors of `id`, nearest first, ending at a root.
    ///
    /// `id` itself is not yielded.
    pub fn ancestors<'a>(&'a self, id: &'a NodeId) -> Ancestors<'a> {
        Ancestors {
            index: self,
            current: id,
            remaining: self.parents.len(),
        }
    }

    /// Number of non-root nodes in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` if the index holds no parent links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Iterator returned by [`ParentIndex::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    index: &'a ParentIndex,
    current: &'a NodeId,
    // Bounds the walk if malformed input ever produced a cycle.
    remaining: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let parent = self.index.parent(self.current)?;
        self.current = parent;
        Some(parent)
    }
}
