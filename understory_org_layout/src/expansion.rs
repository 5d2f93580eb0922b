// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-node open/closed state with depth-based defaults.

use hashbrown::HashMap;
use understory_org_tree::{NodeId, OrgNode, ParentIndex, Preorder};

/// Expansion state of a single node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Expansion {
    /// No explicit value; the depth-based default applies.
    #[default]
    Unset,
    /// Explicitly open.
    Expanded,
    /// Explicitly closed.
    Collapsed,
}

impl Expansion {
    /// Resolves to a boolean, using `default` when unset.
    #[must_use]
    pub fn resolve(self, default: bool) -> bool {
        match self {
            Self::Unset => default,
            Self::Expanded => true,
            Self::Collapsed => false,
        }
    }

    fn from_bool(expanded: bool) -> Self {
        if expanded {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }
}

/// Which nodes are open.
///
/// Explicit values persist for the lifetime of the state and are never
/// pruned, even when their subtree is no longer reachable.
#[derive(Clone, Debug)]
pub struct ExpansionState {
    entries: HashMap<NodeId, Expansion>,
    default_expand_depth: usize,
}

impl Default for ExpansionState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ExpansionState {
    /// Creates an empty state where nodes shallower than
    /// `default_expand_depth` default to open.
    #[must_use]
    pub fn new(default_expand_depth: usize) -> Self {
        Self {
            entries: HashMap::new(),
            default_expand_depth,
        }
    }

    /// Depth below which unset nodes are open.
    #[must_use]
    pub fn default_expand_depth(&self) -> usize {
        self.default_expand_depth
    }

    /// Returns the explicit state of `id`.
    #[must_use]
    pub fn get(&self, id: &NodeId) -> Expansion {
        self.entries.get(id).copied().unwrap_or_default()
    }

    /// Returns whether `id`, found at `depth`, is open.
    #[must_use]
    pub fn is_expanded(&self, id: &NodeId, depth: usize) -> bool {
        self.get(id).resolve(depth < self.default_expand_depth)
    }

    /// Writes an explicit value.
    pub fn set(&mut self, id: NodeId, expanded: bool) {
        self.entries.insert(id, Expansion::from_bool(expanded));
    }

    /// Writes the depth default for every materialized node that has no
    /// explicit value yet. Returns how many entries were written.
    ///
    /// Existing values, including user toggles, are left alone.
    pub fn seed_defaults(&mut self, roots: &[OrgNode]) -> usize {
        let mut written = 0;
        for (depth, node) in Preorder::new(roots) {
            if self.get(&node.id) == Expansion::Unset {
                let open = depth < self.default_expand_depth;
                self.entries
                    .insert(node.id.clone(), Expansion::from_bool(open));
                written += 1;
            }
        }
        written
    }

    /// Opens every ancestor of `id` up to and including its root.
    ///
    /// This only ever opens nodes. `id` itself is not touched. Returns the
    /// number of ancestors visited.
    pub fn expand_path(&mut self, parents: &ParentIndex, id: &NodeId) -> usize {
        let mut visited = 0;
        for ancestor in parents.ancestors(id) {
            self.entries.insert(ancestor.clone(), Expansion::Expanded);
            visited += 1;
        }
        visited
    }

    /// Number of explicit entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no explicit entry exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use understory_org_tree::{NodeId, OrgNode, ParentIndex};

    use super::{Expansion, ExpansionState};

    fn chain() -> vec::Vec<OrgNode> {
        vec![OrgNode::new("a", "A", "", "").with_children(vec![
            OrgNode::new("b", "B", "", "").with_children(vec![
                OrgNode::new("c", "C", "", "").with_children(vec![OrgNode::new("d", "D", "", "")]),
            ]),
        ])]
    }

    #[test]
    fn unset_nodes_follow_the_depth_default() {
        let state = ExpansionState::new(1);
        let id = NodeId::from("x");
        assert_eq!(state.get(&id), Expansion::Unset);
        assert!(state.is_expanded(&id, 0));
        assert!(!state.is_expanded(&id, 1));
        assert!(!state.is_expanded(&id, 5));
    }

    #[test]
    fn seeding_never_overwrites_explicit_values() {
        let mut state = ExpansionState::new(1);
        state.set(NodeId::from("a"), false);
        state.set(NodeId::from("c"), true);

        let written = state.seed_defaults(&chain());
        assert_eq!(written, 2, "only b and d were unset");
        assert_eq!(state.get(&NodeId::from("a")), Expansion::Collapsed);
        assert_eq!(state.get(&NodeId::from("b")), Expansion::Collapsed);
        assert_eq!(state.get(&NodeId::from("c")), Expansion::Expanded);
        assert_eq!(state.get(&NodeId::from("d")), Expansion::Collapsed);

        assert_eq!(state.seed_defaults(&chain()), 0);
    }

    #[test]
    fn expand_path_opens_every_ancestor_regardless_of_prior_state() {
        let roots = chain();
        let parents = ParentIndex::build(&roots);
        let mut state = ExpansionState::new(1);
        state.seed_defaults(&roots);
        state.set(NodeId::from("a"), false);

        let visited = state.expand_path(&parents, &NodeId::from("d"));
        assert_eq!(visited, 3);
        for id in ["a", "b", "c"] {
            assert_eq!(state.get(&NodeId::from(id)), Expansion::Expanded, "{id}");
        }
        assert_eq!(state.get(&NodeId::from("d")), Expansion::Collapsed);
    }
}
