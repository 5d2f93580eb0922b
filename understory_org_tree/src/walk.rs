// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::OrgNode;

/// Preorder iterator over the materialized part of one or more trees.
///
/// Yields `(depth, node)` pairs where roots are at depth `0`. Children are
/// visited in the order they appear in [`OrgNode::children`]; unloaded
/// children are simply not there to visit.
#[derive(Clone, Debug)]
pub struct Preorder<'a> {
    stack: Vec<(usize, &'a OrgNode)>,
}

impl<'a> Preorder<'a> {
    /// Starts a walk over `roots`.
    pub fn new(roots: &'a [OrgNode]) -> Self {
        let mut stack = Vec::with_capacity(roots.len());
        stack.extend(roots.iter().rev().map(|root| (0, root)));
        Self { stack }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (usize, &'a OrgNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack.extend(
            node.materialized_children()
                .iter()
                .rev()
                .map(|child| (depth + 1, child)),
        );
        Some((depth, node))
    }
}
