// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use hashbrown::HashSet;

use crate::walk::Preorder;
use crate::{NodeId, OrgNode};

/// Trims and lowercases a search term.
#[must_use]
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Returns the ids of every materialized node whose name, title or
/// department contains `term`, case-insensitively.
///
/// Collapsed-but-loaded nodes are included. Children that were never
/// fetched cannot match. An empty (or whitespace-only) term matches nothing.
#[must_use]
pub fn compute_matches(roots: &[OrgNode], term: &str) -> HashSet<NodeId> {
    let term = normalize_term(term);
    if term.is_empty() {
        return HashSet::new();
    }
    Preorder::new(roots)
        .filter(|(_, node)| node.matches_term(&term))
        .map(|(_, node)| node.id.clone())
        .collect()
}
