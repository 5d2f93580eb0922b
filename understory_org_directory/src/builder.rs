// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breadth-first hierarchy building with a bounded number of requests in
//! flight.

use std::collections::VecDeque;

use futures::future::join_all;
use hashbrown::HashSet;
use tracing::{debug, trace, warn};
use understory_org_tree::{Department, NodeId, OrgNode};

use crate::{DirectoryError, DirectorySource, PersonRecord};

/// Limits for [`HierarchyBuilder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Depth whose nodes are left unloaded. Reports are fetched for every
    /// node shallower than this, so `0` yields a lone, unloaded root.
    pub max_depth: usize,
    /// Number of report requests awaited together.
    pub max_in_flight: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            max_in_flight: 8,
        }
    }
}

#[derive(Debug)]
struct Slot {
    node: OrgNode,
    depth: usize,
    children: Option<Vec<usize>>,
}

/// Builds [`OrgNode`] trees from a [`DirectorySource`].
///
/// Work is a FIFO queue of people whose reports still need fetching.
/// Requests go out in batches of at most
/// [`max_in_flight`](BuilderConfig::max_in_flight), and nothing below
/// [`max_depth`](BuilderConfig::max_depth) is requested. People deeper than
/// that keep unloaded children and load lazily later.
///
/// A person seen twice (a cycle or a dotted line in the directory) is kept
/// at its first position only. Within a department this holds across all
/// roots: a root that already appears under an earlier root is dropped.
#[derive(Debug)]
pub struct HierarchyBuilder<'a, D> {
    source: &'a D,
    config: BuilderConfig,
}

impl<'a, D: DirectorySource> HierarchyBuilder<'a, D> {
    /// Creates a builder over `source`.
    pub fn new(source: &'a D, config: BuilderConfig) -> Self {
        Self { source, config }
    }

    /// Builder limits.
    #[must_use]
    pub fn config(&self) -> BuilderConfig {
        self.config
    }

    /// Builds the tree rooted at `root`.
    pub async fn build_tree(&self, root: &NodeId) -> Result<OrgNode, DirectoryError> {
        self.build_tree_with(root, &mut HashSet::new()).await
    }

    /// Builds a department from its root ids, one tree at a time.
    ///
    /// Every person appears at most once in the department.
    pub async fn build_department(
        &self,
        id: &str,
        name: &str,
        roots: &[NodeId],
    ) -> Result<Department, DirectoryError> {
        let mut seen = HashSet::new();
        let mut trees = Vec::with_capacity(roots.len());
        for root in roots {
            if seen.contains(root) {
                warn!(person = %root, department = name, "skipping root placed under another root");
                continue;
            }
            trees.push(self.build_tree_with(root, &mut seen).await?);
        }
        Ok(Department::new(id, name, trees))
    }

    /// Builds the tree rooted at `root`, skipping everyone in `seen` and
    /// adding everyone placed.
    async fn build_tree_with(
        &self,
        root: &NodeId,
        seen: &mut HashSet<NodeId>,
    ) -> Result<OrgNode, DirectoryError> {
        let record = self
            .source
            .person(root)
            .await
            .map_err(|source| DirectoryError::from_source(root, source))?
            .ok_or_else(|| DirectoryError::UnknownRoot(root.clone()))?;

        seen.insert(record.id.clone());
        let mut slots = vec![slot_for(record, 0)];
        let mut queue = VecDeque::new();
        if self.config.max_depth > 0 {
            queue.push_back(0_usize);
        }

        let batch_size = self.config.max_in_flight.max(1);
        let mut requests = 0_usize;
        while !queue.is_empty() {
            let take = batch_size.min(queue.len());
            let batch: Vec<(usize, NodeId)> = queue
                .drain(..take)
                .map(|index| (index, slots[index].node.id.clone()))
                .collect();
            requests += batch.len();
            trace!(size = batch.len(), queued = queue.len(), "fetching report batch");

            let results =
                join_all(batch.iter().map(|(_, id)| self.source.direct_reports(id))).await;

            for ((parent, parent_id), result) in batch.into_iter().zip(results) {
                let reports =
                    result.map_err(|source| DirectoryError::from_source(&parent_id, source))?;
                let depth = slots[parent].depth + 1;
                let mut children = Vec::with_capacity(reports.len());
                for report in reports {
                    if !seen.insert(report.id.clone()) {
                        warn!(person = %report.id, manager = %parent_id, "skipping repeated person");
                        continue;
                    }
                    let index = slots.len();
                    slots.push(slot_for(report, depth));
                    children.push(index);
                    if depth < self.config.max_depth {
                        queue.push_back(index);
                    }
                }
                slots[parent].children = Some(children);
            }
        }

        let mut tree = assemble(&mut slots, 0);
        tree.recount_reports();
        debug!(root = %root, people = slots.len(), requests, "hierarchy built");
        Ok(tree)
    }
}

fn slot_for(record: PersonRecord, depth: usize) -> Slot {
    Slot {
        node: record.into_node(),
        depth,
        children: None,
    }
}

/// Moves the nodes out of `slots` into a tree rooted at `index`.
///
/// Recursion is bounded by the builder's `max_depth`.
fn assemble(slots: &mut [Slot], index: usize) -> OrgNode {
    let children = slots[index].children.take();
    let mut node = core::mem::take(&mut slots[index].node);
    if let Some(children) = children {
        let children = children
            .into_iter()
            .map(|child| assemble(slots, child))
            .collect();
        node.set_children(children);
    }
    node
}
