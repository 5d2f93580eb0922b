// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The positioned, render-ready output of a layout pass.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};
use peniko::Color;
use understory_org_tree::{NodeId, OrgNode};

/// Direction in which a node's children branch out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children are stacked below the card (roots).
    Down,
    /// Children are stacked in a column to the right of the card.
    Right,
}

impl Orientation {
    /// Orientation used for nodes at `depth`.
    #[must_use]
    pub fn for_depth(depth: usize) -> Self {
        if depth == 0 { Self::Down } else { Self::Right }
    }
}

/// A visible person, positioned for the current frame.
///
/// Rebuilt on every layout pass and never persisted.
#[derive(Clone, Debug)]
pub struct LayoutNode {
    /// Id of the projected [`OrgNode`].
    pub id: NodeId,
    /// Display name.
    pub name: String,
    /// Job title.
    pub title: String,
    /// Department label.
    pub department: String,
    /// Optional photo reference.
    pub photo_ref: Option<String>,
    /// Depth below the department root (roots are `0`).
    pub depth: usize,
    /// Top-left corner of the card in scene coordinates.
    pub origin: Point,
    /// Card size.
    pub size: Size,
    /// Color shared by every node under the same root.
    pub branch_color: Color,
    /// Whether an expand affordance should be drawn.
    ///
    /// True when children are materialized or a direct report count is
    /// known, so unloaded nodes still advertise that they can be opened.
    pub has_children: bool,
    /// Whether the node is currently open.
    pub is_expanded: bool,
    /// Whether the node matches the active search.
    pub is_match: bool,
    /// Direction of this node's child edges.
    pub orientation: Orientation,
    /// Known direct report count.
    pub direct_count: u32,
    /// Known total report count.
    pub reporting_count: u32,
}

impl LayoutNode {
    pub(crate) fn project(
        node: &OrgNode,
        depth: usize,
        origin: Point,
        size: Size,
        branch_color: Color,
        is_expanded: bool,
        is_match: bool,
    ) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            title: node.title.clone(),
            department: node.department.clone(),
            photo_ref: node.photo_ref.clone(),
            depth,
            origin,
            size,
            branch_color,
            has_children: node.has_children(),
            is_expanded,
            is_match,
            orientation: Orientation::for_depth(depth),
            direct_count: node.direct_count,
            reporting_count: node.reporting_count,
        }
    }

    /// Card rectangle in scene coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// A parent → child connector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Parent node id.
    pub parent: NodeId,
    /// Child node id.
    pub child: NodeId,
    /// Whether the edge drops down from a root or runs right.
    pub direction: Orientation,
}

/// All visible nodes and edges of the active department.
///
/// Scene coordinates start at a fixed positive margin; [`Scene::bounds`]
/// spans `(0, 0)` to the far margin. An empty scene has zero bounds and
/// means "nothing to draw".
#[derive(Clone, Debug, Default)]
pub struct Scene {
    nodes: Vec<LayoutNode>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
    bounds: Rect,
}

impl Scene {
    pub(crate) fn new(nodes: Vec<LayoutNode>, edges: Vec<Edge>, bounds: Rect) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(slot, node)| (node.id.clone(), slot))
            .collect();
        Self {
            nodes,
            index,
            edges,
            bounds,
        }
    }

    /// Visible nodes in layout order (preorder, roots left to right).
    #[must_use]
    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    /// Edges in layout order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up a visible node.
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&LayoutNode> {
        self.index.get(id).map(|&slot| &self.nodes[slot])
    }

    /// Returns `true` if `id` is visible.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Scene bounds including margins.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Number of visible nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the card under `point` (scene coordinates), if any.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<&LayoutNode> {
        self.nodes.iter().find(|node| node.rect().contains(point))
    }

    /// Iterates the cards that intersect `rect` (scene coordinates).
    pub fn nodes_in_rect(&self, rect: Rect) -> impl Iterator<Item = &LayoutNode> {
        self.nodes
            .iter()
            .filter(move |node| node.rect().intersect(rect).area() > 0.0)
    }
}
