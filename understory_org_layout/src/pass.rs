// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizing, positioning and composition of one layout pass.

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;
use understory_org_tree::{NodeId, OrgNode};

use crate::config::LayoutConfig;
use crate::expansion::ExpansionState;
use crate::palette::branch_color;
use crate::scene::{Edge, LayoutNode, Orientation, Scene};

/// Size of a subtree as laid out under the current expansion state.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Dimensions {
    /// Total width of the subtree.
    pub width: f64,
    /// Total height of the subtree.
    pub height: f64,
    /// Height of the stacked children including gaps; `0` when closed.
    pub children_height: f64,
}

impl Dimensions {
    /// Width and height as a [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// A positioned subtree: what [`LayoutPass::position`] produces.
#[derive(Clone, Debug, Default)]
pub struct SubtreeLayout {
    /// Nodes in preorder.
    pub nodes: Vec<LayoutNode>,
    /// Edges in preorder.
    pub edges: Vec<Edge>,
    /// Size of the subtree.
    pub size: Size,
}

/// One layout pass over a set of trees.
///
/// The pass memoizes subtree dimensions by node id. The memo is only valid
/// for the expansion state and children it was computed against, so a new
/// pass must be created after any of those change.
///
/// Layout rules:
/// - A closed node, or one without materialized children, is a single card.
/// - Roots stack their children **downward** at the root's `x`, separated by
///   `gap_vertical`.
/// - Deeper nodes place their children in a column to the **right**, offset
///   by `card_width + gap_horizontal` and separated by
///   [`LayoutConfig::gap_for_depth`] of the children's depth.
/// - Children keep the order of [`OrgNode::children`].
#[derive(Debug)]
pub struct LayoutPass<'a> {
    config: &'a LayoutConfig,
    expansion: &'a ExpansionState,
    matches: Option<&'a HashSet<NodeId>>,
    dimensions: HashMap<NodeId, Dimensions>,
}

impl<'a> LayoutPass<'a> {
    /// Starts a pass with an empty memo.
    #[must_use]
    pub fn new(config: &'a LayoutConfig, expansion: &'a ExpansionState) -> Self {
        Self {
            config,
            expansion,
            matches: None,
            dimensions: HashMap::new(),
        }
    }

    /// Flags nodes in `matches` as search hits in the produced layout nodes.
    #[must_use]
    pub fn with_matches(mut self, matches: &'a HashSet<NodeId>) -> Self {
        self.matches = Some(matches);
        self
    }

    /// Memoized dimensions computed so far.
    #[must_use]
    pub fn memo(&self) -> &HashMap<NodeId, Dimensions> {
        &self.dimensions
    }

    fn is_open(&self, node: &OrgNode, depth: usize) -> bool {
        self.expansion.is_expanded(&node.id, depth) && !node.materialized_children().is_empty()
    }

    /// Computes the dimensions of `node` at `depth`, memoizing every
    /// descendant in its open subtree along the way.
    pub fn measure(&mut self, node: &OrgNode, depth: usize) -> Dimensions {
        if let Some(dims) = self.dimensions.get(&node.id) {
            return *dims;
        }
        let card = self.config.card_size();
        let dims = if !self.is_open(node, depth) {
            Dimensions {
                width: card.width,
                height: card.height,
                children_height: 0.0,
            }
        } else if depth == 0 {
            let gap = self.config.gap_vertical;
            let (stack, widest) = self.measure_children(node, depth, gap);
            Dimensions {
                width: card.width.max(widest),
                height: card.height + gap + stack,
                children_height: stack,
            }
        } else {
            let gap = LayoutConfig::gap_for_depth(depth + 1);
            let (stack, widest) = self.measure_children(node, depth, gap);
            Dimensions {
                width: card.width + self.config.gap_horizontal + widest,
                height: card.height.max(stack),
                children_height: stack,
            }
        };
        self.dimensions.insert(node.id.clone(), dims);
        dims
    }

    /// Returns the stacked height (with `gap` between siblings) and the
    /// widest child.
    fn measure_children(&mut self, node: &OrgNode, depth: usize, gap: f64) -> (f64, f64) {
        let children = node.materialized_children();
        let mut stack = 0.0;
        let mut widest = 0.0_f64;
        for (i, child) in children.iter().enumerate() {
            let dims = self.measure(child, depth + 1);
            if i > 0 {
                stack += gap;
            }
            stack += dims.height;
            widest = widest.max(dims.width);
        }
        (stack, widest)
    }

    /// Positions the subtree of `node` with its card at `origin`.
    pub fn position(
        &mut self,
        node: &OrgNode,
        depth: usize,
        origin: Point,
        color: Color,
    ) -> SubtreeLayout {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        let size = self.position_into(node, depth, origin, color, &mut nodes, &mut edges);
        SubtreeLayout { nodes, edges, size }
    }

    fn position_into(
        &mut self,
        node: &OrgNode,
        depth: usize,
        origin: Point,
        color: Color,
        nodes: &mut Vec<LayoutNode>,
        edges: &mut Vec<Edge>,
    ) -> Size {
        let dims = self.measure(node, depth);
        let expanded = self.expansion.is_expanded(&node.id, depth);
        let is_match = self.matches.is_some_and(|m| m.contains(&node.id));
        let card = self.config.card_size();
        nodes.push(LayoutNode::project(
            node, depth, origin, card, color, expanded, is_match,
        ));

        if !self.is_open(node, depth) {
            return card;
        }

        let (mut cursor, gap, direction) = if depth == 0 {
            (
                Point::new(origin.x, origin.y + card.height + self.config.gap_vertical),
                self.config.gap_vertical,
                Orientation::Down,
            )
        } else {
            (
                Point::new(origin.x + card.width + self.config.gap_horizontal, origin.y),
                LayoutConfig::gap_for_depth(depth + 1),
                Orientation::Right,
            )
        };
        for child in node.materialized_children() {
            edges.push(Edge {
                parent: node.id.clone(),
                child: child.id.clone(),
                direction,
            });
            let size = self.position_into(child, depth + 1, cursor, color, nodes, edges);
            cursor.y += size.height + gap;
        }
        dims.size()
    }

    /// Lays out `roots` side by side and normalizes the result.
    ///
    /// Each root gets a branch color from its id and position. Coordinates
    /// are translated so the scene starts at `margin` on both axes.
    pub fn compose(mut self, roots: &[OrgNode]) -> Scene {
        if roots.is_empty() {
            return Scene::default();
        }
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        let mut x = 0.0;
        for (i, root) in roots.iter().enumerate() {
            let color = branch_color(&root.id, i);
            let size =
                self.position_into(root, 0, Point::new(x, 0.0), color, &mut nodes, &mut edges);
            x += size.width + self.config.root_spacing;
        }

        let mut extent = Rect::new(f64::MAX, f64::MAX, f64::MIN, f64::MIN);
        for node in &nodes {
            let rect = node.rect();
            extent.x0 = extent.x0.min(rect.x0);
            extent.y0 = extent.y0.min(rect.y0);
            extent.x1 = extent.x1.max(rect.x1);
            extent.y1 = extent.y1.max(rect.y1);
        }
        let margin = self.config.margin;
        let offset = Vec2::new(margin - extent.x0, margin - extent.y0);
        for node in &mut nodes {
            node.origin += offset;
        }
        let bounds = Rect::new(
            0.0,
            0.0,
            extent.width() + 2.0 * margin,
            extent.height() + 2.0 * margin,
        );
        Scene::new(nodes, edges, bounds)
    }
}

/// Runs a fresh [`LayoutPass`] over `roots`.
#[must_use]
pub fn compose_scene(
    roots: &[OrgNode],
    config: &LayoutConfig,
    expansion: &ExpansionState,
    matches: &HashSet<NodeId>,
) -> Scene {
    LayoutPass::new(config, expansion)
        .with_matches(matches)
        .compose(roots)
}
