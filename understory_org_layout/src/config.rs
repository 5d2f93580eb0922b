// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Geometry constants for a chart layout.
///
/// All values are in world units. The defaults describe a fixed-size card
/// with roomy gaps; hosts rendering smaller cards should scale every field
/// together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Width of every node card.
    pub card_width: f64,
    /// Height of every node card.
    pub card_height: f64,
    /// Vertical gap below a root card and between its stacked children.
    pub gap_vertical: f64,
    /// Horizontal gap between a card and the column of its children.
    pub gap_horizontal: f64,
    /// Horizontal gap between adjacent root subtrees.
    pub root_spacing: f64,
    /// Margin added around the composed scene.
    pub margin: f64,
    /// Nodes shallower than this depth default to expanded.
    ///
    /// The default of `1` opens roots and shows their direct children.
    pub default_expand_depth: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 240.0,
            card_height: 88.0,
            gap_vertical: 40.0,
            gap_horizontal: 60.0,
            root_spacing: 120.0,
            margin: 40.0,
            default_expand_depth: 1,
        }
    }
}

impl LayoutConfig {
    /// Size of a single card.
    #[must_use]
    pub fn card_size(&self) -> Size {
        Size::new(self.card_width, self.card_height)
    }

    /// Vertical gap between siblings whose depth is `depth`, for the
    /// rightward-branching levels.
    ///
    /// Gaps tighten as the tree gets deeper and bottom out at `40`.
    #[must_use]
    pub fn gap_for_depth(depth: usize) -> f64 {
        match depth {
            1 => 60.0,
            2 => 50.0,
            3 => 45.0,
            _ => (60.0 - 5.0 * depth as f64).max(40.0),
        }
    }
}
