// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use understory_org_tree::NodeId;

/// A user interaction, expressed as data.
///
/// Pointer positions are in view (device) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Open or close a node, loading its children first if needed.
    ToggleNode(NodeId),
    /// Replace the search term.
    SetSearchTerm(String),
    /// Switch the active department tab.
    SelectDepartment(String),
    /// Zoom in one step about the view center.
    ZoomIn,
    /// Zoom out one step about the view center.
    ZoomOut,
    /// Zoom back to `1.0` and re-center.
    ResetZoom,
    /// One wheel notch at `cursor`; negative `delta_y` zooms in.
    Wheel {
        /// Wheel delta; only its sign is used.
        delta_y: f64,
        /// Cursor position.
        cursor: Point,
    },
    /// Pointer pressed.
    PointerDown(Point),
    /// Pointer moved.
    PointerMove(Point),
    /// Pointer released.
    PointerUp,
    /// The view was resized.
    Resize(Size),
    /// Reveal a node and center the view on it.
    FocusNode(NodeId),
}

/// Work the host has to do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the children of this node, then call
    /// [`OrgChart::complete_load`](crate::OrgChart::complete_load).
    LoadChildren(NodeId),
    /// Fetch this department, then call
    /// [`OrgChart::complete_department_switch`](crate::OrgChart::complete_department_switch).
    SwitchDepartment(String),
    /// A pointer press landed on this node's card; no pan was started.
    NodePressed(NodeId),
}
