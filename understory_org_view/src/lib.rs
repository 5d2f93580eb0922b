// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_org_view --heading-base-level=0

//! Understory Org View: the zoom/pan viewport of an org chart.
//!
//! This crate provides a small, headless model of the view onto a chart
//! scene. It focuses on:
//! - A uniform zoom plus pan ([`ViewTransform`]) that a renderer applies to
//!   every node and edge.
//! - Zooming about a view-space point so the scene point under the cursor
//!   stays fixed ([`ChartViewport::zoom_at_point`]).
//! - Stepped zoom for buttons and wheel notches, clamped to a range.
//! - Fitting the scene bounds into the view and centering them
//!   ([`ChartViewport::center_chart`]).
//! - Pan dragging that is relative to where the drag started ([`PanDrag`]).
//!
//! It does **not** decide whether a pointer press lands on a card; callers
//! hit-test their scene first and only start a pan on empty canvas.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_org_view::{ChartViewport, ViewportConfig};
//!
//! let mut view = ChartViewport::new(Size::new(800.0, 600.0), ViewportConfig::default());
//! view.set_content_bounds(Rect::new(0.0, 0.0, 1200.0, 900.0));
//! view.center_chart();
//!
//! // Wheel notch towards the user at the cursor.
//! let cursor = Point::new(200.0, 150.0);
//! let under_cursor = view.view_to_world_point(cursor);
//! view.wheel(1.0, cursor);
//! let still_under = view.view_to_world_point(cursor);
//! assert!((under_cursor.x - still_under.x).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod pan;
mod viewport;

pub use pan::PanDrag;
pub use viewport::{ChartViewport, ViewTransform, ViewportConfig};
