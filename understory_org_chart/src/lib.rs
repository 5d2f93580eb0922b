// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_org_chart --heading-base-level=0

//! Understory Org Chart: an interactive, lazily loaded org chart engine.
//!
//! This crate ties together the data model ([`understory_org_tree`]), the
//! layout ([`understory_org_layout`]) and the viewport
//! ([`understory_org_view`]) into one engine a renderer can drive. It owns:
//! - The departments and which one is active.
//! - Per-node expansion, seeded with depth defaults that never overwrite a
//!   user toggle.
//! - Search matches, with every ancestor of a match forced open.
//! - The set of nodes whose children are being fetched.
//! - Zoom and pan.
//!
//! It does **not** paint anything. Renderers read [`OrgChart::scene`] and
//! [`OrgChart::transform`] after each command.
//!
//! ## Commands and effects
//!
//! [`OrgChart`] is synchronous. Every interaction is a [`Command`]; commands
//! that need data return an [`Effect`] instead of fetching it. The host
//! performs the effect and feeds the result back with
//! [`OrgChart::complete_load`] or [`OrgChart::complete_department_switch`].
//! This keeps the engine testable without any runtime.
//!
//! [`ChartController`] does the feeding for you: it pairs a chart with a
//! [`ChildLoader`] and an optional [`DepartmentSwitcher`] and awaits them.
//! It never holds the chart across an await, so the chart stays interactive
//! while loads are pending, and concurrent toggles of the same node issue a
//! single load.
//!
//! ## Failure handling
//!
//! A failed child load is logged with `tracing` and leaves the node open
//! with no children; collapsing and reopening it retries. A failed
//! department switch is returned as [`ChartError::DepartmentSwitch`].
//! Unknown departments with no switcher log one warning and change nothing.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_org_chart::{ChartConfig, Command, Effect, OrgChart};
//! use understory_org_tree::{Department, HierarchyCollection, NodeId, OrgNode};
//!
//! let root = OrgNode::new("a", "Ada", "CEO", "Exec").with_children(vec![
//!     OrgNode::new("b", "Bob", "VP", "Sales").with_direct_count(2),
//! ]);
//! let collection: HierarchyCollection =
//!     [Department::new("exec", "Exec", vec![root])].into_iter().collect();
//! let mut chart = OrgChart::new(collection, ChartConfig::default());
//! assert_eq!(chart.scene().len(), 2);
//!
//! // `b` has unloaded reports, so opening it asks for data first.
//! let b = NodeId::from("b");
//! let effect = chart.dispatch(Command::ToggleNode(b.clone())).unwrap();
//! assert_eq!(effect, Some(Effect::LoadChildren(b.clone())));
//!
//! let children = vec![
//!     OrgNode::new("d", "Dee", "Rep", "Sales"),
//!     OrgNode::new("e", "Eve", "Rep", "Sales"),
//! ];
//! chart.complete_load::<core::convert::Infallible>(&b, Ok(children));
//! assert!(chart.is_expanded(&b));
//! assert_eq!(chart.scene().len(), 4);
//! ```

mod chart;
mod collaborators;
mod command;
mod config;
mod controller;
mod error;

pub use chart::OrgChart;
pub use collaborators::{ChildLoader, DepartmentSwitcher, NoDepartmentSwitcher};
pub use command::{Command, Effect};
pub use config::ChartConfig;
pub use controller::ChartController;
pub use error::ChartError;
