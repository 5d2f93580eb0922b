// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_org_layout --heading-base-level=0

//! Understory Org Layout: a layered, expansion-aware org chart layout.
//!
//! This crate turns the visible part of an [`understory_org_tree`] hierarchy
//! into a [`Scene`] of positioned cards and edges. It is a practical greedy
//! layout, not a minimum-area tree drawing:
//!
//! - Roots sit side by side, separated by [`LayoutConfig::root_spacing`].
//! - A root's children are stacked **below** it.
//! - Every deeper level stacks its children in a column to the **right** of
//!   the parent, with gaps that tighten with depth
//!   ([`LayoutConfig::gap_for_depth`]).
//!
//! Which nodes are visible depends on [`ExpansionState`], a tri-state
//! (unset / expanded / collapsed) map whose unset entries fall back to a
//! depth default.
//!
//! A [`LayoutPass`] runs bottom-up sizing ([`LayoutPass::measure`]), then
//! top-down positioning ([`LayoutPass::position`]), and finally
//! [`LayoutPass::compose`] places all roots and shifts the result so it
//! starts at a fixed margin. Scenes are rebuilt from scratch on every state
//! change; nothing here is incremental.
//!
//! ## Minimal example
//!
//! ```rust
//! use hashbrown::HashSet;
//! use understory_org_layout::{ExpansionState, LayoutConfig, compose_scene};
//! use understory_org_tree::{NodeId, OrgNode};
//!
//! let root = OrgNode::new("a", "Ada", "CEO", "Exec").with_children(vec![
//!     OrgNode::new("b", "Bob", "VP", "Sales").with_direct_count(2),
//!     OrgNode::new("c", "Cy", "VP", "Ops"),
//! ]);
//! let config = LayoutConfig::default();
//! let expansion = ExpansionState::new(config.default_expand_depth);
//!
//! let scene = compose_scene(&[root], &config, &expansion, &HashSet::new());
//! assert_eq!(scene.len(), 3);
//! // `b` has unloaded reports: it advertises children but none are shown.
//! assert!(scene.node(&NodeId::from("b")).unwrap().has_children);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod expansion;
mod palette;
mod pass;
mod scene;

pub use config::LayoutConfig;
pub use expansion::{Expansion, ExpansionState};
pub use palette::{PALETTE_LEN, branch_color, id_hash, palette_index};
pub use pass::{Dimensions, LayoutPass, SubtreeLayout, compose_scene};
pub use scene::{Edge, LayoutNode, Orientation, Scene};
