// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_org_tree --heading-base-level=0

//! Understory Org Tree: the data model behind an organization chart.
//!
//! This crate holds the people, departments and derived indexes that an org
//! chart engine lays out and searches. It does **not** fetch anything; data
//! arrives already shaped, possibly with parts of the tree left unloaded.
//!
//! - [`OrgNode`]: one person. `children: None` means "not fetched yet", which
//!   is independent of whether the person has reports
//!   ([`OrgNode::direct_count`]).
//! - [`Department`]: a named set of roots laid out side by side.
//! - [`HierarchyCollection`]: all known departments, in tab order.
//! - [`ParentIndex`]: id → parent id, used for ancestor walks without
//!   storing back-references on nodes.
//! - [`compute_matches`]: case-insensitive substring search over the
//!   materialized tree.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_org_tree::{Department, HierarchyCollection, NodeId, OrgNode, ParentIndex};
//!
//! let ceo = OrgNode::new("1", "Ada", "CEO", "Exec").with_children(vec![
//!     OrgNode::new("2", "Grace Smith", "CTO", "Engineering").with_direct_count(40),
//! ]);
//! let mut collection = HierarchyCollection::new();
//! collection.insert(Department::new("exec", "Exec", vec![ceo]));
//!
//! let exec = collection.get("Exec").unwrap();
//! let index = ParentIndex::build(&exec.roots);
//! assert_eq!(index.parent(&NodeId::from("2")), Some(&NodeId::from("1")));
//!
//! let hits = understory_org_tree::compute_matches(&exec.roots, "SMITH");
//! assert!(hits.contains(&NodeId::from("2")));
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` with the camelCase field names
//!   used by directory payloads.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod collection;
mod node;
mod parent_index;
mod search;
mod walk;

pub use collection::{Department, HierarchyCollection};
pub use node::{NodeId, OrgNode};
pub use parent_index::{Ancestors, ParentIndex};
pub use search::{compute_matches, normalize_term};
pub use walk::Preorder;
