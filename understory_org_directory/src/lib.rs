// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_org_directory --heading-base-level=0

//! Understory Org Directory: feeding org charts from a people directory.
//!
//! A directory answers two questions: "who is this person" and "who reports
//! to them" ([`DirectorySource`]). This crate turns those answers into
//! [`understory_org_tree`] hierarchies:
//!
//! - [`HierarchyBuilder`] walks a directory breadth first from a root, down
//!   to a fixed depth, with a bounded number of requests awaited at once.
//!   Deeper people keep unloaded children and load lazily.
//! - [`DirectoryLoader`] implements the chart's
//!   [`ChildLoader`](understory_org_chart::ChildLoader) and
//!   [`DepartmentSwitcher`](understory_org_chart::DepartmentSwitcher) on top
//!   of any directory.
//! - [`MemoryDirectory`] is a directory held in memory, for tests and demos.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_org_directory::{
//!     BuilderConfig, HierarchyBuilder, MemoryDirectory, PersonRecord,
//! };
//! use understory_org_tree::NodeId;
//!
//! let directory = MemoryDirectory::new()
//!     .with_person(PersonRecord::new("a", "Ada", "CEO", "Exec"), None)
//!     .with_person(PersonRecord::new("b", "Bob", "VP", "Sales"), Some("a"))
//!     .with_person(PersonRecord::new("c", "Cy", "Rep", "Sales"), Some("b"));
//!
//! let config = BuilderConfig { max_depth: 1, ..BuilderConfig::default() };
//! let builder = HierarchyBuilder::new(&directory, config);
//! let tree = futures::executor::block_on(builder.build_tree(&NodeId::from("a"))).unwrap();
//!
//! // `b` sits at the depth limit: its report is known but not fetched.
//! let b = &tree.materialized_children()[0];
//! assert!(b.needs_children());
//! assert_eq!(b.direct_count, 1);
//! ```

mod builder;
mod error;
mod loader;
mod source;

pub use builder::{BuilderConfig, HierarchyBuilder};
pub use error::DirectoryError;
pub use loader::{DepartmentRoots, DirectoryLoader};
pub use source::{DirectorySource, MemoryDirectory, PersonRecord, Unavailable};
