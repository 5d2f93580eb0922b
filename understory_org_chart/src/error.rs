// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_org_tree::NodeId;

/// Errors returned by chart commands.
///
/// Only programmer errors and department switch failures surface here.
/// Failed child loads are logged and folded into chart state instead.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// A node command was issued while no department is active.
    #[error("no department is active")]
    NoActiveDepartment,
    /// The node is not part of the active department's loaded tree.
    #[error("node `{0}` is not part of the active department")]
    UnknownNode(NodeId),
    /// The department switcher failed.
    #[error("switching to department `{name}` failed")]
    DepartmentSwitch {
        /// Requested department.
        name: String,
        /// Error reported by the switcher.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}
