// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_org_tree::NodeId;

/// Errors raised while reading a directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// A directory request failed.
    #[error("directory request for `{id}` failed")]
    Source {
        /// Person the request was about.
        id: NodeId,
        /// Error reported by the directory.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
    /// A root id is not in the directory.
    #[error("root `{0}` is not in the directory")]
    UnknownRoot(NodeId),
}

impl DirectoryError {
    pub(crate) fn from_source<E>(id: &NodeId, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Source {
            id: id.clone(),
            source: Box::new(source),
        }
    }
}
