// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Async data sources the chart calls out to.
//!
//! Neither trait requires `Send`: the chart runs on one execution context
//! and only suspends while one of these futures is pending.

use std::convert::Infallible;
use std::rc::Rc;

use understory_org_tree::{Department, NodeId, OrgNode};

/// Fetches the direct children of a node on first expansion.
pub trait ChildLoader {
    /// Error reported when a fetch fails. The chart logs it and carries on.
    type Error: std::error::Error + 'static;

    /// Returns the direct children of `id`.
    ///
    /// Returned nodes should leave their own `children` unset so that they
    /// load lazily in turn. "Not found" should resolve to an empty list
    /// rather than an error.
    fn load_children(
        &self,
        id: &NodeId,
    ) -> impl Future<Output = Result<Vec<OrgNode>, Self::Error>>;
}

/// Fetches a department that the chart does not know yet.
pub trait DepartmentSwitcher {
    /// Error reported when a fetch fails. The chart propagates it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the departments to register for a request of `name`.
    ///
    /// The list normally holds exactly the requested department; returning
    /// other departments registers them too, and returning nothing leaves
    /// the active department unchanged.
    fn switch_department(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Department>, Self::Error>>;
}

/// Placeholder for "no department switcher configured".
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDepartmentSwitcher;

impl DepartmentSwitcher for NoDepartmentSwitcher {
    type Error = Infallible;

    async fn switch_department(&self, _name: &str) -> Result<Vec<Department>, Self::Error> {
        Ok(Vec::new())
    }
}

impl<T: ChildLoader> ChildLoader for Rc<T> {
    type Error = T::Error;

    fn load_children(
        &self,
        id: &NodeId,
    ) -> impl Future<Output = Result<Vec<OrgNode>, Self::Error>> {
        (**self).load_children(id)
    }
}

impl<T: DepartmentSwitcher> DepartmentSwitcher for Rc<T> {
    type Error = T::Error;

    fn switch_department(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Department>, Self::Error>> {
        (**self).switch_department(name)
    }
}
