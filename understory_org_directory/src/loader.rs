// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::debug;
use understory_org_chart::{ChildLoader, DepartmentSwitcher};
use understory_org_tree::{Department, HierarchyCollection, NodeId, OrgNode};

use crate::{BuilderConfig, DirectoryError, DirectorySource, HierarchyBuilder};

/// The root people of a department the directory can build on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepartmentRoots {
    /// Department id.
    pub id: String,
    /// Tab name.
    pub name: String,
    /// Root people, left to right.
    pub roots: Vec<NodeId>,
}

impl DepartmentRoots {
    /// Creates a department description.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        roots: impl IntoIterator<Item = impl Into<NodeId>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }
}

/// Serves an org chart from a [`DirectorySource`].
///
/// As a [`ChildLoader`] it fetches one level of reports, leaving each
/// report's own children unloaded. As a [`DepartmentSwitcher`] it builds
/// any registered department with a [`HierarchyBuilder`].
#[derive(Debug)]
pub struct DirectoryLoader<D> {
    source: D,
    config: BuilderConfig,
    departments: Vec<DepartmentRoots>,
}

impl<D: DirectorySource> DirectoryLoader<D> {
    /// Creates a loader with no departments.
    pub fn new(source: D, config: BuilderConfig) -> Self {
        Self {
            source,
            config,
            departments: Vec::new(),
        }
    }

    /// Registers a department that can be built on request.
    #[must_use]
    pub fn with_department(mut self, department: DepartmentRoots) -> Self {
        self.departments.push(department);
        self
    }

    /// Registered departments, in tab order.
    #[must_use]
    pub fn departments(&self) -> &[DepartmentRoots] {
        &self.departments
    }

    /// The underlying directory.
    #[must_use]
    pub fn source(&self) -> &D {
        &self.source
    }

    /// Builds the named registered department, or `None` if unregistered.
    pub async fn build_department(
        &self,
        name: &str,
    ) -> Option<Result<Department, DirectoryError>> {
        let roots = self.departments.iter().find(|d| d.name == name)?;
        let builder = HierarchyBuilder::new(&self.source, self.config);
        Some(
            builder
                .build_department(&roots.id, &roots.name, &roots.roots)
                .await,
        )
    }

    /// Builds every registered department in `names`, in tab order.
    ///
    /// Unregistered names are skipped. Departments not listed are left for
    /// [`DepartmentSwitcher::switch_department`] to build later.
    pub async fn build_collection(
        &self,
        names: &[&str],
    ) -> Result<HierarchyCollection, DirectoryError> {
        let builder = HierarchyBuilder::new(&self.source, self.config);
        let mut collection = HierarchyCollection::new();
        for roots in self
            .departments
            .iter()
            .filter(|d| names.contains(&d.name.as_str()))
        {
            let department = builder
                .build_department(&roots.id, &roots.name, &roots.roots)
                .await?;
            collection.insert(department);
        }
        Ok(collection)
    }
}

impl<D: DirectorySource> ChildLoader for DirectoryLoader<D> {
    type Error = DirectoryError;

    async fn load_children(&self, id: &NodeId) -> Result<Vec<OrgNode>, DirectoryError> {
        let reports = self
            .source
            .direct_reports(id)
            .await
            .map_err(|source| DirectoryError::from_source(id, source))?;
        debug!(node = %id, count = reports.len(), "fetched direct reports");
        Ok(reports.into_iter().map(|r| r.into_node()).collect())
    }
}

impl<D: DirectorySource> DepartmentSwitcher for DirectoryLoader<D> {
    type Error = DirectoryError;

    async fn switch_department(&self, name: &str) -> Result<Vec<Department>, DirectoryError> {
        match self.build_department(name).await {
            Some(department) => Ok(vec![department?]),
            None => {
                debug!(department = name, "department is not registered");
                Ok(Vec::new())
            }
        }
    }
}
