// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Departments and the collection that holds them.

use alloc::string::String;
use alloc::vec::Vec;

use crate::walk::Preorder;
use crate::{NodeId, OrgNode};

/// A named group of one or more root hierarchies, laid out side by side.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Department {
    /// Identifier assigned by the data source.
    pub id: String,
    /// Display name; also the key used for tab selection.
    pub name: String,
    /// Root people of this department.
    #[cfg_attr(feature = "serde", serde(default))]
    pub roots: Vec<OrgNode>,
}

impl Department {
    /// Creates a department from its roots.
    pub fn new(id: impl Into<String>, name: impl Into<String>, roots: Vec<OrgNode>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            roots,
        }
    }

    /// Preorder walk over every materialized node of every root.
    pub fn iter(&self) -> Preorder<'_> {
        Preorder::new(&self.roots)
    }

    /// Finds a materialized node by id.
    #[must_use]
    pub fn find(&self, id: &NodeId) -> Option<&OrgNode> {
        self.iter().map(|(_, node)| node).find(|node| node.id == *id)
    }

    /// Finds a materialized node by id, returning its depth as well.
    #[must_use]
    pub fn find_with_depth(&self, id: &NodeId) -> Option<(usize, &OrgNode)> {
        self.iter().find(|(_, node)| node.id == *id)
    }

    /// Finds a materialized node by id for mutation.
    pub fn find_mut(&mut self, id: &NodeId) -> Option<&mut OrgNode> {
        self.roots.iter_mut().find_map(|root| root.find_mut(id))
    }

    /// Number of materialized nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }
}

/// All departments known to a chart, in tab order.
///
/// Entries are added when a department's data first arrives and replaced
/// wholesale when a department is fetched again.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HierarchyCollection {
    #[cfg_attr(feature = "serde", serde(default))]
    departments: Vec<Department>,
}

impl HierarchyCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no department is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    /// Number of registered departments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.departments.len()
    }

    /// Returns `true` if a department with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Looks up a department by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name == name)
    }

    /// Looks up a department by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Department> {
        self.departments.iter_mut().find(|d| d.name == name)
    }

    /// Registers a department, replacing any department with the same name
    /// in place (keeping its tab position). Returns the replaced department.
    pub fn insert(&mut self, department: Department) -> Option<Department> {
        match self.get_mut(&department.name) {
            Some(slot) => Some(core::mem::replace(slot, department)),
            None => {
                self.departments.push(department);
                None
            }
        }
    }

    /// Iterates departments in tab order.
    pub fn iter(&self) -> impl Iterator<Item = &Department> {
        self.departments.iter()
    }

    /// Iterates department names in tab order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.departments.iter().map(|d| d.name.as_str())
    }

    /// Returns the first department in tab order.
    #[must_use]
    pub fn first(&self) -> Option<&Department> {
        self.departments.first()
    }

    /// Finds a node by id in any department, for mutation.
    ///
    /// Departments are searched in tab order; the first hit wins.
    pub fn find_node_mut(&mut self, id: &NodeId) -> Option<&mut OrgNode> {
        self.departments
            .iter_mut()
            .find_map(|department| department.find_mut(id))
    }
}

impl FromIterator<Department> for HierarchyCollection {
    fn from_iter<I: IntoIterator<Item = Department>>(iter: I) -> Self {
        let mut collection = Self::new();
        for department in iter {
            collection.insert(department);
        }
        collection
    }
}
