// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::{HashMap, HashSet};
use understory_org_tree::{NodeId, OrgNode};

/// One person as a directory reports them.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PersonRecord {
    /// Directory key.
    pub id: NodeId,
    /// Display name.
    pub name: String,
    /// Job title.
    pub title: String,
    /// Department label.
    pub department: String,
    /// Optional photo reference.
    pub photo_ref: Option<String>,
    /// Number of direct reports the directory knows about.
    pub direct_count: u32,
}

impl PersonRecord {
    /// Creates a record with no reports.
    pub fn new(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        title: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: title.into(),
            department: department.into(),
            photo_ref: None,
            direct_count: 0,
        }
    }

    /// Converts into a node whose children are not loaded yet.
    #[must_use]
    pub fn into_node(self) -> OrgNode {
        let mut node = OrgNode::new(self.id, self.name, self.title, self.department)
            .with_direct_count(self.direct_count);
        node.photo_ref = self.photo_ref;
        node
    }
}

/// An async people directory.
pub trait DirectorySource {
    /// Error reported by a failed request.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Looks up one person. Unknown ids resolve to `None`.
    fn person(
        &self,
        id: &NodeId,
    ) -> impl Future<Output = Result<Option<PersonRecord>, Self::Error>>;

    /// Lists the direct reports of `id`. Unknown ids resolve to an empty list.
    fn direct_reports(
        &self,
        id: &NodeId,
    ) -> impl Future<Output = Result<Vec<PersonRecord>, Self::Error>>;
}

/// Error returned by [`MemoryDirectory`] for ids marked unavailable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("directory entry `{0}` is unavailable")]
pub struct Unavailable(pub NodeId);

/// A directory held in memory, keyed by manager.
///
/// Report order is insertion order. [`PersonRecord::direct_count`] is
/// derived from the stored reports, so callers never set it by hand.
#[derive(Clone, Debug, Default)]
pub struct MemoryDirectory {
    people: HashMap<NodeId, PersonRecord>,
    reports: HashMap<NodeId, Vec<NodeId>>,
    unavailable: HashSet<NodeId>,
}

impl MemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `person`, reporting to `manager` when given.
    ///
    /// Re-inserting an id replaces its record but keeps its reports.
    pub fn insert(&mut self, person: PersonRecord, manager: Option<&NodeId>) {
        if let Some(manager) = manager {
            let reports = self.reports.entry(manager.clone()).or_default();
            if !reports.contains(&person.id) {
                reports.push(person.id.clone());
            }
        }
        self.people.insert(person.id.clone(), person);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_person(mut self, person: PersonRecord, manager: Option<&str>) -> Self {
        let manager = manager.map(NodeId::from);
        self.insert(person, manager.as_ref());
        self
    }

    /// Makes every request about `id` fail, to simulate an outage.
    pub fn mark_unavailable(&mut self, id: impl Into<NodeId>) {
        self.unavailable.insert(id.into());
    }

    /// Number of people.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns `true` if the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    fn record(&self, id: &NodeId) -> Option<PersonRecord> {
        let mut record = self.people.get(id)?.clone();
        let count = self.reports.get(id).map_or(0, Vec::len);
        record.direct_count = u32::try_from(count).unwrap_or(u32::MAX);
        Some(record)
    }

    fn check(&self, id: &NodeId) -> Result<(), Unavailable> {
        if self.unavailable.contains(id) {
            Err(Unavailable(id.clone()))
        } else {
            Ok(())
        }
    }
}

impl DirectorySource for MemoryDirectory {
    type Error = Unavailable;

    async fn person(&self, id: &NodeId) -> Result<Option<PersonRecord>, Unavailable> {
        self.check(id)?;
        Ok(self.record(id))
    }

    async fn direct_reports(&self, id: &NodeId) -> Result<Vec<PersonRecord>, Unavailable> {
        self.check(id)?;
        Ok(self
            .reports
            .get(id)
            .into_iter()
            .flatten()
            .filter_map(|report| self.record(report))
            .collect())
    }
}
