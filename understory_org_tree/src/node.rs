// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! People in the hierarchy: [`NodeId`] and [`OrgNode`].

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::walk::Preorder;

/// Stable key of a person in the hierarchy.
///
/// Ids come from the directory service and are compared as opaque strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct NodeId(String);

impl NodeId {
    /// Creates an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A person and what is known about their reports.
///
/// `children` distinguishes two facts that are easy to conflate:
/// - `None`: the children have not been fetched yet. The person may still
///   have reports, see [`OrgNode::direct_count`].
/// - `Some(vec![])`: the children were fetched and there are none.
///
/// [`OrgNode::has_children`] answers "should the chart offer an expand
/// affordance", which is true whenever either fact says so.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct OrgNode {
    /// Stable key.
    pub id: NodeId,
    /// Display name.
    pub name: String,
    /// Job title.
    pub title: String,
    /// Department label shown on the card.
    pub department: String,
    /// Optional reference to a photo, resolved by the renderer.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub photo_ref: Option<String>,
    /// Materialized children, or `None` when not yet loaded.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub children: Option<Vec<OrgNode>>,
    /// Known number of direct reports, possibly known before `children`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub direct_count: u32,
    /// Total number of people below this node.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reporting_count: u32,
}

impl OrgNode {
    /// Creates a person with no known reports and unloaded children.
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
            children: None,
            direct_count: 0,
            reporting_count: 0,
        }
    }

    /// Sets the materialized children and raises `direct_count` to match.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.set_children(children);
        self
    }

    /// Sets the known direct report count without materializing children.
    #[must_use]
    pub fn with_direct_count(mut self, count: u32) -> Self {
        self.direct_count = count;
        self
    }

    /// Sets the photo reference.
    #[must_use]
    pub fn with_photo_ref(mut self, photo_ref: impl Into<String>) -> Self {
        self.photo_ref = Some(photo_ref.into());
        self
    }

    /// Replaces the materialized children.
    ///
    /// `direct_count` never drops below the number of materialized children.
    pub fn set_children(&mut self, children: Vec<Self>) {
        let len = u32::try_from(children.len()).unwrap_or(u32::MAX);
        self.direct_count = self.direct_count.max(len);
        self.children = Some(children);
    }

    /// Returns `true` once the children have been fetched (even if empty).
    #[must_use]
    pub fn children_loaded(&self) -> bool {
        self.children.is_some()
    }

    /// Returns the materialized children, or an empty slice when unloaded.
    #[must_use]
    pub fn materialized_children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Returns `true` when the node has, or is known to have, direct reports.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.materialized_children().is_empty() || self.direct_count > 0
    }

    /// Returns `true` when expanding this node needs a fetch first.
    ///
    /// That is the case when nothing is materialized but reports are known
    /// to exist.
    #[must_use]
    pub fn needs_children(&self) -> bool {
        self.materialized_children().is_empty() && self.direct_count > 0
    }

    /// Iterates the materialized subtree in preorder, with depths relative
    /// to `self` (which is yielded at depth `0`).
    pub fn iter(&self) -> Preorder<'_> {
        Preorder::new(core::slice::from_ref(self))
    }

    /// Finds a node in the materialized subtree.
    #[must_use]
    pub fn find(&self, id: &NodeId) -> Option<&Self> {
        self.iter().map(|(_, node)| node).find(|node| node.id == *id)
    }

    /// Finds a node in the materialized subtree for mutation.
    pub fn find_mut(&mut self, id: &NodeId) -> Option<&mut Self> {
        let mut stack: Vec<&mut Self> = Vec::new();
        stack.push(self);
        while let Some(node) = stack.pop() {
            if node.id == *id {
                return Some(node);
            }
            if let Some(children) = node.children.as_mut() {
                stack.extend(children.iter_mut());
            }
        }
        None
    }

    /// Recomputes `reporting_count` for every node of the materialized subtree
    /// and returns the value computed for `self`.
    ///
    /// Unloaded nodes keep the count supplied by the data source.
    pub fn recount_reports(&mut self) -> u32 {
        let Some(children) = self.children.as_mut() else {
            return self.reporting_count;
        };
        let mut total = 0_u32;
        for child in children.iter_mut() {
            total = total.saturating_add(1).saturating_add(child.recount_reports());
        }
        self.reporting_count = total;
        total
    }

    /// Returns `true` if `term` occurs in the name, title or department.
    ///
    /// `term` must already be trimmed and lowercased; see
    /// [`normalize_term`](crate::normalize_term).
    #[must_use]
    pub fn matches_term(&self, term: &str) -> bool {
        if term.is_empty() {
            return false;
        }
        let mut haystack =
            String::with_capacity(self.name.len() + self.title.len() + self.department.len() + 2);
        haystack.push_str(&self.name);
        haystack.push(' ');
        haystack.push_str(&self.title);
        haystack.push(' ');
        haystack.push_str(&self.department);
        haystack.to_lowercase().contains(term)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{NodeId, OrgNode};

    fn person(id: &str) -> OrgNode {
        OrgNode::new(id, id, "Engineer", "Platform")
    }

    #[test]
    fn unloaded_node_with_known_reports_has_children() {
        let node = person("a").with_direct_count(3);
        assert!(!node.children_loaded());
        assert!(node.has_children());
        assert!(node.needs_children());
        assert!(node.materialized_children().is_empty());
    }

    #[test]
    fn loaded_empty_children_is_a_leaf() {
        let node = person("a").with_children(vec![]);
        assert!(node.children_loaded());
        assert!(!node.has_children());
        assert!(!node.needs_children());
    }

    #[test]
    fn set_children_raises_direct_count() {
        let node = person("a").with_children(vec![person("b"), person("c")]);
        assert_eq!(node.direct_count, 2);

        let node = person("a")
            .with_direct_count(5)
            .with_children(vec![person("b")]);
        assert_eq!(node.direct_count, 5, "known count must not shrink");
    }

    #[test]
    fn find_mut_reaches_deep_nodes() {
        let mut root = person("a").with_children(vec![
            person("b").with_children(vec![person("d")]),
            person("c"),
        ]);
        let d = root.find_mut(&NodeId::from("d")).unwrap();
        d.title = "Lead".into();
        assert_eq!(root.find(&NodeId::from("d")).unwrap().title, "Lead");
        assert!(root.find(&NodeId::from("zz")).is_none());
    }

    #[test]
    fn recount_reports_sums_materialized_subtrees() {
        let mut leaf = person("e").with_direct_count(4);
        leaf.reporting_count = 9;
        let mut root = person("a").with_children(vec![
            person("b").with_children(vec![person("d"), leaf]),
            person("c").with_children(vec![]),
        ]);
        // b: d + e + e's 9 = 11; a: b + 11 + c = 13
        assert_eq!(root.recount_reports(), 13);
        assert_eq!(root.find(&NodeId::from("b")).unwrap().reporting_count, 11);
        assert_eq!(root.find(&NodeId::from("c")).unwrap().reporting_count, 0);
    }

    #[test]
    fn matches_term_covers_name_title_and_department() {
        let node = OrgNode::new("1", "Jane Smith", "Staff Engineer", "Platform");
        assert!(node.matches_term("smith"));
        assert!(node.matches_term("staff eng"));
        assert!(node.matches_term("platform"));
        assert!(!node.matches_term("finance"));
        assert!(!node.matches_term(""));
    }
}
