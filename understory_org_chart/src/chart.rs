// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Display;

use hashbrown::HashSet;
use kurbo::{Point, Size};
use tracing::{debug, trace, warn};
use understory_org_layout::{ExpansionState, Scene, compose_scene};
use understory_org_tree::{
    Department, HierarchyCollection, NodeId, OrgNode, ParentIndex, compute_matches,
    normalize_term,
};
use understory_org_view::{ChartViewport, ViewTransform};

use crate::{ChartConfig, ChartError, Command, Effect};

/// The chart engine: data, expansion, search, lazy loading and viewport.
///
/// Every mutation is followed by a full re-layout, so [`OrgChart::scene`]
/// is always a pure function of the current state. Work that needs a data
/// source is handed back to the caller as an [`Effect`]; the caller feeds
/// the result in through [`OrgChart::complete_load`] or
/// [`OrgChart::complete_department_switch`].
#[derive(Debug)]
pub struct OrgChart {
    config: ChartConfig,
    collection: HierarchyCollection,
    active: Option<String>,
    expansion: ExpansionState,
    parents: ParentIndex,
    search_term: String,
    matches: HashSet<NodeId>,
    loading: HashSet<NodeId>,
    viewport: ChartViewport,
    scene: Scene,
}

impl OrgChart {
    /// Creates a chart over `collection` and activates its default department.
    ///
    /// An empty collection is not an error: the chart starts with no active
    /// department and an empty scene.
    pub fn new(collection: HierarchyCollection, config: ChartConfig) -> Self {
        let viewport = ChartViewport::new(config.view_size, config.viewport);
        let expansion = ExpansionState::new(config.layout.default_expand_depth);
        let initial = config
            .default_department
            .as_deref()
            .filter(|name| collection.contains(name))
            .or_else(|| collection.first().map(|d| d.name.as_str()))
            .map(str::to_owned);
        let mut chart = Self {
            config,
            collection,
            active: None,
            expansion,
            parents: ParentIndex::default(),
            search_term: String::new(),
            matches: HashSet::new(),
            loading: HashSet::new(),
            viewport,
            scene: Scene::default(),
        };
        match initial {
            Some(name) => chart.activate(&name),
            None => debug!("chart created without departments"),
        }
        chart
    }

    /// Applies one command.
    ///
    /// Returns the follow-up work, if any. Only programmer errors are
    /// reported as `Err`.
    pub fn dispatch(&mut self, command: Command) -> Result<Option<Effect>, ChartError> {
        match command {
            Command::ToggleNode(id) => return self.toggle_node(&id),
            Command::SetSearchTerm(term) => self.set_search_term(&term),
            Command::SelectDepartment(name) => return Ok(self.select_department(&name)),
            Command::ZoomIn => self.viewport.zoom_in(),
            Command::ZoomOut => self.viewport.zoom_out(),
            Command::ResetZoom => self.viewport.reset_zoom(),
            Command::Wheel { delta_y, cursor } => self.viewport.wheel(delta_y, cursor),
            Command::PointerDown(pointer) => return Ok(self.pointer_down(pointer)),
            Command::PointerMove(pointer) => {
                self.pointer_move(pointer);
            }
            Command::PointerUp => self.pointer_up(),
            Command::Resize(size) => self.resize(size),
            Command::FocusNode(id) => self.focus_node(&id)?,
        }
        Ok(None)
    }

    /// Flips the expansion of `id`.
    ///
    /// Opening a node whose children were never fetched (and whose direct
    /// count is non-zero) does not open it yet: the node is marked as
    /// loading and [`Effect::LoadChildren`] is returned. The node opens when
    /// the load completes. Toggling a node that is loading does nothing.
    pub fn toggle_node(&mut self, id: &NodeId) -> Result<Option<Effect>, ChartError> {
        let (depth, needs_children) = {
            let department = self
                .active_department_ref()
                .ok_or(ChartError::NoActiveDepartment)?;
            let (depth, node) = department
                .find_with_depth(id)
                .ok_or_else(|| ChartError::UnknownNode(id.clone()))?;
            (depth, node.needs_children())
        };
        if self.loading.contains(id) {
            debug!(node = %id, "toggle ignored while children are loading");
            return Ok(None);
        }
        let expanding = !self.expansion.is_expanded(id, depth);
        if expanding && needs_children {
            self.loading.insert(id.clone());
            debug!(node = %id, "loading children");
            return Ok(Some(Effect::LoadChildren(id.clone())));
        }
        self.expansion.set(id.clone(), expanding);
        self.relayout();
        Ok(None)
    }

    /// Settles a load started by [`Effect::LoadChildren`].
    ///
    /// A non-empty result becomes the node's children and is matched
    /// against the current search term. An empty result or an error leaves
    /// the node without children. Either way the node is
    /// marked open, which leaves a failed node expanded-empty; collapsing
    /// and opening it again retries the load.
    ///
    /// The node is looked up in every department, so a load that settles
    /// after a department switch still lands in its tree.
    pub fn complete_load<E: Display>(&mut self, id: &NodeId, result: Result<Vec<OrgNode>, E>) {
        self.loading.remove(id);
        match result {
            Ok(children) if !children.is_empty() => {
                let count = children.len();
                match self.collection.find_node_mut(id) {
                    Some(node) => {
                        node.set_children(children);
                        debug!(node = %id, count, "children loaded");
                    }
                    None => debug!(node = %id, count, "loaded node is no longer present"),
                }
                let roots = active_roots(&self.collection, self.active.as_deref());
                self.parents.rebuild(roots);
                // Flags only: a load never forces other branches open.
                self.matches = compute_matches(roots, &self.search_term);
            }
            Ok(_) => debug!(node = %id, "no children returned"),
            Err(error) => warn!(node = %id, %error, "loading children failed"),
        }
        self.expansion.set(id.clone(), true);
        self.relayout();
    }

    /// Replaces the search term and recomputes matches.
    ///
    /// Every ancestor of every match is forced open. Clearing the term
    /// clears the matches but collapses nothing.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_owned();
        self.refresh_matches();
        debug!(term = %normalize_term(term), matches = self.matches.len(), "search updated");
        self.relayout();
    }

    /// Switches to `name` if it is known, or asks for it with
    /// [`Effect::SwitchDepartment`].
    pub fn select_department(&mut self, name: &str) -> Option<Effect> {
        if self.collection.contains(name) {
            self.activate(name);
            None
        } else {
            debug!(department = name, "department not loaded");
            Some(Effect::SwitchDepartment(name.to_owned()))
        }
    }

    /// Registers fetched departments and switches to `name` if it is now
    /// known. Otherwise the active department stays as it was.
    pub fn complete_department_switch(&mut self, name: &str, departments: Vec<Department>) {
        let registered = departments.len();
        for department in departments {
            self.collection.insert(department);
        }
        if self.collection.contains(name) {
            self.activate(name);
        } else {
            warn!(
                department = name,
                registered, "department switch did not register the requested department"
            );
            self.refresh_active();
        }
    }

    /// Opens every ancestor of `id` and centers the view on its card,
    /// keeping the zoom.
    pub fn focus_node(&mut self, id: &NodeId) -> Result<(), ChartError> {
        let department = self
            .active_department_ref()
            .ok_or(ChartError::NoActiveDepartment)?;
        if department.find(id).is_none() {
            return Err(ChartError::UnknownNode(id.clone()));
        }
        self.expansion.expand_path(&self.parents, id);
        self.relayout();
        if let Some(node) = self.scene.node(id) {
            self.viewport.center_on(node.rect().center());
        }
        Ok(())
    }

    /// Handles a pointer press in view coordinates.
    ///
    /// A press on a card reports [`Effect::NodePressed`] and never starts a
    /// pan. A press on empty canvas starts one.
    pub fn pointer_down(&mut self, pointer: Point) -> Option<Effect> {
        let world = self.viewport.view_to_world_point(pointer);
        if let Some(node) = self.scene.hit_test(world) {
            return Some(Effect::NodePressed(node.id.clone()));
        }
        self.viewport.begin_pan(pointer);
        None
    }

    /// Moves an active pan. Returns `false` when no pan is active.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        self.viewport.drag_pan(pointer)
    }

    /// Ends an active pan.
    pub fn pointer_up(&mut self) {
        self.viewport.end_pan();
    }

    /// Resizes the view and re-fits the scene.
    pub fn resize(&mut self, size: Size) {
        self.viewport.set_view_size(size);
        self.viewport.center_chart();
    }

    /// Current scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current view transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.viewport.transform()
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &ChartViewport {
        &self.viewport
    }

    /// The viewport, for direct manipulation.
    pub fn viewport_mut(&mut self) -> &mut ChartViewport {
        &mut self.viewport
    }

    /// Expansion map.
    #[must_use]
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Returns whether `id` is open. Unknown ids report `false`.
    #[must_use]
    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.active_department_ref()
            .and_then(|department| department.find_with_depth(id))
            .is_some_and(|(depth, _)| self.expansion.is_expanded(id, depth))
    }

    /// Returns whether children of `id` are being fetched.
    #[must_use]
    pub fn is_loading(&self, id: &NodeId) -> bool {
        self.loading.contains(id)
    }

    /// Ids with a load in flight.
    #[must_use]
    pub fn loading(&self) -> &HashSet<NodeId> {
        &self.loading
    }

    /// Ids matching the current search term.
    #[must_use]
    pub fn matches(&self) -> &HashSet<NodeId> {
        &self.matches
    }

    /// Visible matches in scene order, for "next match" navigation.
    pub fn matches_in_scene_order(&self) -> impl Iterator<Item = &NodeId> {
        self.scene
            .nodes()
            .iter()
            .filter(|node| node.is_match)
            .map(|node| &node.id)
    }

    /// Search term as last set, untrimmed.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Name of the active department.
    #[must_use]
    pub fn active_department(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// All known departments.
    #[must_use]
    pub fn collection(&self) -> &HierarchyCollection {
        &self.collection
    }

    /// Parent index of the active department.
    #[must_use]
    pub fn parents(&self) -> &ParentIndex {
        &self.parents
    }

    /// Configuration the chart was created with.
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    fn active_department_ref(&self) -> Option<&Department> {
        self.active
            .as_deref()
            .and_then(|name| self.collection.get(name))
    }

    fn activate(&mut self, name: &str) {
        self.active = Some(name.to_owned());
        let seeded = self.refresh_active();
        self.viewport.center_chart();
        debug!(department = name, seeded, "department activated");
    }

    /// Reseeds defaults, rebuilds the parent index and the matches for the
    /// active roots, then re-layouts. Returns how many defaults were seeded.
    fn refresh_active(&mut self) -> usize {
        let roots = active_roots(&self.collection, self.active.as_deref());
        let seeded = self.expansion.seed_defaults(roots);
        self.parents.rebuild(roots);
        self.refresh_matches();
        self.relayout();
        seeded
    }

    fn refresh_matches(&mut self) {
        let roots = active_roots(&self.collection, self.active.as_deref());
        self.matches = compute_matches(roots, &self.search_term);
        for id in &self.matches {
            self.expansion.expand_path(&self.parents, id);
        }
    }

    fn relayout(&mut self) {
        let roots = active_roots(&self.collection, self.active.as_deref());
        self.scene = compose_scene(roots, &self.config.layout, &self.expansion, &self.matches);
        trace!(
            nodes = self.scene.len(),
            edges = self.scene.edges().len(),
            width = self.scene.bounds().width(),
            height = self.scene.bounds().height(),
            "scene recomputed"
        );
        self.viewport.set_content_bounds(self.scene.bounds());
    }
}

fn active_roots<'a>(collection: &'a HierarchyCollection, active: Option<&str>) -> &'a [OrgNode] {
    active
        .and_then(|name| collection.get(name))
        .map(|department| department.roots.as_slice())
        .unwrap_or_default()
}
