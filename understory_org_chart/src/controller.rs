// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::{Ref, RefCell};

use tracing::warn;
use understory_org_tree::NodeId;

use crate::{
    ChartError, ChildLoader, Command, DepartmentSwitcher, Effect, NoDepartmentSwitcher, OrgChart,
};

/// Runs an [`OrgChart`] against its data sources.
///
/// All methods take `&self`. The chart is only borrowed between awaits, so
/// while a load is pending other commands (pan, zoom, toggles of other
/// nodes) go through immediately, and a second toggle of the loading node
/// is a no-op.
#[derive(Debug)]
pub struct ChartController<L, S = NoDepartmentSwitcher> {
    chart: RefCell<OrgChart>,
    loader: L,
    switcher: Option<S>,
}

impl<L: ChildLoader> ChartController<L> {
    /// Creates a controller with no department switcher.
    pub fn new(chart: OrgChart, loader: L) -> Self {
        Self {
            chart: RefCell::new(chart),
            loader,
            switcher: None,
        }
    }
}

impl<L: ChildLoader, S: DepartmentSwitcher> ChartController<L, S> {
    /// Installs the source used for departments the chart does not know.
    pub fn with_department_switcher<T: DepartmentSwitcher>(
        self,
        switcher: T,
    ) -> ChartController<L, T> {
        ChartController {
            chart: self.chart,
            loader: self.loader,
            switcher: Some(switcher),
        }
    }

    /// Borrows the chart.
    ///
    /// # Panics
    ///
    /// Panics if called from inside [`update`](Self::update).
    ///
    /// The returned guard must not be held across an `.await` on this
    /// controller: a load or department switch settling while it is alive
    /// borrows the chart mutably and panics.
    pub fn chart(&self) -> Ref<'_, OrgChart> {
        self.chart.borrow()
    }

    /// Runs `f` with mutable access to the chart.
    pub fn update<R>(&self, f: impl FnOnce(&mut OrgChart) -> R) -> R {
        f(&mut self.chart.borrow_mut())
    }

    /// Applies `command` and awaits any data it needs.
    ///
    /// Returns the pressed node when a pointer press landed on a card.
    pub async fn dispatch(&self, command: Command) -> Result<Option<NodeId>, ChartError> {
        let effect = self.chart.borrow_mut().dispatch(command)?;
        match effect {
            None => Ok(None),
            Some(Effect::NodePressed(id)) => Ok(Some(id)),
            Some(effect) => {
                self.run(effect).await?;
                Ok(None)
            }
        }
    }

    /// Toggles `id`, loading its children first if needed.
    pub async fn toggle_node(&self, id: &NodeId) -> Result<(), ChartError> {
        self.dispatch(Command::ToggleNode(id.clone())).await?;
        Ok(())
    }

    /// Switches to `name`, fetching it through the department switcher if
    /// it is not known yet.
    ///
    /// Without a switcher an unknown name logs a warning and changes
    /// nothing. Switcher failures are returned.
    pub async fn set_active_department(&self, name: &str) -> Result<(), ChartError> {
        self.dispatch(Command::SelectDepartment(name.to_owned()))
            .await?;
        Ok(())
    }

    /// Replaces the search term.
    pub fn set_search_term(&self, term: &str) {
        self.chart.borrow_mut().set_search_term(term);
    }

    /// Consumes the controller and returns the chart.
    pub fn into_chart(self) -> OrgChart {
        self.chart.into_inner()
    }

    async fn run(&self, effect: Effect) -> Result<(), ChartError> {
        match effect {
            Effect::LoadChildren(id) => {
                let result = self.loader.load_children(&id).await;
                self.chart.borrow_mut().complete_load(&id, result);
            }
            Effect::SwitchDepartment(name) => {
                let Some(switcher) = &self.switcher else {
                    warn!(
                        department = %name,
                        "unknown department and no department switcher configured"
                    );
                    return Ok(());
                };
                let departments = switcher.switch_department(&name).await.map_err(|source| {
                    ChartError::DepartmentSwitch {
                        name: name.clone(),
                        source: Box::new(source),
                    }
                })?;
                self.chart
                    .borrow_mut()
                    .complete_department_switch(&name, departments);
            }
            Effect::NodePressed(_) => {}
        }
        Ok(())
    }
}
