// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `DirectoryLoader` driving a chart end to end.

use std::rc::Rc;

use understory_org_chart::{ChartConfig, ChartController, ChartError, ChildLoader, OrgChart};
use understory_org_directory::{
    BuilderConfig, DepartmentRoots, DirectoryLoader, MemoryDirectory, PersonRecord,
};
use understory_org_tree::NodeId;

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

fn directory() -> MemoryDirectory {
    MemoryDirectory::new()
        .with_person(PersonRecord::new("ceo", "Ada", "CEO", "Exec"), None)
        .with_person(PersonRecord::new("vp", "Bob", "VP", "Sales"), Some("ceo"))
        .with_person(PersonRecord::new("rep1", "Cy", "Rep", "Sales"), Some("vp"))
        .with_person(PersonRecord::new("rep2", "Di", "Rep", "Sales"), Some("vp"))
        .with_person(PersonRecord::new("coo", "Eve", "COO", "Ops"), None)
        .with_person(PersonRecord::new("lead", "Fay", "Lead", "Ops"), Some("coo"))
}

fn loader(directory: MemoryDirectory) -> DirectoryLoader<MemoryDirectory> {
    let config = BuilderConfig {
        max_depth: 1,
        ..BuilderConfig::default()
    };
    DirectoryLoader::new(directory, config)
        .with_department(DepartmentRoots::new("exec", "Exec", ["ceo"]))
        .with_department(DepartmentRoots::new("ops", "Ops", ["coo"]))
}

#[tokio::test]
async fn load_children_fetches_one_level() {
    let loader = loader(directory());
    let children = loader.load_children(&id("vp")).await.unwrap();
    let ids: Vec<&str> = children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["rep1", "rep2"]);
    assert!(children.iter().all(|c| c.children.is_none()));
}

#[tokio::test]
async fn chart_grows_lazily_and_switches_departments() {
    let loader = Rc::new(loader(directory()));
    let collection = loader.build_collection(&["Exec"]).await.unwrap();
    assert_eq!(collection.len(), 1);

    let chart = OrgChart::new(collection, ChartConfig::default());
    let controller = ChartController::new(chart, Rc::clone(&loader))
        .with_department_switcher(Rc::clone(&loader));
    assert!(!controller.chart().scene().contains(&id("rep1")));

    controller.toggle_node(&id("vp")).await.unwrap();
    assert!(controller.chart().scene().contains(&id("rep1")));
    assert!(controller.chart().scene().contains(&id("rep2")));

    controller.set_active_department("Ops").await.unwrap();
    let chart = controller.chart();
    assert_eq!(chart.active_department(), Some("Ops"));
    assert!(chart.scene().contains(&id("lead")));
    assert_eq!(chart.collection().len(), 2);
}

#[tokio::test]
async fn unregistered_department_leaves_chart_alone() {
    let loader = Rc::new(loader(directory()));
    let collection = loader.build_collection(&["Exec"]).await.unwrap();
    let controller = ChartController::new(
        OrgChart::new(collection, ChartConfig::default()),
        Rc::clone(&loader),
    )
    .with_department_switcher(Rc::clone(&loader));

    controller.set_active_department("Finance").await.unwrap();

    let chart = controller.chart();
    assert_eq!(chart.active_department(), Some("Exec"));
    assert_eq!(chart.collection().len(), 1);
}

#[tokio::test]
async fn directory_outage_fails_the_switch() {
    let mut directory = directory();
    directory.mark_unavailable("coo");
    let loader = Rc::new(loader(directory));
    let collection = loader.build_collection(&["Exec"]).await.unwrap();
    let controller = ChartController::new(
        OrgChart::new(collection, ChartConfig::default()),
        Rc::clone(&loader),
    )
    .with_department_switcher(Rc::clone(&loader));

    let err = controller.set_active_department("Ops").await.unwrap_err();
    assert!(matches!(err, ChartError::DepartmentSwitch { .. }));
    assert_eq!(controller.chart().active_department(), Some("Exec"));
}
