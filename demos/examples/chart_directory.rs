// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Org chart backed by a directory.
//!
//! Build the first department from an in-memory directory, then let a
//! `ChartController` fetch children and departments on demand. One person
//! is marked unavailable to show how a failed load is absorbed.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_org_demos --example chart_directory`

use std::rc::Rc;

use understory_org_chart::{ChartConfig, ChartController, OrgChart};
use understory_org_directory::{
    BuilderConfig, DepartmentRoots, DirectoryLoader, MemoryDirectory, PersonRecord,
};
use understory_org_tree::NodeId;

fn directory() -> MemoryDirectory {
    let mut directory = MemoryDirectory::new()
        .with_person(PersonRecord::new("ceo", "Ada Byron", "CEO", "Executive"), None)
        .with_person(PersonRecord::new("coo", "Lin Wu", "COO", "Operations"), None);
    for (vp, department) in [("vp-eng", "Engineering"), ("vp-sales", "Sales")] {
        directory.insert(
            PersonRecord::new(vp, format!("{department} Lead"), "VP", department),
            Some(&NodeId::from("ceo")),
        );
        for i in 0..3 {
            let id = format!("{vp}-{i}");
            directory.insert(
                PersonRecord::new(id.as_str(), format!("{department} {i}"), "Manager", department),
                Some(&NodeId::from(vp)),
            );
            directory.insert(
                PersonRecord::new(format!("{id}-ic"), format!("{department} IC {i}"), "Engineer", department),
                Some(&NodeId::new(id)),
            );
        }
    }
    directory.insert(
        PersonRecord::new("ops-1", "Sam Smith", "Planner", "Operations"),
        Some(&NodeId::from("coo")),
    );
    directory.mark_unavailable("vp-sales-0");
    directory
}

fn summary(label: &str, chart: &OrgChart) {
    let bounds = chart.scene().bounds();
    println!(
        "{label}: department {:?}, {} cards, scene {:.0}x{:.0}, zoom {:.2}",
        chart.active_department(),
        chart.scene().len(),
        bounds.width(),
        bounds.height(),
        chart.transform().zoom,
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = BuilderConfig {
        max_depth: 1,
        max_in_flight: 4,
    };
    let loader = Rc::new(
        DirectoryLoader::new(directory(), config)
            .with_department(DepartmentRoots::new("exec", "Executive", ["ceo"]))
            .with_department(DepartmentRoots::new("ops", "Operations", ["coo"])),
    );

    pollster::block_on(async {
        let collection = loader.build_collection(&["Executive"]).await?;
        let chart = OrgChart::new(collection, ChartConfig::default());
        let controller = ChartController::new(chart, Rc::clone(&loader))
            .with_department_switcher(Rc::clone(&loader));
        summary("initial", &controller.chart());

        controller.toggle_node(&NodeId::from("vp-eng")).await?;
        summary("engineering opened", &controller.chart());

        controller.toggle_node(&NodeId::from("vp-sales")).await?;
        let sales_0 = NodeId::from("vp-sales-0");
        controller.toggle_node(&sales_0).await?;
        println!(
            "vp-sales-0 after failed load: expanded={}, loading={}",
            controller.chart().is_expanded(&sales_0),
            controller.chart().is_loading(&sales_0),
        );

        controller.set_search_term("smith");
        println!("matches before switching: {}", controller.chart().matches().len());

        controller.set_active_department("Operations").await?;
        summary("operations", &controller.chart());
        println!("matches in operations: {}", controller.chart().matches().len());

        controller.set_active_department("Research").await?;
        summary("after unknown department", &controller.chart());
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
