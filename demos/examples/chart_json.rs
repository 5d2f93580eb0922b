// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Org chart from a JSON payload.
//!
//! Parse a department collection, then drive an `OrgChart` with commands
//! and print what a renderer would draw after each one. Lazy loads are
//! answered inline from a second payload.
//!
//! Run:
//! - `cargo run -p understory_org_demos --example chart_json`
//! - `RUST_LOG=understory_org_chart=debug cargo run -p understory_org_demos --example chart_json`

use std::convert::Infallible;

use kurbo::Point;
use understory_org_chart::{ChartConfig, Command, Effect, OrgChart};
use understory_org_tree::{HierarchyCollection, OrgNode};

const COLLECTION: &str = r#"{
  "departments": [
    {
      "id": "exec",
      "name": "Executive",
      "roots": [
        {
          "id": "ceo", "name": "Ada Byron", "title": "Chief Executive", "department": "Executive",
          "children": [
            { "id": "cto", "name": "Grace Hopper", "title": "CTO", "department": "Engineering", "directCount": 2 },
            { "id": "cfo", "name": "Ken Smith", "title": "CFO", "department": "Finance", "children": [] }
          ]
        }
      ]
    },
    {
      "id": "ops",
      "name": "Operations",
      "roots": [
        { "id": "coo", "name": "Lin Wu", "title": "COO", "department": "Operations", "children": [] }
      ]
    }
  ]
}"#;

const CTO_REPORTS: &str = r#"[
  { "id": "eng1", "name": "Alan Smith", "title": "Staff Engineer", "department": "Engineering" },
  { "id": "eng2", "name": "Edsger Dijkstra", "title": "Principal Engineer", "department": "Engineering" }
]"#;

fn print_scene(label: &str, chart: &OrgChart) {
    let transform = chart.transform();
    println!(
        "{label}: {} cards, {} edges, zoom {:.2}, pan ({:.1}, {:.1})",
        chart.scene().len(),
        chart.scene().edges().len(),
        transform.zoom,
        transform.pan.x,
        transform.pan.y,
    );
    for node in chart.scene().nodes() {
        let marker = match (node.has_children, node.is_expanded) {
            (false, _) => ' ',
            (true, true) => '-',
            (true, false) => '+',
        };
        let hit = if node.is_match { " *" } else { "" };
        println!(
            "  {marker} {:indent$}{} ({}) @ ({:.0}, {:.0}){hit}",
            "",
            node.name,
            node.title,
            node.origin.x,
            node.origin.y,
            indent = node.depth * 2,
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let collection: HierarchyCollection = serde_json::from_str(COLLECTION)?;
    let mut chart = OrgChart::new(collection, ChartConfig::default());
    print_scene("initial", &chart);

    // Opening the CTO needs data first.
    if let Some(Effect::LoadChildren(id)) = chart.dispatch(Command::ToggleNode("cto".into()))? {
        let reports: Vec<OrgNode> = serde_json::from_str(CTO_REPORTS)?;
        chart.complete_load::<Infallible>(&id, Ok(reports));
    }
    print_scene("after opening cto", &chart);

    chart.dispatch(Command::SetSearchTerm("smith".into()))?;
    let hits: Vec<&str> = chart
        .matches_in_scene_order()
        .map(|id| id.as_str())
        .collect();
    println!("matches for \"smith\": {hits:?}");

    chart.dispatch(Command::Wheel {
        delta_y: -1.0,
        cursor: Point::new(640.0, 400.0),
    })?;
    print_scene("after a wheel notch", &chart);

    chart.dispatch(Command::SelectDepartment("Operations".into()))?;
    print_scene("operations", &chart);

    if let Some(Effect::SwitchDepartment(name)) =
        chart.dispatch(Command::SelectDepartment("Research".into()))?
    {
        println!("host would now fetch department {name:?}");
    }
    Ok(())
}
