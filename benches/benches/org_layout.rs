// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hashbrown::HashSet;
use understory_org_chart::{ChartConfig, OrgChart};
use understory_org_layout::{ExpansionState, LayoutConfig, compose_scene};
use understory_org_tree::{Department, HierarchyCollection, NodeId, OrgNode, compute_matches};

/// A complete tree with `fanout` reports per manager, `depth` levels below
/// the root.
fn org(fanout: usize, depth: usize) -> OrgNode {
    fn build(prefix: &str, fanout: usize, depth: usize) -> OrgNode {
        let mut node = OrgNode::new(prefix, format!("Person {prefix}"), "Manager", "Eng");
        let children = if depth == 0 {
            Vec::new()
        } else {
            (0..fanout)
                .map(|i| build(&format!("{prefix}.{i}"), fanout, depth - 1))
                .collect()
        };
        node.set_children(children);
        node
    }
    build("0", fanout, depth)
}

fn fully_expanded(root: &OrgNode) -> ExpansionState {
    let mut expansion = ExpansionState::new(usize::MAX);
    expansion.seed_defaults(core::slice::from_ref(root));
    expansion
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("org_layout/compose_expanded");
    let config = LayoutConfig::default();
    let matches = HashSet::new();

    // Fully expanded trees: every node is measured and positioned once.
    for (fanout, depth) in [(4usize, 3usize), (6, 4), (8, 4), (10, 4)] {
        let root = org(fanout, depth);
        let expansion = fully_expanded(&root);
        let roots = vec![root];
        let nodes = roots[0].iter().count();
        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &roots, |b, roots| {
            b.iter(|| {
                let scene = compose_scene(black_box(roots), &config, &expansion, &matches);
                black_box(scene.len());
            });
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("org_layout/search");
    let roots = vec![org(8, 4)];
    let nodes = roots[0].iter().count();
    group.throughput(Throughput::Elements(nodes as u64));

    group.bench_function("compute_matches", |b| {
        b.iter(|| black_box(compute_matches(black_box(&roots), "person 0.3.1")).len());
    });

    let collection: HierarchyCollection = [Department::new("eng", "Eng", roots.clone())]
        .into_iter()
        .collect();
    let mut chart = OrgChart::new(collection, ChartConfig::default());
    // Search re-runs matching, path expansion and a full re-layout.
    group.bench_function("chart_set_search_term", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            chart.set_search_term(if flip { "person 0.3" } else { "person 0.5" });
            black_box(chart.scene().len());
        });
    });
    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let collection: HierarchyCollection = [Department::new("eng", "Eng", vec![org(8, 4)])]
        .into_iter()
        .collect();
    let mut chart = OrgChart::new(collection, ChartConfig::default());
    let id = NodeId::from("0.4");
    c.bench_function("org_layout/toggle_relayout", |b| {
        b.iter(|| {
            let _ = chart.toggle_node(black_box(&id));
            black_box(chart.scene().len());
        });
    });
}

criterion_group!(benches, bench_compose, bench_search, bench_toggle);
criterion_main!(benches);
