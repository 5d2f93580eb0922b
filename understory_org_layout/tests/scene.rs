// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene composition tests for `understory_org_layout`.
//!
//! These exercise the composed output (visibility, placement, normalization,
//! colors) rather than individual sizing rules.

use hashbrown::HashSet;
use kurbo::{Point, Rect};
use understory_org_layout::{
    ExpansionState, LayoutConfig, LayoutPass, Orientation, compose_scene, palette_index,
};
use understory_org_tree::{NodeId, OrgNode, Preorder};

fn person(id: &str) -> OrgNode {
    OrgNode::new(id, id.to_uppercase(), "Title", "Dept")
}

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

fn scene_for(roots: &[OrgNode], expansion: &ExpansionState) -> understory_org_layout::Scene {
    compose_scene(roots, &LayoutConfig::default(), expansion, &HashSet::new())
}

/// A <- B (unloaded, 2 reports), C
fn abc() -> Vec<OrgNode> {
    vec![person("a").with_children(vec![person("b").with_direct_count(2), person("c")])]
}

#[test]
fn default_expansion_shows_root_and_direct_reports() {
    let scene = scene_for(&abc(), &ExpansionState::new(1));
    let ids: Vec<&str> = scene.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    let b = scene.node(&id("b")).unwrap();
    assert!(b.has_children, "known direct reports show an affordance");
    assert!(!b.is_expanded);
    assert!(!scene.contains(&id("d")));
    assert!(!scene.contains(&id("e")));

    let c = scene.node(&id("c")).unwrap();
    assert!(!c.has_children);
    assert_eq!(scene.edges().len(), 2);
    assert!(scene.edges().iter().all(|e| e.direction == Orientation::Down));
}

#[test]
fn expanded_but_unloaded_node_stays_a_single_card() {
    let mut expansion = ExpansionState::new(1);
    expansion.set(id("b"), true);
    let scene = scene_for(&abc(), &expansion);
    assert_eq!(scene.len(), 3);
    assert!(scene.node(&id("b")).unwrap().is_expanded);
}

fn reachable(roots: &[OrgNode], expansion: &ExpansionState) -> usize {
    fn walk(node: &OrgNode, depth: usize, expansion: &ExpansionState) -> usize {
        let mut count = 1;
        if expansion.is_expanded(&node.id, depth) {
            for child in node.materialized_children() {
                count += walk(child, depth + 1, expansion);
            }
        }
        count
    }
    roots.iter().map(|root| walk(root, 0, expansion)).sum()
}

#[test]
fn visible_count_matches_reachability_for_every_expansion_combination() {
    let roots = vec![
        person("a").with_children(vec![
            person("b").with_children(vec![
                person("d").with_children(vec![person("h"), person("i")]),
                person("e"),
            ]),
            person("c").with_children(vec![person("f"), person("g").with_direct_count(4)]),
        ]),
        person("x").with_children(vec![person("y")]),
    ];
    let internal: Vec<NodeId> = Preorder::new(&roots)
        .filter(|(_, n)| n.has_children())
        .map(|(_, n)| n.id.clone())
        .collect();
    assert_eq!(internal.len(), 6);

    for mask in 0_u32..(1 << internal.len()) {
        let mut expansion = ExpansionState::new(1);
        for (bit, node) in internal.iter().enumerate() {
            expansion.set(node.clone(), mask & (1 << bit) != 0);
        }
        let scene = scene_for(&roots, &expansion);
        assert_eq!(scene.len(), reachable(&roots, &expansion), "mask {mask:#b}");
        assert_eq!(scene.edges().len() + roots.len(), scene.len());
    }
}

#[test]
fn scene_is_normalized_to_the_margin() {
    let config = LayoutConfig::default();
    let scene = scene_for(&abc(), &ExpansionState::new(1));
    let a = scene.node(&id("a")).unwrap();
    assert_eq!(a.origin, Point::new(config.margin, config.margin));

    // Root column: a, then b and c stacked below with vertical gaps.
    let b = scene.node(&id("b")).unwrap();
    let c = scene.node(&id("c")).unwrap();
    assert_eq!(b.origin.x, a.origin.x);
    assert_eq!(b.origin.y, a.origin.y + config.card_height + config.gap_vertical);
    assert_eq!(c.origin.y, b.origin.y + config.card_height + config.gap_vertical);

    let expected_height = 3.0 * config.card_height + 2.0 * config.gap_vertical;
    assert_eq!(
        scene.bounds(),
        Rect::new(
            0.0,
            0.0,
            config.card_width + 2.0 * config.margin,
            expected_height + 2.0 * config.margin
        )
    );
}

#[test]
fn roots_are_placed_left_to_right_with_root_spacing() {
    let config = LayoutConfig::default();
    let roots = vec![
        person("a").with_children(vec![person("b")]),
        person("x"),
        person("z"),
    ];
    let mut expansion = ExpansionState::new(1);
    expansion.set(id("b"), true);
    let scene = scene_for(&roots, &expansion);

    let a = scene.node(&id("a")).unwrap().origin;
    let x = scene.node(&id("x")).unwrap().origin;
    let z = scene.node(&id("z")).unwrap().origin;
    assert_eq!(a.y, x.y);
    assert_eq!(x.x - a.x, config.card_width + config.root_spacing);
    assert_eq!(z.x - x.x, config.card_width + config.root_spacing);
    assert_eq!(
        scene.bounds().width(),
        3.0 * config.card_width + 2.0 * config.root_spacing + 2.0 * config.margin
    );
}

#[test]
fn deep_levels_branch_right_and_keep_child_order() {
    let config = LayoutConfig::default();
    let roots = vec![person("a").with_children(vec![
        person("b").with_children(vec![person("q"), person("p"), person("r")]),
    ])];
    let mut expansion = ExpansionState::new(1);
    expansion.set(id("b"), true);
    let scene = scene_for(&roots, &expansion);

    let b = scene.node(&id("b")).unwrap();
    assert_eq!(b.orientation, Orientation::Right);
    let column: Vec<&str> = scene.nodes()[2..].iter().map(|n| n.id.as_str()).collect();
    assert_eq!(column, vec!["q", "p", "r"]);

    let q = scene.node(&id("q")).unwrap();
    let p = scene.node(&id("p")).unwrap();
    assert_eq!(q.origin.x, b.origin.x + config.card_width + config.gap_horizontal);
    assert_eq!(q.origin.y, b.origin.y);
    assert_eq!(
        p.origin.y - q.origin.y,
        config.card_height + LayoutConfig::gap_for_depth(2)
    );
}

#[test]
fn branch_colors_are_shared_per_root_and_stable() {
    let roots = vec![
        person("a").with_children(vec![person("b")]),
        person("x").with_children(vec![person("y")]),
    ];
    let expansion = ExpansionState::new(1);
    let first = scene_for(&roots, &expansion);
    let second = scene_for(&roots, &expansion);

    let color = |scene: &understory_org_layout::Scene, s: &str| {
        scene.node(&id(s)).unwrap().branch_color.components
    };
    assert_eq!(color(&first, "a"), color(&first, "b"));
    assert_eq!(color(&first, "x"), color(&first, "y"));
    assert_eq!(color(&first, "a"), color(&second, "a"));
    assert_eq!(color(&first, "x"), color(&second, "x"));

    if palette_index(&id("a"), 0) != palette_index(&id("x"), 1) {
        assert_ne!(color(&first, "a"), color(&first, "x"));
    }
}

#[test]
fn empty_roots_give_an_empty_scene() {
    let config = LayoutConfig::default();
    let expansion = ExpansionState::default();
    let scene = LayoutPass::new(&config, &expansion).compose(&[]);
    assert!(scene.is_empty());
    assert!(scene.edges().is_empty());
    assert_eq!(scene.bounds(), Rect::ZERO);
}

#[test]
fn hit_testing_and_culling_use_card_rects() {
    let scene = scene_for(&abc(), &ExpansionState::new(1));
    let b = scene.node(&id("b")).unwrap();
    let inside = b.rect().center();
    assert_eq!(scene.hit_test(inside).map(|n| n.id.as_str()), Some("b"));
    assert!(scene.hit_test(Point::new(1.0, 1.0)).is_none());

    let top_strip = Rect::new(0.0, 0.0, 1000.0, b.origin.y - 1.0);
    let culled: Vec<&str> = scene.nodes_in_rect(top_strip).map(|n| n.id.as_str()).collect();
    assert_eq!(culled, vec!["a"]);
}
