use super::node;
use crate::layout::{assign_layout, classify_tier, geometric_shape_index, hub_index};
use crate::model::{StyleToken, Tier};

#[test]
fn tier_bucketing_is_a_pure_function_of_y() {
    assert_eq!(classify_tier(0.0), Tier::Input);
    assert_eq!(classify_tier(299.999), Tier::Input);
    assert_eq!(classify_tier(300.0), Tier::Engine);
    assert_eq!(classify_tier(599.0), Tier::Engine);
    assert_eq!(classify_tier(600.0), Tier::Output);
    assert_eq!(classify_tier(1000.0), Tier::Output);
}

#[test]
fn tiered_layout_overrides_any_provided_tier() {
    let mut n = node("a", "A", 100.0, 700.0);
    n.tier = Some(Tier::Input);
    let out = assign_layout(&[n], StyleToken::ProcessFlow);
    assert_eq!(out[0].tier, Some(Tier::Output));
}

#[test]
fn all_nodes_in_one_band_is_not_an_error() {
    let nodes = vec![
        node("a", "A", 100.0, 100.0),
        node("b", "B", 300.0, 150.0),
        node("c", "C", 500.0, 200.0),
    ];
    let out = assign_layout(&nodes, StyleToken::ProcessFlow);
    assert!(out.iter().all(|n| n.tier == Some(Tier::Input)));
}

#[test]
fn hub_is_matched_by_id_or_title() {
    let nodes = vec![
        node("step_1", "First", 0.0, 0.0),
        node("engine_core", "Middle", 0.0, 0.0),
    ];
    assert_eq!(hub_index(&nodes), Some(1));

    let nodes = vec![
        node("step_1", "First", 0.0, 0.0),
        node("step_2", "The Core Loop", 0.0, 0.0),
    ];
    assert_eq!(hub_index(&nodes), Some(1));
}

#[test]
fn hub_falls_back_to_first_node_deterministically() {
    let nodes = vec![
        node("alpha", "Alpha", 0.0, 0.0),
        node("beta", "Beta", 0.0, 0.0),
        node("gamma", "Gamma", 0.0, 0.0),
    ];
    for _ in 0..5 {
        assert_eq!(hub_index(&nodes), Some(0));
    }
}

#[test]
fn hub_spoke_layout_keeps_provided_coordinates() {
    let nodes = vec![node("core", "Core", 500.0, 500.0), node("s", "S", 120.0, 840.0)];
    let out = assign_layout(&nodes, StyleToken::OrganicBlueprint);
    assert_eq!(out[1].x, 120.0);
    assert_eq!(out[1].y, 840.0);
}

#[test]
fn non_jittered_layout_is_idempotent() {
    let nodes = vec![
        node("a", "A", 10.0, 20.0),
        node("b", "B", 400.0, 480.0),
        node("c", "C", 900.0, 910.0),
    ];
    let first = assign_layout(&nodes, StyleToken::BauhausGeometric);
    let second = assign_layout(&nodes, StyleToken::BauhausGeometric);
    assert_eq!(first, second);

    let first = assign_layout(&nodes, StyleToken::ProcessFlow);
    let second = assign_layout(&nodes, StyleToken::ProcessFlow);
    assert_eq!(first, second);
}

#[test]
fn geometric_shape_is_stable_per_id() {
    let a = geometric_shape_index("node_a", 4);
    for _ in 0..10 {
        assert_eq!(geometric_shape_index("node_a", 4), a);
    }
    assert!(a < 4);
}

#[test]
fn style_token_falls_back_to_organic() {
    assert_eq!(StyleToken::from_name("Process Flow"), StyleToken::ProcessFlow);
    assert_eq!(StyleToken::from_name("hand-drawn schematic"), StyleToken::HandDrawnSchematic);
    assert_eq!(StyleToken::from_name("BAUHAUS GEOMETRIC"), StyleToken::BauhausGeometric);
    assert_eq!(StyleToken::from_name("vaporwave dream"), StyleToken::OrganicBlueprint);
    assert_eq!(StyleToken::from_name(""), StyleToken::OrganicBlueprint);
}
