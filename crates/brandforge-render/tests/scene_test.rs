use brandforge_core::route::RouteOptions;
use brandforge_core::{BlueprintNode, BrandIdentity, StyleToken, assign_layout, route};
use brandforge_render::{SceneItem, render};

fn node(id: &str, title: &str, x: f64, y: f64, points: &[&str]) -> BlueprintNode {
    BlueprintNode {
        id: id.to_string(),
        title: title.to_string(),
        color: "#0d33f2".to_string(),
        x,
        y,
        points: points.iter().map(|p| p.to_string()).collect(),
        icon: None,
        tier: None,
    }
}

fn organic_fixture() -> Vec<BlueprintNode> {
    vec![
        node("core", "Core", 500.0, 500.0, &["a", "b", "c", "d", "e"]),
        node("s1", "Step 1", 150.0, 250.0, &["x"]),
        node("s2", "Step 2", 850.0, 700.0, &[]),
    ]
}

#[test]
fn scene_contains_one_connector_per_route_and_all_titles() {
    let nodes = assign_layout(&organic_fixture(), StyleToken::OrganicBlueprint);
    let connectors = route(&nodes, StyleToken::OrganicBlueprint, &RouteOptions::default());
    let scene = render(&nodes, &connectors, StyleToken::OrganicBlueprint, None);

    assert_eq!(scene.connector_count(), 2);
    let texts = scene.text_contents();
    for title in ["Core", "Step 1", "Step 2"] {
        assert!(texts.contains(&title), "missing {title}");
    }
}

#[test]
fn spacious_styles_show_every_detail_point() {
    let nodes = assign_layout(&organic_fixture(), StyleToken::OrganicBlueprint);
    let scene = render(&nodes, &[], StyleToken::OrganicBlueprint, None);
    let texts = scene.text_contents();
    for point in ["a", "b", "c", "d", "e"] {
        assert!(texts.contains(&point), "missing point {point}");
    }
}

#[test]
fn compact_styles_truncate_detail_points_to_three() {
    let nodes = assign_layout(&organic_fixture(), StyleToken::BauhausGeometric);
    let scene = render(&nodes, &[], StyleToken::BauhausGeometric, None);
    let texts = scene.text_contents();
    assert!(texts.contains(&"a"));
    assert!(texts.contains(&"c"));
    assert!(!texts.contains(&"d"));
    assert!(!texts.contains(&"e"));
}

#[test]
fn uppercase_styles_transform_titles() {
    let nodes = assign_layout(&organic_fixture(), StyleToken::CyberWorkflow);
    let scene = render(&nodes, &[], StyleToken::CyberWorkflow, None);
    let texts = scene.text_contents();
    assert!(texts.contains(&"CORE"));
    assert!(!texts.contains(&"Core"));
}

#[test]
fn geometric_shape_is_stable_across_renders() {
    let nodes = assign_layout(&organic_fixture(), StyleToken::BauhausGeometric);
    let first = render(&nodes, &[], StyleToken::BauhausGeometric, None);
    let second = render(&nodes, &[], StyleToken::BauhausGeometric, None);
    assert_eq!(first, second);
}

#[test]
fn single_node_scene_renders_without_connectors() {
    let nodes = vec![node("solo", "Solo", 500.0, 500.0, &["only"])];
    let nodes = assign_layout(&nodes, StyleToken::OrganicBlueprint);
    let connectors = route(&nodes, StyleToken::OrganicBlueprint, &RouteOptions::default());
    let scene = render(&nodes, &connectors, StyleToken::OrganicBlueprint, None);

    assert_eq!(scene.connector_count(), 0);
    assert!(scene.text_contents().contains(&"Solo"));
}

#[test]
fn brand_decoration_adds_name_and_logo() {
    let brand = BrandIdentity {
        name: "Acme Corp".to_string(),
        logo: Some("data:image/png;base64,AAAA".to_string()),
        ..BrandIdentity::default()
    };
    let nodes = assign_layout(&organic_fixture(), StyleToken::OrganicBlueprint);
    let scene = render(&nodes, &[], StyleToken::OrganicBlueprint, Some(&brand));

    assert!(scene.text_contents().contains(&"Acme Corp"));
    assert!(scene.items.iter().any(|i| matches!(
        i,
        SceneItem::Image { href, .. } if href.starts_with("data:image/png;base64,")
    )));
}

#[test]
fn scene_round_trips_through_json() {
    let nodes = assign_layout(&organic_fixture(), StyleToken::OrganicBlueprint);
    let connectors = route(&nodes, StyleToken::OrganicBlueprint, &RouteOptions::default());
    let scene = render(&nodes, &connectors, StyleToken::OrganicBlueprint, None);

    let value = serde_json::to_value(&scene).unwrap();
    let back: brandforge_render::SceneGraph = serde_json::from_value(value).unwrap();
    assert_eq!(scene, back);
}
