use brandforge_core::route::RouteOptions;
use brandforge_core::{BlueprintNode, StyleToken, assign_layout, route};
use brandforge_render::svg::{SvgOptions, scene_to_svg};
use brandforge_render::render;

fn fixture() -> Vec<BlueprintNode> {
    let mk = |id: &str, title: &str, x: f64, y: f64| BlueprintNode {
        id: id.to_string(),
        title: title.to_string(),
        color: "#ff8800".to_string(),
        x,
        y,
        points: vec!["alpha <beta>".to_string()],
        icon: Some("account_tree".to_string()),
        tier: None,
    };
    vec![mk("core", "Core", 500.0, 500.0), mk("s1", "Step & Co", 200.0, 300.0)]
}

#[test]
fn svg_has_canvas_viewbox_with_padding() {
    let nodes = assign_layout(&fixture(), StyleToken::OrganicBlueprint);
    let scene = render(&nodes, &[], StyleToken::OrganicBlueprint, None);
    let svg = scene_to_svg(&scene, &SvgOptions::default());

    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"viewBox="-8 -8 1016 1016""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn svg_escapes_text_content() {
    let nodes = assign_layout(&fixture(), StyleToken::OrganicBlueprint);
    let scene = render(&nodes, &[], StyleToken::OrganicBlueprint, None);
    let svg = scene_to_svg(&scene, &SvgOptions::default());

    assert!(svg.contains("Step &amp; Co"));
    assert!(svg.contains("alpha &lt;beta&gt;"));
    assert!(!svg.contains("alpha <beta>"));
}

#[test]
fn curved_connectors_emit_quadratic_paths() {
    let nodes = assign_layout(&fixture(), StyleToken::OrganicBlueprint);
    let connectors = route(&nodes, StyleToken::OrganicBlueprint, &RouteOptions::default());
    let scene = render(&nodes, &connectors, StyleToken::OrganicBlueprint, None);
    let svg = scene_to_svg(&scene, &SvgOptions::default());

    assert!(svg.contains("M 500 500 Q 350 500 200 300"));
    assert!(svg.contains(r#"stroke-dasharray="5,5""#));
}

#[test]
fn orthogonal_connectors_emit_polylines() {
    let nodes = assign_layout(&fixture(), StyleToken::CyberWorkflow);
    let connectors = route(&nodes, StyleToken::CyberWorkflow, &RouteOptions::default());
    let scene = render(&nodes, &connectors, StyleToken::CyberWorkflow, None);
    let svg = scene_to_svg(&scene, &SvgOptions::default());

    assert!(svg.contains("M 500 500 L 200 500 L 200 300"));
}

#[test]
fn background_rect_is_emitted_when_requested() {
    let nodes = assign_layout(&fixture(), StyleToken::OrganicBlueprint);
    let scene = render(&nodes, &[], StyleToken::OrganicBlueprint, None);
    let options = SvgOptions {
        background: Some("#0a0c16".to_string()),
        ..SvgOptions::default()
    };
    let svg = scene_to_svg(&scene, &options);
    assert!(svg.contains(r##"fill="#0a0c16""##));
}
