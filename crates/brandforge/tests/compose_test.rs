use brandforge::render::{SvgOptions, compose_scene, compose_svg};
use brandforge::route::RouteOptions;
use brandforge::{StyleToken, parse_blueprint};

const PAYLOAD: &str = r##"{"nodes":[
    {"id":"core","title":"Core","color":"#ff8800","x":500,"y":500,"points":["plan","build"]},
    {"id":"s1","title":"Research","color":"#00aaff","x":180,"y":260},
    {"id":"s2","title":"Launch","color":"#22cc88","x":820,"y":700}
]}"##;

#[test]
fn compose_scene_runs_the_whole_pipeline() {
    let blueprint = parse_blueprint(PAYLOAD).unwrap();
    let scene = compose_scene(
        &blueprint,
        StyleToken::OrganicBlueprint,
        None,
        &RouteOptions::default(),
    );
    assert_eq!(scene.connector_count(), 2);
    assert!(scene.text_contents().contains(&"Research"));
}

#[test]
fn compose_svg_produces_a_document() {
    let blueprint = parse_blueprint(PAYLOAD).unwrap();
    let svg = compose_svg(
        &blueprint,
        StyleToken::OrganicBlueprint,
        None,
        &RouteOptions::default(),
        &SvgOptions::default(),
    );
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("Launch"));
}
