use brandforge::render::export::export_bundle;
use brandforge::render::raster::{RasterOptions, svg_to_png};
use brandforge::render::{SvgOptions, compose_scene, scene_to_svg};
use brandforge::route::RouteOptions;
use brandforge::{StyleToken, parse_blueprint};

const PAYLOAD: &str = r##"{"nodes":[
    {"id":"core","title":"Core","color":"#ff8800","x":500,"y":500},
    {"id":"s1","title":"Step","color":"#00aaff","x":200,"y":300}
]}"##;

const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];

#[test]
fn svg_rasterizes_to_png_bytes() {
    let blueprint = parse_blueprint(PAYLOAD).unwrap();
    let scene = compose_scene(
        &blueprint,
        StyleToken::MinimalistGeometric,
        None,
        &RouteOptions::default(),
    );
    let svg = scene_to_svg(&scene, &SvgOptions::default());
    let png = svg_to_png(&svg, &RasterOptions::default()).unwrap();
    assert_eq!(&png[..4], &PNG_MAGIC);
}

#[test]
fn export_bundle_carries_png_svg_and_manifest() {
    let blueprint = parse_blueprint(PAYLOAD).unwrap();
    let scene = compose_scene(
        &blueprint,
        StyleToken::OrganicBlueprint,
        None,
        &RouteOptions::default(),
    );
    let bundle = export_bundle(
        &scene,
        &SvgOptions::default(),
        &RasterOptions {
            background: Some("#ffffff".to_string()),
            ..RasterOptions::default()
        },
        None,
    )
    .unwrap();

    assert_eq!(&bundle.png[..4], &PNG_MAGIC);
    assert!(bundle.svg.starts_with("<svg "));
    assert!(bundle.manifest_json.contains("Organic Blueprint"));
}
