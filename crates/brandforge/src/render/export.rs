//! Export surface: one rendered scene to downloadable byte payloads.
//!
//! The bundle carries the PNG, the SVG source and a small JSON manifest; the
//! caller hands the bytes to the platform's save-file mechanism. No network.

use super::raster::{self, RasterError, RasterOptions};
use brandforge_core::BrandIdentity;
use brandforge_render::scene::SceneGraph;
use brandforge_render::svg::{SvgOptions, scene_to_svg};

#[derive(Debug, Clone)]
pub struct ExportBundle {
    pub svg: String,
    pub png: Vec<u8>,
    pub manifest_json: String,
}

/// Renders the scene to PNG and pairs it with a manifest describing what was
/// exported.
pub fn export_bundle(
    scene: &SceneGraph,
    svg_options: &SvgOptions,
    raster_options: &RasterOptions,
    brand: Option<&BrandIdentity>,
) -> raster::Result<ExportBundle> {
    let svg = scene_to_svg(scene, svg_options);
    let png = raster::svg_to_png(&svg, raster_options)?;

    let manifest = serde_json::json!({
        "generator": "brandforge",
        "style": scene.style.name(),
        "canvas": { "width": scene.width, "height": scene.height },
        "items": scene.items.len(),
        "brand": brand.map(|b| b.name.as_str()),
    });
    let manifest_json =
        serde_json::to_string_pretty(&manifest).map_err(|_| RasterError::ManifestEncode)?;

    Ok(ExportBundle {
        svg,
        png,
        manifest_json,
    })
}
