#![forbid(unsafe_code)]

//! `brandforge` is a headless brand-asset blueprint engine.
//!
//! The core pipeline (parse, layout, route) is always available; rendering
//! and raster export are feature-gated so API-client-only consumers stay
//! lean.
//!
//! # Features
//!
//! - `render`: scene construction + SVG output (`brandforge::render`)
//! - `raster`: PNG/JPG output and export bundles via pure-Rust SVG
//!   rasterization

pub use brandforge_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use brandforge_render::scene::{SceneGraph, SceneItem, TextAnchor, TextWeight};
    pub use brandforge_render::style::{NodeShape, StylePolicy, node_shape, policy};
    pub use brandforge_render::svg::{SvgOptions, scene_to_svg};

    #[cfg(feature = "raster")]
    pub mod export;
    #[cfg(feature = "raster")]
    pub mod raster;

    use brandforge_core::route::RouteOptions;
    use brandforge_core::{Blueprint, BrandIdentity, StyleToken, assign_layout, route};

    /// Lays out, routes and renders a parsed blueprint in one call.
    pub fn compose_scene(
        blueprint: &Blueprint,
        style: StyleToken,
        brand: Option<&BrandIdentity>,
        route_options: &RouteOptions,
    ) -> SceneGraph {
        let nodes = assign_layout(&blueprint.nodes, style);
        let connectors = route(&nodes, style, route_options);
        brandforge_render::render(&nodes, &connectors, style, brand)
    }

    /// Convenience wrapper from blueprint straight to an SVG document.
    pub fn compose_svg(
        blueprint: &Blueprint,
        style: StyleToken,
        brand: Option<&BrandIdentity>,
        route_options: &RouteOptions,
        svg_options: &SvgOptions,
    ) -> String {
        let scene = compose_scene(blueprint, style, brand, route_options);
        scene_to_svg(&scene, svg_options)
    }
}
