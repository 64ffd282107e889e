#![forbid(unsafe_code)]

//! Headless renderer for brandforge blueprints.
//!
//! Turns positioned nodes and routed connectors into a style-agnostic
//! [`scene::SceneGraph`], then serializes the scene to SVG. Rendering is
//! infallible: every style token resolves to a policy and every scene item
//! has an SVG form, so the API surface is plain functions returning values.

pub mod render;
pub mod scene;
pub mod style;
pub mod svg;

pub use render::render;
pub use scene::{SceneGraph, SceneItem, TextAnchor, TextWeight};
pub use style::{NodeShape, StylePolicy, node_shape, policy};
pub use svg::{SvgOptions, scene_to_svg};
