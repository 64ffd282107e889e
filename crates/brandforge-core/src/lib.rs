#![forbid(unsafe_code)]

//! Blueprint engine core (headless).
//!
//! Pure, synchronous transformations from an untrusted provider payload to
//! positioned, routed graph data:
//!
//! - [`schema`]: defensive parse-with-defaults of the node-graph JSON
//! - [`layout`]: tier bucketing / hub selection per style
//! - [`route`]: connector geometry per style
//! - [`prompt`]: outbound prompt templates
//!
//! No I/O, no shared state; every call is a pure function of its arguments.

pub mod error;
pub mod layout;
pub mod model;
pub mod prompt;
pub mod route;
pub mod schema;

pub use error::{Error, Result};
pub use layout::{assign_layout, classify_tier, hub_index};
pub use model::{
    AspectRatio, Blueprint, BlueprintNode, BrandIdentity, CANVAS_UNITS, FlyerConfig, LogoStyle,
    Resolution, StyleFamily, StyleToken, Tier, builtin_logo_styles,
};
pub use route::{ConnectorPath, PathKind, Point, RouteOptions, route};
pub use schema::{DEFAULT_NODE_COLOR, blueprint_response_schema, parse_blueprint};

#[cfg(test)]
mod tests;
