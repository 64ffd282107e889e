//! Connector routing between positioned nodes.
//!
//! Tiered styles produce the full bipartite join between adjacent tiers
//! (inputs to engines, engines to outputs) and nothing else. Every other
//! style routes hub-and-spoke: one connector from the hub to each spoke.

use crate::layout::{hub_index, tier_members};
use crate::model::{BlueprintNode, StyleFamily, StyleToken, Tier};
use serde::{Deserialize, Serialize};

/// How a connector's geometry is interpreted by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// `points` is a polyline: start, end.
    Straight,
    /// `points` is a polyline: start, elbow, end.
    Orthogonal,
    /// `points` is start, quadratic control point, end.
    Curved,
    /// Like `Curved`, with the control point perturbed per node pair.
    Jittered,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One routed connector between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorPath {
    pub from: String,
    pub to: String,
    pub path_kind: PathKind,
    pub stroke_color: String,
    pub dashed: bool,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Copy)]
pub struct RouteOptions {
    /// Extra entropy mixed into the hand-drawn midpoint perturbation. The
    /// perturbation itself is always derived from the endpoint id pair, so
    /// the same seed reproduces the same geometry.
    pub jitter_seed: Option<u64>,
    /// Maximum midpoint offset, in canvas units, for jittered paths.
    pub jitter_amplitude: f64,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            jitter_seed: None,
            jitter_amplitude: 14.0,
        }
    }
}

/// Computes connector paths for positioned nodes under the chosen style.
///
/// A graph with fewer than two nodes yields no connectors.
pub fn route(
    nodes: &[BlueprintNode],
    style: StyleToken,
    options: &RouteOptions,
) -> Vec<ConnectorPath> {
    if nodes.len() < 2 {
        return Vec::new();
    }
    match style.family() {
        StyleFamily::Tiered => route_tiered(nodes, style, options),
        StyleFamily::HubSpoke | StyleFamily::Geometric => route_hub_spoke(nodes, style, options),
    }
}

fn route_tiered(
    nodes: &[BlueprintNode],
    style: StyleToken,
    options: &RouteOptions,
) -> Vec<ConnectorPath> {
    let inputs = tier_members(nodes, Tier::Input);
    let engines = tier_members(nodes, Tier::Engine);
    let outputs = tier_members(nodes, Tier::Output);

    let mut out = Vec::with_capacity(inputs.len() * engines.len() + engines.len() * outputs.len());
    for a in &inputs {
        for b in &engines {
            out.push(connector(a, b, style, options));
        }
    }
    for a in &engines {
        for b in &outputs {
            out.push(connector(a, b, style, options));
        }
    }
    out
}

fn route_hub_spoke(
    nodes: &[BlueprintNode],
    style: StyleToken,
    options: &RouteOptions,
) -> Vec<ConnectorPath> {
    let Some(hub) = hub_index(nodes) else {
        return Vec::new();
    };
    let hub_node = &nodes[hub];
    nodes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != hub)
        .map(|(_, spoke)| connector(hub_node, spoke, style, options))
        .collect()
}

fn connector(
    from: &BlueprintNode,
    to: &BlueprintNode,
    style: StyleToken,
    options: &RouteOptions,
) -> ConnectorPath {
    let start = Point {
        x: from.x,
        y: from.y,
    };
    let end = Point { x: to.x, y: to.y };

    let (path_kind, points) = match style {
        StyleToken::OrganicBlueprint => {
            // Quadratic curve through the horizontal midpoint at the hub's
            // height, matching the studio's organic spoke shape.
            let control = Point {
                x: from.x + (to.x - from.x) / 2.0,
                y: from.y,
            };
            (PathKind::Curved, vec![start, control, end])
        }
        StyleToken::CyberWorkflow => {
            let elbow = Point { x: to.x, y: from.y };
            (PathKind::Orthogonal, vec![start, elbow, end])
        }
        StyleToken::HandDrawnSchematic => {
            let (jx, jy) = jitter_offsets(&from.id, &to.id, options);
            let control = Point {
                x: from.x + (to.x - from.x) / 2.0 + jx,
                y: from.y + (to.y - from.y) / 2.0 + jy,
            };
            (PathKind::Jittered, vec![start, control, end])
        }
        StyleToken::ProcessFlow
        | StyleToken::BauhausGeometric
        | StyleToken::MinimalistGeometric => (PathKind::Straight, vec![start, end]),
    };

    ConnectorPath {
        from: from.id.clone(),
        to: to.id.clone(),
        path_kind,
        stroke_color: to.color.clone(),
        dashed: matches!(
            style,
            StyleToken::OrganicBlueprint | StyleToken::HandDrawnSchematic
        ),
        points,
    }
}

/// Midpoint perturbation for a node pair, in `[-amplitude, amplitude]` on
/// each axis. Stable for a given (from, to, seed) triple so renders are
/// reproducible; vary `jitter_seed` to get fresh sketch lines.
fn jitter_offsets(from_id: &str, to_id: &str, options: &RouteOptions) -> (f64, f64) {
    let mut h = fnv1a(from_id.as_bytes(), 0xcbf2_9ce4_8422_2325);
    h = fnv1a(to_id.as_bytes(), h ^ 0x9e37_79b9_7f4a_7c15);
    if let Some(seed) = options.jitter_seed {
        h = fnv1a(&seed.to_le_bytes(), h);
    }
    let amp = options.jitter_amplitude;
    let unit_x = ((h >> 8) & 0xffff) as f64 / 65535.0;
    let unit_y = ((h >> 32) & 0xffff) as f64 / 65535.0;
    (amp * (unit_x * 2.0 - 1.0), amp * (unit_y * 2.0 - 1.0))
}

fn fnv1a(bytes: &[u8], mut hash: u64) -> u64 {
    for b in bytes {
        hash ^= u64::from(*b);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}
