//! Layout assignment: final positions and tier classification per style.
//!
//! Provider coordinates are unreliable across calls, so tiered styles
//! re-derive the tier from `y` with fixed bands instead of trusting any
//! explicit tier field. All operations return a derived view; the parsed
//! blueprint is never mutated.

use crate::model::{BlueprintNode, StyleFamily, StyleToken, Tier};

/// Lower edge of the engine band.
pub const ENGINE_BAND_MIN_Y: f64 = 300.0;
/// Lower edge of the output band.
pub const OUTPUT_BAND_MIN_Y: f64 = 600.0;

/// Buckets a `y` coordinate into exactly one of the three fixed tier bands.
pub fn classify_tier(y: f64) -> Tier {
    if y < ENGINE_BAND_MIN_Y {
        Tier::Input
    } else if y < OUTPUT_BAND_MIN_Y {
        Tier::Engine
    } else {
        Tier::Output
    }
}

/// Index of the hub node: the first node whose id contains `core` or whose
/// title contains `core` case-insensitively, else the first node.
pub fn hub_index(nodes: &[BlueprintNode]) -> Option<usize> {
    if nodes.is_empty() {
        return None;
    }
    let found = nodes.iter().position(|n| {
        n.id.to_ascii_lowercase().contains("core")
            || n.title.to_ascii_lowercase().contains("core")
    });
    Some(found.unwrap_or(0))
}

/// Deterministic shape bucket for geometric styles: same id, same shape,
/// every render. Byte-sum keeps the mapping stable across platforms.
pub fn geometric_shape_index(id: &str, shape_count: usize) -> usize {
    if shape_count == 0 {
        return 0;
    }
    let sum: u64 = id.bytes().map(u64::from).sum();
    (sum % shape_count as u64) as usize
}

/// Assigns final positions and tier info for the chosen style.
///
/// Tiered styles bucket every node by `y`; hub-and-spoke and geometric styles
/// keep the provided coordinates. Idempotent for every style.
pub fn assign_layout(nodes: &[BlueprintNode], style: StyleToken) -> Vec<BlueprintNode> {
    match style.family() {
        StyleFamily::Tiered => nodes
            .iter()
            .map(|n| {
                let mut n = n.clone();
                n.tier = Some(classify_tier(n.y));
                n
            })
            .collect(),
        StyleFamily::HubSpoke | StyleFamily::Geometric => nodes.to_vec(),
    }
}

/// Nodes of one tier, in input order.
pub fn tier_members<'a>(nodes: &'a [BlueprintNode], tier: Tier) -> Vec<&'a BlueprintNode> {
    nodes.iter().filter(|n| n.tier == Some(tier)).collect()
}
