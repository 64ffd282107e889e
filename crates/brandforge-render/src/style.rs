//! Per-style render policy.
//!
//! One dispatch table instead of one code path per style: each token maps to
//! a [`StylePolicy`] describing node shape, text treatment, detail-panel
//! truncation and connector styling. Unknown tokens never reach this module;
//! [`StyleToken::from_name`] already collapses them onto the organic default.

use brandforge_core::StyleToken;
use brandforge_core::layout::geometric_shape_index;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// Pill-shaped bubble with a soft glow halo.
    Bubble,
    /// Squared-off card, used by the tiered pipeline style.
    Card,
    Circle,
    Square,
    Triangle,
    Ellipse,
}

/// Shape set geometric styles draw from, keyed by node id.
const GEOMETRIC_SHAPES: [NodeShape; 4] = [
    NodeShape::Circle,
    NodeShape::Square,
    NodeShape::Triangle,
    NodeShape::Ellipse,
];

#[derive(Debug, Clone, Copy)]
pub struct StylePolicy {
    pub uppercase_titles: bool,
    /// `None` shows every detail point (spacious styles); `Some(n)` truncates.
    pub detail_limit: Option<usize>,
    pub connector_width: f64,
    pub connector_opacity: f64,
    /// Halo circle behind each node, hub-and-spoke bubbles only.
    pub glow: bool,
}

/// Resolves the policy for a style token. Closed dispatch; every token has a
/// branch and the organic branch doubles as the fallback for callers that
/// bypass [`StyleToken::from_name`].
pub fn policy(style: StyleToken) -> StylePolicy {
    match style {
        StyleToken::ProcessFlow => StylePolicy {
            uppercase_titles: false,
            detail_limit: Some(3),
            connector_width: 2.0,
            connector_opacity: 0.6,
            glow: false,
        },
        StyleToken::CyberWorkflow => StylePolicy {
            uppercase_titles: true,
            detail_limit: Some(3),
            connector_width: 2.0,
            connector_opacity: 0.8,
            glow: true,
        },
        StyleToken::BauhausGeometric => StylePolicy {
            uppercase_titles: true,
            detail_limit: Some(3),
            connector_width: 3.0,
            connector_opacity: 0.9,
            glow: false,
        },
        StyleToken::MinimalistGeometric => StylePolicy {
            uppercase_titles: false,
            detail_limit: Some(3),
            connector_width: 1.5,
            connector_opacity: 0.5,
            glow: false,
        },
        StyleToken::HandDrawnSchematic => StylePolicy {
            uppercase_titles: false,
            detail_limit: None,
            connector_width: 2.5,
            connector_opacity: 0.7,
            glow: false,
        },
        StyleToken::OrganicBlueprint => StylePolicy {
            uppercase_titles: false,
            detail_limit: None,
            connector_width: 3.0,
            connector_opacity: 0.4,
            glow: true,
        },
    }
}

/// Shape for one node under the given style. Geometric styles pick from the
/// shape set by a stable function of the node id; other styles are uniform.
pub fn node_shape(style: StyleToken, node_id: &str) -> NodeShape {
    match style {
        StyleToken::ProcessFlow => NodeShape::Card,
        StyleToken::OrganicBlueprint
        | StyleToken::CyberWorkflow
        | StyleToken::HandDrawnSchematic => NodeShape::Bubble,
        StyleToken::BauhausGeometric | StyleToken::MinimalistGeometric => {
            GEOMETRIC_SHAPES[geometric_shape_index(node_id, GEOMETRIC_SHAPES.len())]
        }
    }
}
