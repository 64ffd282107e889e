//! Scene construction: positioned nodes + routed connectors + style → scene.
//!
//! Pure function of its arguments; connectors paint under nodes, nodes under
//! the optional brand decoration.

use crate::scene::{SceneGraph, SceneItem, TextAnchor, TextWeight};
use crate::style::{NodeShape, StylePolicy, node_shape, policy};
use brandforge_core::route::{ConnectorPath, Point};
use brandforge_core::{BlueprintNode, BrandIdentity, StyleToken};

const PANEL_FILL: &str = "#ffffff";
const PANEL_STROKE: &str = "#e2e8f0";
const PANEL_TEXT: &str = "#475569";
const TITLE_ON_SHAPE: &str = "#ffffff";
const TITLE_BESIDE_SHAPE: &str = "#1e293b";
const BRAND_TEXT: &str = "#334155";

/// Builds the visual scene for positioned nodes and routed connectors.
pub fn render(
    nodes: &[BlueprintNode],
    connectors: &[ConnectorPath],
    style: StyleToken,
    brand: Option<&BrandIdentity>,
) -> SceneGraph {
    let pol = policy(style);
    let mut scene = SceneGraph::new(style);

    for c in connectors {
        scene.push(SceneItem::Path {
            path_kind: c.path_kind,
            points: c.points.clone(),
            stroke: c.stroke_color.clone(),
            width: pol.connector_width,
            dashed: c.dashed,
            opacity: pol.connector_opacity,
        });
    }

    for node in nodes {
        push_node(&mut scene, node, style, &pol);
    }

    if let Some(brand) = brand {
        push_brand(&mut scene, brand);
    }

    scene
}

fn push_node(scene: &mut SceneGraph, node: &BlueprintNode, style: StyleToken, pol: &StylePolicy) {
    let shape = node_shape(style, &node.id);
    let (x, y) = (node.x, node.y);

    if pol.glow {
        scene.push(SceneItem::Circle {
            cx: x,
            cy: y,
            r: 60.0,
            fill: node.color.clone(),
            opacity: 0.1,
        });
    }

    let (title_y, title_fill, panel_top) = match shape {
        NodeShape::Bubble => {
            scene.push(SceneItem::Rect {
                x: x - 80.0,
                y: y - 30.0,
                width: 160.0,
                height: 60.0,
                rx: 30.0,
                fill: node.color.clone(),
                stroke: None,
                opacity: 1.0,
            });
            (y + 5.0, TITLE_ON_SHAPE, y + 40.0)
        }
        NodeShape::Card => {
            scene.push(SceneItem::Rect {
                x: x - 90.0,
                y: y - 32.0,
                width: 180.0,
                height: 64.0,
                rx: 12.0,
                fill: node.color.clone(),
                stroke: None,
                opacity: 1.0,
            });
            if let Some(tier) = node.tier {
                let tag = match tier {
                    brandforge_core::Tier::Input => "INPUT",
                    brandforge_core::Tier::Engine => "ENGINE",
                    brandforge_core::Tier::Output => "OUTPUT",
                };
                scene.push(SceneItem::Text {
                    x,
                    y: y - 12.0,
                    content: tag.to_string(),
                    size: 9.0,
                    weight: TextWeight::Bold,
                    fill: TITLE_ON_SHAPE.to_string(),
                    anchor: TextAnchor::Middle,
                });
            }
            (y + 8.0, TITLE_ON_SHAPE, y + 44.0)
        }
        NodeShape::Circle => {
            scene.push(SceneItem::Circle {
                cx: x,
                cy: y,
                r: 50.0,
                fill: node.color.clone(),
                opacity: 1.0,
            });
            (y + 72.0, TITLE_BESIDE_SHAPE, y + 82.0)
        }
        NodeShape::Square => {
            scene.push(SceneItem::Rect {
                x: x - 45.0,
                y: y - 45.0,
                width: 90.0,
                height: 90.0,
                rx: 0.0,
                fill: node.color.clone(),
                stroke: None,
                opacity: 1.0,
            });
            (y + 72.0, TITLE_BESIDE_SHAPE, y + 82.0)
        }
        NodeShape::Triangle => {
            scene.push(SceneItem::Polygon {
                points: vec![
                    Point { x, y: y - 55.0 },
                    Point {
                        x: x - 52.0,
                        y: y + 40.0,
                    },
                    Point {
                        x: x + 52.0,
                        y: y + 40.0,
                    },
                ],
                fill: node.color.clone(),
                opacity: 1.0,
            });
            (y + 72.0, TITLE_BESIDE_SHAPE, y + 82.0)
        }
        NodeShape::Ellipse => {
            scene.push(SceneItem::Ellipse {
                cx: x,
                cy: y,
                rx: 62.0,
                ry: 42.0,
                fill: node.color.clone(),
                opacity: 1.0,
            });
            (y + 72.0, TITLE_BESIDE_SHAPE, y + 82.0)
        }
    };

    if let Some(icon) = &node.icon {
        scene.push(SceneItem::Icon {
            x,
            y: y - 48.0,
            name: icon.clone(),
            size: 20.0,
            fill: node.color.clone(),
        });
    }

    let title = if pol.uppercase_titles {
        node.title.to_uppercase()
    } else {
        node.title.clone()
    };
    scene.push(SceneItem::Text {
        x,
        y: title_y,
        content: title,
        size: 14.0,
        weight: TextWeight::Bold,
        fill: title_fill.to_string(),
        anchor: TextAnchor::Middle,
    });

    push_detail_panel(scene, node, panel_top, pol);
}

/// Detail panel below the node: up to `detail_limit` bullet points for
/// compact styles, every point for spacious ones.
fn push_detail_panel(
    scene: &mut SceneGraph,
    node: &BlueprintNode,
    top: f64,
    pol: &StylePolicy,
) {
    let shown: Vec<&String> = match pol.detail_limit {
        Some(limit) => node.points.iter().take(limit).collect(),
        None => node.points.iter().collect(),
    };
    if shown.is_empty() {
        return;
    }

    let row_height = 14.0;
    let height = 16.0 + row_height * shown.len() as f64;
    scene.push(SceneItem::Rect {
        x: node.x - 80.0,
        y: top,
        width: 180.0,
        height,
        rx: 12.0,
        fill: PANEL_FILL.to_string(),
        stroke: Some(PANEL_STROKE.to_string()),
        opacity: 1.0,
    });
    for (i, point) in shown.iter().enumerate() {
        scene.push(SceneItem::Text {
            x: node.x - 70.0,
            y: top + 18.0 + row_height * i as f64,
            content: (*point).clone(),
            size: 10.0,
            weight: TextWeight::Normal,
            fill: PANEL_TEXT.to_string(),
            anchor: TextAnchor::Start,
        });
    }
}

fn push_brand(scene: &mut SceneGraph, brand: &BrandIdentity) {
    if !brand.name.is_empty() {
        scene.push(SceneItem::Text {
            x: 24.0,
            y: scene.height - 24.0,
            content: brand.name.clone(),
            size: 16.0,
            weight: TextWeight::Bold,
            fill: BRAND_TEXT.to_string(),
            anchor: TextAnchor::Start,
        });
    }
    if let Some(logo) = &brand.logo {
        scene.push(SceneItem::Image {
            x: scene.width - 120.0,
            y: 24.0,
            width: 96.0,
            height: 96.0,
            href: logo.clone(),
        });
    }
}
