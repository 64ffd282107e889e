//! Retained-mode scene description.
//!
//! A [`SceneGraph`] is a flat, serializable list of primitives on the logical
//! 1000x1000 canvas, in paint order. It is style-agnostic: the per-style
//! decisions happen while building the scene, never while drawing it.

use brandforge_core::route::{PathKind, Point};
use brandforge_core::{CANVAS_UNITS, StyleToken};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneItem {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        opacity: f64,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        fill: String,
        opacity: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
        fill: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<String>,
        opacity: f64,
    },
    Polygon {
        points: Vec<Point>,
        fill: String,
        opacity: f64,
    },
    /// Connector stroke. `points` is interpreted per `path_kind`, exactly as
    /// in the router's output.
    Path {
        path_kind: PathKind,
        points: Vec<Point>,
        stroke: String,
        width: f64,
        dashed: bool,
        opacity: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        size: f64,
        weight: TextWeight,
        fill: String,
        anchor: TextAnchor,
    },
    /// Symbolic icon reference (ligature-font name, e.g. `account_tree`).
    Icon {
        x: f64,
        y: f64,
        name: String,
        size: f64,
        fill: String,
    },
    /// Embedded raster image (data URI or URL), e.g. the brand logo.
    Image {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        href: String,
    },
}

/// The renderer's output: paint-ordered primitives on the logical canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    pub width: f64,
    pub height: f64,
    pub style: StyleToken,
    pub items: Vec<SceneItem>,
}

impl SceneGraph {
    pub fn new(style: StyleToken) -> Self {
        Self {
            width: CANVAS_UNITS,
            height: CANVAS_UNITS,
            style,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: SceneItem) {
        self.items.push(item);
    }

    /// Number of connector strokes in the scene.
    pub fn connector_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| matches!(i, SceneItem::Path { .. }))
            .count()
    }

    /// All text contents, in paint order. Test convenience.
    pub fn text_contents(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|i| match i {
                SceneItem::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}
