//! SVG backend for [`SceneGraph`].

use crate::scene::{SceneGraph, SceneItem, TextAnchor, TextWeight};
use brandforge_core::route::{PathKind, Point};
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Extra space around the logical canvas in the viewBox.
    pub viewbox_padding: f64,
    /// Optional solid background rectangle (CSS color).
    pub background: Option<String>,
    pub font_family: String,
    /// Ligature font used for symbolic icon names.
    pub icon_font_family: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            viewbox_padding: 8.0,
            background: None,
            font_family: "ui-sans-serif, system-ui, sans-serif".to_string(),
            icon_font_family: "Material Symbols Outlined".to_string(),
        }
    }
}

/// Serializes a scene to a standalone SVG document.
pub fn scene_to_svg(scene: &SceneGraph, options: &SvgOptions) -> String {
    let pad = options.viewbox_padding.max(0.0);
    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        fmt(-pad),
        fmt(-pad),
        fmt(scene.width + pad * 2.0),
        fmt(scene.height + pad * 2.0)
    );

    if let Some(bg) = &options.background {
        let _ = writeln!(
            &mut out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            fmt(-pad),
            fmt(-pad),
            fmt(scene.width + pad * 2.0),
            fmt(scene.height + pad * 2.0),
            escape_xml(bg)
        );
    }

    for item in &scene.items {
        write_item(&mut out, item, options);
    }

    out.push_str("</svg>\n");
    out
}

fn write_item(out: &mut String, item: &SceneItem, options: &SvgOptions) {
    match item {
        SceneItem::Circle {
            cx,
            cy,
            r,
            fill,
            opacity,
        } => {
            let _ = writeln!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"{}/>"#,
                fmt(*cx),
                fmt(*cy),
                fmt(*r),
                escape_xml(fill),
                opacity_attr(*opacity)
            );
        }
        SceneItem::Ellipse {
            cx,
            cy,
            rx,
            ry,
            fill,
            opacity,
        } => {
            let _ = writeln!(
                out,
                r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}"{}/>"#,
                fmt(*cx),
                fmt(*cy),
                fmt(*rx),
                fmt(*ry),
                escape_xml(fill),
                opacity_attr(*opacity)
            );
        }
        SceneItem::Rect {
            x,
            y,
            width,
            height,
            rx,
            fill,
            stroke,
            opacity,
        } => {
            let stroke_attr = match stroke {
                Some(s) => format!(r#" stroke="{}""#, escape_xml(s)),
                None => String::new(),
            };
            let _ = writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"{}{}/>"#,
                fmt(*x),
                fmt(*y),
                fmt(*width),
                fmt(*height),
                fmt(*rx),
                escape_xml(fill),
                stroke_attr,
                opacity_attr(*opacity)
            );
        }
        SceneItem::Polygon {
            points,
            fill,
            opacity,
        } => {
            let mut pts = String::new();
            for (idx, p) in points.iter().enumerate() {
                if idx > 0 {
                    pts.push(' ');
                }
                let _ = write!(&mut pts, "{},{}", fmt(p.x), fmt(p.y));
            }
            let _ = writeln!(
                out,
                r#"<polygon points="{}" fill="{}"{}/>"#,
                pts,
                escape_xml(fill),
                opacity_attr(*opacity)
            );
        }
        SceneItem::Path {
            path_kind,
            points,
            stroke,
            width,
            dashed,
            opacity,
        } => {
            let d = path_d(*path_kind, points);
            let dash = if *dashed {
                r#" stroke-dasharray="5,5""#
            } else {
                ""
            };
            let _ = writeln!(
                out,
                r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"{}{}/>"#,
                d,
                escape_xml(stroke),
                fmt(*width),
                dash,
                opacity_attr(*opacity)
            );
        }
        SceneItem::Text {
            x,
            y,
            content,
            size,
            weight,
            fill,
            anchor,
        } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let weight = match weight {
                TextWeight::Normal => "normal",
                TextWeight::Bold => "bold",
            };
            let _ = writeln!(
                out,
                r#"<text x="{}" y="{}" text-anchor="{}" font-family="{}" font-size="{}" font-weight="{}" fill="{}">{}</text>"#,
                fmt(*x),
                fmt(*y),
                anchor,
                escape_xml(&options.font_family),
                fmt(*size),
                weight,
                escape_xml(fill),
                escape_xml(content)
            );
        }
        SceneItem::Icon {
            x,
            y,
            name,
            size,
            fill,
        } => {
            let _ = writeln!(
                out,
                r#"<text x="{}" y="{}" text-anchor="middle" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
                fmt(*x),
                fmt(*y),
                escape_xml(&options.icon_font_family),
                fmt(*size),
                escape_xml(fill),
                escape_xml(name)
            );
        }
        SceneItem::Image {
            x,
            y,
            width,
            height,
            href,
        } => {
            let _ = writeln!(
                out,
                r#"<image x="{}" y="{}" width="{}" height="{}" href="{}"/>"#,
                fmt(*x),
                fmt(*y),
                fmt(*width),
                fmt(*height),
                escape_xml(href)
            );
        }
    }
}

/// Path data for a connector. Straight and orthogonal geometries are
/// polylines; curved and jittered geometries treat the middle point as a
/// quadratic control point.
fn path_d(kind: PathKind, points: &[Point]) -> String {
    let mut d = String::new();
    let Some(first) = points.first() else {
        return d;
    };
    let _ = write!(&mut d, "M {} {}", fmt(first.x), fmt(first.y));
    match kind {
        PathKind::Straight | PathKind::Orthogonal => {
            for p in &points[1..] {
                let _ = write!(&mut d, " L {} {}", fmt(p.x), fmt(p.y));
            }
        }
        PathKind::Curved | PathKind::Jittered => {
            if points.len() >= 3 {
                let _ = write!(
                    &mut d,
                    " Q {} {} {} {}",
                    fmt(points[1].x),
                    fmt(points[1].y),
                    fmt(points[2].x),
                    fmt(points[2].y)
                );
            } else if let Some(last) = points.get(1) {
                let _ = write!(&mut d, " L {} {}", fmt(last.x), fmt(last.y));
            }
        }
    }
    d
}

fn opacity_attr(opacity: f64) -> String {
    if (opacity - 1.0).abs() < 1e-9 {
        String::new()
    } else {
        format!(r#" opacity="{}""#, fmt(opacity))
    }
}

fn fmt(v: f64) -> String {
    // Round-trippable decimal form, avoiding `-0` and tiny float noise from
    // our own midpoint/jitter arithmetic.
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
