use serde::{Deserialize, Serialize};

/// Logical canvas edge length. Every blueprint coordinate lives in
/// `[0, CANVAS_UNITS]` on both axes regardless of the final render size.
pub const CANVAS_UNITS: f64 = 1000.0;

/// Pipeline tier of a node in tiered layout styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Input,
    Engine,
    Output,
}

/// One labeled, positioned entity in a blueprint graph.
///
/// Nodes are created in bulk from a single provider response and never mutated
/// field-by-field afterwards; regeneration replaces the whole graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintNode {
    pub id: String,
    pub title: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
}

/// A generated process/workflow graph. Non-empty by construction (the parser
/// rejects payloads without at least one node).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub nodes: Vec<BlueprintNode>,
}

/// Layout/render family of a style token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFamily {
    Tiered,
    HubSpoke,
    Geometric,
}

/// The user-selected aesthetic driving both positioning and rendering rules.
///
/// The enumeration is closed; unrecognized names fall back to
/// [`StyleToken::OrganicBlueprint`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleToken {
    ProcessFlow,
    OrganicBlueprint,
    CyberWorkflow,
    BauhausGeometric,
    HandDrawnSchematic,
    MinimalistGeometric,
}

impl StyleToken {
    pub const ALL: [StyleToken; 6] = [
        StyleToken::ProcessFlow,
        StyleToken::OrganicBlueprint,
        StyleToken::CyberWorkflow,
        StyleToken::BauhausGeometric,
        StyleToken::HandDrawnSchematic,
        StyleToken::MinimalistGeometric,
    ];

    /// Resolves a user-facing style name. Matching ignores case and
    /// whitespace; anything unrecognized maps to the organic default.
    pub fn from_name(name: &str) -> Self {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "processflow" => Self::ProcessFlow,
            "organicblueprint" | "organic" => Self::OrganicBlueprint,
            "cyberworkflow" | "cyber" => Self::CyberWorkflow,
            "bauhausgeometric" | "bauhaus" => Self::BauhausGeometric,
            "handdrawnschematic" | "handdrawn" => Self::HandDrawnSchematic,
            "minimalistgeometric" | "minimalist" => Self::MinimalistGeometric,
            _ => Self::OrganicBlueprint,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ProcessFlow => "Process Flow",
            Self::OrganicBlueprint => "Organic Blueprint",
            Self::CyberWorkflow => "Cyber Workflow",
            Self::BauhausGeometric => "Bauhaus Geometric",
            Self::HandDrawnSchematic => "Hand-Drawn Schematic",
            Self::MinimalistGeometric => "Minimalist Geometric",
        }
    }

    pub fn family(&self) -> StyleFamily {
        match self {
            Self::ProcessFlow => StyleFamily::Tiered,
            Self::OrganicBlueprint | Self::CyberWorkflow | Self::HandDrawnSchematic => {
                StyleFamily::HubSpoke
            }
            Self::BauhausGeometric | Self::MinimalistGeometric => StyleFamily::Geometric,
        }
    }
}

impl Default for StyleToken {
    fn default() -> Self {
        Self::OrganicBlueprint
    }
}

/// Ambient brand context. Read-only from the layout/render core's perspective:
/// it seeds prompt text and optionally decorates the rendered scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandIdentity {
    pub name: String,
    pub industry: String,
    pub address: String,
    pub contact: String,
    pub colors: String,
    #[serde(default)]
    pub products: Vec<String>,
    /// Base64 data URI or URL of the generated logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Provider aspect ratios. Wire strings are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "4:3")]
    Classic,
    #[serde(rename = "3:4")]
    ClassicPortrait,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
            Self::Classic => "4:3",
            Self::ClassicPortrait => "3:4",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim() {
            "1:1" => Some(Self::Square),
            "16:9" => Some(Self::Landscape),
            "9:16" => Some(Self::Portrait),
            "4:3" => Some(Self::Classic),
            "3:4" => Some(Self::ClassicPortrait),
            _ => None,
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::Square
    }
}

/// Output resolutions offered by the promo editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "720p")]
    Hd,
    #[serde(rename = "1080p")]
    FullHd,
    #[serde(rename = "4K")]
    UltraHd,
}

impl Default for Resolution {
    fn default() -> Self {
        Self::FullHd
    }
}

/// A selectable logo design language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoStyle {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
}

/// The built-in design languages offered by the mark editor.
pub fn builtin_logo_styles() -> Vec<LogoStyle> {
    fn style(id: &str, name: &str, icon: &str, description: &str) -> LogoStyle {
        LogoStyle {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
        }
    }

    vec![
        style(
            "minimalist",
            "Minimalist",
            "grid_view",
            "Clean lines and lots of white space",
        ),
        style(
            "vintage",
            "Vintage",
            "history_edu",
            "Classic, textured, and heritage-focused",
        ),
        style(
            "3d",
            "3D Isometric",
            "view_in_ar",
            "Depth and modern tech perspective",
        ),
        style(
            "corporate",
            "Corporate",
            "corporate_fare",
            "Professional, stable, and trust-evoking",
        ),
    ]
}

/// Campaign configuration for the promo editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyerConfig {
    #[serde(default)]
    pub company_url: String,
    pub topic: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub resolution: Resolution,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    pub headline: String,
    pub body: String,
    pub cta: String,
}
