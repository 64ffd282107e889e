//! Outbound prompt templates.
//!
//! Four fixed template families: logo, blueprint-from-topic, visual asset and
//! copy refinement. Nothing here branches beyond string interpolation plus a
//! conditional style/brand clause.

use crate::model::{BrandIdentity, StyleFamily, StyleToken};

/// Prompt for a logo concept.
pub fn logo_prompt(description: &str, industry: &str, style: &str) -> String {
    format!(
        "Create a professional, high-resolution logo for a company. \
         Business: {description}. \
         Industry: {industry}. \
         Style: {style}. \
         Ensure a clean, isolated subject on a solid neutral background. Modern vector aesthetic."
    )
}

/// Prompt for a structured blueprint. Tiered styles ask the provider to emit
/// `y` values already in the three layout bands; every other style asks for
/// a central core node with surrounding steps.
pub fn blueprint_prompt(topic: &str, style: StyleToken, brand: Option<&BrandIdentity>) -> String {
    let mut prompt = format!(
        "Generate a structured blueprint for \"{topic}\" similar to a mind map. \
         Return a JSON object with nodes. Each node has: id, title, color (hex), \
         x (0-1000), y (0-1000), and points (array of strings)."
    );

    match style.family() {
        StyleFamily::Tiered => {
            prompt.push_str(
                " Arrange the process in three horizontal bands: input steps with y below 300, \
                 engine/processing steps with y between 300 and 600, output steps with y of 600 \
                 or above.",
            );
        }
        StyleFamily::HubSpoke | StyleFamily::Geometric => {
            prompt.push_str(
                " Include a central 'Core' node at 500,500. Add 5-8 surrounding steps.",
            );
        }
    }

    if let Some(brand) = brand {
        if !brand.name.is_empty() {
            prompt.push_str(&format!(
                " Brand context: {} ({}).",
                brand.name, brand.industry
            ));
        }
    }

    prompt
}

/// Prompt for a marketing visual.
pub fn visual_asset_prompt(theme: &str) -> String {
    format!(
        "High-end professional photography/graphic for marketing. Theme: {theme}. \
         Cinematic lighting, premium aesthetic."
    )
}

/// Prompt for copy refinement. The caller falls back to the original text on
/// any failure, so this never needs a defensive wrapper.
pub fn refine_text_prompt(text: &str, context: &str) -> String {
    format!(
        "Act as a senior copywriter. Improve this {context} text: \"{text}\". \
         Make it punchy and professional. Return ONLY the refined text."
    )
}
