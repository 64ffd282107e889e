//! Promotional flyer/ad panel controller.

use crate::client::{GenerativeClient, Result};
use crate::session::RequestTracker;
use brandforge_core::FlyerConfig;
use brandforge_core::prompt::{refine_text_prompt, visual_asset_prompt};

pub struct PromoEngine<C: GenerativeClient> {
    client: C,
    loading: bool,
    tracker: RequestTracker,
}

impl<C: GenerativeClient> PromoEngine<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            loading: false,
            tracker: RequestTracker::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Generates a background theme for the campaign. Empty headline is a
    /// no-op; a response without an image keeps the current theme.
    pub async fn generate_theme(&mut self, config: &FlyerConfig) -> Result<Option<String>> {
        if config.headline.trim().is_empty() {
            return Ok(None);
        }
        self.loading = true;
        let _ticket = self.tracker.begin();
        let prompt = visual_asset_prompt(&config.headline);
        let result = self
            .client
            .generate_image(&prompt, config.aspect_ratio)
            .await;
        self.loading = false;
        result
    }

    /// Refines campaign copy. Falls back to the original text on any failure
    /// or empty answer, so this never surfaces an error to the panel.
    pub async fn refine_copy(&self, text: &str, context: &str) -> String {
        let prompt = refine_text_prompt(text, context);
        match self.client.generate_text(&prompt).await {
            Ok(refined) if !refined.trim().is_empty() => refined.trim().to_string(),
            Ok(_) => text.to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "copy refinement failed, keeping original");
                text.to_string()
            }
        }
    }
}
