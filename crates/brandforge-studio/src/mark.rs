//! Logo/mark panel controller.

use crate::client::{GenerativeClient, Result};
use crate::session::RequestTracker;
use brandforge_core::prompt::logo_prompt;
use brandforge_core::{AspectRatio, LogoStyle};

/// One successfully generated identity variation.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoVariation {
    pub style_id: String,
    /// Data URI of the generated image.
    pub image: String,
}

pub struct MarkEngine<C: GenerativeClient> {
    client: C,
    loading: bool,
    tracker: RequestTracker,
}

impl<C: GenerativeClient> MarkEngine<C> {
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

    /// Generates a single logo concept.
    ///
    /// Missing required input is a no-op (`Ok(None)`), not an error. A
    /// successful response without an image part is also `Ok(None)`.
    pub async fn generate_logo(
        &mut self,
        description: &str,
        industry: &str,
        style: &str,
    ) -> Result<Option<String>> {
        if description.trim().is_empty() || industry.trim().is_empty() {
            return Ok(None);
        }
        self.loading = true;
        let _ticket = self.tracker.begin();
        let prompt = logo_prompt(description, industry, style);
        let result = self.client.generate_image(&prompt, AspectRatio::Square).await;
        self.loading = false;
        result
    }

    /// Generates one variation per style, in parallel, with independent
    /// failure isolation: fewer results than requested is a success as long
    /// as at least one variation was produced.
    pub async fn generate_identity_system(
        &mut self,
        description: &str,
        industry: &str,
        styles: &[LogoStyle],
    ) -> Result<Vec<LogoVariation>> {
        if description.trim().is_empty() || industry.trim().is_empty() || styles.is_empty() {
            return Ok(Vec::new());
        }
        self.loading = true;
        let _ticket = self.tracker.begin();

        let client = &self.client;
        let requests = styles.iter().map(|style| {
            let prompt = logo_prompt(description, industry, &style.id);
            let style_id = style.id.clone();
            async move {
                let result = client.generate_image(&prompt, AspectRatio::Square).await;
                (style_id, result)
            }
        });
        let results = futures::future::join_all(requests).await;
        self.loading = false;

        let mut variations = Vec::new();
        let mut first_error = None;
        for (style_id, result) in results {
            match result {
                Ok(Some(image)) => variations.push(LogoVariation { style_id, image }),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(style = %style_id, error = %err, "logo variation failed");
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }

        if variations.is_empty() {
            if let Some(err) = first_error {
                return Err(err);
            }
        }
        Ok(variations)
    }
}
