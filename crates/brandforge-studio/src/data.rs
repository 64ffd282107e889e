//! Blueprint panel controller: topic in, rendered workflow scene out.

use crate::client::{GenerativeClient, Result};
use crate::session::RequestTracker;
use brandforge_core::prompt::blueprint_prompt;
use brandforge_core::route::RouteOptions;
use brandforge_core::{
    Blueprint, BlueprintNode, BrandIdentity, ConnectorPath, StyleToken, assign_layout,
    blueprint_response_schema, parse_blueprint, route,
};
use brandforge_render::{SceneGraph, render};
use serde_json::{Value, json};

/// Everything the UI needs from one successful generation: the parsed graph,
/// the positioned nodes, routed connectors and the finished scene.
#[derive(Debug, Clone, PartialEq)]
pub struct BlueprintView {
    pub blueprint: Blueprint,
    pub nodes: Vec<BlueprintNode>,
    pub connectors: Vec<ConnectorPath>,
    pub scene: SceneGraph,
}

impl BlueprintView {
    /// Whole-graph snapshot suitable for the recent-projects store.
    pub fn project_data(&self) -> Value {
        json!({ "blueprint": self.blueprint })
    }
}

pub struct DataEngine<C: GenerativeClient> {
    client: C,
    loading: bool,
    tracker: RequestTracker,
    route_options: RouteOptions,
}

impl<C: GenerativeClient> DataEngine<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            loading: false,
            tracker: RequestTracker::default(),
            route_options: RouteOptions::default(),
        }
    }

    pub fn with_route_options(mut self, options: RouteOptions) -> Self {
        self.route_options = options;
        self
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Generates, parses, lays out, routes and renders one blueprint.
    ///
    /// An empty topic is a no-op. Provider failures propagate as errors; a
    /// payload that fails to parse yields `Ok(None)` (logged) so the panel
    /// returns to its idle state instead of crashing.
    pub async fn generate(
        &mut self,
        topic: &str,
        style: StyleToken,
        brand: Option<&BrandIdentity>,
    ) -> Result<Option<BlueprintView>> {
        if topic.trim().is_empty() {
            return Ok(None);
        }
        self.loading = true;
        let ticket = self.tracker.begin();

        let prompt = blueprint_prompt(topic, style, brand);
        let schema = blueprint_response_schema();
        let response = self.client.generate_structured(&prompt, &schema).await;
        self.loading = false;

        let raw = response?;
        if !self.tracker.is_current(ticket) {
            // Superseded by a newer request while awaiting.
            return Ok(None);
        }

        match parse_blueprint(&raw) {
            Ok(blueprint) => {
                let nodes = assign_layout(&blueprint.nodes, style);
                let connectors = route(&nodes, style, &self.route_options);
                let scene = render(&nodes, &connectors, style, brand);
                Ok(Some(BlueprintView {
                    blueprint,
                    nodes,
                    connectors,
                    scene,
                }))
            }
            Err(err) => {
                tracing::warn!(error = %err, "blueprint payload rejected");
                Ok(None)
            }
        }
    }
}
