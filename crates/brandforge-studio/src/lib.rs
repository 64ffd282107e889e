#![forbid(unsafe_code)]

//! Studio layer: panel controllers, generative API client and local
//! persistence.
//!
//! Everything stateful lives here. The controllers own per-panel state (input,
//! loading flag, latest-request ticket), call the [`client::GenerativeClient`]
//! port, feed the core's parse/layout/route pipeline and hand results to the
//! injected [`store::StudioStore`]. The core and render crates stay pure.

pub mod client;
pub mod config;
pub mod data;
pub mod mark;
pub mod promo;
pub mod session;
pub mod store;

pub use client::{GeminiClient, GenerativeClient, ProviderError};
pub use config::StudioConfig;
pub use data::{BlueprintView, DataEngine};
pub use mark::{LogoVariation, MarkEngine};
pub use promo::PromoEngine;
pub use session::{RequestTicket, RequestTracker, StudioSession};
pub use store::{
    ASSET_HISTORY_CAP, AssetRecord, JsonFileStore, MemoryStore, ModuleKind, Project,
    RECENT_PROJECT_CAP, StoreError, StudioState, StudioStore,
};
