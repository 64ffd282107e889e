//! Local persisted state: recent projects, generated-asset history and the
//! brand identity.
//!
//! The store is an injected port; the layout/render core never touches it.
//! State is loaded once at startup and written back after each mutating
//! action. Only one logical operation writes at a time in this design, so
//! the file store does plain whole-document replace.

use base64::Engine as _;
use brandforge_core::BrandIdentity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Mutex;

/// Bound on the recent-projects list; oldest entries are evicted.
pub const RECENT_PROJECT_CAP: usize = 10;
/// Bound on the generated-assets history; oldest entries are evicted.
pub const ASSET_HISTORY_CAP: usize = 20;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store poisoned")]
    Poisoned,
}

/// The studio module a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Landing,
    Logos,
    Infographics,
    Flyers,
    Settings,
}

/// A saved workspace entry shown on the landing screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub kind: ModuleKind,
    pub updated_at: DateTime<Utc>,
    pub icon: String,
    pub data: Value,
    #[serde(default)]
    pub assets: Vec<String>,
}

impl Project {
    pub fn new(name: impl Into<String>, kind: ModuleKind, icon: impl Into<String>, data: Value) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            kind,
            updated_at: Utc::now(),
            icon: icon.into(),
            data,
            assets: Vec::new(),
        }
    }
}

/// One generated asset (logo, flyer theme, blueprint snapshot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: String,
    pub kind: ModuleKind,
    pub label: String,
    /// Data URI or serialized payload.
    pub payload: String,
    pub created_at: DateTime<Utc>,
}

impl AssetRecord {
    pub fn new(kind: ModuleKind, label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            label: label.into(),
            payload: payload.into(),
            created_at: Utc::now(),
        }
    }

    /// Decodes a `data:<mime>;base64,` payload into raw bytes for the
    /// download/export path. `None` for non-image payloads (e.g. blueprint
    /// snapshots).
    pub fn decode_image(&self) -> Option<(String, Vec<u8>)> {
        let rest = self.payload.strip_prefix("data:")?;
        let (mime, data) = rest.split_once(";base64,")?;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(data.trim())
            .ok()?;
        Some((mime.to_string(), bytes))
    }
}

/// Whole persisted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudioState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandIdentity>,
    #[serde(default)]
    pub recent_projects: Vec<Project>,
    #[serde(default)]
    pub asset_history: Vec<AssetRecord>,
}

impl StudioState {
    /// Prepends (or re-prepends) a project, most recent first, capped at
    /// [`RECENT_PROJECT_CAP`].
    pub fn remember_project(&mut self, project: Project) {
        self.recent_projects.retain(|p| p.id != project.id);
        self.recent_projects.insert(0, project);
        self.recent_projects.truncate(RECENT_PROJECT_CAP);
    }

    /// Prepends an asset record, most recent first, capped at
    /// [`ASSET_HISTORY_CAP`].
    pub fn remember_asset(&mut self, asset: AssetRecord) {
        self.asset_history.insert(0, asset);
        self.asset_history.truncate(ASSET_HISTORY_CAP);
    }

    pub fn set_brand(&mut self, brand: BrandIdentity) {
        self.brand = Some(brand);
    }
}

/// Key-value text storage port for the studio document.
pub trait StudioStore: Send + Sync {
    fn load(&self) -> Result<StudioState>;
    fn save(&self, state: &StudioState) -> Result<()>;
}

/// File-backed JSON store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StudioStore for JsonFileStore {
    fn load(&self) -> Result<StudioState> {
        if !self.path.exists() {
            return Ok(StudioState::default());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, state: &StudioState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<StudioState>,
}

impl StudioStore for MemoryStore {
    fn load(&self) -> Result<StudioState> {
        Ok(self.state.lock().map_err(|_| StoreError::Poisoned)?.clone())
    }

    fn save(&self, state: &StudioState) -> Result<()> {
        *self.state.lock().map_err(|_| StoreError::Poisoned)? = state.clone();
        Ok(())
    }
}
