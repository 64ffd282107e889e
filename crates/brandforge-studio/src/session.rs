//! Session-level glue: persisted state lifecycle and request supersession.

use crate::store::{AssetRecord, Project, Result, StudioState, StudioStore};
use brandforge_core::BrandIdentity;

/// Token identifying one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Tracks the latest generation request per panel. A new request supersedes
/// the UI's interest in any prior one; responses arriving for a stale ticket
/// are ignored rather than cancelled.
#[derive(Debug, Default)]
pub struct RequestTracker {
    seq: u64,
}

impl RequestTracker {
    pub fn begin(&mut self) -> RequestTicket {
        self.seq += 1;
        RequestTicket(self.seq)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.seq
    }
}

/// Owns the persisted studio document: loaded once at startup, written back
/// after every mutating action.
pub struct StudioSession<S: StudioStore> {
    store: S,
    state: StudioState,
}

impl<S: StudioStore> StudioSession<S> {
    pub fn open(store: S) -> Result<Self> {
        let state = store.load()?;
        Ok(Self { store, state })
    }

    pub fn state(&self) -> &StudioState {
        &self.state
    }

    pub fn brand(&self) -> Option<&BrandIdentity> {
        self.state.brand.as_ref()
    }

    pub fn set_brand(&mut self, brand: BrandIdentity) -> Result<()> {
        self.state.set_brand(brand);
        self.store.save(&self.state)
    }

    pub fn remember_project(&mut self, project: Project) -> Result<()> {
        self.state.remember_project(project);
        self.store.save(&self.state)
    }

    pub fn remember_asset(&mut self, asset: AssetRecord) -> Result<()> {
        self.state.remember_asset(asset);
        self.store.save(&self.state)
    }
}
