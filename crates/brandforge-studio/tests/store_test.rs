use brandforge_core::BrandIdentity;
use brandforge_studio::{
    ASSET_HISTORY_CAP, AssetRecord, JsonFileStore, MemoryStore, ModuleKind, Project,
    RECENT_PROJECT_CAP, StudioSession, StudioState, StudioStore,
};
use serde_json::json;

fn project(name: &str) -> Project {
    Project::new(name, ModuleKind::Infographics, "account_tree", json!({}))
}

#[test]
fn recent_projects_are_capped_most_recent_first() {
    let mut state = StudioState::default();
    for i in 0..RECENT_PROJECT_CAP + 2 {
        state.remember_project(project(&format!("p{i}")));
    }
    assert_eq!(state.recent_projects.len(), RECENT_PROJECT_CAP);
    assert_eq!(state.recent_projects[0].name, "p11");
    // Oldest two were evicted.
    assert!(state.recent_projects.iter().all(|p| p.name != "p0" && p.name != "p1"));
}

#[test]
fn saving_an_existing_project_moves_it_to_the_front() {
    let mut state = StudioState::default();
    let first = project("first");
    let id = first.id.clone();
    state.remember_project(first.clone());
    state.remember_project(project("second"));

    let mut updated = first;
    updated.name = "first, revised".to_string();
    state.remember_project(updated);

    assert_eq!(state.recent_projects.len(), 2);
    assert_eq!(state.recent_projects[0].id, id);
    assert_eq!(state.recent_projects[0].name, "first, revised");
}

#[test]
fn asset_history_is_capped() {
    let mut state = StudioState::default();
    for i in 0..ASSET_HISTORY_CAP + 5 {
        state.remember_asset(AssetRecord::new(
            ModuleKind::Logos,
            format!("logo {i}"),
            "data:image/png;base64,AA==",
        ));
    }
    assert_eq!(state.asset_history.len(), ASSET_HISTORY_CAP);
    assert_eq!(state.asset_history[0].label, "logo 24");
}

#[test]
fn asset_image_payloads_decode_for_download() {
    // "ABC" base64-encoded.
    let asset = AssetRecord::new(ModuleKind::Logos, "mark", "data:image/png;base64,QUJD");
    let (mime, bytes) = asset.decode_image().unwrap();
    assert_eq!(mime, "image/png");
    assert_eq!(bytes, b"ABC");

    let snapshot = AssetRecord::new(ModuleKind::Infographics, "bp", "{\"nodes\":[]}");
    assert!(snapshot.decode_image().is_none());
}

#[test]
fn memory_store_round_trips() {
    let store = MemoryStore::default();
    let mut state = StudioState::default();
    state.set_brand(BrandIdentity {
        name: "Acme".to_string(),
        ..BrandIdentity::default()
    });
    store.save(&state).unwrap();
    assert_eq!(store.load().unwrap(), state);
}

#[test]
fn file_store_round_trips_and_defaults_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studio").join("state.json");

    let store = JsonFileStore::new(&path);
    assert_eq!(store.load().unwrap(), StudioState::default());

    let mut state = StudioState::default();
    state.remember_project(project("persisted"));
    state.remember_asset(AssetRecord::new(ModuleKind::Flyers, "theme", "data:,x"));
    store.save(&state).unwrap();

    let reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.load().unwrap(), state);
}

#[test]
fn session_persists_mutations_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut session = StudioSession::open(JsonFileStore::new(&path)).unwrap();
    session
        .set_brand(BrandIdentity {
            name: "Acme".to_string(),
            industry: "logistics".to_string(),
            ..BrandIdentity::default()
        })
        .unwrap();
    session.remember_project(project("saved")).unwrap();
    drop(session);

    let session = StudioSession::open(JsonFileStore::new(&path)).unwrap();
    assert_eq!(session.brand().unwrap().name, "Acme");
    assert_eq!(session.state().recent_projects[0].name, "saved");
}
