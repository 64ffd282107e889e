use assert_cmd::Command;

const PAYLOAD: &str = r##"```json
{"nodes":[
    {"id":"core","title":"Core","color":"#ff8800","x":500,"y":500,"points":["a"]},
    {"id":"s1","title":"Step 1","color":"#00aaff","x":200,"y":300}
]}
```"##;

fn write_fixture(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("blueprint.json");
    std::fs::write(&path, PAYLOAD).unwrap();
    path
}

#[test]
fn parse_normalizes_fenced_payloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir);

    let output = Command::cargo_bin("brandforge-cli")
        .unwrap()
        .arg("parse")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["nodes"].as_array().unwrap().len(), 2);
    assert_eq!(value["nodes"][0]["id"], "core");
}

#[test]
fn layout_reports_connectors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir);

    let output = Command::cargo_bin("brandforge-cli")
        .unwrap()
        .args(["layout", "--style", "Organic Blueprint"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["style"], "Organic Blueprint");
    assert_eq!(value["connectors"].as_array().unwrap().len(), 1);
}

#[test]
fn render_writes_svg_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir);

    let output = Command::cargo_bin("brandforge-cli")
        .unwrap()
        .arg("render")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).unwrap();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("Step 1"));
}

#[test]
fn unknown_flag_exits_with_usage() {
    Command::cargo_bin("brandforge-cli")
        .unwrap()
        .arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn invalid_payload_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"items\": []}").unwrap();

    Command::cargo_bin("brandforge-cli")
        .unwrap()
        .arg("parse")
        .arg(&path)
        .assert()
        .failure()
        .code(1);
}
