//! Integration tests for the `mm` binary.
//!
//! Each test runs with an empty temporary HOME and a scrubbed environment so
//! no user config leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get an isolated command for running mm.
fn mm(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mm").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("MATTERMOST_CONFIG")
        .env_remove("MATTERMOST_URL")
        .env_remove("MATTERMOST_TOKEN")
        .env_remove("MATTERMOST_LOG");
    cmd
}

/// Start a mock server on a runtime that outlives the blocking command.
fn mock_server(rt: &tokio::runtime::Runtime, mocks: Vec<Mock>) -> MockServer {
    rt.block_on(async {
        let server = MockServer::start().await;
        for mock in mocks {
            mock.mount(&server).await;
        }
        server
    })
}

#[test]
fn help_flag_works() {
    let home = TempDir::new().unwrap();
    mm(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mattermost"));
}

#[test]
fn version_flag_works() {
    let home = TempDir::new().unwrap();
    mm(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mm"));
}

#[test]
fn completion_generates_script() {
    let home = TempDir::new().unwrap();
    mm(&home)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_mm"));
}

#[test]
fn channel_requires_token() {
    let home = TempDir::new().unwrap();
    mm(&home)
        .args(["channel", "get", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not authenticated"));
}

#[test]
fn invalid_url_flag_is_rejected() {
    let home = TempDir::new().unwrap();
    mm(&home)
        .args(["--url", "ftp://chat.example.com", "--token", "tok", "me"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scheme must be http or https"));
}

#[test]
fn channel_get_prints_json() {
    let home = TempDir::new().unwrap();
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = mock_server(
        &rt,
        vec![Mock::given(method("GET"))
            .and(path("/api/v4/channels/ch1"))
            .and(header("Authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "ch1",
                "team_id": "team1",
                "type": "O",
                "display_name": "Town Square",
                "name": "town-square"
            })))],
    );

    mm(&home)
        .env("MATTERMOST_URL", server.uri())
        .env("MATTERMOST_TOKEN", "tok")
        .args(["channel", "get", "ch1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"O\""))
        .stdout(predicate::str::contains("\"name\": \"town-square\""));
}

#[test]
fn unknown_channel_type_is_logged_and_omitted() {
    let home = TempDir::new().unwrap();
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = mock_server(
        &rt,
        vec![Mock::given(method("GET"))
            .and(path("/api/v4/channels/ch1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "ch1",
                "type": "Z"
            })))],
    );

    mm(&home)
        .args(["--url", &server.uri(), "--token", "tok", "channel", "get", "ch1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\"").not())
        .stderr(predicate::str::contains("unresolved wire code"));
}

#[test]
fn not_found_is_reported() {
    let home = TempDir::new().unwrap();
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = mock_server(
        &rt,
        vec![Mock::given(method("GET"))
            .and(path("/api/v4/channels/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "id": "app.channel.get.existing.app_error",
                "message": "Unable to find the existing channel.",
                "status_code": 404
            })))],
    );

    mm(&home)
        .args(["--url", &server.uri(), "--token", "tok", "channel", "get", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch channel 'missing'"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn debug_flag_turns_on_debug_logging() {
    let home = TempDir::new().unwrap();

    mm(&home)
        .args(["--debug", "config", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("config resolved"));

    mm(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("config resolved").not());
}

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();

    mm(&home)
        .args(["config", "init", "--url", "https://chat.example.com"])
        .assert()
        .success();

    let path = home.path().join(".mattermost/config.toml");
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("url = \"https://chat.example.com\""));
    assert!(!contents.contains("token"));

    // Second init without --force refuses to overwrite
    mm(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    mm(&home)
        .env("MATTERMOST_TOKEN", "secret-token")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://chat.example.com"))
        .stdout(predicate::str::contains("<set>"))
        .stdout(predicate::str::contains("secret-token").not());
}

#[test]
fn env_url_overrides_config_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".mattermost");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "url = \"https://file.example.com\"\n").unwrap();

    mm(&home)
        .env("MATTERMOST_URL", "https://env.example.com")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://env.example.com"));
}

#[test]
fn broken_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".mattermost");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "bogus_key = 1\n").unwrap();

    mm(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
