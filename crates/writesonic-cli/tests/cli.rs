use assert_cmd::assert::OutputAssertExt;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::process::Output;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A `writesonic` command with a scrubbed environment and an isolated config home.
fn writesonic(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("writesonic").unwrap();
    cmd.env_clear()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"));
    cmd
}

/// Run the command off the async runtime so the mock server keeps serving.
async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

async fn mount_blog_ideas(server: &MockServer, api_key: &str) {
    Mock::given(method("POST"))
        .and(path("/blog-ideas"))
        .and(query_param("engine", "good"))
        .and(query_param("language", "en"))
        .and(query_param("num_copies", "1"))
        .and(header("X-API-Key", api_key))
        .and(body_json(json!({ "topic": "sustainable fashion" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "text": "Idea A" }, { "text": "Idea B" }])),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_piped_output_is_compact_json() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;
    mount_blog_ideas(&server, "env-key").await;

    let mut cmd = writesonic(&home);
    cmd.env("WRITESONIC_API_KEY", "env-key")
        .env("WRITESONIC_BASE_URL", server.uri())
        .args(["blog-ideas", "--topic", "sustainable fashion"]);

    run(cmd)
        .await
        .assert()
        .success()
        .stdout("[{\"text\":\"Idea A\"},{\"text\":\"Idea B\"}]\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pretty_flag_indents_json() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;
    mount_blog_ideas(&server, "env-key").await;

    let mut cmd = writesonic(&home);
    cmd.env("WRITESONIC_API_KEY", "env-key")
        .arg("--base-url")
        .arg(server.uri())
        .args(["blog-ideas", "--topic", "sustainable fashion", "--pretty"]);

    run(cmd)
        .await
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[\n  {\n    \"text\": \"Idea A\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_validation_error_fails_with_message() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/blog-ideas"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{
                "loc": ["body", "topic"],
                "msg": "field required",
                "type": "value_error.missing"
            }]
        })))
        .mount(&server)
        .await;

    let mut cmd = writesonic(&home);
    cmd.env("WRITESONIC_KEY", "env-key")
        .env("WRITESONIC_BASE_URL", server.uri())
        .args(["blog-ideas", "--topic", "sustainable fashion"]);

    run(cmd)
        .await
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("field required"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_key_fails_without_request() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;

    let mut cmd = writesonic(&home);
    cmd.env("WRITESONIC_BASE_URL", server.uri())
        .args(["copy", "cta", "--name", "Acme"]);

    run(cmd)
        .await
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API key found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stored_key_and_defaults_are_used() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    let mut cmd = writesonic(&home);
    cmd.args(["auth", "set-key", "stored-key-123456"]);
    run(cmd).await.assert().success();

    let mut cmd = writesonic(&home);
    cmd.args(["auth", "config", "--engine", "premium", "--language", "fr"]);
    run(cmd)
        .await
        .assert()
        .success()
        .stdout(predicate::str::contains("Defaults updated"));

    Mock::given(method("POST"))
        .and(path("/call-to-action"))
        .and(query_param("engine", "premium"))
        .and(query_param("language", "fr"))
        .and(query_param("num_copies", "2"))
        .and(header("X-API-Key", "stored-key-123456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "text": "Buy now" }])))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = writesonic(&home);
    cmd.env("WRITESONIC_BASE_URL", server.uri())
        .args(["copy", "cta", "--name", "Acme", "--copies", "2"]);

    run(cmd)
        .await
        .assert()
        .success()
        .stdout("[{\"text\":\"Buy now\"}]\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_environment_key_beats_stored_key() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;
    mount_blog_ideas(&server, "env-key").await;

    let mut cmd = writesonic(&home);
    cmd.args(["auth", "set-key", "stored-key-123456"]);
    run(cmd).await.assert().success();

    let mut cmd = writesonic(&home);
    cmd.env("WRITESONIC_SK", "env-key")
        .env("WRITESONIC_BASE_URL", server.uri())
        .args(["blog-ideas", "--topic", "sustainable fashion"]);

    run(cmd).await.assert().success();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_landing_page_sections_and_json() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/landing-pages"))
        .and(body_json(json!({
            "product_name": "Acme SaaS",
            "product_description": "Project management tool",
            "feature_1": "Task tracking",
            "feature_2": "Team collaboration",
            "feature_3": "Analytics"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "title": "Acme" }])))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = writesonic(&home);
    cmd.env("WRITESONIC_API_KEY", "env-key")
        .env("WRITESONIC_BASE_URL", server.uri())
        .args([
            "landing",
            "page",
            "--name",
            "Acme SaaS",
            "--desc",
            "Project management tool",
            "--f1",
            "Task tracking",
            "--f2",
            "Team collaboration",
            "--f3",
            "Analytics",
        ]);

    run(cmd)
        .await
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\":\"Acme\""))
        .stdout(predicate::str::contains("\"button\":\"\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_article_sections_are_trimmed() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai-article-writer-v3"))
        .and(body_json(json!({
            "article_title": "Healthy Eating",
            "article_intro": "Good nutrition is key",
            "article_sections": ["Benefits", "Tips", "Recipes"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "text": "..." }])))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = writesonic(&home);
    cmd.env("WRITESONIC_API_KEY", "env-key")
        .env("WRITESONIC_BASE_URL", server.uri())
        .args([
            "article",
            "write",
            "--title",
            "Healthy Eating",
            "--intro",
            "Good nutrition is key",
            "--sections",
            " Benefits , Tips,,Recipes ",
        ]);

    run(cmd).await.assert().success();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_exits_non_zero() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let mut cmd = writesonic(&home);
    cmd.env("WRITESONIC_API_KEY", "env-key")
        .env("WRITESONIC_BASE_URL", server.uri())
        .args(["write", "conclusion", "--topic", "Remote work"]);

    run(cmd)
        .await
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("API error (500): boom"));
}

#[test]
fn test_auth_status_reports_source() {
    let home = TempDir::new().unwrap();

    writesonic(&home)
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not set"));

    writesonic(&home)
        .args(["auth", "set-key", "abcd1234efgh5678"])
        .assert()
        .success();

    writesonic(&home)
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abcd...5678"))
        .stdout(predicate::str::contains("config file"))
        .stdout(predicate::str::contains("abcd1234efgh5678").not());

    writesonic(&home)
        .env("WRITESONIC_API_KEY", "zzzz9999yyyy8888")
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zzzz...8888"))
        .stdout(predicate::str::contains("WRITESONIC_API_KEY"));

    writesonic(&home).args(["auth", "logout"]).assert().success();

    writesonic(&home)
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not set"));
}

#[test]
fn test_auth_config_without_flags_changes_nothing() {
    let home = TempDir::new().unwrap();

    writesonic(&home)
        .args(["auth", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes"));
}

#[test]
fn test_unreadable_config_is_fatal() {
    let home = TempDir::new().unwrap();

    writesonic(&home)
        .args(["auth", "set-key", "abcd1234efgh5678"])
        .assert()
        .success();

    // Corrupt every config file the first run created
    for entry in walk(home.path()) {
        if entry.file_name().is_some_and(|n| n == "config.toml") {
            std::fs::write(&entry, "api_key = [").unwrap();
        }
    }

    writesonic(&home)
        .env("WRITESONIC_API_KEY", "env-key")
        .args(["copy", "cta", "--name", "Acme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}

fn walk(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            files.extend(walk(&path));
        } else {
            files.push(path);
        }
    }
    files
}
