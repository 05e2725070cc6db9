//! Integration tests for the HTTP surface.
//!
//! Each test spawns the full router on an ephemeral port with the
//! in-memory store and a no-op notifier, then drives it with a real HTTP
//! client. Tests get isolated state by spawning their own instance.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use earlybird_core::notify::NoopNotifier;
use earlybird_core::session::SubmissionState;
use earlybird_core::submit::SignupWorkflow;
use earlybird_server::routes;
use earlybird_server::state::AppState;
use earlybird_store::{LeadStore, MemoryStore};

/// Spawn the app on an ephemeral port and return its base URL.
async fn spawn_app() -> String {
    let store: Arc<dyn LeadStore> = Arc::new(MemoryStore::new());
    let session = Arc::new(SubmissionState::new());
    let workflow = SignupWorkflow::new(
        Arc::clone(&store),
        Arc::new(NoopNotifier),
        Arc::clone(&session),
    );
    let state = AppState {
        workflow,
        store,
        session,
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, routes::app(state)).await.unwrap();
    });

    format!("http://{addr}")
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

// ── JSON API ─────────────────────────────────────────────────────────

#[tokio::test]
async fn valid_signup_returns_201_with_stored_lead() {
    let base = spawn_app().await;

    let resp = client()
        .post(format!("{base}/v1/leads"))
        .json(&serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "industry": ""
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["email"], "ada@example.com");
    assert!(body["industry"].is_null(), "blank industry must be absent");
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn signup_increments_the_count() {
    let base = spawn_app().await;

    let resp = client()
        .get(format!("{base}/v1/leads/count"))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 0);

    client()
        .post(format!("{base}/v1/leads"))
        .json(&serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com"
        }))
        .send()
        .await
        .unwrap();

    let resp = client()
        .get(format!("{base}/v1/leads/count"))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn missing_email_is_rejected_and_nothing_is_stored() {
    let base = spawn_app().await;

    let resp = client()
        .post(format!("{base}/v1/leads"))
        .json(&serde_json::json!({
            "name": "Ada Lovelace",
            "email": ""
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "bad_request");

    let resp = client()
        .get(format!("{base}/v1/leads/count"))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn invalid_name_is_rejected() {
    let base = spawn_app().await;

    let resp = client()
        .post(format!("{base}/v1/leads"))
        .json(&serde_json::json!({
            "name": "Bob123",
            "email": "bob@example.com"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn second_signup_conflicts_until_reset() {
    let base = spawn_app().await;

    let resp = client()
        .post(format!("{base}/v1/leads"))
        .json(&serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let resp = client()
        .post(format!("{base}/v1/leads"))
        .json(&serde_json::json!({
            "name": "Grace Hopper",
            "email": "grace@example.com"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);

    let resp = client()
        .post(format!("{base}/v1/leads/reset"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["submitted"], false);

    let resp = client()
        .post(format!("{base}/v1/leads"))
        .json(&serde_json::json!({
            "name": "Grace Hopper",
            "email": "grace@example.com"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
}

#[tokio::test]
async fn hostile_input_is_sanitized_before_storage() {
    let base = spawn_app().await;

    let resp = client()
        .post(format!("{base}/v1/leads"))
        .json(&serde_json::json!({
            "name": "  Jane O'Brien  ",
            "email": "jane@example.com",
            "industry": "<script>Tech</script>"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Jane OBrien");
    // "<script>Tech</script>" loses brackets and script fragments.
    assert_eq!(body["industry"], "Tech/");
}

#[tokio::test]
async fn health_reports_ok_with_reachable_store() {
    let base = spawn_app().await;

    let resp = client()
        .get(format!("{base}/v1/sys/health"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "reachable");
}

// ── HTML views ───────────────────────────────────────────────────────

#[tokio::test]
async fn landing_page_shows_the_form() {
    let base = spawn_app().await;

    let resp = client().get(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let html = resp.text().await.unwrap();
    assert!(html.contains("Join the Revolution"));
    assert!(html.contains("Get Early Access"));
    assert!(html.contains(r#"action="/submit""#));
}

#[tokio::test]
async fn form_submission_lands_on_the_success_view() {
    let base = spawn_app().await;

    // reqwest follows the 303 redirect back to `/`.
    let resp = client()
        .post(format!("{base}/submit"))
        .form(&[
            ("name", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("industry", ""),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Welcome aboard!"));
    assert!(html.contains("You're #1 to join our community"));
}

#[tokio::test]
async fn failed_form_submission_rerenders_with_notice() {
    let base = spawn_app().await;

    let resp = client()
        .post(format!("{base}/submit"))
        .form(&[("name", ""), ("email", "ada@example.com"), ("industry", "")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let html = resp.text().await.unwrap();
    assert!(html.contains("missing information"));
    assert!(html.contains("Get Early Access"), "form must be re-rendered");
}

#[tokio::test]
async fn reset_returns_to_the_form() {
    let base = spawn_app().await;

    client()
        .post(format!("{base}/submit"))
        .form(&[("name", "Ada Lovelace"), ("email", "ada@example.com")])
        .send()
        .await
        .unwrap();

    let resp = client()
        .post(format!("{base}/reset"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let html = resp.text().await.unwrap();
    assert!(html.contains("Get Early Access"), "form must be shown after reset");
}
