mod common;

use common::{create_test_soiree, StubServer};
use reqwest::Method;
use serde_json::json;
use soiree_core::{CredentialStore, FileCredentialStore, SessionState};
use tempfile::TempDir;

#[tokio::test]
async fn test_session_persists_across_restarts() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let server = StubServer::new();
    server.route(
        Method::POST,
        "/auth/login",
        200,
        json!({"token": "abc", "user": {"id": 1, "name": "Ada"}}),
    );
    server.route(Method::GET, "/auth/user", 200, json!({"id": 1, "name": "Ada"}));

    let first = create_test_soiree(&temp_dir, server.clone()).await;
    assert!(first.session().login("ada", "pw").await.unwrap());
    drop(first);

    let store = FileCredentialStore::new(temp_dir.path().join("token"));
    assert_eq!(store.load().unwrap().as_deref(), Some("abc"));

    let second = create_test_soiree(&temp_dir, server.clone()).await;
    assert!(second.session().is_authenticated());
    assert_eq!(
        second.session().wait_for_hydration().await,
        SessionState::Authenticated
    );
    assert_eq!(second.session().user().unwrap().name.as_deref(), Some("Ada"));

    let hydration = server.requests_to("/auth/user");
    assert_eq!(hydration.len(), 1);
    assert_eq!(
        hydration[0].url,
        "http://soiree.test/api/auth/user"
    );
    assert_eq!(hydration[0].header("authorization"), Some("Bearer abc"));
}

#[tokio::test]
async fn test_rejected_credential_returns_to_anonymous() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    FileCredentialStore::new(temp_dir.path().join("token"))
        .save("expired")
        .unwrap();

    let server = StubServer::new();
    server.route(Method::GET, "/auth/user", 401, json!({"message": "expired"}));
    let soiree = create_test_soiree(&temp_dir, server).await;

    assert_eq!(
        soiree.session().wait_for_hydration().await,
        SessionState::Anonymous
    );
    assert_eq!(soiree.session().token(), None);
    assert!(!temp_dir.path().join("token").exists());
}

#[tokio::test]
async fn test_requests_after_logout_carry_no_credential() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let server = StubServer::new();
    server.route(
        Method::POST,
        "/auth/login",
        200,
        json!({"token": "abc", "user": {"id": 1}}),
    );
    server.route(Method::GET, "/music/artists", 200, json!({"artists": []}));
    let soiree = create_test_soiree(&temp_dir, server.clone()).await;

    soiree.session().login("ada", "pw").await.unwrap();
    soiree.music().search_artists("first").await.unwrap();
    soiree.session().logout();
    soiree.music().search_artists("second").await.unwrap();

    let searches = server.requests_to("/music/artists");
    assert_eq!(searches[0].header("Authorization"), Some("Bearer abc"));
    assert_eq!(searches[1].header("Authorization"), None);
    assert_eq!(searches[1].header("Content-Type"), Some("application/json"));
}

#[tokio::test]
async fn test_expired_session_logs_out_on_any_401() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let server = StubServer::new();
    server.route(
        Method::POST,
        "/auth/login",
        200,
        json!({"token": "abc", "user": {"id": 1}}),
    );
    let soiree = create_test_soiree(&temp_dir, server.clone()).await;
    soiree.session().login("ada", "pw").await.unwrap();

    server.route(Method::POST, "/events", 401, json!({"message": "expired"}));
    let err = soiree.submit_draft().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(soiree.session().state(), SessionState::Anonymous);
    assert!(!temp_dir.path().join("token").exists());
}
