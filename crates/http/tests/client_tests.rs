//! Integration tests for the newsroom API client.

use newsroom_http::{
    ClientError, LoginRequest, MemoryBackend, NewsroomClient, PostQuery, SessionBackend,
    SessionStore,
};
use serde_json::json;
use std::rc::Rc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_with_session(token: &str) -> Rc<MemoryBackend> {
    let backend = Rc::new(MemoryBackend::new());
    backend.set(
        "session.data",
        &json!({
            "token": token,
            "refreshToken": "R1",
            "name": "Ana",
            "role": "admin",
            "expiresAt": "2099-01-01T00:00:00Z"
        })
        .to_string(),
    );
    backend
}

#[tokio::test]
async fn builder_requires_base_url() {
    let result = NewsroomClient::builder()
        .session_backend(Rc::new(MemoryBackend::new()))
        .build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn builder_requires_session_backend() {
    let result = NewsroomClient::builder()
        .base_url("http://localhost:4000")
        .build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn login_persists_returned_token_bundle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "logged in",
            "data": {
                "token": "T1",
                "refreshToken": "R1",
                "expiresIn": 3600,
                "expiresAt": "2099-01-01T00:00:00Z",
                "name": "Ana",
                "role": "admin"
            }
        })))
        .mount(&mock_server)
        .await;

    let backend = Rc::new(MemoryBackend::new());
    let client = NewsroomClient::new(mock_server.uri(), backend.clone()).unwrap();

    let data = client
        .login(&LoginRequest {
            email: "a@b.com".into(),
            password: "x".into(),
        })
        .await
        .unwrap();

    assert_eq!(data.token, "T1");
    let session = SessionStore::new(backend).get();
    assert_eq!(session.token.as_deref(), Some("T1"));
    assert_eq!(session.name.as_deref(), Some("Ana"));
}

#[tokio::test]
async fn bearer_token_is_read_from_stored_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts/mine"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "",
            "data": { "items": [], "pagination": { "page": 1, "pageSize": 10, "total": 0, "totalPages": 1 } }
        })))
        .mount(&mock_server)
        .await;

    let client = NewsroomClient::new(mock_server.uri(), backend_with_session("T1")).unwrap();
    let page = client.list_my_posts(&PostQuery::default()).await.unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn explicit_authorization_header_is_not_overridden() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(header("authorization", "Bearer explicit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "",
            "data": { "items": [], "pagination": {} }
        })))
        .mount(&mock_server)
        .await;

    let client = NewsroomClient::new(mock_server.uri(), backend_with_session("stored")).unwrap();
    let request = client
        .request(reqwest::Method::GET, "/api/posts")
        .header("authorization", "Bearer explicit");
    let _: serde_json::Value = client.execute(request).await.unwrap();
}

#[tokio::test]
async fn list_query_carries_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "10"))
        .and(query_param("tags", "ai,web"))
        .and(query_param("user_name", "ana"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "",
            "data": { "items": [], "pagination": {} }
        })))
        .mount(&mock_server)
        .await;

    let client = NewsroomClient::new(mock_server.uri(), backend_with_session("T1")).unwrap();
    let query = PostQuery {
        tags: vec!["ai".into(), "web".into()],
        user_name: "ana".into(),
        ..PostQuery::default()
    };
    client.list_posts(&query).await.unwrap();
}

#[tokio::test]
async fn refresh_headers_update_stored_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts/mine"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-access-token", "T2")
                .insert_header("x-access-expires-at", "2099-06-01T00:00:00Z")
                .set_body_json(json!({
                    "status": "success",
                    "message": "",
                    "data": { "items": [], "pagination": {} }
                })),
        )
        .mount(&mock_server)
        .await;

    let backend = backend_with_session("T1");
    let client = NewsroomClient::new(mock_server.uri(), backend.clone()).unwrap();
    client.list_my_posts(&PostQuery::default()).await.unwrap();

    let session = SessionStore::new(backend).get();
    assert_eq!(session.token.as_deref(), Some("T2"));
    assert_eq!(session.expires_at.as_deref(), Some("2099-06-01T00:00:00Z"));
    // everything else is preserved
    assert_eq!(session.name.as_deref(), Some("Ana"));
    assert_eq!(session.role.as_deref(), Some("admin"));
    assert_eq!(session.refresh_token.as_deref(), Some("R1"));
}

#[tokio::test]
async fn error_envelope_surfaces_nested_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": "error",
            "message": "login failed",
            "errors": { "message": "invalid credentials" }
        })))
        .mount(&mock_server)
        .await;

    let client =
        NewsroomClient::new(mock_server.uri(), Rc::new(MemoryBackend::new())).unwrap();
    let result = client
        .login(&LoginRequest {
            email: "a@b.com".into(),
            password: "wrong".into(),
        })
        .await;

    match result {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "invalid credentials");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_envelope_scans_field_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "status": "error",
            "message": "",
            "errors": { "title": ["title is required"] }
        })))
        .mount(&mock_server)
        .await;

    let client = NewsroomClient::new(mock_server.uri(), backend_with_session("T1")).unwrap();
    let result = client
        .create_post(&newsroom_http::CreatePostRequest {
            title: String::new(),
            content: "c".into(),
            published: None,
            category_name: None,
        })
        .await;

    match result {
        Err(ClientError::Api { message, .. }) => assert_eq!(message, "title is required"),
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_an_invalid_body_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts/mine"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = NewsroomClient::new(mock_server.uri(), backend_with_session("T1")).unwrap();
    let result = client.list_my_posts(&PostQuery::default()).await;
    assert!(matches!(result, Err(ClientError::InvalidBody)));
}

#[tokio::test]
async fn success_envelope_on_error_status_is_still_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts/mine"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "status": "success",
            "message": "something odd happened",
            "data": null
        })))
        .mount(&mock_server)
        .await;

    let client = NewsroomClient::new(mock_server.uri(), backend_with_session("T1")).unwrap();
    let result: Result<serde_json::Value, _> = client
        .execute(client.request(reqwest::Method::GET, "/api/posts/mine"))
        .await;

    match result {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "something odd happened");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn logout_returns_server_message_and_clears_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "status": "error",
            "message": "session already revoked",
            "errors": null
        })))
        .mount(&mock_server)
        .await;

    let backend = backend_with_session("T1");
    let client = NewsroomClient::new(mock_server.uri(), backend.clone()).unwrap();

    let message = client.logout().await;
    assert_eq!(message.as_deref(), Some("session already revoked"));
    assert_eq!(backend.get("session.data"), None);
}

#[tokio::test]
async fn logout_clears_session_when_network_fails() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let backend = backend_with_session("T1");
    backend.set("access_token", "legacy");
    let client = NewsroomClient::new(uri, backend.clone()).unwrap();

    let message = client.logout().await;
    assert_eq!(message, None);
    assert_eq!(backend.get("session.data"), None);
    assert_eq!(backend.get("access_token"), None);
}

#[tokio::test]
async fn delete_post_unwraps_null_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/posts/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "post deleted",
            "data": null
        })))
        .mount(&mock_server)
        .await;

    let client = NewsroomClient::new(mock_server.uri(), backend_with_session("T1")).unwrap();
    client.delete_post(7).await.unwrap();
}
