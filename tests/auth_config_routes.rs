use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use auth_config_api::{app::build_router, config::Config, state::AppState};

fn setup_router() -> Router {
    let config = Config {
        request_body_limit_bytes: 4 * 1024,
        request_timeout: Duration::from_secs(5),
        ..Config::default()
    };
    build_router(AppState::new(), &config)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let data = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, data)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let (status, data) = send(
        setup_router(),
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["status"], "ok");
}

#[tokio::test]
async fn request_id_is_propagated() {
    let response = setup_router()
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "req-123");
}

#[tokio::test]
async fn lists_supported_auth_types() {
    let (status, data) = send(
        setup_router(),
        Request::builder()
            .uri("/api/v1/auth-configs/types")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        data["authTypes"],
        json!(["FORM", "GITHUB", "GOOGLE", "KEYCLOAK", "ORY"])
    );
}

#[tokio::test]
async fn builds_ory_config_without_echoing_secret() {
    let (status, data) = send(
        setup_router(),
        post_json(
            "/api/v1/auth-configs",
            json!({
                "id": "ory-1",
                "authType": "ORY",
                "clientId": "ory-client",
                "clientSecret": "top-secret",
                "enableRegister": false,
                "baseUrl": "https://auth.example.com",
                "scope": "openid",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(data["id"], "ory-1");
    assert_eq!(data["authType"], "ORY");
    assert_eq!(data["source"], "ORY");
    assert_eq!(data["sourceName"], "Ory");
    assert_eq!(data["enable"], true);
    assert_eq!(data["enableRegister"], false);
    assert_eq!(data["clientId"], "ory-client");
    assert_eq!(data["hasClientSecret"], true);
    assert_eq!(data["baseUrl"], "https://auth.example.com");
    assert_eq!(
        data["authorizeUrl"],
        "https://auth.example.com/oauth2/auth?response_type=code&client_id=ory-client&redirect_uri={redirectUri}&state={state}&scope=openid"
    );
    assert!(!data.to_string().contains("top-secret"));
}

#[tokio::test]
async fn enable_flag_comes_from_query() {
    let (status, data) = send(
        setup_router(),
        post_json(
            "/api/v1/auth-configs?enable=false",
            json!({ "authType": "FORM" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(data["source"], "EMAIL");
    assert_eq!(data["enable"], false);
    assert_eq!(data["enableRegister"], true);
    assert_eq!(data["hasClientSecret"], false);
    assert!(data.get("clientId").is_none());
    assert!(data.get("authorizeUrl").is_none());
}

#[tokio::test]
async fn keycloak_without_base_url_omits_authorize_url() {
    let (status, data) = send(
        setup_router(),
        post_json(
            "/api/v1/auth-configs",
            json!({ "authType": "KEYCLOAK", "clientId": "kc", "realm": "acme" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(data["realm"], "acme");
    assert!(data.get("authorizeUrl").is_none());
}

#[tokio::test]
async fn missing_client_id_is_bad_request() {
    let (status, data) = send(
        setup_router(),
        post_json("/api/v1/auth-configs", json!({ "authType": "GITHUB" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(data["error"]["code"], "INVALID_AUTH_CONFIG");
    assert_eq!(data["error"]["message"], "clientId can not be null.");
}

#[tokio::test]
async fn unsupported_auth_type_carries_tag() {
    let (status, data) = send(
        setup_router(),
        post_json(
            "/api/v1/auth-configs",
            json!({ "authType": "saml", "clientId": "x" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(data["error"]["code"], "UNSUPPORTED_AUTH_TYPE");
    assert!(data["error"]["message"].as_str().unwrap().contains("saml"));
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let big = "x".repeat(8 * 1024);
    let body = json!({ "authType": "FORM", "padding": big }).to_string();
    let response = setup_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth-configs")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::CONTENT_LENGTH, body.len())
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
