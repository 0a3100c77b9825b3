mod common;

use axum::{
    body::Body,
    http::{header, Request},
};
use common::TestApp;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn unknown_access_code_is_rejected() {
    let app = TestApp::new().await;
    app.seed_tenant("Senegal", "drh@test", "pass").await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/access-code")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "access_code": "WRONG" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn login_yields_a_usable_session() {
    let app = TestApp::new().await;
    let (tenant_id, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;

    let response = app.request("GET", "/api/v1/auth/me", &auth, None).await;
    assert_eq!(response.status(), 200);
    let profile = TestApp::json_body(response).await;
    assert_eq!(profile["email"], "drh@test");
    assert_eq!(profile["role"], "DRH");
    assert_eq!(profile["tenant_id"], tenant_id.as_str());
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;

    let gate = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/access-code")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "access_code": code }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let gate_cookie = common::cookie_value(&gate, "tenant_gate").unwrap();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, format!("tenant_gate={gate_cookie}"))
                .body(Body::from(
                    json!({ "email": "drh@test", "password": "nope" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn requests_without_a_session_are_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/employees")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn mutations_without_csrf_token_are_forbidden() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/posts")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, format!("access_token={}", auth.access_token))
                .body(Body::from(
                    json!({ "intitule": "Comptable", "departement": "Finance" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 403);

    // Reads skip the CSRF check.
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/posts")
                .header(header::COOKIE, format!("access_token={}", auth.access_token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn platform_admin_logs_in_without_a_gate_but_owns_no_tenant_data() {
    let app = TestApp::new().await;
    app.seed_user(None, "root@platform.test", "root-pass", "Admin").await;

    let auth = app.login_admin("root@platform.test", "root-pass").await;

    let response = app.request("GET", "/api/v1/auth/me", &auth, None).await;
    let profile = TestApp::json_body(response).await;
    assert_eq!(profile["role"], "Admin");
    assert!(profile["tenant_id"].is_null());

    // Tenant administration is open to the admin.
    let response = app
        .request(
            "POST",
            "/api/v1/tenants",
            &auth,
            Some(json!({
                "name": "Mali",
                "country": "Mali",
                "access_code": "ML-2025",
                "ceo_name": "Keita"
            })),
        )
        .await;
    assert_eq!(response.status(), 201);

    // Tenant-scoped business routes are not.
    let response = app.request("GET", "/api/v1/employees", &auth, None).await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn tenant_users_cannot_administer_tenants() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;

    let response = app.request("GET", "/api/v1/tenants", &auth, None).await;
    assert_eq!(response.status(), 403);
}

#[tokio::test]
async fn tenant_with_dependents_cannot_be_deleted() {
    let app = TestApp::new().await;
    app.seed_user(None, "root@platform.test", "root-pass", "Admin").await;
    let (tenant_id, _) = app.seed_tenant("Senegal", "drh@test", "pass").await;

    let auth = app.login_admin("root@platform.test", "root-pass").await;

    let response = app
        .request("DELETE", &format!("/api/v1/tenants/{tenant_id}"), &auth, None)
        .await;
    assert_eq!(response.status(), 409);

    let response = app
        .request("PATCH", &format!("/api/v1/tenants/{tenant_id}/toggle"), &auth, None)
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(TestApp::json_body(response).await["actif"], false);
}
