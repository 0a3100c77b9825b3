mod common;

use axum::{
    body::Body,
    http::{header, Request},
};
use chrono::{Duration, Utc};
use common::{AuthHeaders, TestApp};
use serde_json::json;
use tower::ServiceExt;

const BOUNDARY: &str = "X-HR-TEST-BOUNDARY";

async fn seed_offer(app: &TestApp, auth: &AuthHeaders, date_cloture: &str, statut: &str) -> String {
    let response = app
        .request(
            "POST",
            "/api/v1/job-offers",
            auth,
            Some(json!({
                "intitule": "Développeur Backend",
                "poste": "Développeur",
                "departement": "IT",
                "type_contrat": "CDI",
                "competences_requises": "Rust, SQL",
                "date_cloture": date_cloture,
                "statut": statut
            })),
        )
        .await;
    assert_eq!(response.status(), 201);
    TestApp::json_body(response).await["id"].as_str().unwrap().to_string()
}

fn future_date() -> String {
    (Utc::now().date_naive() + Duration::days(30)).format("%Y-%m-%d").to_string()
}

fn past_date() -> String {
    (Utc::now().date_naive() - Duration::days(3)).format("%Y-%m-%d").to_string()
}

fn multipart_body(email: &str, with_cv: bool) -> Vec<u8> {
    let mut body = Vec::new();
    let fields = [
        ("nom_complet", "Mamadou Kane"),
        ("email_professionnel", email),
        ("telephone", "+221771234567"),
        ("motivation", "Très motivé"),
    ];
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if with_cv {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"cv\"; filename=\"cv.pdf\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"%PDF-1.4 fake cv content");
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn apply(app: &TestApp, offer_id: &str, email: &str, with_cv: bool) -> (u16, serde_json::Value) {
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/v1/jobs/{offer_id}/apply"))
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(multipart_body(email, with_cv)))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, TestApp::json_body(response).await)
}

#[tokio::test]
async fn published_offer_past_closing_date_expires_on_read() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;

    let offer_id = seed_offer(&app, &auth, &past_date(), "Publiée").await;

    let response = app
        .request("GET", &format!("/api/v1/job-offers/{offer_id}"), &auth, None)
        .await;
    assert_eq!(response.status(), 200);
    let body = TestApp::json_body(response).await;
    assert_eq!(body["statut"], "Expirée");

    // The new status was persisted, not just rendered.
    let response = app.request("GET", "/api/v1/job-offers", &auth, None).await;
    let listing = TestApp::json_body(response).await;
    assert_eq!(listing["data"][0]["statut"], "Expirée");
}

#[tokio::test]
async fn public_board_expires_stale_offers_in_storage() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;

    let stale_id = seed_offer(&app, &auth, &past_date(), "Publiée").await;
    let open_id = seed_offer(&app, &auth, &future_date(), "Publiée").await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/jobs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let listed = TestApp::json_body(response).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], open_id.as_str());

    // The stale row was flipped in storage by the board read itself.
    let statut: String = sqlx::query_scalar("SELECT statut FROM job_offers WHERE id = ?")
        .bind(&stale_id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(statut, "Expirée");
}

#[tokio::test]
async fn unpublished_offer_is_absent_from_the_public_board() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;

    seed_offer(&app, &auth, &future_date(), "Non publiée").await;
    let open_id = seed_offer(&app, &auth, &future_date(), "Publiée").await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/jobs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let offers = TestApp::json_body(response).await;
    let listed = offers.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], open_id.as_str());
}

#[tokio::test]
async fn candidate_can_apply_once_per_offer() {
    let app = TestApp::new().await;
    let (tenant_id, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;

    let offer_id = seed_offer(&app, &auth, &future_date(), "Publiée").await;

    let (status, application) = apply(&app, &offer_id, "kane@mail.test", true).await;
    assert_eq!(status, 201);
    assert_eq!(application["statut"], "En attente");
    assert_eq!(application["tenant_id"], tenant_id.as_str());
    assert!(application["cv_key"].as_str().unwrap().starts_with("applications/cv/"));

    let (status, _) = apply(&app, &offer_id, "kane@mail.test", true).await;
    assert_eq!(status, 409);

    // Same candidate, another tenant's offer: allowed.
    let (_, code_b) = app.seed_tenant("Ghana", "drh@b.test", "pass-b").await;
    let auth_b = app.login(&code_b, "drh@b.test", "pass-b").await;
    let other_offer = seed_offer(&app, &auth_b, &future_date(), "Publiée").await;

    let (status, _) = apply(&app, &other_offer, "kane@mail.test", true).await;
    assert_eq!(status, 201);
}

#[tokio::test]
async fn application_without_cv_is_rejected() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;

    let offer_id = seed_offer(&app, &auth, &future_date(), "Publiée").await;

    let (status, _) = apply(&app, &offer_id, "sans-cv@mail.test", false).await;
    assert_eq!(status, 422);
}

#[tokio::test]
async fn admin_reviews_applications_and_moves_their_status() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;

    let offer_id = seed_offer(&app, &auth, &future_date(), "Publiée").await;
    let (_, application) = apply(&app, &offer_id, "kane@mail.test", true).await;
    let application_id = application["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "GET",
            &format!("/api/v1/job-offers/{offer_id}/applications"),
            &auth,
            None,
        )
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(TestApp::json_body(response).await.as_array().unwrap().len(), 1);

    let response = app
        .request(
            "PATCH",
            &format!("/api/v1/job-offers/{offer_id}/applications/{application_id}/statut"),
            &auth,
            Some(json!({ "statut": "Acceptée" })),
        )
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(TestApp::json_body(response).await["statut"], "Acceptée");

    // Unknown label.
    let response = app
        .request(
            "PATCH",
            &format!("/api/v1/job-offers/{offer_id}/applications/{application_id}/statut"),
            &auth,
            Some(json!({ "statut": "Embauchée" })),
        )
        .await;
    assert_eq!(response.status(), 422);

    // File download resolves through storage.
    let response = app
        .request(
            "GET",
            &format!("/api/v1/job-offers/{offer_id}/applications/{application_id}/files/cv"),
            &auth,
            None,
        )
        .await;
    assert_eq!(response.status(), 200);
    let body = TestApp::json_body(response).await;
    assert!(body["url"].as_str().unwrap().starts_with("mock://applications/cv/"));
}

#[tokio::test]
async fn applications_are_invisible_to_other_tenants() {
    let app = TestApp::new().await;
    let (_, code_a) = app.seed_tenant("Senegal", "drh@a.test", "pass-a").await;
    let (_, code_b) = app.seed_tenant("Ghana", "drh@b.test", "pass-b").await;
    let auth_a = app.login(&code_a, "drh@a.test", "pass-a").await;
    let auth_b = app.login(&code_b, "drh@b.test", "pass-b").await;

    let offer_id = seed_offer(&app, &auth_a, &future_date(), "Publiée").await;
    let (_, application) = apply(&app, &offer_id, "kane@mail.test", true).await;
    let application_id = application["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "GET",
            &format!("/api/v1/job-offers/{offer_id}/applications"),
            &auth_b,
            None,
        )
        .await;
    assert_eq!(response.status(), 404);

    let response = app
        .request(
            "PATCH",
            &format!("/api/v1/job-offers/{offer_id}/applications/{application_id}/statut"),
            &auth_b,
            Some(json!({ "statut": "Rejetée" })),
        )
        .await;
    assert_eq!(response.status(), 404);
}
