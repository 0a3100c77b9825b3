mod common;

use common::{AuthHeaders, TestApp};
use serde_json::json;

async fn seed_employee(app: &TestApp, auth: &AuthHeaders, nom: &str, salaire: i64) -> String {
    let response = app
        .request(
            "POST",
            "/api/v1/employees",
            auth,
            Some(json!({
                "nom": nom,
                "prenom": "Test",
                "date_naissance": "1988-01-20",
                "contact": "+221770000002",
                "adresse": "Dakar",
                "poste": "Agent",
                "departement": "RH",
                "date_prise_fonction": "2022-03-01",
                "salaire": salaire,
                "type_contrat": "CDI",
                "duree_contrat": 0
            })),
        )
        .await;
    assert_eq!(response.status(), 201);
    TestApp::json_body(response).await["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn net_salary_follows_the_contribution_rate() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;
    let employee_id = seed_employee(&app, &auth, "Sow", 650_000).await;

    let response = app
        .request(
            "POST",
            "/api/v1/pay-slips",
            &auth,
            Some(json!({ "employee_id": employee_id, "mois": "Juin", "annee": 2025 })),
        )
        .await;
    assert_eq!(response.status(), 201);
    let slip = TestApp::json_body(response).await;

    assert_eq!(slip["salaire_brut"], 650_000);
    assert_eq!(slip["cotisations"], 204_750);
    assert_eq!(slip["salaire_net"], 445_250);
    assert_eq!(slip["statut"], "Générée");
}

#[tokio::test]
async fn duplicate_period_is_rejected_even_after_cancellation() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;
    let employee_id = seed_employee(&app, &auth, "Sow", 650_000).await;

    let payload = json!({ "employee_id": employee_id, "mois": "Juin", "annee": 2025 });
    let response = app.request("POST", "/api/v1/pay-slips", &auth, Some(payload.clone())).await;
    assert_eq!(response.status(), 201);
    let slip_id = TestApp::json_body(response).await["id"].as_str().unwrap().to_string();

    let response = app.request("POST", "/api/v1/pay-slips", &auth, Some(payload.clone())).await;
    assert_eq!(response.status(), 409);

    // Cancelling does not free the period.
    let response = app
        .request("POST", &format!("/api/v1/pay-slips/{slip_id}/cancel"), &auth, None)
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(TestApp::json_body(response).await["statut"], "Annulée");

    let response = app.request("POST", "/api/v1/pay-slips", &auth, Some(payload)).await;
    assert_eq!(response.status(), 409);
}

#[tokio::test]
async fn invalid_month_name_is_rejected() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;
    let employee_id = seed_employee(&app, &auth, "Sow", 650_000).await;

    let response = app
        .request(
            "POST",
            "/api/v1/pay-slips",
            &auth,
            Some(json!({ "employee_id": employee_id, "mois": "June", "annee": 2025 })),
        )
        .await;
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn generate_all_skips_existing_periods_and_counts_new_slips() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;

    let first = seed_employee(&app, &auth, "Sow", 650_000).await;
    seed_employee(&app, &auth, "Fall", 500_000).await;
    seed_employee(&app, &auth, "Diallo", 900_000).await;

    // One slip already exists for the period.
    let response = app
        .request(
            "POST",
            "/api/v1/pay-slips",
            &auth,
            Some(json!({ "employee_id": first, "mois": "Juillet", "annee": 2025 })),
        )
        .await;
    assert_eq!(response.status(), 201);

    let response = app
        .request(
            "POST",
            "/api/v1/pay-slips/generate-all",
            &auth,
            Some(json!({ "mois": "Juillet", "annee": 2025 })),
        )
        .await;
    assert_eq!(response.status(), 200);
    let body = TestApp::json_body(response).await;
    assert_eq!(body["generated"], 2);

    // Re-run generates nothing.
    let response = app
        .request(
            "POST",
            "/api/v1/pay-slips/generate-all",
            &auth,
            Some(json!({ "mois": "Juillet", "annee": 2025 })),
        )
        .await;
    let body = TestApp::json_body(response).await;
    assert_eq!(body["generated"], 0);
}
