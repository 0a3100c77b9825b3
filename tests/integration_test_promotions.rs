mod common;

use common::{AuthHeaders, TestApp};
use serde_json::json;

async fn seed_employee(app: &TestApp, auth: &AuthHeaders, salaire: i64) -> String {
    let response = app
        .request(
            "POST",
            "/api/v1/employees",
            auth,
            Some(json!({
                "nom": "Ndiaye",
                "prenom": "Fatou",
                "date_naissance": "1992-09-03",
                "contact": "+221770000001",
                "adresse": "Thiès",
                "poste": "Analyste",
                "departement": "IT",
                "date_prise_fonction": "2023-05-02",
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
async fn raise_amount_is_recomputed_server_side() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;
    let employee_id = seed_employee(&app, &auth, 600_000).await;

    // The bogus montant_augmentation must be ignored.
    let response = app
        .request(
            "POST",
            "/api/v1/promotions",
            &auth,
            Some(json!({
                "employee_id": employee_id,
                "nouveau_poste": "Analyste Senior",
                "nouveau_salaire": 650_000,
                "date_vigueur": "2025-09-01",
                "montant_augmentation": 999_999
            })),
        )
        .await;
    assert_eq!(response.status(), 201);
    let promotion = TestApp::json_body(response).await;

    assert_eq!(promotion["ancien_poste"], "Analyste");
    assert_eq!(promotion["ancien_salaire"], 600_000);
    assert_eq!(promotion["montant_augmentation"], 50_000);
    assert_eq!(promotion["statut"], "En attente");
}

#[tokio::test]
async fn apply_copies_position_and_salary_then_becomes_terminal() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;
    let employee_id = seed_employee(&app, &auth, 600_000).await;

    let response = app
        .request(
            "POST",
            "/api/v1/promotions",
            &auth,
            Some(json!({
                "employee_id": employee_id,
                "nouveau_poste": "Chef de projet",
                "nouveau_salaire": 650_000,
                "date_vigueur": "2025-09-01"
            })),
        )
        .await;
    let promotion_id = TestApp::json_body(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .request("POST", &format!("/api/v1/promotions/{promotion_id}/apply"), &auth, None)
        .await;
    assert_eq!(response.status(), 200);
    let applied = TestApp::json_body(response).await;
    assert_eq!(applied["statut"], "Appliquée");

    let response = app
        .request("GET", &format!("/api/v1/employees/{employee_id}"), &auth, None)
        .await;
    let employee = TestApp::json_body(response).await;
    assert_eq!(employee["poste"], "Chef de projet");
    assert_eq!(employee["salaire"], 650_000);

    // Terminal: neither apply nor cancel may run again.
    let response = app
        .request("POST", &format!("/api/v1/promotions/{promotion_id}/apply"), &auth, None)
        .await;
    assert_eq!(response.status(), 409);

    let response = app
        .request("POST", &format!("/api/v1/promotions/{promotion_id}/cancel"), &auth, None)
        .await;
    assert_eq!(response.status(), 409);

    // The employee keeps the values of the single successful apply.
    let response = app
        .request("GET", &format!("/api/v1/employees/{employee_id}"), &auth, None)
        .await;
    let employee = TestApp::json_body(response).await;
    assert_eq!(employee["salaire"], 650_000);
}

#[tokio::test]
async fn cancelled_promotion_cannot_be_applied() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;
    let employee_id = seed_employee(&app, &auth, 500_000).await;

    let response = app
        .request(
            "POST",
            "/api/v1/promotions",
            &auth,
            Some(json!({
                "employee_id": employee_id,
                "nouveau_poste": "Lead",
                "nouveau_salaire": 550_000,
                "date_vigueur": "2025-10-01"
            })),
        )
        .await;
    let promotion_id = TestApp::json_body(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .request("POST", &format!("/api/v1/promotions/{promotion_id}/cancel"), &auth, None)
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(TestApp::json_body(response).await["statut"], "Annulée");

    let response = app
        .request("POST", &format!("/api/v1/promotions/{promotion_id}/apply"), &auth, None)
        .await;
    assert_eq!(response.status(), 409);

    // No side effect on the employee.
    let response = app
        .request("GET", &format!("/api/v1/employees/{employee_id}"), &auth, None)
        .await;
    let employee = TestApp::json_body(response).await;
    assert_eq!(employee["salaire"], 500_000);
    assert_eq!(employee["poste"], "Analyste");
}

#[tokio::test]
async fn demotion_reduction_is_recomputed_and_apply_lowers_salary() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;
    let employee_id = seed_employee(&app, &auth, 800_000).await;

    let response = app
        .request(
            "POST",
            "/api/v1/demotions",
            &auth,
            Some(json!({
                "employee_id": employee_id,
                "nouveau_poste": "Assistant",
                "nouveau_salaire": 700_000,
                "motif_demotion": "Restructuration",
                "date_vigueur": "2025-09-01",
                "montant_reduction": 5
            })),
        )
        .await;
    assert_eq!(response.status(), 201);
    let demotion = TestApp::json_body(response).await;
    assert_eq!(demotion["montant_reduction"], 100_000);
    let demotion_id = demotion["id"].as_str().unwrap().to_string();

    let response = app
        .request("POST", &format!("/api/v1/demotions/{demotion_id}/apply"), &auth, None)
        .await;
    assert_eq!(response.status(), 200);

    let response = app
        .request("GET", &format!("/api/v1/employees/{employee_id}"), &auth, None)
        .await;
    let employee = TestApp::json_body(response).await;
    assert_eq!(employee["salaire"], 700_000);
    assert_eq!(employee["poste"], "Assistant");
}
