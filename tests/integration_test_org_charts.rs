mod common;

use common::{AuthHeaders, TestApp};
use serde_json::json;

async fn seed_employee(app: &TestApp, auth: &AuthHeaders, nom: &str, departement: &str) {
    let response = app
        .request(
            "POST",
            "/api/v1/employees",
            auth,
            Some(json!({
                "nom": nom,
                "prenom": "Test",
                "date_naissance": "1993-02-11",
                "contact": "+221770000004",
                "adresse": "Dakar",
                "poste": "Agent",
                "departement": departement,
                "date_prise_fonction": "2023-04-03",
                "salaire": 550_000,
                "type_contrat": "CDI",
                "duree_contrat": 0
            })),
        )
        .await;
    assert_eq!(response.status(), 201);
}

fn chart_payload() -> serde_json::Value {
    json!({
        "nom": "Organigramme 2025",
        "description": "Structure validée",
        "structure": {
            "name": "Direction Générale",
            "title": "DG",
            "employee_count": 1,
            "children": [
                { "name": "RH", "title": "Département", "employee_count": 4 },
                { "name": "Finance", "title": "Département", "employee_count": 6 }
            ]
        }
    })
}

#[tokio::test]
async fn chart_round_trips_with_its_structure() {
    let app = TestApp::new().await;
    let (tenant_id, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;

    let response = app
        .request("POST", "/api/v1/org-charts", &auth, Some(chart_payload()))
        .await;
    assert_eq!(response.status(), 201);
    let created = TestApp::json_body(response).await;
    assert_eq!(created["tenant_id"], tenant_id.as_str());
    assert_eq!(created["actif"], true);
    let chart_id = created["id"].as_str().unwrap().to_string();

    let response = app
        .request("GET", &format!("/api/v1/org-charts/{chart_id}"), &auth, None)
        .await;
    assert_eq!(response.status(), 200);
    let chart = TestApp::json_body(response).await;
    assert_eq!(chart["structure"]["name"], "Direction Générale");
    assert_eq!(chart["structure"]["children"].as_array().unwrap().len(), 2);
    assert_eq!(chart["structure"]["children"][1]["employee_count"], 6);
}

#[tokio::test]
async fn blank_node_name_is_rejected() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;

    let response = app
        .request(
            "POST",
            "/api/v1/org-charts",
            &auth,
            Some(json!({
                "nom": "Organigramme cassé",
                "structure": { "name": "  ", "title": "DG" }
            })),
        )
        .await;
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn update_replaces_structure_after_validation() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;

    let response = app
        .request("POST", "/api/v1/org-charts", &auth, Some(chart_payload()))
        .await;
    let chart_id = TestApp::json_body(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/org-charts/{chart_id}"),
            &auth,
            Some(json!({
                "nom": "Organigramme révisé",
                "structure": { "name": "DG", "title": "Directeur", "children": [] },
                "actif": false
            })),
        )
        .await;
    assert_eq!(response.status(), 200);
    let updated = TestApp::json_body(response).await;
    assert_eq!(updated["nom"], "Organigramme révisé");
    assert_eq!(updated["structure"]["name"], "DG");
    assert_eq!(updated["actif"], false);

    // Invalid replacement structure leaves the chart untouched.
    let response = app
        .request(
            "PUT",
            &format!("/api/v1/org-charts/{chart_id}"),
            &auth,
            Some(json!({ "structure": { "name": "", "title": "X" } })),
        )
        .await;
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn generation_builds_one_node_per_department() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;

    seed_employee(&app, &auth, "Diop", "Finance").await;
    seed_employee(&app, &auth, "Fall", "Finance").await;
    seed_employee(&app, &auth, "Sow", "IT").await;

    let response = app
        .request(
            "POST",
            "/api/v1/org-charts/generate-from-departments",
            &auth,
            Some(json!({})),
        )
        .await;
    assert_eq!(response.status(), 201);
    let chart = TestApp::json_body(response).await;

    assert_eq!(chart["nom"], "Organigramme Senegal");
    assert_eq!(chart["structure"]["name"], "Senegal");
    assert_eq!(chart["structure"]["title"], "CEO");

    let children = chart["structure"]["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    let finance = children.iter().find(|c| c["name"] == "Finance").unwrap();
    assert_eq!(finance["employee_count"], 2);
    assert_eq!(finance["title"], "Département");
}

#[tokio::test]
async fn generation_without_active_employees_is_rejected() {
    let app = TestApp::new().await;
    let (_, code) = app.seed_tenant("Senegal", "drh@test", "pass").await;
    let auth = app.login(&code, "drh@test", "pass").await;

    let response = app
        .request(
            "POST",
            "/api/v1/org-charts/generate-from-departments",
            &auth,
            Some(json!({ "nom": "Vide" })),
        )
        .await;
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn charts_are_tenant_scoped() {
    let app = TestApp::new().await;
    let (_, code_a) = app.seed_tenant("Senegal", "drh@a.test", "pass-a").await;
    let (_, code_b) = app.seed_tenant("Ghana", "drh@b.test", "pass-b").await;
    let auth_a = app.login(&code_a, "drh@a.test", "pass-a").await;
    let auth_b = app.login(&code_b, "drh@b.test", "pass-b").await;

    let response = app
        .request("POST", "/api/v1/org-charts", &auth_a, Some(chart_payload()))
        .await;
    let chart_id = TestApp::json_body(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .request("GET", &format!("/api/v1/org-charts/{chart_id}"), &auth_b, None)
        .await;
    assert_eq!(response.status(), 404);

    let response = app
        .request("DELETE", &format!("/api/v1/org-charts/{chart_id}"), &auth_b, None)
        .await;
    assert_eq!(response.status(), 404);
}
