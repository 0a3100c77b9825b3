use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Request},
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::api::handlers::{
    auth, dashboard, demotion, employee, health, job_offer, jobs_public, org_chart, pay_slip,
    post as post_handler, promotion, statistics, tenant, tracking, user,
};
use crate::state::AppState;
use tower_cookies::CookieManagerLayer;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/access-code", post(auth::access_code))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::me))

        // Tenants (platform admin)
        .route("/api/v1/tenants", post(tenant::create_tenant).get(tenant::list_tenants))
        .route("/api/v1/tenants/{id}", get(tenant::get_tenant).put(tenant::update_tenant).delete(tenant::delete_tenant))
        .route("/api/v1/tenants/{id}/toggle", patch(tenant::toggle_tenant))

        // Users
        .route("/api/v1/users", post(user::create_user).get(user::list_users))
        .route("/api/v1/users/{id}", get(user::get_user).put(user::update_user).delete(user::delete_user))
        .route("/api/v1/users/{id}/toggle", patch(user::toggle_user))

        // Employees
        .route("/api/v1/employees", post(employee::create_employee).get(employee::list_employees))
        .route("/api/v1/employees/{id}", get(employee::get_employee).put(employee::update_employee).delete(employee::delete_employee))

        // Promotions
        .route("/api/v1/promotions", post(promotion::create_promotion).get(promotion::list_promotions))
        .route("/api/v1/promotions/{id}", get(promotion::get_promotion).put(promotion::update_promotion).delete(promotion::delete_promotion))
        .route("/api/v1/promotions/{id}/apply", post(promotion::apply_promotion))
        .route("/api/v1/promotions/{id}/cancel", post(promotion::cancel_promotion))

        // Demotions
        .route("/api/v1/demotions", post(demotion::create_demotion).get(demotion::list_demotions))
        .route("/api/v1/demotions/{id}", get(demotion::get_demotion).put(demotion::update_demotion).delete(demotion::delete_demotion))
        .route("/api/v1/demotions/{id}/apply", post(demotion::apply_demotion))
        .route("/api/v1/demotions/{id}/cancel", post(demotion::cancel_demotion))

        // Posts
        .route("/api/v1/posts", post(post_handler::create_post).get(post_handler::list_posts))
        .route("/api/v1/posts/{id}", get(post_handler::get_post).put(post_handler::update_post).delete(post_handler::delete_post))

        // Pay slips
        .route("/api/v1/pay-slips", post(pay_slip::create_pay_slip).get(pay_slip::list_pay_slips))
        .route("/api/v1/pay-slips/generate-all", post(pay_slip::generate_all))
        .route("/api/v1/pay-slips/{id}", get(pay_slip::get_pay_slip).delete(pay_slip::delete_pay_slip))
        .route("/api/v1/pay-slips/{id}/cancel", post(pay_slip::cancel_pay_slip))

        // Tracking
        .route("/api/v1/trackings", post(tracking::create_tracking).get(tracking::list_trackings))
        .route("/api/v1/trackings/dashboard", get(tracking::tracking_dashboard))
        .route("/api/v1/trackings/{id}", get(tracking::get_tracking).put(tracking::update_tracking).delete(tracking::delete_tracking))

        // Job offers (admin)
        .route("/api/v1/job-offers", post(job_offer::create_job_offer).get(job_offer::list_job_offers))
        .route("/api/v1/job-offers/{id}", get(job_offer::get_job_offer).put(job_offer::update_job_offer).delete(job_offer::delete_job_offer))
        .route("/api/v1/job-offers/{id}/applications", get(job_offer::list_applications))
        .route("/api/v1/job-offers/{id}/applications/{application_id}/statut", patch(job_offer::update_application_statut))
        .route("/api/v1/job-offers/{id}/applications/{application_id}/files/{kind}", get(job_offer::application_file_url))

        // Org charts
        .route("/api/v1/org-charts", post(org_chart::create_org_chart).get(org_chart::list_org_charts))
        .route("/api/v1/org-charts/generate-from-departments", post(org_chart::generate_from_departments))
        .route("/api/v1/org-charts/{id}", get(org_chart::get_org_chart).put(org_chart::update_org_chart).delete(org_chart::delete_org_chart))

        // Reporting
        .route("/api/v1/dashboard", get(dashboard::dashboard))
        .route("/api/v1/statistics", get(statistics::statistics))
        .route("/api/v1/statistics/departments", get(statistics::department_statistics))
        .route("/api/v1/statistics/salaries", get(statistics::salary_statistics))

        // Public job board
        .route("/api/v1/jobs", get(jobs_public::list_public_offers))
        .route("/api/v1/jobs/{id}", get(jobs_public::get_public_offer))
        .route("/api/v1/jobs/{id}/apply", post(jobs_public::apply_to_offer))

        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        tenant_id = tracing::field::Empty,
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
