use hr_backend::{
    api::router::create_router,
    config::Config,
    domain::models::tenant::Tenant,
    domain::models::user::User,
    domain::ports::{FileStorage, StoredFile},
    domain::services::auth_service::AuthService,
    error::AppError,
    infra::repositories::{
        SqliteDemotionRepo, SqliteEmployeeRepo, SqliteJobApplicationRepo, SqliteJobOfferRepo,
        SqliteOrgChartRepo, SqlitePaySlipRepo, SqlitePostRepo, SqlitePromotionRepo,
        SqliteStatsRepo, SqliteTenantRepo, SqliteTrackingRepo, SqliteUserRepo,
    },
    state::AppState,
};
use argon2::{password_hash::SaltString, Argon2, PasswordHasher};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub struct MockStorage;

#[async_trait]
impl FileStorage for MockStorage {
    async fn save(
        &self,
        bytes: &[u8],
        prefix: &str,
        extension: &str,
        content_type: Option<&str>,
    ) -> Result<StoredFile, AppError> {
        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        Ok(StoredFile {
            key: format!("{prefix}/{filename}"),
            filename,
            size: bytes.len(),
            content_type: content_type.map(str::to_string),
        })
    }

    async fn url(&self, key: &str) -> Result<String, AppError> {
        Ok(format!("mock://{key}"))
    }
}

pub struct AuthHeaders {
    pub access_token: String,
    pub csrf_token: String,
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let priv_key_pem = include_str!("../tests/keys/test_private.pem");
        let pub_key_pem = include_str!("../tests/keys/test_public.pem");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret_key: priv_key_pem.to_string(),
            jwt_public_key: pub_key_pem.to_string(),
            auth_issuer: "test-issuer".to_string(),
            storage_root: "./test-storage".to_string(),
            admin_email: "admin@test.local".to_string(),
            admin_password: "admin-secret".to_string(),
        };

        let auth_service = Arc::new(AuthService::new(config.clone()));

        let state = Arc::new(AppState {
            config: config.clone(),
            tenant_repo: Arc::new(SqliteTenantRepo::new(pool.clone())),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            employee_repo: Arc::new(SqliteEmployeeRepo::new(pool.clone())),
            promotion_repo: Arc::new(SqlitePromotionRepo::new(pool.clone())),
            demotion_repo: Arc::new(SqliteDemotionRepo::new(pool.clone())),
            post_repo: Arc::new(SqlitePostRepo::new(pool.clone())),
            pay_slip_repo: Arc::new(SqlitePaySlipRepo::new(pool.clone())),
            tracking_repo: Arc::new(SqliteTrackingRepo::new(pool.clone())),
            job_offer_repo: Arc::new(SqliteJobOfferRepo::new(pool.clone())),
            job_application_repo: Arc::new(SqliteJobApplicationRepo::new(pool.clone())),
            org_chart_repo: Arc::new(SqliteOrgChartRepo::new(pool.clone())),
            stats_repo: Arc::new(SqliteStatsRepo::new(pool.clone())),
            auth_service,
            storage: Arc::new(MockStorage),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Seeds a tenant plus a DRH account, returns (tenant_id, access_code).
    pub async fn seed_tenant(&self, name: &str, email: &str, password: &str) -> (String, String) {
        let access_code = format!("CODE-{}", Uuid::new_v4());
        let tenant = Tenant::new(
            name.to_string(),
            name.to_string(),
            access_code.clone(),
            "CEO".to_string(),
        );
        let created = self
            .state
            .tenant_repo
            .create(&tenant)
            .await
            .expect("Failed to seed tenant");

        self.seed_user(Some(created.id.clone()), email, password, "DRH").await;

        (created.id, access_code)
    }

    pub async fn seed_user(
        &self,
        tenant_id: Option<String>,
        email: &str,
        password: &str,
        role: &str,
    ) -> User {
        let salt = SaltString::generate(&mut rand::thread_rng());
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string();

        let user = User::new(
            tenant_id,
            "Test".to_string(),
            "User".to_string(),
            email.to_string(),
            role.to_string(),
            password_hash,
        );
        self.state
            .user_repo
            .create(&user)
            .await
            .expect("Failed to seed user")
    }

    /// Full login flow: access-code gate, then credentials scoped by the
    /// staged tenant.
    pub async fn login(&self, access_code: &str, email: &str, password: &str) -> AuthHeaders {
        let gate_response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/auth/access-code")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        serde_json::json!({ "access_code": access_code }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(
            gate_response.status().is_success(),
            "Access code rejected in test helper: {}",
            gate_response.status()
        );
        let gate_cookie = cookie_value(&gate_response, "tenant_gate")
            .expect("No tenant_gate cookie returned");

        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::COOKIE, format!("tenant_gate={gate_cookie}"))
                    .body(Body::from(
                        serde_json::json!({ "email": email, "password": password }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        self.extract_auth(response).await
    }

    /// Platform-admin login: no staged tenant.
    pub async fn login_admin(&self, email: &str, password: &str) -> AuthHeaders {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        serde_json::json!({ "email": email, "password": password }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        self.extract_auth(response).await
    }

    async fn extract_auth(&self, response: Response<Body>) -> AuthHeaders {
        assert!(
            response.status().is_success(),
            "Login failed in test helper: status {}",
            response.status()
        );

        let access_token = cookie_value(&response, "access_token")
            .expect("No access_token cookie returned");

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        let csrf_token = body_json["csrf_token"]
            .as_str()
            .expect("No csrf_token in body")
            .to_string();

        AuthHeaders {
            access_token,
            csrf_token,
        }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        auth: &AuthHeaders,
        body: Option<serde_json::Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token);

        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    pub async fn json_body(response: Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    }
}

pub fn cookie_value(response: &Response<Body>, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .find_map(|cookie| {
            let start = cookie.find(&prefix)? + prefix.len();
            let rest = &cookie[start..];
            let end = rest.find(';').unwrap_or(rest.len());
            let value = &rest[..end];
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        })
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
