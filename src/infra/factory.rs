use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use argon2::{password_hash::SaltString, Argon2, PasswordHasher};
use rand::rngs::OsRng;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::models::user::{User, ROLE_ADMIN};
use crate::domain::ports::UserRepository;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    SqliteDemotionRepo, SqliteEmployeeRepo, SqliteJobApplicationRepo, SqliteJobOfferRepo,
    SqliteOrgChartRepo, SqlitePaySlipRepo, SqlitePostRepo, SqlitePromotionRepo, SqliteStatsRepo,
    SqliteTenantRepo, SqliteTrackingRepo, SqliteUserRepo,
};
use crate::infra::storage::LocalStorage;
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_migrations(&pool).await;

    let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
    seed_platform_admin(user_repo.as_ref(), config).await;

    let auth_service = Arc::new(AuthService::new(config.clone()));
    let storage = Arc::new(LocalStorage::new(config.storage_root.clone()));

    AppState {
        config: config.clone(),
        tenant_repo: Arc::new(SqliteTenantRepo::new(pool.clone())),
        user_repo,
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
        storage,
    }
}

async fn run_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}

/// First boot creates the platform admin from config; later boots find the
/// account and leave it alone.
async fn seed_platform_admin(user_repo: &dyn UserRepository, config: &Config) {
    let existing = user_repo
        .find_admin_by_email(&config.admin_email)
        .await
        .expect("Failed to query platform admin");
    if existing.is_some() {
        return;
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(config.admin_password.as_bytes(), &salt)
        .expect("Failed to hash admin password")
        .to_string();

    let admin = User::new(
        None,
        "Platform".to_string(),
        "Admin".to_string(),
        config.admin_email.clone(),
        ROLE_ADMIN.to_string(),
        password_hash,
    );
    user_repo
        .create(&admin)
        .await
        .expect("Failed to seed platform admin");
    info!("Seeded platform admin: {}", config.admin_email);
}
