mod sqlite_demotion_repo;
mod sqlite_employee_repo;
mod sqlite_job_application_repo;
mod sqlite_job_offer_repo;
mod sqlite_org_chart_repo;
mod sqlite_pay_slip_repo;
mod sqlite_post_repo;
mod sqlite_promotion_repo;
mod sqlite_stats_repo;
mod sqlite_tenant_repo;
mod sqlite_tracking_repo;
mod sqlite_user_repo;

pub use sqlite_demotion_repo::SqliteDemotionRepo;
pub use sqlite_employee_repo::SqliteEmployeeRepo;
pub use sqlite_job_application_repo::SqliteJobApplicationRepo;
pub use sqlite_job_offer_repo::SqliteJobOfferRepo;
pub use sqlite_org_chart_repo::SqliteOrgChartRepo;
pub use sqlite_pay_slip_repo::SqlitePaySlipRepo;
pub use sqlite_post_repo::SqlitePostRepo;
pub use sqlite_promotion_repo::SqlitePromotionRepo;
pub use sqlite_stats_repo::SqliteStatsRepo;
pub use sqlite_tenant_repo::SqliteTenantRepo;
pub use sqlite_tracking_repo::SqliteTrackingRepo;
pub use sqlite_user_repo::SqliteUserRepo;
