use std::sync::Arc;
use crate::domain::ports::{
    DemotionRepository, EmployeeRepository, FileStorage, JobApplicationRepository,
    JobOfferRepository, OrgChartRepository, PaySlipRepository, PostRepository,
    PromotionRepository, StatsRepository, TenantRepository, TrackingRepository,
    UserRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub tenant_repo: Arc<dyn TenantRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub employee_repo: Arc<dyn EmployeeRepository>,
    pub promotion_repo: Arc<dyn PromotionRepository>,
    pub demotion_repo: Arc<dyn DemotionRepository>,
    pub post_repo: Arc<dyn PostRepository>,
    pub pay_slip_repo: Arc<dyn PaySlipRepository>,
    pub tracking_repo: Arc<dyn TrackingRepository>,
    pub job_offer_repo: Arc<dyn JobOfferRepository>,
    pub job_application_repo: Arc<dyn JobApplicationRepository>,
    pub org_chart_repo: Arc<dyn OrgChartRepository>,
    pub stats_repo: Arc<dyn StatsRepository>,
    pub auth_service: Arc<AuthService>,
    pub storage: Arc<dyn FileStorage>,
}
