use crate::domain::models::{
    demotion::Demotion,
    employee::Employee,
    job_application::JobApplication,
    job_offer::JobOffer,
    org_chart::OrganizationalChart,
    pay_slip::PaySlip,
    post::Post,
    promotion::Promotion,
    reports::{
        ContractCount, DashboardStats, DepartmentCount, DepartmentStat, EventTypeCount,
        SalaryBracket, SalaryEvolutionPoint, TopDepartment,
    },
    statut::{ApplicationStatut, OfferStatut},
    tenant::Tenant,
    tracking::EmployeeTracking,
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

// Every tenant-scoped method takes the tenant id as a mandatory predicate:
// a record of another tenant must be indistinguishable from a missing one.

#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn create(&self, tenant: &Tenant) -> Result<Tenant, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Tenant>, AppError>;
    async fn find_by_access_code(&self, access_code: &str) -> Result<Option<Tenant>, AppError>;
    async fn list(&self, page: i64, per_page: i64) -> Result<Vec<Tenant>, AppError>;
    async fn update(&self, tenant: &Tenant) -> Result<Tenant, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    /// (users, employees) referencing the tenant; deletion is blocked while
    /// either is non-zero.
    async fn count_dependents(&self, id: &str) -> Result<(i64, i64), AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, tenant_id: &str, email: &str) -> Result<Option<User>, AppError>;
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_admin_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn list(&self, tenant_id: &str, page: i64, per_page: i64) -> Result<Vec<User>, AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
    async fn soft_delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, employee: &Employee) -> Result<Employee, AppError>;
    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<Employee>, AppError>;
    async fn list(&self, tenant_id: &str, page: i64, per_page: i64) -> Result<Vec<Employee>, AppError>;
    async fn list_active(&self, tenant_id: &str) -> Result<Vec<Employee>, AppError>;
    async fn update(&self, employee: &Employee) -> Result<Employee, AppError>;
    async fn soft_delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait PromotionRepository: Send + Sync {
    async fn create(&self, promotion: &Promotion) -> Result<Promotion, AppError>;
    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<Promotion>, AppError>;
    async fn list(&self, tenant_id: &str, page: i64, per_page: i64) -> Result<Vec<Promotion>, AppError>;
    async fn update(&self, promotion: &Promotion) -> Result<Promotion, AppError>;
    /// Marks the promotion applied and copies the new position and salary
    /// onto the employee, in one transaction. The status predicate in the
    /// UPDATE is the terminal-state guard; 0 rows means the record already
    /// left `En attente`.
    async fn apply(&self, tenant_id: &str, id: &str) -> Result<Promotion, AppError>;
    async fn cancel(&self, tenant_id: &str, id: &str) -> Result<Promotion, AppError>;
    async fn delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait DemotionRepository: Send + Sync {
    async fn create(&self, demotion: &Demotion) -> Result<Demotion, AppError>;
    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<Demotion>, AppError>;
    async fn list(&self, tenant_id: &str, page: i64, per_page: i64) -> Result<Vec<Demotion>, AppError>;
    async fn update(&self, demotion: &Demotion) -> Result<Demotion, AppError>;
    async fn apply(&self, tenant_id: &str, id: &str) -> Result<Demotion, AppError>;
    async fn cancel(&self, tenant_id: &str, id: &str) -> Result<Demotion, AppError>;
    async fn delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: &Post) -> Result<Post, AppError>;
    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<Post>, AppError>;
    async fn list(&self, tenant_id: &str, page: i64, per_page: i64) -> Result<Vec<Post>, AppError>;
    async fn count(&self, tenant_id: &str) -> Result<i64, AppError>;
    async fn update(&self, post: &Post) -> Result<Post, AppError>;
    async fn delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait PaySlipRepository: Send + Sync {
    async fn create(&self, slip: &PaySlip) -> Result<PaySlip, AppError>;
    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<PaySlip>, AppError>;
    async fn find_by_period(
        &self,
        tenant_id: &str,
        employee_id: &str,
        mois: &str,
        annee: i64,
    ) -> Result<Option<PaySlip>, AppError>;
    async fn list(&self, tenant_id: &str, page: i64, per_page: i64) -> Result<Vec<PaySlip>, AppError>;
    async fn cancel(&self, tenant_id: &str, id: &str) -> Result<PaySlip, AppError>;
    async fn delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait TrackingRepository: Send + Sync {
    async fn create(&self, tracking: &EmployeeTracking) -> Result<EmployeeTracking, AppError>;
    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<EmployeeTracking>, AppError>;
    async fn list(
        &self,
        tenant_id: &str,
        date: Option<NaiveDate>,
        employee_id: Option<&str>,
        page: i64,
        per_page: i64,
    ) -> Result<Vec<EmployeeTracking>, AppError>;
    async fn update(&self, tracking: &EmployeeTracking) -> Result<EmployeeTracking, AppError>;
    async fn delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError>;
    async fn list_by_day_and_types(
        &self,
        tenant_id: &str,
        day: NaiveDate,
        types: &[&str],
    ) -> Result<Vec<EmployeeTracking>, AppError>;
    async fn count_by_type_between(
        &self,
        tenant_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<EventTypeCount>, AppError>;
}

#[async_trait]
pub trait JobOfferRepository: Send + Sync {
    async fn create(&self, offer: &JobOffer) -> Result<JobOffer, AppError>;
    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<JobOffer>, AppError>;
    async fn list(&self, tenant_id: &str, page: i64, per_page: i64) -> Result<Vec<JobOffer>, AppError>;
    async fn update(&self, offer: &JobOffer) -> Result<JobOffer, AppError>;
    async fn delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError>;
    /// Persists a lazily refreshed status. Only called with offers fetched
    /// through a scoped or public read path.
    async fn save_statut(&self, id: &str, statut: OfferStatut) -> Result<(), AppError>;
    async fn count_applications(&self, offer_id: &str) -> Result<i64, AppError>;
    /// Public job board: published offers across all tenants, expiry not yet
    /// applied. The caller refreshes each row and drops the closed ones.
    async fn list_published(&self) -> Result<Vec<JobOffer>, AppError>;
    async fn find_public(&self, id: &str) -> Result<Option<JobOffer>, AppError>;
}

#[async_trait]
pub trait JobApplicationRepository: Send + Sync {
    async fn create(&self, application: &JobApplication) -> Result<JobApplication, AppError>;
    /// Scoped through the owning offer so that legacy null-tenant rows stay
    /// reachable by the offer's tenant.
    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<JobApplication>, AppError>;
    async fn list_by_offer(&self, tenant_id: &str, offer_id: &str) -> Result<Vec<JobApplication>, AppError>;
    async fn exists_for(&self, offer_id: &str, email: &str) -> Result<bool, AppError>;
    async fn set_statut(
        &self,
        tenant_id: &str,
        id: &str,
        statut: ApplicationStatut,
    ) -> Result<JobApplication, AppError>;
}

#[async_trait]
pub trait OrgChartRepository: Send + Sync {
    async fn create(&self, chart: &OrganizationalChart) -> Result<OrganizationalChart, AppError>;
    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<OrganizationalChart>, AppError>;
    async fn list(&self, tenant_id: &str, page: i64, per_page: i64) -> Result<Vec<OrganizationalChart>, AppError>;
    async fn update(&self, chart: &OrganizationalChart) -> Result<OrganizationalChart, AppError>;
    async fn delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn dashboard_stats(&self, tenant_id: &str, today: NaiveDate) -> Result<DashboardStats, AppError>;
    async fn employees_by_department(&self, tenant_id: &str) -> Result<Vec<DepartmentCount>, AppError>;
    async fn employees_by_contract(&self, tenant_id: &str) -> Result<Vec<ContractCount>, AppError>;
    async fn recent_employees(&self, tenant_id: &str, limit: i64) -> Result<Vec<Employee>, AppError>;
    async fn recent_promotions(&self, tenant_id: &str, limit: i64) -> Result<Vec<Promotion>, AppError>;
    async fn count_promotions(&self, tenant_id: &str) -> Result<i64, AppError>;
    async fn count_demotions(&self, tenant_id: &str) -> Result<i64, AppError>;
    async fn salary_evolution(&self, tenant_id: &str, limit: i64) -> Result<Vec<SalaryEvolutionPoint>, AppError>;
    async fn top_departments(&self, tenant_id: &str, limit: i64) -> Result<Vec<TopDepartment>, AppError>;
    async fn attendance_since(
        &self,
        tenant_id: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<EventTypeCount>, AppError>;
    async fn department_stats(&self, tenant_id: &str) -> Result<Vec<DepartmentStat>, AppError>;
    async fn salary_brackets(&self, tenant_id: &str) -> Result<Vec<SalaryBracket>, AppError>;
}

pub struct StoredFile {
    pub key: String,
    pub filename: String,
    pub size: usize,
    pub content_type: Option<String>,
}

/// Capability interface over the upload backend. The application persists
/// only the returned opaque key; URLs are resolved on demand behind
/// authenticated handlers.
#[async_trait]
pub trait FileStorage: Send + Sync {
    async fn save(
        &self,
        bytes: &[u8],
        prefix: &str,
        extension: &str,
        content_type: Option<&str>,
    ) -> Result<StoredFile, AppError>;
    async fn url(&self, key: &str) -> Result<String, AppError>;
}
