use serde::Serialize;
use sqlx::FromRow;

use super::employee::Employee;
use super::promotion::Promotion;

/// Headline dashboard counters, all scoped to one tenant.
#[derive(Debug, Serialize, Default, Clone)]
pub struct DashboardStats {
    pub total_employees: i64,
    pub total_users: i64,
    pub total_posts: i64,
    pub promotions_scheduled: i64,
    pub demotions_scheduled: i64,
    pub pay_slips_generated: i64,
    pub employees_added_this_month: i64,
    pub upcoming_promotions: i64,
    pub pay_slips_last_month: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardReport {
    pub stats: DashboardStats,
    pub employees_by_department: Vec<DepartmentCount>,
    pub recent_employees: Vec<Employee>,
    pub recent_promotions: Vec<Promotion>,
}

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct DepartmentCount {
    pub departement: String,
    pub count: i64,
}

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct ContractCount {
    pub type_contrat: String,
    pub count: i64,
}

/// Applied-promotion raise totals, bucketed by month of effect ("YYYY-MM").
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct SalaryEvolutionPoint {
    pub mois: String,
    pub total_augmentation: i64,
}

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct TopDepartment {
    pub departement: String,
    pub count: i64,
    pub salaire_moyen: f64,
}

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct EventTypeCount {
    pub type_evenement: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct StatisticsReport {
    pub total_employees: i64,
    pub total_promotions: i64,
    pub total_demotions: i64,
    pub total_pay_slips: i64,
    pub employees_by_department: Vec<DepartmentCount>,
    pub employees_by_contract: Vec<ContractCount>,
    pub salary_evolution: Vec<SalaryEvolutionPoint>,
    pub top_departments: Vec<TopDepartment>,
    pub attendance_stats: Vec<EventTypeCount>,
}

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct DepartmentStat {
    pub departement: String,
    pub total_employes: i64,
    pub salaire_moyen: f64,
    pub masse_salariale: i64,
}

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct SalaryBracket {
    pub tranche_salaire: String,
    pub nombre_employes: i64,
    pub salaire_moyen: f64,
}
