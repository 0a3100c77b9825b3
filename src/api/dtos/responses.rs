use crate::domain::models::job_offer::JobOffer;
use crate::domain::models::reports::EventTypeCount;
use crate::domain::models::tracking::EmployeeTracking;
use serde::Serialize;

#[derive(Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub page: i64,
    pub per_page: i64,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, page: i64, per_page: i64) -> Self {
        Self { data, page, per_page }
    }
}

#[derive(Serialize)]
pub struct AccessCodeResponse {
    pub tenant_name: String,
}

#[derive(Serialize)]
pub struct JobOfferDetail {
    #[serde(flatten)]
    pub offer: JobOffer,
    pub nombre_candidatures: i64,
}

#[derive(Serialize)]
pub struct GenerateAllResponse {
    pub generated: i64,
}

#[derive(Serialize)]
pub struct TrackingDashboard {
    pub arrivees_du_jour: Vec<EmployeeTracking>,
    pub absences_du_jour: Vec<EmployeeTracking>,
    pub statistiques_semaine: Vec<EventTypeCount>,
}

#[derive(Serialize)]
pub struct FileUrlResponse {
    pub url: String,
}
