pub mod auth;
pub mod demotion;
pub mod employee;
pub mod job_application;
pub mod job_offer;
pub mod org_chart;
pub mod pay_slip;
pub mod post;
pub mod promotion;
pub mod reports;
pub mod statut;
pub mod tenant;
pub mod tracking;
pub mod user;
