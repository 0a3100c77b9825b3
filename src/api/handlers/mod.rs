pub mod auth;
pub mod dashboard;
pub mod demotion;
pub mod employee;
pub mod health;
pub mod job_offer;
pub mod jobs_public;
pub mod org_chart;
pub mod pay_slip;
pub mod post;
pub mod promotion;
pub mod statistics;
pub mod tenant;
pub mod tracking;
pub mod user;
