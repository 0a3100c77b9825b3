pub mod auth_service;
pub mod months;
pub mod payroll;
pub mod transitions;
