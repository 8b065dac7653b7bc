//! BDD step definitions for the log dashboard

pub mod dashboard_steps;
pub mod render_steps;
