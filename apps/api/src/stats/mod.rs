// Dashboard aggregates for the student, faculty and admin views.

pub mod analytics;
pub mod dashboard;
pub mod handlers;
