// Student submissions and per-dashboard activity listings.

pub mod handlers;
pub mod listing;
pub mod submission;
