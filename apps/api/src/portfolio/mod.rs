// Portfolio export over approved activities.

pub mod builder;
pub mod handlers;
