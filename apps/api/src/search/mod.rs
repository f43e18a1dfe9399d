// Smart search: query engine, debounced sessions, HTTP handlers.

pub mod debounce;
pub mod engine;
pub mod handlers;
pub mod query;
pub mod sessions;
