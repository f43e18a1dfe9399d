// Faculty review workflow: transitions, points table, review queue handlers.

pub mod handlers;
pub mod machine;
pub mod points;

pub use machine::ReviewError;
