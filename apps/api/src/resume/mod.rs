pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod profile;
pub mod prompts;
pub mod templates;
pub mod wizard;

pub use generator::{ResumeDrafter, ResumeGenerator};
