pub mod activity;
pub mod student;
pub mod user;

pub use activity::{Activity, Category, Certificate, Reviewable, Status};
pub use student::Student;
pub use user::{Role, User};
