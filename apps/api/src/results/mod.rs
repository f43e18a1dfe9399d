// Semester results: subject marks, SGPA, percentage, grade distribution.

pub mod grades;
pub mod handlers;
