//! Mock sign-in: one fixed user per role, no credentials.

pub mod handlers;

use crate::fixtures;
use crate::models::{Role, User};

pub fn current_user(role: Role) -> Option<User> {
    fixtures::users().into_iter().find(|u| u.role == role)
}
