//! Data models for the application.

mod user;

pub use user::{CreateUserParams, LoginParams, Role, UnknownRole, UserInfo};
