//! Framework-free form cores. Views own the state and wire the events.

mod register;
pub use register::{
    password_is_strong, submit_registration, CreateAccount, Navigate, RegisterForm, LOGIN_PATH,
    PASSWORD_MIN_CHARS, PASSWORD_SPECIAL_CHARS,
};
