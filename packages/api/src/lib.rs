//! # API crate — account model and backend client for Inkwell
//!
//! Everything the frontends need to talk to the account endpoints: the data
//! model that crosses the wire, the error classification every failed call
//! collapses into, and the HTTP client itself.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`AccountsClient`], the reqwest wrapper around the account endpoints |
//! | [`error`] | [`AccountError`], the four failure kinds a submission can end in |
//! | [`models`] | [`Role`], the request payloads, and the client-safe [`UserInfo`] |
//!
//! Account persistence, uniqueness checks, password hashing, and authorization
//! assignment all live behind the endpoints; this crate only speaks their
//! interface.

pub mod client;
pub mod error;
pub mod models;

pub use client::{default_base_url, AccountsClient, DEFAULT_SERVER_URL};
pub use error::AccountError;
pub use models::{CreateUserParams, LoginParams, Role, UserInfo};
