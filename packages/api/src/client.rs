//! HTTP client for the account endpoints.

use serde::Deserialize;

use crate::error::AccountError;
use crate::models::{CreateUserParams, LoginParams, UserInfo};

/// Fallback server URL for native builds and tests.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Error payload the backend attaches to non-success responses. Both field
/// names are in the wild, so accept either.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Client for the account endpoints of the Inkwell backend.
#[derive(Debug, Clone)]
pub struct AccountsClient {
    http: reqwest::Client,
    base_url: String,
}

impl AccountsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Ask the backend to create a new account. The response body, if any,
    /// is not consumed.
    pub async fn register(&self, params: &CreateUserParams) -> Result<(), AccountError> {
        tracing::debug!(email = %params.email, role = %params.role, "registering account");
        let res = self
            .http
            .post(format!("{}/api/auth/register", self.base_url))
            .json(params)
            .send()
            .await?;
        let status = res.status();
        if status.is_success() {
            return Ok(());
        }
        Err(AccountError::from_status(status, error_detail(res).await))
    }

    /// Exchange credentials for the matching account profile.
    pub async fn login(&self, params: &LoginParams) -> Result<UserInfo, AccountError> {
        let res = self
            .http
            .post(format!("{}/api/auth/login", self.base_url))
            .json(params)
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            return Err(AccountError::from_status(status, error_detail(res).await));
        }
        res.json::<UserInfo>()
            .await
            .map_err(|e| AccountError::Unknown(e.to_string()))
    }
}

impl Default for AccountsClient {
    fn default() -> Self {
        Self::new(default_base_url())
    }
}

/// Server URL to talk to: the window origin when running in the browser,
/// [`DEFAULT_SERVER_URL`] everywhere else.
pub fn default_base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return origin;
            }
        }
    }
    DEFAULT_SERVER_URL.to_string()
}

async fn error_detail(res: reqwest::Response) -> Option<String> {
    let body = res.json::<ErrorBody>().await.ok()?;
    body.error.or(body.message)
}
