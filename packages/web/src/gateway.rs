//! Adapters binding the form core's collaborator traits to the real app:
//! the accounts endpoint on one side, the router on the other. Tests swap
//! these for doubles; the views never notice.

use api::{AccountError, AccountsClient, CreateUserParams};
use dioxus::prelude::*;
use ui::forms::{CreateAccount, Navigate};

use crate::Route;

/// [`CreateAccount`] backed by the accounts endpoint.
#[derive(Clone)]
pub struct AppAccounts(pub AccountsClient);

impl CreateAccount for AppAccounts {
    async fn create_account(&self, params: CreateUserParams) -> Result<(), AccountError> {
        self.0.register(&params).await
    }
}

/// [`Navigate`] backed by the router.
#[derive(Clone, Copy)]
pub struct AppNavigator(pub Navigator);

impl Navigate for AppNavigator {
    fn navigate_to(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => {
                self.0.push(route);
            }
            Err(err) => tracing::warn!(%path, %err, "navigation target did not parse"),
        }
    }
}
