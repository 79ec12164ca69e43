//! # Account Service
//!
//! Signup, login, and logout flows over the record store.

use std::sync::Arc;

use chrono::Duration;
use tracing::info;
use uuid::Uuid;

use crate::auth::{hash_password, verify_password, TokenSigner};
use crate::store::{Filter, RecordStore};

use super::errors::{AccountError, AccountResult};
use super::model::{Account, AccountField};

/// Session tokens live for one hour.
const SESSION_TTL_HOURS: i64 = 1;

/// Account signup/login flows.
pub struct AccountService<S: RecordStore> {
    store: Arc<S>,
    signer: Arc<TokenSigner>,
}

impl<S: RecordStore> AccountService<S> {
    pub fn new(store: Arc<S>, signer: Arc<TokenSigner>) -> Self {
        Self { store, signer }
    }

    /// Creates an account unless the email is already registered.
    pub async fn signup(
        &self,
        display_name: &str,
        email: &str,
        password: &str,
    ) -> AccountResult<Account> {
        if self.find_by_email(email).await?.is_some() {
            return Err(AccountError::EmailTaken);
        }

        let password_hash = hash_password(password)?;
        let account = Account::new(display_name.to_string(), email.to_string(), password_hash);
        self.store.insert(&account).await?;

        info!(email = %account.email, "account created");
        Ok(account)
    }

    /// Verifies credentials and issues a one-hour session token.
    pub async fn login(&self, email: &str, password: &str) -> AccountResult<(Account, String)> {
        let account = self
            .find_by_email(email)
            .await?
            .ok_or(AccountError::UnknownAccount)?;

        if !verify_password(password, &account.password_hash)? {
            return Err(AccountError::InvalidCredentials);
        }

        let token = self
            .signer
            .issue(account.id, Duration::hours(SESSION_TTL_HOURS))?;
        info!(account_id = %account.id, "login succeeded");
        Ok((account, token))
    }

    /// Logout is stateless: the token stays valid until its expiry and the
    /// client simply discards it. Named here so the flow has one home.
    pub fn logout(&self, account_id: Uuid) {
        info!(account_id = %account_id, "logout acknowledged");
    }

    async fn find_by_email(&self, email: &str) -> AccountResult<Option<Account>> {
        let matches = self
            .store
            .find_many(Filter::new().eq(AccountField::Email, email))
            .await?;
        Ok(matches.into_iter().next())
    }
}
