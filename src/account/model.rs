//! # Account Records
//!
//! The stored account record and its sanitized API projection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{Record, RecordField};

/// A registered user account.
///
/// The password hash never leaves the server; API responses project
/// through [`AccountInfo`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub password_hash: String,
}

impl Account {
    /// Creates an account with a fresh id.
    pub fn new(display_name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name,
            email,
            password_hash,
        }
    }
}

/// Queryable account fields
#[derive(Debug, Clone, Copy)]
pub enum AccountField {
    Id,
    Email,
}

impl RecordField for AccountField {
    fn as_str(self) -> &'static str {
        match self {
            AccountField::Id => "_id",
            AccountField::Email => "email",
        }
    }
}

impl Record for Account {
    const KIND: &'static str = "accounts";
    type Field = AccountField;
}

/// Sanitized account representation for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
}

impl From<&Account> for AccountInfo {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            user_name: account.display_name.clone(),
            email: account.email.clone(),
        }
    }
}
