//! # Record Traits
//!
//! A record kind is a schema-defined document category: it names the
//! collection it persists to and the closed set of fields it can be queried
//! by. Keeping the field set in an enum means a filter over a misspelled or
//! foreign field is a compile error, not a query that silently matches
//! nothing.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

/// A queryable field of a record kind.
///
/// Implemented by per-record field enums; `as_str` yields the serialized
/// field name in the store.
pub trait RecordField: Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Serialized field name in the store.
    fn as_str(self) -> &'static str;
}

/// A persistable record kind.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    /// Collection this kind persists to.
    const KIND: &'static str;

    /// The queryable fields of this kind.
    type Field: RecordField;
}

/// A record kind owned by a single account.
///
/// Update and delete only exist for owned kinds, and only through scoped
/// operations; see [`crate::store::RecordStore`].
pub trait OwnedRecord: Record {
    /// Field holding the owning account id.
    const OWNER_FIELD: Self::Field;
}

/// The authenticated account id used to restrict an operation to records
/// belonging to the caller.
///
/// Built from the identity the authorization gate attaches to a request;
/// the store appends it to every scoped filter, so a mutation without a
/// scope cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    account_id: Uuid,
}

impl Scope {
    /// Scope to the records owned by the given account.
    pub fn account(account_id: Uuid) -> Self {
        Self { account_id }
    }

    /// The account this scope restricts to.
    pub fn account_id(&self) -> Uuid {
        self.account_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_preserves_account_id() {
        let id = Uuid::new_v4();
        let scope = Scope::account(id);
        assert_eq!(scope.account_id(), id);
    }
}
