use crate::core::errors::{ApiError, StoreError};
use crate::core::helpers::parse_user_id;
use crate::core::ids::UserId;
use crate::core::store::GraphStore;
use crate::models::models::User;

/// Resolves a wire id to a typed one; any non-canonical spelling names no user.
pub fn require_user_id(raw: &str) -> Result<UserId, ApiError> {
    parse_user_id(raw).ok_or_else(|| StoreError::UserNotFound.into())
}

pub fn create_user(
    store: &GraphStore,
    username: &str,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    match store.create_user(username, email, password) {
        Ok(user) => {
            tracing::info!(user_id = %user.id, username = %user.username, "user created");
            Ok(user)
        }
        Err(err) => {
            tracing::warn!(error = %err, "create user rejected");
            Err(err.into())
        }
    }
}

/// `None` for unknown and unparsable ids alike.
pub fn get_user(store: &GraphStore, id: &str) -> Option<User> {
    tracing::debug!(id, "fetching user");
    parse_user_id(id).and_then(|id| store.get_user(id))
}

pub fn list_users(store: &GraphStore) -> Vec<User> {
    store.all_users()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_fetch() {
        let store = GraphStore::new();
        let user = create_user(&store, "alice", "a@x.com", "pw").unwrap();
        assert_eq!(user.id.to_string(), "1");

        let fetched = get_user(&store, "1").unwrap();
        assert_eq!(fetched, user);
    }

    #[test]
    fn test_duplicate_email_is_conflict() {
        let store = GraphStore::new();
        create_user(&store, "alice", "a@x.com", "pw").unwrap();
        let err = create_user(&store, "alice", "a@x.com", "pw").unwrap_err();
        assert_eq!(err, ApiError::Conflict("This email is already registered.".to_string()));
        assert_eq!(list_users(&store).len(), 1);
    }

    #[test]
    fn test_unknown_or_malformed_ids_are_null() {
        let store = GraphStore::new();
        create_user(&store, "alice", "a@x.com", "pw").unwrap();
        assert!(get_user(&store, "999").is_none());
        assert!(get_user(&store, "alice").is_none());
        for raw in ["01", "0001", "+1", " 1 "] {
            assert!(get_user(&store, raw).is_none(), "{:?} resolved to a user", raw);
        }
    }

    #[test]
    fn test_require_user_id() {
        assert!(require_user_id("3").is_ok());
        assert_eq!(
            require_user_id("x"),
            Err(ApiError::NotFound("User not found".to_string()))
        );
    }
}
