use crate::core::errors::ApiError;
use crate::core::store::GraphStore;
use crate::models::models::User;
use crate::users::require_user_id;

pub fn follow_user(store: &GraphStore, user_id: &str, follow_user_id: &str) -> Result<User, ApiError> {
    let user_id = require_user_id(user_id)?;
    let target_id = require_user_id(follow_user_id)?;

    match store.follow_user(user_id, target_id) {
        Ok(user) => {
            tracing::info!(%user_id, %target_id, "followed");
            Ok(user)
        }
        Err(err) => {
            tracing::warn!(error = %err, %user_id, %target_id, "follow rejected");
            Err(err.into())
        }
    }
}

pub fn unfollow_user(store: &GraphStore, user_id: &str, unfollow_user_id: &str) -> Result<User, ApiError> {
    let user_id = require_user_id(user_id)?;
    let target_id = require_user_id(unfollow_user_id)?;

    match store.unfollow_user(user_id, target_id) {
        Ok(user) => {
            tracing::info!(%user_id, %target_id, "unfollowed");
            Ok(user)
        }
        Err(err) => {
            tracing::warn!(error = %err, %user_id, %target_id, "unfollow rejected");
            Err(err.into())
        }
    }
}

/// Resolves a following list to user records.
pub fn get_followings(store: &GraphStore, user: &User) -> Vec<User> {
    store.get_users(&user.following)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::UserId;
    use crate::users::create_user;

    fn setup() -> GraphStore {
        let store = GraphStore::new();
        create_user(&store, "alice", "a@x.com", "pw").unwrap();
        create_user(&store, "bob", "b@x.com", "pw").unwrap();
        store
    }

    #[test]
    fn test_follow_then_unfollow() {
        let store = setup();
        let alice = follow_user(&store, "1", "2").unwrap();
        assert_eq!(alice.following, vec![UserId::from(2)]);

        let names: Vec<_> = get_followings(&store, &alice)
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, vec!["bob"]);

        let alice = unfollow_user(&store, "1", "2").unwrap();
        assert!(alice.following.is_empty());
    }

    #[test]
    fn test_missing_target() {
        let store = setup();
        assert_eq!(
            follow_user(&store, "1", "999").unwrap_err(),
            ApiError::NotFound("User not found".to_string())
        );
        assert_eq!(
            unfollow_user(&store, "nope", "2").unwrap_err(),
            ApiError::NotFound("User not found".to_string())
        );
    }

    #[test]
    fn test_padded_ids_do_not_alias_users() {
        let store = setup();
        assert_eq!(
            follow_user(&store, "+1", "002").unwrap_err(),
            ApiError::NotFound("User not found".to_string())
        );
        assert!(store.get_user(UserId::from(1)).unwrap().following.is_empty());
    }

    #[test]
    fn test_self_follow_is_bad_request() {
        let store = setup();
        assert!(matches!(
            follow_user(&store, "2", "2"),
            Err(ApiError::BadRequest(_))
        ));
    }
}
