use crate::core::errors::ApiError;
use crate::core::store::GraphStore;
use crate::models::models::Post;
use crate::users::require_user_id;

pub fn create_post(store: &GraphStore, user_id: &str, content: &str) -> Result<Post, ApiError> {
    let user_id = require_user_id(user_id)?;

    match store.create_post(user_id, content) {
        Ok(post) => {
            tracing::info!(post_id = %post.id, %user_id, "post created");
            Ok(post)
        }
        Err(err) => {
            tracing::warn!(error = %err, %user_id, "create post rejected");
            Err(err.into())
        }
    }
}

/// Every post in creation order, for diagnostics.
pub fn list_all_posts(store: &GraphStore) -> Vec<Post> {
    store.all_posts()
}

pub fn list_posts(store: &GraphStore, user_id: &str) -> Result<Vec<Post>, ApiError> {
    let user_id = require_user_id(user_id)?;
    tracing::debug!(%user_id, "listing posts");
    Ok(store.get_posts(user_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::create_user;

    #[test]
    fn test_post_shows_up_in_listing() {
        let store = GraphStore::new();
        create_user(&store, "alice", "a@x.com", "pw").unwrap();

        let post = create_post(&store, "1", "hello").unwrap();
        assert_eq!(post.content, "hello");
        assert!(chrono::DateTime::parse_from_rfc3339(&post.created_at).is_ok());

        let posts = list_posts(&store, "1").unwrap();
        assert_eq!(posts, vec![post]);
    }

    #[test]
    fn test_missing_user() {
        let store = GraphStore::new();
        let not_found = ApiError::NotFound("User not found".to_string());
        assert_eq!(create_post(&store, "999", "x").unwrap_err(), not_found);
        assert_eq!(list_posts(&store, "999").unwrap_err(), not_found);
        assert_eq!(store.post_count(), 0);
    }

    #[test]
    fn test_all_posts_in_creation_order() {
        let store = GraphStore::new();
        create_user(&store, "alice", "a@x.com", "pw").unwrap();
        create_user(&store, "bob", "b@x.com", "pw").unwrap();
        create_post(&store, "1", "first").unwrap();
        create_post(&store, "2", "second").unwrap();
        create_post(&store, "1", "third").unwrap();

        let contents: Vec<_> = list_all_posts(&store).into_iter().map(|p| p.content).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_content_is_bad_request() {
        let store = GraphStore::new();
        create_user(&store, "alice", "a@x.com", "pw").unwrap();
        assert_eq!(
            create_post(&store, "1", "").unwrap_err(),
            ApiError::BadRequest("Invalid content".to_string())
        );
    }
}
