use serde::Serialize;

use crate::core::ids::{PostId, UserId};

/// A registered account. Owns its posts (by id) and its outgoing follow edges.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    /// Creation order.
    pub posts: Vec<PostId>,
    /// Follow order, never contains duplicates.
    pub following: Vec<UserId>,
}

impl User {
    pub fn new(id: UserId, username: String, email: String, password: String) -> Self {
        Self {
            id,
            username,
            email,
            password,
            posts: Vec::new(),
            following: Vec::new(),
        }
    }

    pub fn is_following(&self, target: UserId) -> bool {
        self.following.contains(&target)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: String,
}
