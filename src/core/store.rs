//! The in-memory graph store.
//!
//! All users, posts and follow edges live in one [`Inner`] behind a single
//! [`RwLock`]. Every mutation holds the write lock from its first check to
//! its last write, so readers only ever see whole mutations and two racing
//! calls can never both pass the same uniqueness check. Nothing is persisted;
//! state is lost when the process exits.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::errors::StoreError;
use crate::core::helpers::{now_iso, validate_new_user, validate_post_content};
use crate::core::ids::{IdAllocator, PostId, UserId};
use crate::models::models::{Post, User};

struct Inner {
    users: BTreeMap<UserId, User>,
    /// email -> owner, exact (case-sensitive) match.
    emails: HashMap<String, UserId>,
    posts: HashMap<PostId, Post>,
    /// Global post collection in creation order.
    post_order: Vec<PostId>,
    ids: IdAllocator,
}

pub struct GraphStore {
    inner: RwLock<Inner>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::with_allocator(IdAllocator::new())
    }

    pub fn with_allocator(ids: IdAllocator) -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: BTreeMap::new(),
                emails: HashMap::new(),
                posts: HashMap::new(),
                post_order: Vec::new(),
                ids,
            }),
        }
    }

    // Mutations validate before touching state, so a panic mid-call cannot
    // leave a half-applied write behind and a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // --- Mutations ----------------------------------------------------------

    pub fn create_user(&self, username: &str, email: &str, password: &str) -> Result<User, StoreError> {
        validate_new_user(username, email, password)?;

        let mut guard = self.write();
        let inner = &mut *guard;
        if inner.emails.contains_key(email) {
            return Err(StoreError::DuplicateEmail);
        }

        let id = inner.ids.next_user_id();
        let user = User::new(id, username.to_string(), email.to_string(), password.to_string());
        inner.emails.insert(email.to_string(), id);
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    pub fn create_post(&self, user_id: UserId, content: &str) -> Result<Post, StoreError> {
        validate_post_content(content)?;

        let mut guard = self.write();
        let inner = &mut *guard;
        let owner = inner.users.get_mut(&user_id).ok_or(StoreError::UserNotFound)?;

        let posts = &inner.posts;
        let post = Post {
            id: inner.ids.next_post_id(|id| posts.contains_key(id)),
            user_id,
            content: content.to_string(),
            created_at: now_iso(),
        };
        owner.posts.push(post.id.clone());
        inner.post_order.push(post.id.clone());
        inner.posts.insert(post.id.clone(), post.clone());
        Ok(post)
    }

    /// Adds `target_id` to the follower's following set. Following someone
    /// already followed changes nothing.
    pub fn follow_user(&self, user_id: UserId, target_id: UserId) -> Result<User, StoreError> {
        let mut guard = self.write();
        if !guard.users.contains_key(&target_id) {
            return Err(StoreError::UserNotFound);
        }
        let user = guard.users.get_mut(&user_id).ok_or(StoreError::UserNotFound)?;
        if user_id == target_id {
            return Err(StoreError::Validation("Users cannot follow themselves".to_string()));
        }

        if !user.is_following(target_id) {
            user.following.push(target_id);
        }
        Ok(user.clone())
    }

    /// Removes `target_id` from the following set; not following is not an error.
    pub fn unfollow_user(&self, user_id: UserId, target_id: UserId) -> Result<User, StoreError> {
        let mut guard = self.write();
        if !guard.users.contains_key(&target_id) {
            return Err(StoreError::UserNotFound);
        }
        let user = guard.users.get_mut(&user_id).ok_or(StoreError::UserNotFound)?;

        user.following.retain(|id| *id != target_id);
        Ok(user.clone())
    }

    // --- Reads --------------------------------------------------------------

    pub fn get_user(&self, id: UserId) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    /// The user's posts in creation order.
    pub fn get_posts(&self, user_id: UserId) -> Result<Vec<Post>, StoreError> {
        let inner = self.read();
        let user = inner.users.get(&user_id).ok_or(StoreError::UserNotFound)?;
        Ok(user
            .posts
            .iter()
            .filter_map(|id| inner.posts.get(id).cloned())
            .collect())
    }

    /// Users for `ids`, in the order given. Unknown ids are skipped.
    pub fn get_users(&self, ids: &[UserId]) -> Vec<User> {
        let inner = self.read();
        ids.iter().filter_map(|id| inner.users.get(id).cloned()).collect()
    }

    pub fn posts_by_id(&self, ids: &[PostId]) -> Vec<Post> {
        let inner = self.read();
        ids.iter().filter_map(|id| inner.posts.get(id).cloned()).collect()
    }

    pub fn all_users(&self) -> Vec<User> {
        self.read().users.values().cloned().collect()
    }

    pub fn all_posts(&self) -> Vec<Post> {
        let inner = self.read();
        inner
            .post_order
            .iter()
            .filter_map(|id| inner.posts.get(id).cloned())
            .collect()
    }

    pub fn user_count(&self) -> usize {
        self.read().users.len()
    }

    pub fn post_count(&self) -> usize {
        self.read().post_order.len()
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
