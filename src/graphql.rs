//! GraphQL surface over the resolvers.
//!
//! Field and argument names follow async-graphql's camelCase renaming, so
//! `create_user` is exposed as `createUser` and `follow_user_id` as
//! `followUserId`. Nested `posts` and `following` are looked up in the store
//! only when a query selects them.

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Result, Schema, ID};

use crate::core::errors::ApiError;
use crate::core::store::GraphStore;
use crate::models::models::{Post, User};
use crate::{follow, posts, users};

pub type SocialSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<GraphStore>) -> SocialSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn store<'a>(ctx: &Context<'a>) -> Result<&'a Arc<GraphStore>> {
    ctx.data::<Arc<GraphStore>>()
}

fn api_error(err: ApiError) -> async_graphql::Error {
    async_graphql::Error::new(err.message()).extend_with(|_, ext| ext.set("code", err.code()))
}

pub struct UserNode(User);

#[Object(name = "User")]
impl UserNode {
    async fn id(&self) -> ID {
        ID::from(self.0.id.to_string())
    }

    async fn username(&self) -> &str {
        &self.0.username
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostNode>> {
        let store = store(ctx)?;
        Ok(store.posts_by_id(&self.0.posts).into_iter().map(PostNode).collect())
    }

    async fn following(&self, ctx: &Context<'_>) -> Result<Vec<UserNode>> {
        let store = store(ctx)?;
        Ok(follow::get_followings(store, &self.0)
            .into_iter()
            .map(UserNode)
            .collect())
    }
}

pub struct PostNode(Post);

#[Object(name = "Post")]
impl PostNode {
    async fn id(&self) -> ID {
        ID::from(self.0.id.to_string())
    }

    async fn content(&self) -> &str {
        &self.0.content
    }

    async fn created_at(&self) -> &str {
        &self.0.created_at
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<UserNode>> {
        let store = store(ctx)?;
        Ok(users::get_user(store, id.as_str()).map(UserNode))
    }

    async fn posts(&self, ctx: &Context<'_>, user_id: ID) -> Result<Vec<PostNode>> {
        let store = store(ctx)?;
        let posts = posts::list_posts(store, user_id.as_str()).map_err(api_error)?;
        Ok(posts.into_iter().map(PostNode).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
        password: String,
    ) -> Result<Option<UserNode>> {
        let store = store(ctx)?;
        users::create_user(store, &username, &email, &password)
            .map(|user| Some(UserNode(user)))
            .map_err(api_error)
    }

    async fn create_post(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
        content: String,
    ) -> Result<Option<PostNode>> {
        let store = store(ctx)?;
        posts::create_post(store, user_id.as_str(), &content)
            .map(|post| Some(PostNode(post)))
            .map_err(api_error)
    }

    async fn follow_user(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
        follow_user_id: ID,
    ) -> Result<Option<UserNode>> {
        let store = store(ctx)?;
        follow::follow_user(store, user_id.as_str(), follow_user_id.as_str())
            .map(|user| Some(UserNode(user)))
            .map_err(api_error)
    }

    async fn unfollow_user(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
        unfollow_user_id: ID,
    ) -> Result<Option<UserNode>> {
        let store = store(ctx)?;
        follow::unfollow_user(store, user_id.as_str(), unfollow_user_id.as_str())
            .map(|user| Some(UserNode(user)))
            .map_err(api_error)
    }
}
