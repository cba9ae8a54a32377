//! In-memory social graph: users, their posts, and who follows whom,
//! served over GraphQL.
//!
//! [`GraphStore`](crate::core::store::GraphStore) owns every record. The `users`, `posts` and
//! `follow` modules resolve API operations against it, and [`graphql`] plus
//! [`handlers`] expose those operations over HTTP.

pub mod config;
pub mod core;
pub mod follow;
pub mod graphql;
pub mod handlers;
pub mod models;
pub mod posts;
pub mod users;
