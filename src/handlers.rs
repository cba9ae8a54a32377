use std::sync::Arc;

use actix_web::{web, HttpResponse};
use async_graphql::http::GraphiQLSource;

use crate::core::errors::ApiError;
use crate::core::store::GraphStore;
use crate::graphql::{build_schema, SocialSchema};
use crate::posts::list_all_posts;
use crate::users::list_users;

/// Shared by every worker; the store inside is the single source of truth.
pub struct AppState {
    pub store: Arc<GraphStore>,
    pub schema: SocialSchema,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(Arc::new(GraphStore::new()))
    }

    pub fn with_store(store: Arc<GraphStore>) -> Self {
        let schema = build_schema(Arc::clone(&store));
        Self { store, schema }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(err.to_string()).into()
    }))
    .route("/", web::get().to(index))
    .route("/allusers", web::get().to(all_users))
    .route("/allposts", web::get().to(all_posts))
    .service(
        web::resource("/graphql")
            .route(web::post().to(graphql))
            .route(web::get().to(graphiql)),
    );
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello you reach to server..")
}

async fn all_users(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(list_users(&state.store))
}

async fn all_posts(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(list_all_posts(&state.store))
}

async fn graphql(state: web::Data<AppState>, req: web::Json<async_graphql::Request>) -> HttpResponse {
    let response = state.schema.execute(req.into_inner()).await;
    HttpResponse::Ok().json(response)
}

async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({"error": "No route found"}))
}
