use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use socialgraph::config::{listen_port, BIND_HOST};
use socialgraph::handlers::{self, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "socialgraph=info,actix_web=info".into()),
        )
        .init();

    let port = listen_port();
    let state = web::Data::new(AppState::new());
    tracing::info!("store: in-memory (data will not survive restart)");

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(handlers::routes)
            .default_service(web::route().to(handlers::not_found))
    })
    .bind((BIND_HOST, port))
    .with_context(|| format!("failed to bind {}:{}", BIND_HOST, port))?;

    tracing::info!("Server running on port {}", port);
    server.run().await?;
    Ok(())
}
