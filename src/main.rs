//src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod common;
mod config;
mod db;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::{AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env primeiro, para que RUST_LOG definido lá também valha
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let app_state = AppState::new(&config).await?;

    sqlx::migrate!().run(&app_state.db_pool).await?;
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app = build_router(app_state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(app_state: AppState) -> Router {
    let room_routes = Router::new()
        .route("/"
               ,post(handlers::rooms::create_room)
               .get(handlers::rooms::list_rooms)
        )
        .route("/{room_id}"
               ,get(handlers::rooms::get_room)
               .put(handlers::rooms::update_room)
               .delete(handlers::rooms::delete_room)
        )
        .route("/{room_id}/lowest-rates"
               ,get(handlers::rates::get_lowest_rates)
        );

    let discount_routes = Router::new()
        .route("/"
               ,post(handlers::discounts::create_discount)
               .get(handlers::discounts::list_discounts)
        )
        .route("/{discount_id}"
               ,get(handlers::discounts::get_discount)
               .put(handlers::discounts::update_discount)
               .delete(handlers::discounts::delete_discount)
        );

    let override_routes = Router::new()
        .route("/", post(handlers::overrides::create_override))
        .route("/{room_id}"
               ,get(handlers::overrides::list_overrides)
               .put(handlers::overrides::update_override)
               .delete(handlers::overrides::delete_override)
        );

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/rooms", room_routes)
        .nest("/api/discounts", discount_routes)
        .nest("/api/overrides", override_routes)
        .route("/api/room-discounts", post(handlers::discounts::assign_discounts))
        .with_state(app_state)
}
