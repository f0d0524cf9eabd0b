//! Inventário Server - Office Inventory Management
//!
//! A Rust REST API server for office-inventory tracking.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventario_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("inventario_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Inventário Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.wol.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Machines
        .route("/machines", get(api::machines::list_machines))
        .route("/machines", post(api::machines::create_machine))
        .route("/machines/:id", get(api::machines::get_machine))
        .route("/machines/:id", put(api::machines::update_machine))
        .route("/machines/:id", delete(api::machines::delete_machine))
        // Chips
        .route("/chips", get(api::chips::list_chips))
        .route("/chips", post(api::chips::create_chip))
        .route("/chips/:id", get(api::chips::get_chip))
        .route("/chips/:id", put(api::chips::update_chip))
        .route("/chips/:id", delete(api::chips::delete_chip))
        // Phone lines
        .route("/telsystems", get(api::telsystems::list_telsystems))
        .route("/telsystems", post(api::telsystems::create_telsystem))
        .route("/telsystems/assign", post(api::telsystems::assign_telsystem))
        .route("/telsystems/:id", get(api::telsystems::get_telsystem))
        .route("/telsystems/:id", put(api::telsystems::update_telsystem))
        .route("/telsystems/:id", delete(api::telsystems::delete_telsystem))
        // Locations
        .route("/locations", get(api::locations::list_locations))
        .route("/locations", post(api::locations::create_location))
        .route("/locations/:id", get(api::locations::get_location))
        .route("/locations/:id", put(api::locations::update_location))
        .route("/locations/:id", delete(api::locations::delete_location))
        // Users
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .route(
            "/users/migrate-from-machines",
            post(api::users::migrate_from_machines),
        )
        .route("/users/:id", get(api::users::get_user))
        .route("/users/:id", put(api::users::update_user))
        .route("/users/:id", delete(api::users::delete_user))
        // Products (legacy stock page)
        .route("/products", get(api::products::list_products))
        .route("/products", post(api::products::create_product))
        .route("/products/:id", get(api::products::get_product))
        .route("/products/:id", put(api::products::update_product))
        .route("/products/:id", delete(api::products::delete_product))
        // Wake-on-LAN
        .route("/wol", post(api::wol::wake))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", api_routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
