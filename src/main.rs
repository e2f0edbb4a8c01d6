use axum::extract::DefaultBodyLimit;
use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use northwind_api::config;
use northwind_api::database::manager::Database;
use northwind_api::handlers;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, NORTHWIND_DB, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Northwind API in {:?} mode", config.environment);

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("NORTHWIND_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Northwind API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    let config = config::config();

    let mut app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(handlers::category::routes())
        .merge(handlers::customer::routes())
        .merge(handlers::customer_customer_demo::routes())
        .merge(handlers::customer_demographic::routes())
        .merge(handlers::employee::routes())
        .merge(handlers::employee_territory::routes())
        .merge(handlers::order::routes())
        .merge(handlers::order_detail::routes())
        .merge(handlers::product::routes())
        .merge(handlers::region::routes())
        .merge(handlers::shipper::routes())
        .merge(handlers::supplier::routes())
        .merge(handlers::territory::routes())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Northwind API",
        "version": version,
        "description": "Northwind sample dataset exposed as a CRUD REST API",
        "entities": [
            "Category", "Customer", "CustomerCustomerDemo", "CustomerDemographic",
            "Employee", "EmployeeTerritory", "Order", "OrderDetail",
            "Product", "Region", "Shipper", "Supplier", "Territory",
        ],
        "routes": {
            "list": "/api/<Entity>/GetAll<Entity>s",
            "get": "/api/<Entity>/Get<Entity>ById/{id}",
            "add": "/api/<Entity>/Add<Entity>",
            "edit": "/api/<Entity>/Edit<Entity>",
            "delete": "/api/<Entity>/Delete<Entity>/{id}",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match Database::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
