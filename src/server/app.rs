use anyhow::Result;
use axum::{
    http::{HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{health, producers, products};
use crate::services::{ProducerService, ProductService};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub producers: ProducerService,
    pub products: ProductService,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            producers: ProducerService::new(db.clone()),
            products: ProductService::new(db.clone()),
            db,
        }
    }
}

pub async fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    let state = AppState::new(db);

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(health::health_check))
        .merge(producer_routes())
        .merge(product_routes())
        .fallback(route_not_found)
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

fn producer_routes() -> Router<AppState> {
    Router::new()
        .route("/producers", get(producers::list_producers))
        .route("/producers/filters/cities", get(producers::list_cities))
        .route("/producers/filters/stores", get(producers::list_stores))
        .route("/producers/:id", get(producers::get_producer))
}

fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list_products))
        .route("/products/filters/brands", get(products::list_brands))
        .route(
            "/products/filters/manufacturers",
            get(products::list_manufacturers),
        )
        .route("/products/:id", get(products::get_product))
}

async fn route_not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Route not found",
            "path": uri
                .path_and_query()
                .map(|path| path.as_str())
                .unwrap_or_else(|| uri.path()),
        })),
    )
}
