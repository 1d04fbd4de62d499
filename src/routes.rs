use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::viewer_get))
        .route("/products", post(handlers::products_post))
        .route("/news", post(handlers::news_post))
        .route("/static/styles.css", get(handlers::stylesheet_get))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // The page mirrors live feed state
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                )),
        )
        .with_state(state)
}
