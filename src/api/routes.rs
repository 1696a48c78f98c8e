//! API Routes
//!
//! Configures the Axum router with all service endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_clear_handler, cache_delete_handler, cache_get_handler, cache_set_handler,
    cache_stats_handler, chart_handler, export_csv_handler, export_txt_handler, health_handler,
    validate_handler, widget_scan_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin, so pages served elsewhere can call the API
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/export/csv", post(export_csv_handler))
        .route("/api/export/txt", post(export_txt_handler))
        .route("/api/validate", post(validate_handler))
        .route("/api/cache", put(cache_set_handler).delete(cache_clear_handler))
        // Registered before the key route so "stats" is not read as a key
        .route("/api/cache/stats", get(cache_stats_handler))
        .route(
            "/api/cache/:key",
            get(cache_get_handler).delete(cache_delete_handler),
        )
        .route("/api/charts/:kind", post(chart_handler))
        .route("/api/widgets/scan", post(widget_scan_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TtlCache;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::new(TtlCache::new()))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_route_is_not_a_key() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/cache/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/cache/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_chart_kind() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/charts/radar")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"target":"c","labels":[],"data":[]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
