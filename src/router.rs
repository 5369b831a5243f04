use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::routing::{delete, get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/admin/slots", get(handlers::admin::get_slots))
        .route("/api/admin/slots/:id", delete(handlers::admin::remove_slot))
        .route(
            "/api/admin/slots/:id/availability",
            patch(handlers::admin::toggle_availability),
        )
        .route(
            "/api/admin/appointments/:id/accept",
            post(handlers::admin::accept_appointment),
        )
        .route(
            "/api/admin/appointments/:id/reject",
            post(handlers::admin::reject_appointment),
        )
        .route(
            "/api/generator/slots",
            get(handlers::generator::get_slots).post(handlers::generator::generate),
        )
        .route("/api/generator/preview", get(handlers::generator::preview))
        .route("/api/booking/slots", get(handlers::booking::get_slots))
        .route("/api/booking", post(handlers::booking::submit))
        .route("/api/me/appointments", get(handlers::booking::my_appointments))
        .route("/api/me/appointments/:id", delete(handlers::booking::cancel))
        .route(
            "/api/notifications/events",
            get(handlers::events::notices_stream),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Credentialed CORS for the configured front-end origin; same-origin only
/// when none is set.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let Some(origin) = config.cors_origin.as_deref() else {
        return CorsLayer::new();
    };
    match HeaderValue::from_str(origin) {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                HeaderName::from_static(handlers::USER_ID_HEADER),
            ]),
        Err(e) => {
            tracing::warn!(error = %e, origin, "ignoring invalid CORS_ORIGIN");
            CorsLayer::new()
        }
    }
}
