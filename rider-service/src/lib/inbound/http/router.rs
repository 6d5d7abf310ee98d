use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate_rider::authenticate_rider;
use super::handlers::list_riders::list_riders;
use super::handlers::register_rider::register_rider;
use crate::domain::rider::ports::RiderServicePort;

pub const RIDERS_PATH: &str = "/riders";
pub const SESSION_PATH: &str = "/riders/session";

pub struct AppState<RS: RiderServicePort> {
    pub rider_service: Arc<RS>,
}

impl<RS: RiderServicePort> Clone for AppState<RS> {
    fn clone(&self) -> Self {
        Self {
            rider_service: Arc::clone(&self.rider_service),
        }
    }
}

pub fn create_router<RS: RiderServicePort>(rider_service: Arc<RS>) -> Router {
    let state = AppState { rider_service };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route(RIDERS_PATH, post(register_rider::<RS>).get(list_riders::<RS>))
        .route(SESSION_PATH, post(authenticate_rider::<RS>))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
