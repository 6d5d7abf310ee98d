use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::rider::ports::RiderServicePort;
use crate::domain::rider::validation::validate_authentication;
use crate::domain::rider::validation::AuthenticationRequest;
use crate::inbound::http::router::AppState;
use crate::rider::errors::ErrorCode;

pub async fn authenticate_rider<RS: RiderServicePort>(
    State(state): State<AppState<RS>>,
    payload: Result<Json<AuthenticateRiderRequest>, JsonRejection>,
) -> Result<ApiSuccess<AuthenticateRiderResponseData>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable authentication body");
        ApiError::BadRequest(vec![ErrorCode::MissingFields])
    })?;

    let command = validate_authentication(AuthenticationRequest {
        email: body.email,
        password: body.password,
    })?;

    state
        .rider_service
        .authenticate_rider(command)
        .await
        .map_err(ApiError::from)
        .map(|token| {
            ApiSuccess::new(
                StatusCode::OK,
                AuthenticateRiderResponseData {
                    message: "rider_authenticated".to_string(),
                    token: token.token,
                    issued_at: token.issued_at,
                    expires_at: token.expires_at,
                },
            )
        })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRiderRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateRiderResponseData {
    pub message: String,
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
