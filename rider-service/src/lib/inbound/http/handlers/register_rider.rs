use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::rider::ports::RiderServicePort;
use crate::domain::rider::validation::validate_registration;
use crate::domain::rider::validation::RegistrationRequest;
use crate::inbound::http::router::AppState;
use crate::inbound::http::router::SESSION_PATH;
use crate::rider::errors::ErrorCode;

pub async fn register_rider<RS: RiderServicePort>(
    State(state): State<AppState<RS>>,
    payload: Result<Json<RegisterRiderRequest>, JsonRejection>,
) -> Result<([(HeaderName, &'static str); 1], ApiSuccess<RegisterRiderResponseData>), ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable registration body");
        ApiError::BadRequest(vec![ErrorCode::MissingFields])
    })?;

    let command = validate_registration(body.into())?;

    state
        .rider_service
        .register_rider(command)
        .await
        .map_err(ApiError::from)
        .map(|rider| {
            (
                [(header::LOCATION, SESSION_PATH)],
                ApiSuccess::new(
                    StatusCode::CREATED,
                    RegisterRiderResponseData {
                        message: "rider_added".to_string(),
                        location: SESSION_PATH.to_string(),
                        rider: RiderRef {
                            id: rider.id.to_string(),
                        },
                    },
                ),
            )
        })
}

/// HTTP request body for registering a rider (raw JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRiderRequest {
    #[serde(alias = "firstname")]
    first_name: Option<String>,
    #[serde(alias = "lastname")]
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    password: Option<String>,
}

impl From<RegisterRiderRequest> for RegistrationRequest {
    fn from(body: RegisterRiderRequest) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            phone: body.phone,
            password: body.password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRiderResponseData {
    pub message: String,
    pub location: String,
    pub rider: RiderRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiderRef {
    pub id: String,
}
