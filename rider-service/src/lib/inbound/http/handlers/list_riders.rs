use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::rider::models::Rider;
use crate::domain::rider::ports::RiderServicePort;
use crate::inbound::http::router::AppState;

/// Full listing, no pagination or filtering.
pub async fn list_riders<RS: RiderServicePort>(
    State(state): State<AppState<RS>>,
) -> Result<ApiSuccess<Vec<RiderData>>, ApiError> {
    state
        .rider_service
        .list_riders()
        .await
        .map_err(ApiError::from)
        .map(|riders| ApiSuccess::new(StatusCode::OK, riders.iter().map(RiderData::from).collect()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiderData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Rider> for RiderData {
    fn from(rider: &Rider) -> Self {
        Self {
            id: rider.id.to_string(),
            first_name: rider.first_name.clone(),
            last_name: rider.last_name.clone(),
            email: rider.email.as_str().to_string(),
            phone: rider.phone.as_str().to_string(),
            password_hash: rider.password_hash.clone(),
            created_at: rider.created_at,
        }
    }
}
