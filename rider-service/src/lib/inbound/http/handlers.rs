use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::rider::errors::ErrorCode;
use crate::rider::errors::RiderError;
use crate::rider::errors::ValidationErrors;

pub mod authenticate_rider;
pub mod list_riders;
pub mod register_rider;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed or conflicting input, reported as codes.
    BadRequest(Vec<ErrorCode>),
    /// Credentials did not check out.
    Unauthorized(Vec<ErrorCode>),
    /// Fatal fault. The detail is logged, never sent.
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errors, message) = match self {
            ApiError::BadRequest(codes) => (StatusCode::BAD_REQUEST, codes, None),
            ApiError::Unauthorized(codes) => (StatusCode::UNAUTHORIZED, codes, None),
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Vec::new(),
                    Some("internal_server_error".to_string()),
                )
            }
        };

        (
            status,
            Json(ApiResponseBody::new_error(status, errors, message)),
        )
            .into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BadRequest(errors.codes().to_vec())
    }
}

impl From<RiderError> for ApiError {
    fn from(err: RiderError) -> Self {
        match err.codes() {
            Some(codes) if codes.contains(&ErrorCode::IncorrectCredentials) => {
                ApiError::Unauthorized(codes)
            }
            Some(codes) => ApiError::BadRequest(codes),
            None => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, errors: Vec<ErrorCode>, message: Option<String>) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { errors, message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub errors: Vec<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
