use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::AttendanceError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("date query parameter is required (YYYY-MM-DD)")]
    MissingDate,

    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDateFormat,

    #[error("Missing or malformed authorization header.")]
    MissingToken,

    #[error("Invalid API token.")]
    InvalidToken,

    #[error("Manager role required.")]
    ManagerRequired,

    #[error("Unknown client.")]
    UnknownClient,

    #[error("{0}")]
    CheckInRejected(String),

    #[error(transparent)]
    Attendance(#[from] AttendanceError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingDate | AppError::InvalidDateFormat | AppError::CheckInRejected(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::MissingToken | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::ManagerRequired => StatusCode::FORBIDDEN,
            AppError::UnknownClient => StatusCode::NOT_FOUND,
            AppError::Attendance(e) => match e {
                AttendanceError::CheckInNotFound => StatusCode::NOT_FOUND,
                AttendanceError::NotRecordOwner => StatusCode::FORBIDDEN,
                AttendanceError::AlreadyCheckedOut => StatusCode::CONFLICT,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}
