//! HTTP status code mapping and response conversion for error codes

use super::codes::ErrorCode;
use super::types::{ApiResponse, AppError};
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::TableNotFound
            | Self::GameTypeNotFound
            | Self::PlayerNotFound
            | Self::DebtNotFound
            | Self::NoActiveSession => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists | Self::TableOccupied | Self::TableStillOccupied => {
                StatusCode::CONFLICT
            }

            // 401 Unauthorized
            Self::NotAuthenticated | Self::InvalidCredentials | Self::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.http_status().is_server_error() {
            // Internal errors are logged in full but not exposed beyond the code
            tracing::error!(code = %self.code, message = %self.message, "Internal server error");
        }
        let body: ApiResponse<()> = ApiResponse::from_error(&self);
        (self.http_status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::TableNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::NoActiveSession.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(ErrorCode::TableOccupied.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::TableStillOccupied.http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_unauthorized_status() {
        assert_eq!(
            ErrorCode::InvalidCredentials.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ErrorCode::TokenInvalid.http_status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ErrorCode::SplitTotalMismatch.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::EmptyTeam.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::InvalidPlayerCount.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
