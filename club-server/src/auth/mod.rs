//! Tenant resolution for API handlers
//!
//! Every endpoint except login and health works on one club's data. The
//! [`CurrentClub`] extractor turns the request's bearer token back into the
//! tenant email all store keys are scoped by.

use axum::extract::FromRequestParts;
use http::header::AUTHORIZATION;
use http::request::Parts;
use shared::{AppError, ErrorCode};

use crate::core::ServerState;

/// The tenant (club account email) behind the current request
#[derive(Debug, Clone)]
pub struct CurrentClub(pub String);

impl FromRequestParts<ServerState> for CurrentClub {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(AppError::not_authenticated)?;

        state
            .credentials
            .resolve_token(token)
            .map(CurrentClub)
            .ok_or_else(|| AppError::new(ErrorCode::TokenInvalid))
    }
}
