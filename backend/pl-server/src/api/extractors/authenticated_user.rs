//! Axum extractor for bearer-authenticated routes

use crate::{ApiError, AppState};

use pl_core::User;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;

/// The user behind a verified `Authorization: Bearer` header.
///
/// Verification re-reads the user from the store, so the wrapped value is the
/// current record rather than the token's snapshot.
pub struct AuthenticatedUser(pub User);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = match parts.headers.get(AUTHORIZATION) {
                Some(value) => Some(value.to_str().map_err(|_| ApiError::Unauthorized {
                    code: "INVALID_AUTH_HEADER",
                    message: "Authorization header is not valid ASCII".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?),
                None => None,
            };

            let user = state.tokens.authenticate(header).await?;
            log::debug!("Authenticated user {}", user.id);

            Ok(AuthenticatedUser(user))
        }
    }
}
