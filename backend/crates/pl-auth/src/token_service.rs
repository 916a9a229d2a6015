//! Bearer token issue and verification.
//!
//! A token is a signed snapshot of `{user_id, email, nickname}`. Verification
//! does not trust the snapshot alone: after the signature and expiry pass,
//! the user is re-read from the store and the snapshot must match it exactly.
//! A profile that changed after issue yields `StaleCredential`.

use crate::{AuthError, JwtIssuer, JwtValidator, Result as AuthErrorResult, parse_bearer};

use pl_core::{ErrorLocation, User, UserId, UserStore};

use std::panic::Location;
use std::sync::Arc;

use chrono::Duration;
use log::{debug, warn};

pub struct TokenService {
    store: Arc<dyn UserStore>,
    issuer: JwtIssuer,
    validator: JwtValidator,
}

impl TokenService {
    pub fn with_hs256(store: Arc<dyn UserStore>, secret: &[u8], ttl: Duration) -> Self {
        Self {
            store,
            issuer: JwtIssuer::with_hs256(secret, ttl),
            validator: JwtValidator::with_hs256(secret),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.issuer.ttl()
    }

    /// Look the user up and sign a token for their current profile
    pub async fn issue(&self, user_id: UserId) -> AuthErrorResult<String> {
        let user = self
            .store
            .get_user(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound {
                user_id,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let token = self.issuer.issue(&user)?;
        debug!(
            "Issued token for user {} (ttl {}s)",
            user_id,
            self.issuer.ttl().num_seconds()
        );
        Ok(token)
    }

    /// Signature, expiry, then a fresh store read compared to the claims
    pub async fn verify(&self, token: &str) -> AuthErrorResult<User> {
        let claims = self.validator.validate(token).inspect_err(|e| {
            warn!("Rejected token: {}", e);
        })?;
        let user_id = claims.user_id();

        let Some(user) = self.store.get_user(user_id).await? else {
            warn!("Token for user {} refers to a missing user", user_id);
            return Err(AuthError::StaleCredential {
                user_id,
                message: "user no longer exists".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !claims.matches(&user) {
            warn!("Token for user {} no longer matches stored profile", user_id);
            return Err(AuthError::StaleCredential {
                user_id,
                message: "embedded email or nickname differs from stored user".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(user)
    }

    /// `verify` applied to an `Authorization` header value
    pub async fn authenticate(&self, authorization: Option<&str>) -> AuthErrorResult<User> {
        let token = parse_bearer(authorization).inspect_err(|e| {
            debug!("Unauthenticated request: {}", e);
        })?;
        self.verify(token).await
    }
}
