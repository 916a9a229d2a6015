use crate::{AuthError, Claims, Result as AuthErrorResult};

use pl_core::{ErrorLocation, User};

use std::panic::Location;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Signs HS256 tokens with a fixed lifetime
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    header: Header,
    ttl: Duration,
}

impl JwtIssuer {
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    #[track_caller]
    pub fn issue(&self, user: &User) -> AuthErrorResult<String> {
        let exp = (Utc::now() + self.ttl).timestamp();
        self.sign(&Claims::for_user(user, exp))
    }

    #[track_caller]
    pub fn sign(&self, claims: &Claims) -> AuthErrorResult<String> {
        encode(&self.header, claims, &self.encoding_key).map_err(|source| AuthError::JwtEncode {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
