pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_issuer;
pub mod jwt_validator;
pub mod token_service;

pub use bearer::parse_bearer;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_issuer::JwtIssuer;
pub use jwt_validator::JwtValidator;
pub use token_service::TokenService;

#[cfg(test)]
mod tests;
