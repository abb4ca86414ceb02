//! Bearer-token gate
//!
//! Runs in front of every route. A request reaches a handler only when its
//! `Authorization` header carries an HMAC-signed JWT that verifies against
//! the shared secret. Decoded claims are left in the request extensions.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ApiError;
use super::server::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Claims carried by a verified token.
///
/// Issuers are external, so no claim shape is imposed beyond a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(pub Map<String, Value>);

impl Claims {
    /// The `sub` claim, when it is a string.
    pub fn subject(&self) -> Option<&str> {
        self.0.get("sub").and_then(Value::as_str)
    }
}

/// Verifies tokens against the process-wide signing secret.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Accept HS256, HS384 and HS512 tokens signed with `secret`.
    ///
    /// `exp` and `nbf` are enforced when present but not required.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.required_spec_claims.clear();
        validation.validate_nbf = true;
        validation.validate_aud = false;

        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.key, &self.validation).map(|data| data.claims)
    }
}

/// Middleware: reject before routing unless the bearer token verifies.
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = {
        let value = match request.headers().get(header::AUTHORIZATION) {
            Some(value) if !value.is_empty() => value,
            _ => return Err(ApiError::MissingToken),
        };

        let raw = value.to_str().map_err(|_| ApiError::InvalidToken)?;
        let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw);

        state.verifier.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            ApiError::InvalidToken
        })?
    };

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
