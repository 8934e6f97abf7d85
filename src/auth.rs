//! Shared-secret token authentication for the formatting routes.
//!
//! The upstream assistant platform presents its credential as the raw value of
//! the `API_TOKEN` request header. The check runs as router middleware so that
//! handlers only execute for authenticated callers; a missing or mismatched
//! token short-circuits with `401` and the standard error envelope.

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;

/// Request header carrying the shared-secret token.
pub const TOKEN_HEADER: &str = "api_token";

/// Name of the single service principal tokens authenticate as.
const PRINCIPAL: &str = "appuser";

/// Credential store injected into the auth middleware at startup.
///
/// Holds exactly one secret mapped to one principal; there is no lifecycle
/// beyond process start.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    token: String,
    principal: String,
}

impl AuthConfig {
    /// Build the credential store around the configured secret.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            principal: PRINCIPAL.to_string(),
        }
    }

    /// Return the principal a presented token authenticates as, if any.
    pub fn authenticate(&self, presented: &str) -> Option<&str> {
        (presented == self.token).then_some(self.principal.as_str())
    }
}

/// Authenticated caller identity attached to the request extensions.
#[derive(Debug, Clone)]
pub struct Principal(pub String);

/// Reject requests lacking a valid `API_TOKEN` header before the handler runs.
pub async fn require_token(
    State(auth): State<Arc<AuthConfig>>,
    mut request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    let Some(principal) = presented.and_then(|token| auth.authenticate(token)) else {
        tracing::warn!(path = %request.uri().path(), "Rejected request with missing or invalid token");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "status": "error", "message": "Unauthorized" })),
        )
            .into_response();
    };

    request
        .extensions_mut()
        .insert(Principal(principal.to_string()));
    next.run(request).await
}
