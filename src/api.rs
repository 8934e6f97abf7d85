//! HTTP surface for the certifications formatting server.
//!
//! Each process serves one formatting variant plus two open routes:
//!
//! - `GET /` – Greeting and health check used by the hosting platform.
//! - `GET /commands` – Machine-readable catalog of the served routes.
//! - `GET /format-text/:text` (collapsible) – Reshape a path-embedded string
//!   into a heading/content record.
//! - `POST /format-text` (sections) – Route a JSON array of assistant items
//!   into named conversation sections.
//! - `GET /format-text/:input` (dropdown) – Decode a URL-encoded JSON array
//!   and render a selectable HTML fragment.
//!
//! The formatting routes sit behind the shared-secret token middleware; the
//! formatter cores themselves are pure and know nothing about HTTP.

use crate::auth::{self, AuthConfig};
use crate::config::Variant;
use crate::format::{self, CollapsibleText, ConversationSections, FormatError};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// Build the HTTP router for one formatting variant.
pub fn create_router(variant: Variant, auth_config: Arc<AuthConfig>) -> Router {
    let format_route = match variant {
        Variant::Collapsible => {
            Router::new().route("/format-text/:text", get(format_collapsible))
        }
        Variant::Sections => Router::new().route("/format-text", post(format_sections)),
        Variant::Dropdown => Router::new().route("/format-text/:input", get(format_dropdown)),
    };

    Router::new()
        .route("/", get(health))
        .route("/commands", get(get_commands))
        .merge(format_route.route_layer(middleware::from_fn_with_state(
            auth_config,
            auth::require_token,
        )))
        .with_state(variant)
}

/// Greeting and health check.
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "message": "This is the certifications API server" }))
}

/// Success envelope wrapping a formatted payload.
#[derive(Serialize)]
struct FormatResponse<T> {
    status: &'static str,
    formatted_data: T,
}

impl<T: Serialize> FormatResponse<T> {
    fn success(formatted_data: T) -> Json<Self> {
        Json(Self {
            status: "success",
            formatted_data,
        })
    }
}

/// Format a path-embedded string into a collapsible heading/content record.
async fn format_collapsible(
    Path(text): Path<String>,
) -> Result<Json<FormatResponse<CollapsibleText>>, ApiError> {
    let formatted = format::format_collapsible(&text)?;
    tracing::info!(heading = %formatted.heading, "Collapsible format request completed");
    Ok(FormatResponse::success(formatted))
}

/// Route a JSON array of assistant items into named conversation sections.
///
/// The body is taken raw and parsed by the formatter so that malformed JSON
/// surfaces through the same error envelope as every other validation failure.
async fn format_sections(
    body: String,
) -> Result<Json<FormatResponse<ConversationSections>>, ApiError> {
    let sections = format::format_sections(&body)?;
    tracing::info!("Sections format request completed");
    Ok(FormatResponse::success(sections))
}

/// Decode a URL-encoded JSON array and render a selectable HTML fragment.
async fn format_dropdown(Path(input): Path<String>) -> Result<Html<String>, ApiError> {
    let fragment = format::format_dropdown(&input)?;
    tracing::info!(bytes = fragment.len(), "Dropdown format request completed");
    Ok(Html(fragment))
}

/// Descriptor for a single command in the discovery catalog.
#[derive(Serialize)]
struct CommandDescriptor {
    name: &'static str,
    method: &'static str,
    path: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_example: Option<serde_json::Value>,
}

/// Response body for `GET /commands`.
#[derive(Serialize)]
struct CommandsResponse {
    commands: Vec<CommandDescriptor>,
}

/// Enumerate the routes this deployment serves for discovery by hosts and tools.
async fn get_commands(State(variant): State<Variant>) -> Json<CommandsResponse> {
    let format_command = match variant {
        Variant::Collapsible => CommandDescriptor {
            name: "format_text",
            method: "GET",
            path: "/format-text/:text",
            description: "Format a path-embedded string into a collapsible heading with content. Response returns { \"status\": \"success\", \"formatted_data\": { \"heading\", \"content\", \"is_collapsible\" } }.",
            request_example: None,
        },
        Variant::Sections => CommandDescriptor {
            name: "format_text",
            method: "POST",
            path: "/format-text",
            description: "Classify a JSON array of assistant items into named conversation sections by leading prefix.",
            request_example: Some(json!([
                { "text": "Call Strategy Guide: open with a greeting" },
                { "Account_no": "ACC-1042", "Balance": 250.75 }
            ])),
        },
        Variant::Dropdown => CommandDescriptor {
            name: "format_text",
            method: "GET",
            path: "/format-text/:input",
            description: "Decode a URL-encoded JSON array of assistant items and render a selectable HTML fragment.",
            request_example: None,
        },
    };

    Json(CommandsResponse {
        commands: vec![
            CommandDescriptor {
                name: "health",
                method: "GET",
                path: "/",
                description: "Greeting and health check; requires no token.",
                request_example: None,
            },
            format_command,
        ],
    })
}

/// Error wrapper translating formatter failures into HTTP responses.
struct ApiError(FormatError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        tracing::warn!(%status, error = %self.0, "Format request failed");
        (
            status,
            Json(json!({ "status": "error", "message": self.0.to_string() })),
        )
            .into_response()
    }
}

impl From<FormatError> for ApiError {
    fn from(inner: FormatError) -> Self {
        Self(inner)
    }
}
