//! Input classification and error definitions shared by the formatters.

use serde_json::{Map, Value};
use thiserror::Error;

/// Key whose presence marks an item as account details rather than free text.
pub const ACCOUNT_NO_KEY: &str = "Account_no";

/// Errors produced while turning raw request input into a formatted payload.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Caller sent an empty string where text was required.
    #[error("Invalid input. Text cannot be empty.")]
    EmptyInput,
    /// Percent-decoding produced bytes that are not valid UTF-8.
    #[error("Failed to percent-decode input: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
    /// Input could not be decoded as JSON.
    #[error("Failed to parse input as JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Decoded JSON was not the expected array of items.
    #[error("Invalid input. Expected a JSON array of items.")]
    NotASequence,
    /// Unexpected fault while assembling the response.
    #[error("Error processing request: {0}")]
    Internal(String),
}

impl FormatError {
    /// Whether the caller can fix this failure by changing the request.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}

/// One classified element of a formatting request body.
#[derive(Debug, Clone, PartialEq)]
pub enum InputItem {
    /// Labeled free-text block produced by the assistant.
    Text(String),
    /// Flat field map describing the account under discussion.
    AccountDetails(Map<String, Value>),
}

impl InputItem {
    /// Classify one decoded array element.
    ///
    /// Presence of [`ACCOUNT_NO_KEY`] wins over a `text` field. Elements that
    /// are not objects, or objects carrying neither key, yield `None`.
    pub fn classify(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        if object.contains_key(ACCOUNT_NO_KEY) {
            return Some(Self::AccountDetails(object.clone()));
        }
        object
            .get("text")
            .and_then(Value::as_str)
            .map(|text| Self::Text(text.to_string()))
    }
}

/// Decode a JSON body into classified items, silently dropping unusable elements.
pub fn parse_items(raw: &str) -> Result<Vec<InputItem>, FormatError> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(elements) = value else {
        return Err(FormatError::NotASequence);
    };
    Ok(elements.iter().filter_map(InputItem::classify).collect())
}
