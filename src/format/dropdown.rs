//! URL-encoded formatter rendering items as a selectable HTML fragment.
//!
//! The input travels as a single URL path segment, so callers percent-encode
//! the JSON document on top of the HTTP layer's own escaping. Decoding order
//! is fixed: percent-decode first, then JSON-decode; either failure is a
//! validation error.

use serde_json::{Map, Value};

use super::types::{FormatError, InputItem, parse_items};

/// Option label used for account-detail items.
const ACCOUNT_DETAILS_LABEL: &str = "Account Details";

/// Decode a percent-encoded JSON array and render it as a dropdown fragment.
///
/// Every item contributes one option: a text item is labeled with its first
/// line and carries the remaining content as its payload, an account-details
/// item is labeled `Account Details` and carries its fields as `key: value`
/// lines. Selecting an option copies its payload into the content region.
pub fn format_dropdown(encoded: &str) -> Result<String, FormatError> {
    let decoded = urlencoding::decode(encoded)?;
    let items = parse_items(&decoded)?;
    Ok(render_fragment(&items))
}

fn render_fragment(items: &[InputItem]) -> String {
    let mut fragment = String::from(
        "<div class=\"formatted-response\">\n\
         <select id=\"response-selector\" onchange=\"showResponseContent(this)\">\n\
         <option value=\"\" disabled selected>Select a response</option>\n",
    );

    for item in items {
        let (label, payload) = option_parts(item);
        fragment.push_str(&format!(
            "<option data-content=\"{}\">{}</option>\n",
            escape_html(&payload),
            escape_html(&label),
        ));
    }

    fragment.push_str(
        "</select>\n\
         <div id=\"response-content\"></div>\n\
         <script>\n\
         function showResponseContent(selector) {\n\
         var option = selector.options[selector.selectedIndex];\n\
         document.getElementById('response-content').innerText = option.getAttribute('data-content');\n\
         }\n\
         </script>\n\
         </div>",
    );
    fragment
}

/// Derive the visible label and hidden payload for one option.
fn option_parts(item: &InputItem) -> (String, String) {
    match item {
        InputItem::Text(text) => match text.split_once('\n') {
            Some((label, rest)) => (label.to_string(), rest.to_string()),
            None => (text.clone(), String::new()),
        },
        InputItem::AccountDetails(fields) => (
            ACCOUNT_DETAILS_LABEL.to_string(),
            render_account_fields(fields),
        ),
    }
}

/// Render account fields as `key: value` lines joined by newlines.
fn render_account_fields(fields: &Map<String, Value>) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{key}: {}", render_scalar(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Escape text for inclusion in HTML markup and attribute values.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
