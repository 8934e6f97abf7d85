//! Single-string formatter producing a collapsible heading/content record.

use serde::Serialize;

use super::types::FormatError;

/// Maximum length of a heading synthesized from single-line input.
const HEADING_LIMIT: usize = 50;

/// Collapsible display record for one block of assistant text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollapsibleText {
    /// Line shown while the block is collapsed.
    pub heading: String,
    /// Full text revealed on expansion.
    pub content: String,
    /// Marker telling the client to render the block collapsed.
    pub is_collapsible: bool,
}

/// Split text into a heading and collapsible content.
///
/// Text containing a newline splits once at it. Otherwise the heading is the
/// first fifty characters of the input, with a `...` marker when the input is
/// longer, and the content is the full input. Both halves are trimmed of
/// surrounding whitespace after the split.
pub fn format_collapsible(text: &str) -> Result<CollapsibleText, FormatError> {
    if text.is_empty() {
        return Err(FormatError::EmptyInput);
    }

    let (heading, content) = match text.split_once('\n') {
        Some((heading, content)) => (heading.to_string(), content.to_string()),
        None => (synthesize_heading(text), text.to_string()),
    };

    Ok(CollapsibleText {
        heading: heading.trim().to_string(),
        content: content.trim().to_string(),
        is_collapsible: true,
    })
}

/// First [`HEADING_LIMIT`] characters of the text, marking truncation.
///
/// Counts Unicode scalar values rather than bytes so multi-byte input never
/// splits inside a character.
fn synthesize_heading(text: &str) -> String {
    let mut heading: String = text.chars().take(HEADING_LIMIT).collect();
    if text.chars().count() > HEADING_LIMIT {
        heading.push_str("...");
    }
    heading
}
