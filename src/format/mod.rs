//! Formatting cores: pure, single-pass transformations from one request
//! payload to one display payload.
//!
//! Each submodule implements one variant of the text-reshaping contract and
//! shares the item classification and error definitions in [`types`]. Nothing
//! here touches I/O or state; the HTTP layer in [`crate::api`] translates the
//! returned errors into status codes.

pub mod collapsible;
pub mod dropdown;
pub mod sections;
pub mod types;

pub use collapsible::{CollapsibleText, format_collapsible};
pub use dropdown::format_dropdown;
pub use sections::{ConversationSections, format_sections};
pub use types::{FormatError, InputItem, parse_items};
