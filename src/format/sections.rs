//! Mixed-item formatter routing assistant text into named conversation sections.

use serde::Serialize;
use serde_json::{Map, Value};

use super::types::{FormatError, InputItem, parse_items};

/// Output slots a text item can be routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    CallScript,
    Recommendations,
    DelinquencyAnalysis,
    NextAction,
}

/// Ordered prefix rules; the first matching prefix decides the slot.
const PREFIX_RULES: &[(&str, Slot)] = &[
    ("Call Strategy Guide", Slot::CallScript),
    ("AI Recommended Actions", Slot::Recommendations),
    ("Let's analyze", Slot::DelinquencyAnalysis),
    ("Recommendation: Schedule", Slot::NextAction),
];

/// Conversation sections extracted from one formatting request.
///
/// Unpopulated slots are omitted from the serialized payload entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversationSections {
    /// Guided call script for the agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_script: Option<String>,
    /// Recommended follow-up actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<String>,
    /// Account fields forwarded verbatim from the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_details: Option<Map<String, Value>>,
    /// Analysis of the delinquency under discussion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delinquency_analysis: Option<String>,
    /// Single next action recommended to the agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
}

impl ConversationSections {
    fn slot_mut(&mut self, slot: Slot) -> &mut Option<String> {
        match slot {
            Slot::CallScript => &mut self.call_script,
            Slot::Recommendations => &mut self.recommendations,
            Slot::DelinquencyAnalysis => &mut self.delinquency_analysis,
            Slot::NextAction => &mut self.next_action,
        }
    }
}

/// Classify a JSON array of items into named sections.
///
/// Text items route by their leading prefix and are assigned verbatim; text
/// matching no rule is silently dropped. Items carrying an `Account_no` key
/// land in `account_details` unchanged. When several items map to the same
/// slot the last one processed wins.
pub fn format_sections(raw: &str) -> Result<ConversationSections, FormatError> {
    let items = parse_items(raw)?;
    let mut sections = ConversationSections::default();

    for item in items {
        match item {
            InputItem::AccountDetails(fields) => sections.account_details = Some(fields),
            InputItem::Text(text) => {
                if let Some(slot) = classify_text(&text) {
                    *sections.slot_mut(slot) = Some(text);
                }
            }
        }
    }

    Ok(sections)
}

fn classify_text(text: &str) -> Option<Slot> {
    PREFIX_RULES
        .iter()
        .find(|(prefix, _)| text.starts_with(prefix))
        .map(|&(_, slot)| slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_script_prefix_fills_only_its_slot() {
        let raw = json!([{ "text": "Call Strategy Guide: open with a greeting" }]).to_string();
        let sections = format_sections(&raw).expect("sections");
        assert_eq!(
            sections.call_script.as_deref(),
            Some("Call Strategy Guide: open with a greeting")
        );
        assert!(sections.recommendations.is_none());
        assert!(sections.account_details.is_none());
        assert!(sections.delinquency_analysis.is_none());
        assert!(sections.next_action.is_none());
    }

    #[test]
    fn unset_slots_are_absent_from_serialized_output() {
        let raw = json!([{ "text": "Let's analyze the missed payments" }]).to_string();
        let sections = format_sections(&raw).expect("sections");
        let value = serde_json::to_value(&sections).expect("serialize");
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("delinquency_analysis"));
    }

    #[test]
    fn every_prefix_routes_to_its_slot() {
        let raw = json!([
            { "text": "Call Strategy Guide: step one" },
            { "text": "AI Recommended Actions: offer a payment plan" },
            { "text": "Let's analyze the account history" },
            { "text": "Recommendation: Schedule a follow-up call" }
        ])
        .to_string();
        let sections = format_sections(&raw).expect("sections");
        assert!(sections.call_script.is_some());
        assert!(sections.recommendations.is_some());
        assert!(sections.delinquency_analysis.is_some());
        assert!(sections.next_action.is_some());
    }

    #[test]
    fn account_details_are_forwarded_verbatim() {
        let raw = json!([
            { "Account_no": "ACC-1042", "Balance": 250.75, "Days_past_due": 31 }
        ])
        .to_string();
        let sections = format_sections(&raw).expect("sections");
        let details = sections.account_details.expect("details");
        assert_eq!(details.get("Account_no"), Some(&json!("ACC-1042")));
        assert_eq!(details.get("Balance"), Some(&json!(250.75)));
        assert_eq!(details.get("Days_past_due"), Some(&json!(31)));
        assert_eq!(details.len(), 3);
    }

    #[test]
    fn unmatched_text_is_dropped() {
        let raw = json!([{ "text": "Totally unrelated chatter" }]).to_string();
        let sections = format_sections(&raw).expect("sections");
        assert_eq!(sections, ConversationSections::default());
    }

    #[test]
    fn last_matching_item_wins_per_slot() {
        let raw = json!([
            { "text": "Call Strategy Guide: first draft" },
            { "text": "Call Strategy Guide: final draft" }
        ])
        .to_string();
        let sections = format_sections(&raw).expect("sections");
        assert_eq!(
            sections.call_script.as_deref(),
            Some("Call Strategy Guide: final draft")
        );
    }

    #[test]
    fn non_array_input_is_rejected() {
        assert!(matches!(
            format_sections("{\"text\":\"x\"}"),
            Err(FormatError::NotASequence)
        ));
        assert!(matches!(format_sections(""), Err(FormatError::Json(_))));
    }
}
