//! Dialog front-end event and reply shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ConciergeError;

/// Utterance used when the event carries none.
pub const DEFAULT_UTTERANCE: &str = "Hello";
/// Intent name used when none can be read, and on every failed turn.
pub const FALLBACK_INTENT: &str = "FallbackIntent";
/// The only message a caller ever sees on failure.
pub const FAILURE_MESSAGE: &str = "I'm having trouble processing that. Please try again!";

// ────────────────────────────────────────────────────────────────────────────
// Inbound
// ────────────────────────────────────────────────────────────────────────────

/// The parts of an inbound dialog event this handler reads.
///
/// `session_state` is kept untyped: a partially malformed session must
/// degrade to the fallback intent, not fail deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    pub input_transcript: Option<String>,
    pub session_state: Option<Value>,
}

impl InboundEvent {
    pub fn from_value(event: &Value) -> Result<Self, ConciergeError> {
        InboundEvent::deserialize(event).map_err(|e| ConciergeError::MalformedEvent(e.to_string()))
    }

    /// The transcript verbatim, or `"Hello"` when absent.
    pub fn utterance(&self) -> &str {
        self.input_transcript.as_deref().unwrap_or(DEFAULT_UTTERANCE)
    }

    /// `sessionState.intent.name`, or `"FallbackIntent"` on any missing
    /// level or non-string name.
    pub fn intent_name(&self) -> &str {
        self.session_state
            .as_ref()
            .and_then(|state| state.get("intent"))
            .and_then(|intent| intent.get("name"))
            .and_then(Value::as_str)
            .unwrap_or(FALLBACK_INTENT)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Outbound
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogActionType {
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    PlainText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogAction {
    #[serde(rename = "type")]
    pub action_type: DialogActionType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentOutcome {
    pub name: String,
    pub state: FulfillmentState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub dialog_action: DialogAction,
    pub intent: IntentOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

/// Reply consumed by the dialog front end. Always closes the turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundReply {
    pub session_state: SessionState,
    pub messages: Vec<Message>,
}

impl OutboundReply {
    fn close(intent_name: &str, state: FulfillmentState, content: &str) -> Self {
        OutboundReply {
            session_state: SessionState {
                dialog_action: DialogAction {
                    action_type: DialogActionType::Close,
                },
                intent: IntentOutcome {
                    name: intent_name.to_string(),
                    state,
                },
            },
            messages: vec![Message {
                content_type: ContentType::PlainText,
                content: content.to_string(),
            }],
        }
    }

    pub fn fulfilled(intent_name: &str, answer: &str) -> Self {
        Self::close(intent_name, FulfillmentState::Fulfilled, answer)
    }

    /// The fixed failure shape. Intent is forced to the fallback.
    pub fn failed() -> Self {
        Self::close(FALLBACK_INTENT, FulfillmentState::Failed, FAILURE_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(event: Value) -> InboundEvent {
        InboundEvent::from_value(&event).unwrap()
    }

    #[test]
    fn test_missing_transcript_defaults_to_hello() {
        assert_eq!(parse(json!({})).utterance(), "Hello");
        assert_eq!(parse(json!({"sessionState": {}})).utterance(), "Hello");
    }

    #[test]
    fn test_transcript_is_used_verbatim() {
        let event = parse(json!({"inputTranscript": "  what about Rust?  "}));
        assert_eq!(event.utterance(), "  what about Rust?  ");

        let empty = parse(json!({"inputTranscript": ""}));
        assert_eq!(empty.utterance(), "");
    }

    #[test]
    fn test_intent_name_read_from_session_state() {
        let event = parse(json!({
            "sessionState": {"intent": {"name": "AskExperience", "state": "InProgress"}}
        }));
        assert_eq!(event.intent_name(), "AskExperience");
    }

    #[test]
    fn test_intent_name_falls_back_on_malformed_session_state() {
        let shapes = [
            json!({}),
            json!({"sessionState": null}),
            json!({"sessionState": "broken"}),
            json!({"sessionState": []}),
            json!({"sessionState": {}}),
            json!({"sessionState": {"intent": null}}),
            json!({"sessionState": {"intent": 42}}),
            json!({"sessionState": {"intent": {}}}),
            json!({"sessionState": {"intent": {"name": 7}}}),
            json!({"sessionState": {"intent": {"name": {"nested": true}}}}),
        ];
        for shape in shapes {
            assert_eq!(
                parse(shape.clone()).intent_name(),
                FALLBACK_INTENT,
                "shape: {shape}"
            );
        }
    }

    #[test]
    fn test_non_string_transcript_is_malformed() {
        let result = InboundEvent::from_value(&json!({"inputTranscript": 12}));
        assert!(matches!(result, Err(ConciergeError::MalformedEvent(_))));
    }

    #[test]
    fn test_non_object_event_is_malformed() {
        let result = InboundEvent::from_value(&json!("just a string"));
        assert!(matches!(result, Err(ConciergeError::MalformedEvent(_))));
    }

    #[test]
    fn test_fulfilled_reply_wire_shape() {
        let reply = OutboundReply::fulfilled("AskExperience", "Happy to chat!");
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            json!({
                "sessionState": {
                    "dialogAction": {"type": "Close"},
                    "intent": {"name": "AskExperience", "state": "Fulfilled"}
                },
                "messages": [{"contentType": "PlainText", "content": "Happy to chat!"}]
            })
        );
    }

    #[test]
    fn test_failed_reply_wire_shape() {
        assert_eq!(
            serde_json::to_value(OutboundReply::failed()).unwrap(),
            json!({
                "sessionState": {
                    "dialogAction": {"type": "Close"},
                    "intent": {"name": "FallbackIntent", "state": "Failed"}
                },
                "messages": [{
                    "contentType": "PlainText",
                    "content": "I'm having trouble processing that. Please try again!"
                }]
            })
        );
    }
}
