//! Concierge — fulfills one dialog turn.
//!
//! Flow: read utterance + intent → detect entities → compose prompt →
//!       invoke model → parse answer → close the turn.
//!
//! `handle` is total. Every error after the event arrives is logged and
//! replaced by the fixed failure reply; no cause ever reaches the caller.

pub mod prompt;

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info};

use crate::comprehend::{EntityExtractor, LANGUAGE_CODE};
use crate::errors::ConciergeError;
use crate::llm_client::{build_request_body, parse_output_text, TextGenerator, MODEL};
use crate::models::lex::{InboundEvent, OutboundReply};

use self::prompt::build_prompt;

/// The request handler. Holds the two collaborators and the resume summary,
/// all fixed at construction and shared read-only across invocations.
#[derive(Clone)]
pub struct Concierge {
    extractor: Arc<dyn EntityExtractor>,
    generator: Arc<dyn TextGenerator>,
    resume_summary: String,
}

impl Concierge {
    pub fn new(
        extractor: Arc<dyn EntityExtractor>,
        generator: Arc<dyn TextGenerator>,
        resume_summary: String,
    ) -> Self {
        Self {
            extractor,
            generator,
            resume_summary,
        }
    }

    /// Turns an inbound event into a reply. Never fails.
    pub async fn handle(&self, event: &Value) -> OutboundReply {
        info!("Received event: {event}");

        match self.fulfill(event).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Failed to fulfill turn: {e}");
                error!("{e:?}");
                OutboundReply::failed()
            }
        }
    }

    async fn fulfill(&self, event: &Value) -> Result<OutboundReply, ConciergeError> {
        let inbound = InboundEvent::from_value(event)?;
        let utterance = inbound.utterance();
        let intent_name = inbound.intent_name();

        // Step 1: Entity extraction
        let entities = self
            .extractor
            .detect_entities(utterance, LANGUAGE_CODE)
            .await?;

        // Step 2: Prompt
        let prompt = build_prompt(&self.resume_summary, utterance, &entities)?;

        // Step 3: Generation
        let body = build_request_body(&prompt)?;
        let response = self.generator.invoke_model(MODEL, body).await?;
        let answer = parse_output_text(&response)?;

        info!("Generated response: {answer}");

        Ok(OutboundReply::fulfilled(intent_name, &answer))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
