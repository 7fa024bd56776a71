//! Entity extraction — the first collaborator called on every turn.
//!
//! The handler only sees the `EntityExtractor` trait; the AWS Comprehend
//! client is wired in at startup.

use async_trait::async_trait;
use aws_sdk_comprehend::error::DisplayErrorContext;
use aws_sdk_comprehend::types::{Entity as ComprehendEntity, LanguageCode};
use aws_sdk_comprehend::Client;
use tracing::debug;

use crate::errors::ConciergeError;
use crate::models::entity::Entity;

/// Language code sent with every extraction request.
pub const LANGUAGE_CODE: &str = "en";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityExtractor: Send + Sync {
    async fn detect_entities(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<Entity>, ConciergeError>;
}

/// `DetectEntities` against AWS Comprehend. No retries beyond the SDK defaults.
#[derive(Clone)]
pub struct ComprehendExtractor {
    client: Client,
}

impl ComprehendExtractor {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EntityExtractor for ComprehendExtractor {
    async fn detect_entities(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<Entity>, ConciergeError> {
        let output = self
            .client
            .detect_entities()
            .text(text)
            .language_code(LanguageCode::from(language_code))
            .send()
            .await
            .map_err(|e| ConciergeError::Extraction(DisplayErrorContext(e).to_string()))?;

        let entities: Vec<Entity> = output.entities().iter().map(Entity::from).collect();
        debug!("Comprehend detected {} entities", entities.len());

        Ok(entities)
    }
}

impl From<&ComprehendEntity> for Entity {
    fn from(entity: &ComprehendEntity) -> Self {
        Entity {
            score: entity.score(),
            entity_type: entity.r#type().map(|t| t.as_str().to_string()),
            text: entity.text().map(str::to_string),
            begin_offset: entity.begin_offset(),
            end_offset: entity.end_offset(),
        }
    }
}
