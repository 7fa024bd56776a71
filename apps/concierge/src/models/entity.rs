use serde::{Deserialize, Serialize};

/// A span of meaning detected in the user's utterance.
///
/// Passed through to the prompt untouched. Keys keep the extraction
/// service's casing so the model sees exactly what the service returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Entity {
    pub score: Option<f32>,
    #[serde(rename = "Type")]
    pub entity_type: Option<String>,
    pub text: Option<String>,
    pub begin_offset: Option<i32>,
    pub end_offset: Option<i32>,
}
