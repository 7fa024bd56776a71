use crate::errors::ConciergeError;
use crate::llm_client::prompts::{PERSONA_PREAMBLE, RESPONSE_INSTRUCTION};
use crate::models::entity::Entity;

/// Composes the generation prompt for one turn.
///
/// Pure: the same summary, utterance and entities always yield the same bytes.
/// Entities are dumped as compact JSON in the order the extractor returned them.
pub fn build_prompt(
    resume_summary: &str,
    utterance: &str,
    entities: &[Entity],
) -> Result<String, ConciergeError> {
    let entities_json = serde_json::to_string(entities)?;

    Ok(format!(
        "{PERSONA_PREAMBLE}\n\
        \n\
        Resume summary: {resume_summary}\n\
        \n\
        Question from recruiter/contact: \"{utterance}\"\n\
        \n\
        Detected entities in their message: {entities_json}\n\
        \n\
        {RESPONSE_INSTRUCTION}"
    ))
}
