// Fixed prompt fragments. The concierge fills in the per-turn parts.

/// Opens every prompt. Names the person the assistant speaks for.
pub const PERSONA_PREAMBLE: &str =
    "You are Sahithi Aekka's AI assistant at conferences and networking events.";

/// Closes every prompt. The trailing `Response:` cues the completion.
pub const RESPONSE_INSTRUCTION: &str = "Provide a professional, friendly, and natural response \
    that highlights relevant experience and skills.\n\nResponse:";
