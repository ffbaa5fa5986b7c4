// AI flows: keyword extraction, cover-letter generation, resume summarization.
// Each flow is one schema-validated request/response round trip.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod cover_letter;
pub mod extract_keywords;
pub mod handlers;
pub mod prompts;
pub mod summarize;
