// Career advice: assessment recommendations, learning resources, reference categories.
// All LLM calls go through llm_client; nothing here calls Gemini directly.

pub mod advisor;
pub mod categories;
pub mod handlers;
pub mod prompts;
