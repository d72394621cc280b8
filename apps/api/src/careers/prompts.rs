// All LLM prompt constants for the careers module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Career recommendation prompt. Replace `{skills}`, `{interests}` and
/// `{experience_level}` before sending. The section names must match
/// `MarkerSet::career_recommendations()`.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"Provide 3-5 career recommendations based on the skills, interests, and experience level provided.

For each career recommendation:
1. Start with a numbered title
2. Provide a detailed "Description" section (3-4 lines)
3. Include a "Why it fits" section (3-4 lines)
4. Add a "How to prepare" section (3-4 lines)

{detail}

Skills: {skills}
Interests: {interests}
Experience Level: {experience_level}"#;

/// Learning resource prompt. Replace `{career}` before sending. The section
/// names must match `MarkerSet::learning_resources()`.
pub const RESOURCES_PROMPT_TEMPLATE: &str = r#"Provide 3-5 detailed learning resources for someone interested in the specified career path.

For each resource:
1. Start with a numbered title (e.g., "1. Online Course: Python for Data Science")
2. Provide a detailed "Why it's great" section (3-4 lines) explaining the benefits and value of this resource
3. If applicable, add a "Specific Relevant Courses" section listing courses, books, or websites with brief descriptions (3-4 lines each)
4. For each specific recommendation, explain what topics it covers and why it's valuable (3-4 lines)

{detail}

Career path: {career}"#;
