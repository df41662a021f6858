// Resume Generation: education extraction, prompt + schema construction,
// and the single bounded call to the generation service.
// All OpenAI calls go through llm_client.

pub mod education;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod schema;
