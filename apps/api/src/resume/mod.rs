// Resume generation pipeline: collect input, prompt the model, extract the
// four sections from its free-form reply, repair gaps from the original
// input, sanitize, render.
// All LLM calls go through llm_client — no direct Groq API calls here.

pub mod extract;
pub mod handlers;
pub mod input;
pub mod prompts;
pub mod repair;
pub mod sanitize;
