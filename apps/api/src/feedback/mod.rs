// Resume feedback: prompt building, completion calls, and the form/API handlers.
// All completion calls go through llm_client; no direct HTTP calls here.

pub mod builder;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod views;
