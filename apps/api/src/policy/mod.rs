// Policy Generator: prompt rendering, completion dispatch, and line-prefix
// field extraction for personalized return policies.
// All completion calls go through llm_client - no direct Inference API calls here.

pub mod category;
pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
