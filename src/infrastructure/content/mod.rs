mod gemini;
mod prompts;

pub use gemini::{GeminiConfig, GeminiContentSource};
