pub mod config;
pub mod export;
pub mod request;
pub mod system_prompt;

pub use system_prompt::{generation_prompt, GENERATION_PROMPT};
