//! Wisdom generator
//!
//! No AI service is wired in; [`PlaceholderWisdom`] answers every prompt with
//! the same message.

use log::info;

use crate::error::{ToolError, ToolResult};

/// Something that can answer a prompt with a piece of wisdom
pub trait WisdomSource {
    /// Generate wisdom for a question or topic
    fn generate(&self, prompt: &str) -> ToolResult<String>;
}

/// Message returned until a real service exists
pub const PLACEHOLDER_WISDOM: &str = "This is a placeholder for AI-generated wisdom. \
The actual implementation will connect to an AI service.";

/// A source that always returns [`PLACEHOLDER_WISDOM`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderWisdom;

impl WisdomSource for PlaceholderWisdom {
    fn generate(&self, prompt: &str) -> ToolResult<String> {
        if prompt.trim().is_empty() {
            return Err(ToolError::EmptyInput);
        }

        info!("generating placeholder wisdom for a {} byte prompt", prompt.len());
        Ok(PLACEHOLDER_WISDOM.to_string())
    }
}
