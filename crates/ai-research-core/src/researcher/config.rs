// NOTE: This is parsing our high-level research.toml config with serde
use crate::ais::assistant::{self, ToolKind};
use crate::Result;
use serde::Deserialize;
use simple_fs::load_toml;
use std::path::Path;

pub const DEFAULT_NAME: &str = "Research Assistant";
pub const DEFAULT_INSTRUCTIONS: &str = "You are a helpful research assistant.";
pub const DEFAULT_MODEL: &str = "gpt-4-turbo-preview";
pub const DEFAULT_QUESTION: &str = "What are the key benefits of using the OpenAI Assistants API?";

/// Every field is optional in the TOML; missing ones take the defaults above.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub name: String,
    pub instructions: String,
    pub model: String,
    pub tools: Vec<ToolKind>,
    pub question: String,
    /// Reuse an existing assistant with the same name instead of creating one.
    pub reuse_assistant: bool,
    /// Wait for the run to finish and fetch the reply.
    pub await_reply: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
            model: DEFAULT_MODEL.to_string(),
            tools: vec![ToolKind::Retrieval],
            question: DEFAULT_QUESTION.to_string(),
            reuse_assistant: false,
            await_reply: false,
        }
    }
}

impl Config {
    /// Load the TOML file, or the defaults when it does not exist.
    pub fn load_or_default(file: impl AsRef<Path>) -> Result<Self> {
        let file = file.as_ref();
        if file.exists() {
            Ok(load_toml(file)?)
        } else {
            Ok(Self::default())
        }
    }

    #[cfg(test)]
    fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

// region:       -- Froms

impl From<&Config> for assistant::CreateConfig {
    fn from(config: &Config) -> Self {
        Self {
            name: config.name.clone(),
            instructions: config.instructions.clone(),
            model: config.model.clone(),
            tools: config.tools.clone(),
        }
    }
}

// endregion:    -- Froms

// region:       -- Tests


// endregion:    -- Tests
