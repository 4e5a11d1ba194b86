//! The `ais` module is the interface with the remote AI service (OpenAI Assistants).
//!
//! Every remote operation the research chain needs goes through the [`AssistantsApi`] trait,
//! which is implemented for the `async-openai` client. Each implementation method is a single
//! pass-through call; the sequencing lives in [`assistant`] and in the `Researcher`.

// region:       -- Modules
pub mod assistant;
pub mod message;
mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use types::*;

use crate::{Error, Result};
use async_openai::{
    config::OpenAIConfig,
    types::{
        CreateAssistantRequest, CreateMessageRequest, CreateRunRequest,
        CreateThreadRequest, RunStatus,
    },
    Client,
};
use async_trait::async_trait;
use tracing::debug;
// endregion:    -- Modules

// region:       -- Create Async OpenAI Client
const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

pub type OaClient = Client<OpenAIConfig>;

pub fn new_openai_client() -> Result<OaClient> {
    match std::env::var(ENV_OPENAI_API_KEY) {
        Ok(api_key) => {
            let config = OpenAIConfig::new().with_api_key(api_key);
            Ok(Client::with_config(config))
        }
        Err(_) => Err(Error::NoOpenAIApiKeyInEnv),
    }
}

// endregion:    -- Create Async OpenAI Client

// region:       -- Assistants Api

// Tell OpenAI to limit the query and serialize accordingly.
const DEFAULT_QUERY: &[(&str, &str)] = &[("limit", "100")];
const LATEST_QUERY: &[(&str, &str)] = &[("limit", "1")];

/// The remote operations used by the research chain.
#[async_trait]
pub trait AssistantsApi: Send + Sync {
    async fn create_assistant(&self, request: CreateAssistantRequest) -> Result<AssistantId>;

    /// First assistant (of the first page) carrying this exact name.
    async fn find_assistant_by_name(&self, name: &str) -> Result<Option<AssistantId>>;

    async fn create_thread(&self) -> Result<ThreadId>;

    async fn create_message(
        &self,
        thread_id: &ThreadId,
        request: CreateMessageRequest,
    ) -> Result<MessageId>;

    async fn create_run(&self, thread_id: &ThreadId, request: CreateRunRequest) -> Result<RunId>;

    async fn run_status(&self, thread_id: &ThreadId, run_id: &RunId) -> Result<RunStatus>;

    /// Text of the most recent message of the thread.
    async fn latest_message_text(&self, thread_id: &ThreadId) -> Result<String>;
}

#[async_trait]
impl AssistantsApi for OaClient {
    async fn create_assistant(&self, request: CreateAssistantRequest) -> Result<AssistantId> {
        debug!(model = %request.model, name = ?request.name, "creating assistant");
        let assistant_obj = self.assistants().create(request).await?;

        Ok(assistant_obj.id.into())
    }

    async fn find_assistant_by_name(&self, name: &str) -> Result<Option<AssistantId>> {
        // NOTE: We'd change the query here for pagination
        let assistants = self.assistants().list(DEFAULT_QUERY).await?.data;

        let assistant_id = assistants
            .into_iter()
            .find(|a| a.name.as_deref() == Some(name))
            .map(|a| AssistantId::from(a.id));

        Ok(assistant_id)
    }

    async fn create_thread(&self) -> Result<ThreadId> {
        let thread_obj = self.threads().create(CreateThreadRequest::default()).await?;

        Ok(thread_obj.id.into())
    }

    async fn create_message(
        &self,
        thread_id: &ThreadId,
        request: CreateMessageRequest,
    ) -> Result<MessageId> {
        let message_obj = self.threads().messages(thread_id).create(request).await?;

        Ok(message_obj.id.into())
    }

    async fn create_run(&self, thread_id: &ThreadId, request: CreateRunRequest) -> Result<RunId> {
        let run_obj = self.threads().runs(thread_id).create(request).await?;

        Ok(run_obj.id.into())
    }

    async fn run_status(&self, thread_id: &ThreadId, run_id: &RunId) -> Result<RunStatus> {
        let run_obj = self.threads().runs(thread_id).retrieve(run_id).await?;

        Ok(run_obj.status)
    }

    async fn latest_message_text(&self, thread_id: &ThreadId) -> Result<String> {
        let messages = self.threads().messages(thread_id).list(LATEST_QUERY).await?;
        let message_obj = messages
            .data
            .into_iter()
            .next()
            .ok_or(Error::NoMessageFoundInMessages)?;

        message::get_text_content(message_obj)
    }
}

// endregion:    -- Assistants Api
