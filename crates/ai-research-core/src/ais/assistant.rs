// NOTE: This is a stateless service module. It gets everything it needs from
// the `AssistantsApi` it is given; the `Researcher` sequences these calls.
// Assistants = configurations (name, instructions, model, tools) that runs execute.
// Threads = conversations that assistants run against.
// Messages = messages are posted within Threads.

use crate::{
    ais::message,
    ais::types::{AssistantId, MessageId, RunId, ThreadId},
    ais::AssistantsApi,
    Error, Result,
};
use async_openai::types::{
    AssistantTools, AssistantToolsCode, AssistantToolsRetrieval, CreateAssistantRequest,
    CreateRunRequest, RunStatus,
};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

// region:       -- Constants

pub const POLLING_DURATION_MS: u64 = 500;

// endregion:    -- Constants

// region:       -- Types

/// Assistant tools selectable from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    Retrieval,
    CodeInterpreter,
}

impl From<ToolKind> for AssistantTools {
    fn from(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Retrieval => AssistantToolsRetrieval::default().into(),
            ToolKind::CodeInterpreter => AssistantToolsCode::default().into(),
        }
    }
}

// NOTE: Kept separate from the higher-level `researcher::Config`,
// which converts into this.
#[derive(Debug, Clone)]
pub struct CreateConfig {
    pub name: String,
    pub instructions: String,
    pub model: String,
    pub tools: Vec<ToolKind>,
}

// endregion:    -- Types

// region:       -- Assistant CRUD

/// Create a new assistant and return its id.
pub async fn create(api: &impl AssistantsApi, config: CreateConfig) -> Result<AssistantId> {
    let tools = config.tools.into_iter().map(AssistantTools::from).collect();

    let assistant_id = api
        .create_assistant(CreateAssistantRequest {
            model: config.model,
            name: Some(config.name),
            instructions: Some(config.instructions),
            tools: Some(tools),
            ..Default::default()
        })
        .await?;

    Ok(assistant_id)
}

/// Reuse the first assistant with the same name when `reuse` is true,
/// otherwise (or when none exists) create one.
pub async fn load_or_create(
    api: &impl AssistantsApi,
    config: CreateConfig,
    reuse: bool,
) -> Result<AssistantId> {
    if reuse {
        if let Some(assistant_id) = api.find_assistant_by_name(&config.name).await? {
            info!(name = %config.name, %assistant_id, "assistant loaded");
            return Ok(assistant_id);
        }
    }

    let assistant_name = config.name.clone();
    let assistant_id = create(api, config).await?;
    info!(name = %assistant_name, %assistant_id, "assistant created");

    Ok(assistant_id)
}

// endregion:    -- Assistant CRUD

// region:       -- Threads and Runs

/// Open a new thread and post the question to it as a user message.
pub async fn create_thread_and_message(
    api: &impl AssistantsApi,
    question: &str,
) -> Result<(ThreadId, MessageId)> {
    let thread_id = api.create_thread().await?;
    debug!(%thread_id, "thread created");

    let message_id = api
        .create_message(&thread_id, message::create_user_message(question))
        .await?;
    debug!(%thread_id, %message_id, "message posted");

    Ok((thread_id, message_id))
}

/// Start a run of the assistant on the thread.
pub async fn run_assistant(
    api: &impl AssistantsApi,
    assistant_id: &AssistantId,
    thread_id: &ThreadId,
) -> Result<RunId> {
    // NOTE: This is where you can configure model, ixs, tools, metadata
    let run_request = CreateRunRequest {
        assistant_id: assistant_id.to_string(),
        ..Default::default()
    };
    let run_id = api.create_run(thread_id, run_request).await?;
    debug!(%thread_id, %run_id, "run started");

    Ok(run_id)
}

/// Poll the run until it ends and return the latest thread message text.
pub async fn wait_for_reply(
    api: &impl AssistantsApi,
    thread_id: &ThreadId,
    run_id: &RunId,
    poll_every: Duration,
) -> Result<String> {
    loop {
        let status = api.run_status(thread_id, run_id).await?;
        debug!(%run_id, ?status, "run polled");

        match status {
            RunStatus::Queued | RunStatus::InProgress => (),
            RunStatus::Completed => return api.latest_message_text(thread_id).await,
            other => return Err(Error::RunEnded(other)),
        }

        tokio::time::sleep(poll_every).await;
    }
}

// endregion:    -- Threads and Runs

// region:       -- Tests


// endregion:    -- Tests
