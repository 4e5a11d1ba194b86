//! In-memory `AssistantsApi` that records every call, for tests.

use super::{AssistantId, AssistantsApi, MessageId, RunId, ThreadId};
use crate::Result;
use async_openai::{
    error::OpenAIError,
    types::{CreateAssistantRequest, CreateMessageRequest, CreateRunRequest, RunStatus},
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

pub(crate) const ASSISTANT_ID: &str = "asst_mock_1";
pub(crate) const THREAD_ID: &str = "thread_mock_1";
pub(crate) const MESSAGE_ID: &str = "msg_mock_1";
pub(crate) const RUN_ID: &str = "run_mock_1";

#[derive(Debug)]
pub(crate) enum Call {
    CreateAssistant(CreateAssistantRequest),
    FindAssistantByName(String),
    CreateThread,
    CreateMessage {
        thread_id: String,
        request: CreateMessageRequest,
    },
    CreateRun {
        thread_id: String,
        request: CreateRunRequest,
    },
    RunStatus {
        thread_id: String,
        run_id: String,
    },
    LatestMessageText {
        thread_id: String,
    },
}

impl Call {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Call::CreateAssistant(_) => "create_assistant",
            Call::FindAssistantByName(_) => "find_assistant_by_name",
            Call::CreateThread => "create_thread",
            Call::CreateMessage { .. } => "create_message",
            Call::CreateRun { .. } => "create_run",
            Call::RunStatus { .. } => "run_status",
            Call::LatestMessageText { .. } => "latest_message_text",
        }
    }
}

#[derive(Default)]
pub(crate) struct MockApi {
    calls: Mutex<Vec<Call>>,
    existing_assistant: Option<String>,
    run_statuses: Mutex<VecDeque<RunStatus>>,
    reply: String,
    fail_on: Option<&'static str>,
}

impl MockApi {
    pub(crate) fn with_existing_assistant(mut self, name: &str) -> Self {
        self.existing_assistant = Some(name.to_string());
        self
    }

    pub(crate) fn with_run_statuses(self, statuses: Vec<RunStatus>) -> Self {
        *self.run_statuses.lock().unwrap() = statuses.into();
        self
    }

    pub(crate) fn with_reply(mut self, reply: &str) -> Self {
        self.reply = reply.to_string();
        self
    }

    /// Make the named operation fail (after recording it).
    pub(crate) fn failing_on(mut self, call_name: &'static str) -> Self {
        self.fail_on = Some(call_name);
        self
    }

    pub(crate) fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    pub(crate) fn call_names(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(Call::name).collect()
    }

    fn record(&self, call: Call) -> Result<()> {
        let name = call.name();
        self.calls.lock().unwrap().push(call);
        if self.fail_on == Some(name) {
            return Err(OpenAIError::InvalidArgument(format!("mock failure on {name}")).into());
        }
        Ok(())
    }
}

#[async_trait]
impl AssistantsApi for MockApi {
    async fn create_assistant(&self, request: CreateAssistantRequest) -> Result<AssistantId> {
        self.record(Call::CreateAssistant(request))?;
        Ok(ASSISTANT_ID.to_string().into())
    }

    async fn find_assistant_by_name(&self, name: &str) -> Result<Option<AssistantId>> {
        self.record(Call::FindAssistantByName(name.to_string()))?;
        let found = self
            .existing_assistant
            .as_deref()
            .filter(|existing| *existing == name)
            .map(|_| AssistantId::from("asst_existing".to_string()));
        Ok(found)
    }

    async fn create_thread(&self) -> Result<ThreadId> {
        self.record(Call::CreateThread)?;
        Ok(THREAD_ID.to_string().into())
    }

    async fn create_message(
        &self,
        thread_id: &ThreadId,
        request: CreateMessageRequest,
    ) -> Result<MessageId> {
        self.record(Call::CreateMessage {
            thread_id: thread_id.to_string(),
            request,
        })?;
        Ok(MESSAGE_ID.to_string().into())
    }

    async fn create_run(&self, thread_id: &ThreadId, request: CreateRunRequest) -> Result<RunId> {
        self.record(Call::CreateRun {
            thread_id: thread_id.to_string(),
            request,
        })?;
        Ok(RUN_ID.to_string().into())
    }

    async fn run_status(&self, thread_id: &ThreadId, run_id: &RunId) -> Result<RunStatus> {
        self.record(Call::RunStatus {
            thread_id: thread_id.to_string(),
            run_id: run_id.to_string(),
        })?;
        let status = self.run_statuses.lock().unwrap().pop_front();
        Ok(status.unwrap_or(RunStatus::Completed))
    }

    async fn latest_message_text(&self, thread_id: &ThreadId) -> Result<String> {
        self.record(Call::LatestMessageText {
            thread_id: thread_id.to_string(),
        })?;
        Ok(self.reply.clone())
    }
}
