//! The `researcher` module drives the whole research chain against an [`AssistantsApi`]:
//! create (or reuse) the assistant, open a thread with the question, and start a run.
//!
//! The calls are strictly sequential; each one needs an id returned by the previous one.
//! A failing call stops the chain and its error is returned as is.

// region:       -- Modules

mod config;

pub use config::Config;

use crate::ais::assistant::{self, POLLING_DURATION_MS};
use crate::ais::{new_openai_client, AssistantId, AssistantsApi, MessageId, OaClient, RunId, ThreadId};
use crate::Result;

use std::time::Duration;
use tracing::info;

// endregion:    -- Modules

#[derive(Debug)]
pub struct Researcher<A: AssistantsApi> {
    api: A,
    config: Config,
}

/// Identifiers handed back by the remote service, in chain order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub assistant_id: AssistantId,
    pub thread_id: ThreadId,
    pub message_id: MessageId,
    pub run_id: RunId,
    /// Only set when `Config::await_reply` is enabled.
    pub reply: Option<String>,
}

impl Researcher<OaClient> {
    /// Build on the OpenAI client (needs `OPENAI_API_KEY` in the env).
    pub fn from_env(config: Config) -> Result<Self> {
        let api = new_openai_client()?;
        Ok(Self::new(api, config))
    }
}

impl<A: AssistantsApi> Researcher<A> {
    pub fn new(api: A, config: Config) -> Self {
        Self { api, config }
    }

    pub async fn run(&self) -> Result<RunReport> {
        let config = &self.config;

        // -- Assistant
        let assistant_id =
            assistant::load_or_create(&self.api, config.into(), config.reuse_assistant).await?;

        // -- Thread & Message
        let (thread_id, message_id) =
            assistant::create_thread_and_message(&self.api, &config.question).await?;

        // -- Run
        let run_id = assistant::run_assistant(&self.api, &assistant_id, &thread_id).await?;
        info!(%assistant_id, %thread_id, %run_id, "run started");

        // -- Reply (opt-in)
        let reply = if config.await_reply {
            let poll_every = Duration::from_millis(POLLING_DURATION_MS);
            Some(assistant::wait_for_reply(&self.api, &thread_id, &run_id, poll_every).await?)
        } else {
            None
        };

        Ok(RunReport {
            assistant_id,
            thread_id,
            message_id,
            run_id,
            reply,
        })
    }
}

// region:       -- Tests


// endregion:    -- Tests
