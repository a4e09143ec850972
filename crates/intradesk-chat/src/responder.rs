//! Chat responder: picks prompts for the session's mode, invokes the
//! pipeline, and records the exchange.

use tracing::{debug, info, warn};

use intradesk_core::config::ChatConfig;

use crate::error::ChatError;
use crate::pipeline::{ModelSettings, PipelineRequest, PipelineResponse, RetrievalPipeline};
use crate::prompts::PromptSet;
use crate::session::ChatSession;

/// Default maximum message length in characters.
const MAX_MESSAGE_LENGTH: usize = 2000;

/// Wires prompts and model settings into an external retrieval pipeline.
///
/// Holds no conversation state; every call receives the session explicitly.
pub struct ChatResponder<P> {
    pipeline: P,
    prompts: PromptSet,
    model: ModelSettings,
    max_message_length: usize,
}

impl<P: RetrievalPipeline> ChatResponder<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            prompts: PromptSet::default(),
            model: ModelSettings::default(),
            max_message_length: MAX_MESSAGE_LENGTH,
        }
    }

    pub fn from_config(pipeline: P, config: &ChatConfig) -> Self {
        Self {
            model: ModelSettings::from(config),
            max_message_length: config.max_message_length,
            ..Self::new(pipeline)
        }
    }

    pub fn with_prompts(mut self, prompts: PromptSet) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn prompts(&self) -> &PromptSet {
        &self.prompts
    }

    pub fn model(&self) -> &ModelSettings {
        &self.model
    }

    /// Answer `message` in the context of `session`.
    ///
    /// On success the question and answer are appended to the session
    /// transcript. On any error the transcript is left unchanged and
    /// pipeline errors are returned as-is.
    pub fn respond(
        &self,
        session: &mut ChatSession,
        message: &str,
    ) -> Result<PipelineResponse, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.chars().count() > self.max_message_length {
            return Err(ChatError::MessageTooLong(self.max_message_length));
        }

        let mode = session.mode();
        let request = PipelineRequest {
            input: message,
            chat_history: session.history(),
            model: &self.model,
            question_prompt: &self.prompts.standalone_question,
            answer_prompt: self.prompts.answer_for(mode),
        };
        debug!(
            session_id = %session.id,
            mode = %mode,
            history = request.chat_history.len(),
            "Invoking retrieval pipeline"
        );

        let response = self.pipeline.invoke(&request).map_err(|e| {
            warn!(session_id = %session.id, error = %e, "Retrieval pipeline failed");
            ChatError::from(e)
        })?;

        session.record_exchange(message, &response.answer);
        info!(
            session_id = %session.id,
            turns = session.turns(),
            sources = response.context.len(),
            "Chat response recorded"
        );
        Ok(response)
    }
}

// =============================================================================
// Tests
// =============================================================================
