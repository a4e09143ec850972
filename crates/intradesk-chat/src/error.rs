//! Error types for the conversational layer.

use intradesk_core::error::IntradeskError;

/// Suffix appended to every error shown to the user.
pub const COMMON_ERROR_MESSAGE: &str =
    "If the problem persists, please contact your administrator.";

/// Errors raised by an external retrieval pipeline.
///
/// The responder never inspects or retries these; they reach the caller
/// unchanged.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("retrieval failed: {0}")]
    Retrieval(String),
    #[error("model request failed: {0}")]
    Model(String),
    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for PipelineError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        PipelineError::Other(err)
    }
}

/// Errors from the chat responder.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl ChatError {
    /// Text suitable for display, with the administrator suffix.
    pub fn user_message(&self) -> String {
        build_error_message(&self.to_string())
    }
}

impl From<ChatError> for IntradeskError {
    fn from(err: ChatError) -> Self {
        IntradeskError::Chat(err.to_string())
    }
}

/// Join a specific error message with [`COMMON_ERROR_MESSAGE`].
pub fn build_error_message(message: &str) -> String {
    [message, COMMON_ERROR_MESSAGE].join("\n")
}
