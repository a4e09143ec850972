//! Conversational layer for Intradesk.
//!
//! Builds prompt templates, hands them to an externally supplied retrieval
//! pipeline, and keeps the session transcript. Retrieval and model calls
//! live behind [`RetrievalPipeline`].

pub mod citation;
pub mod error;
pub mod pipeline;
pub mod prompts;
pub mod responder;
pub mod session;

pub use citation::{source_icon, Citation, SourceIcon};
pub use error::{build_error_message, ChatError, PipelineError, COMMON_ERROR_MESSAGE};
pub use pipeline::{
    ModelSettings, PipelineRequest, PipelineResponse, RetrievalPipeline, RetrievedDocument,
};
pub use prompts::{PromptMessage, PromptSet, PromptTemplate, RenderedMessage};
pub use responder::ChatResponder;
pub use session::{ChatMessage, ChatSession, Role};
