//! Boundary to the external retrieval-and-answer pipeline.
//!
//! The pipeline owns similarity search, context assembly, the question
//! rewrite, and the model call. This crate only supplies the prompts,
//! model settings, and transcript, and reads back the answer.

use serde::{Deserialize, Serialize};

use intradesk_core::config::ChatConfig;

use crate::citation::Citation;
use crate::error::PipelineError;
use crate::prompts::PromptTemplate;
use crate::session::ChatMessage;

/// Hosted model selection passed through to the pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    pub model: String,
    pub temperature: f32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.5,
        }
    }
}

impl From<&ChatConfig> for ModelSettings {
    fn from(config: &ChatConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }
}

/// Everything the pipeline needs for one call.
#[derive(Clone, Copy, Debug)]
pub struct PipelineRequest<'a> {
    pub input: &'a str,
    pub chat_history: &'a [ChatMessage],
    pub model: &'a ModelSettings,
    /// Rewrites `input` into a standalone query using `chat_history`.
    pub question_prompt: &'a PromptTemplate,
    /// Produces the answer from retrieved context.
    pub answer_prompt: &'a PromptTemplate,
}

/// A retrieved passage the answer was grounded on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievedDocument {
    pub content: String,
    /// File path or URL the passage came from.
    pub source: String,
}

/// Pipeline output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResponse {
    pub answer: String,
    pub context: Vec<RetrievedDocument>,
}

impl PipelineResponse {
    /// Distinct sources of the retrieved context, first-seen order.
    pub fn citations(&self) -> Vec<Citation> {
        let mut citations: Vec<Citation> = Vec::new();
        for doc in &self.context {
            if doc.source.is_empty() || citations.iter().any(|c| c.source == doc.source) {
                continue;
            }
            citations.push(Citation::new(doc.source.clone()));
        }
        citations
    }
}

/// A history-aware retrieval chain supplied by the RAG framework.
///
/// Implementations condense the question against the history before
/// retrieving supporting documents.
pub trait RetrievalPipeline: Send + Sync {
    fn invoke(&self, request: &PipelineRequest<'_>) -> Result<PipelineResponse, PipelineError>;
}

impl<T: RetrievalPipeline + ?Sized> RetrievalPipeline for &T {
    fn invoke(&self, request: &PipelineRequest<'_>) -> Result<PipelineResponse, PipelineError> {
        (**self).invoke(request)
    }
}

impl<T: RetrievalPipeline + ?Sized> RetrievalPipeline for Box<T> {
    fn invoke(&self, request: &PipelineRequest<'_>) -> Result<PipelineResponse, PipelineError> {
        (**self).invoke(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citation::SourceIcon;

    fn doc(source: &str) -> RetrievedDocument {
        RetrievedDocument {
            content: "text".to_string(),
            source: source.to_string(),
        }
    }

    #[test]
    fn test_citations_dedup_in_order() {
        let response = PipelineResponse {
            answer: "ok".to_string(),
            context: vec![
                doc("data/roster.csv"),
                doc("https://intranet.example.com/policy"),
                doc("data/roster.csv"),
                doc(""),
            ],
        };
        let citations = response.citations();
        assert_eq!(citations.len(), 2);
        assert_eq!(citations[0].source, "data/roster.csv");
        assert_eq!(citations[0].icon, SourceIcon::Document);
        assert_eq!(citations[1].icon, SourceIcon::Link);
    }

    #[test]
    fn test_model_settings_from_config() {
        let config = ChatConfig {
            model: "gpt-4o".to_string(),
            temperature: 0.1,
            ..ChatConfig::default()
        };
        let settings = ModelSettings::from(&config);
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.temperature, 0.1);
    }

    #[test]
    fn test_model_settings_default_matches_config_default() {
        assert_eq!(ModelSettings::default(), ModelSettings::from(&ChatConfig::default()));
    }
}
