//! Prompt templates handed to the retrieval pipeline.
//!
//! Each template is a system message, a slot for the running transcript,
//! and the human turn (`{input}`). Answer templates also carry a
//! `{context}` placeholder that the pipeline fills with retrieved text.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use intradesk_core::types::AnswerMode;

use crate::session::{ChatMessage, Role};

/// Placeholder for the user's message.
pub const INPUT_VAR: &str = "input";
/// Placeholder for retrieved documents in answer templates.
pub const CONTEXT_VAR: &str = "context";

pub const STANDALONE_QUESTION_PROMPT: &str = "\
Given the conversation history and the latest user input, rewrite the input \
as a standalone question that can be understood without the history. \
Do not answer the question. If the input is already standalone, return it unchanged.";

pub const DOCUMENT_SEARCH_PROMPT: &str = "\
You are an assistant that answers questions using internal company documents.
Answer using only the context below.
If the context does not contain the answer, reply that the information could not be found in the documents.
Keep the answer concise and cite the document you relied on.

{context}";

pub const GENERAL_INQUIRY_PROMPT: &str = "\
You are an assistant that answers employees' questions about the company.
Use the context below to answer as specifically and completely as possible.
When asked which employees belong to a department or match a condition, list every matching employee found in the context with their name and title.
Do not guess. If the context does not contain the answer, say so plainly.

{context}";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("Invalid placeholder regex"));

/// One slot of a chat prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "text")]
pub enum PromptMessage {
    System(String),
    /// Expands to the session transcript.
    History,
    Human(String),
}

/// A rendered prompt message ready for a model client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedMessage {
    pub role: Role,
    pub content: String,
}

/// Ordered list of prompt slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    messages: Vec<PromptMessage>,
}

impl PromptTemplate {
    pub fn new(messages: Vec<PromptMessage>) -> Self {
        Self { messages }
    }

    /// System instructions, then the transcript, then the user's input.
    pub fn conversational(system: impl Into<String>) -> Self {
        Self::new(vec![
            PromptMessage::System(system.into()),
            PromptMessage::History,
            PromptMessage::Human(format!("{{{INPUT_VAR}}}")),
        ])
    }

    pub fn messages(&self) -> &[PromptMessage] {
        &self.messages
    }

    pub fn system_text(&self) -> Option<&str> {
        self.messages.iter().find_map(|m| match m {
            PromptMessage::System(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Names of the `{placeholders}` used by the template, in order.
    pub fn variables(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for text in self.messages.iter().filter_map(|m| match m {
            PromptMessage::System(t) | PromptMessage::Human(t) => Some(t),
            PromptMessage::History => None,
        }) {
            for caps in PLACEHOLDER.captures_iter(text) {
                let name = caps[1].to_string();
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Fill placeholders and expand the transcript slot.
    ///
    /// Substitution is single-pass, so values containing `{...}` are not
    /// expanded again. Unknown placeholders are left untouched.
    pub fn render(&self, vars: &[(&str, &str)], history: &[ChatMessage]) -> Vec<RenderedMessage> {
        let mut rendered = Vec::with_capacity(self.messages.len() + history.len());
        for message in &self.messages {
            match message {
                PromptMessage::System(text) => rendered.push(RenderedMessage {
                    role: Role::System,
                    content: substitute(text, vars),
                }),
                PromptMessage::Human(text) => rendered.push(RenderedMessage {
                    role: Role::Human,
                    content: substitute(text, vars),
                }),
                PromptMessage::History => {
                    rendered.extend(history.iter().map(|m| RenderedMessage {
                        role: m.role,
                        content: m.content.clone(),
                    }));
                }
            }
        }
        rendered
    }
}

fn substitute(text: &str, vars: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| {
            vars.iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// The question-rewrite template and both answer-style templates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSet {
    pub standalone_question: PromptTemplate,
    pub document_search: PromptTemplate,
    pub general_inquiry: PromptTemplate,
}

impl PromptSet {
    /// Answer template for the given mode.
    pub fn answer_for(&self, mode: AnswerMode) -> &PromptTemplate {
        match mode {
            AnswerMode::DocumentSearch => &self.document_search,
            AnswerMode::GeneralInquiry => &self.general_inquiry,
        }
    }
}

impl Default for PromptSet {
    fn default() -> Self {
        Self {
            standalone_question: PromptTemplate::conversational(STANDALONE_QUESTION_PROMPT),
            document_search: PromptTemplate::conversational(DOCUMENT_SEARCH_PROMPT),
            general_inquiry: PromptTemplate::conversational(GENERAL_INQUIRY_PROMPT),
        }
    }
}
