use serde::{Deserialize, Serialize};

/// Department value recorded on the company-wide summary document.
pub const COMPANY_WIDE: &str = "company-wide";

// =============================================================================
// Enums
// =============================================================================

/// Kind of roster document handed to the indexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// One department and all of its members.
    DepartmentRoster,
    /// Company-wide summary across every department.
    CompanyRoster,
    /// Full member profiles of the spotlight department.
    SpotlightDetailed,
    /// Markdown table of the spotlight department.
    SpotlightTable,
    /// Name-only list of the spotlight department.
    SpotlightSimple,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DepartmentRoster => "department_roster",
            Self::CompanyRoster => "company_roster",
            Self::SpotlightDetailed => "spotlight_detailed",
            Self::SpotlightTable => "spotlight_table",
            Self::SpotlightSimple => "spotlight_simple",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer style used by the chat responder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMode {
    /// Answer strictly from retrieved internal documents.
    #[default]
    DocumentSearch,
    /// Answer general questions about the company, using documents as support.
    GeneralInquiry,
}

impl AnswerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DocumentSearch => "document_search",
            Self::GeneralInquiry => "general_inquiry",
        }
    }

    /// Human-readable label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DocumentSearch => "Internal document search",
            Self::GeneralInquiry => "Internal inquiry",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "document_search" => Some(Self::DocumentSearch),
            "general_inquiry" => Some(Self::GeneralInquiry),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Documents
// =============================================================================

/// Metadata attached to every roster document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Path of the file the document was generated from.
    pub source: String,
    /// Department value, or [`COMPANY_WIDE`] for the summary document.
    pub department: String,
    /// Number of employees listed in the document content.
    pub employee_count: usize,
    pub document_type: DocumentType,
}

/// A unit of retrievable text produced from the employee roster.
///
/// Consumed by the external embedding/indexing step; never mutated after
/// creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterDocument {
    pub content: String,
    pub metadata: DocumentMetadata,
}

impl RosterDocument {
    pub fn new(content: String, metadata: DocumentMetadata) -> Self {
        Self { content, metadata }
    }

    pub fn is_company_summary(&self) -> bool {
        self.metadata.document_type == DocumentType::CompanyRoster
    }
}
