//! Roster-to-document formatting.
//!
//! Retrieval over the roster works on embedding similarity and lexical
//! overlap, so every document restates the structured data as redundant,
//! keyword-dense prose. Department documents and the company summary cover
//! the same employees from two angles ("who is in X" vs "how many in total").

use std::path::Path;

use tracing::{debug, info, warn};

use intradesk_core::config::RosterConfig;
use intradesk_core::types::{DocumentMetadata, DocumentType, RosterDocument, COMPANY_WIDE};

use crate::error::RosterError;
use crate::group::{group_by_department, DepartmentGroup};
use crate::record::{read_records, EmployeeRecord};

const GENERIC_DEPARTMENT_KEYWORDS: &str =
    "employees, staff, roster, directory, personnel information, organization, members";

const COMPANY_KEYWORDS: [&str; 2] = [
    "employee directory, staff roster, all employees, personnel information, org chart, by department, employee list, staff list",
    "departments, organization structure, member composition, all staff, employee information",
];

/// Knobs for [`RosterFormatter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterOptions {
    /// Department that gets extra emphasis documents.
    pub spotlight_department: Option<String>,
    /// Text rendered in place of empty fields.
    pub placeholder: String,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            spotlight_department: None,
            placeholder: "N/A".to_string(),
        }
    }
}

impl From<&RosterConfig> for FormatterOptions {
    fn from(config: &RosterConfig) -> Self {
        Self {
            spotlight_department: config
                .spotlight_department
                .as_ref()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            placeholder: config.placeholder.clone(),
        }
    }
}

/// Turns roster records into retrievable documents.
///
/// Output order: one document per department (first-appearance order), the
/// company-wide summary, then spotlight documents when a spotlight
/// department is configured and has members.
#[derive(Debug, Clone, Default)]
pub struct RosterFormatter {
    options: FormatterOptions,
}

impl RosterFormatter {
    pub fn new(options: FormatterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    /// Read and format a roster file, returning no documents on failure.
    ///
    /// A missing file, malformed CSV, or missing column is logged and
    /// yields an empty vector. Use [`RosterFormatter::try_format`] to
    /// observe the failure.
    pub fn format_file(&self, path: &Path) -> Vec<RosterDocument> {
        match self.try_format(path) {
            Ok(documents) => documents,
            Err(e) => {
                warn!(error = %e, "Roster could not be loaded; producing no documents");
                Vec::new()
            }
        }
    }

    /// Read and format a roster file.
    pub fn try_format(&self, path: &Path) -> Result<Vec<RosterDocument>, RosterError> {
        let records = read_records(path)?;
        let documents = self.format_records(&path.display().to_string(), &records);
        info!(
            path = %path.display(),
            employees = records.len(),
            documents = documents.len(),
            "Roster formatted"
        );
        Ok(documents)
    }

    /// Format already-parsed records. `source` is recorded in metadata.
    pub fn format_records(&self, source: &str, records: &[EmployeeRecord]) -> Vec<RosterDocument> {
        let groups = group_by_department(records);
        let spotlight = self.spotlight_group(&groups);

        let mut documents = Vec::with_capacity(groups.len() + 4);
        for group in &groups {
            let highlighted = spotlight.is_some_and(|s| s.department == group.department);
            documents.push(RosterDocument::new(
                self.department_content(group, highlighted),
                metadata(source, group.department, group.len(), DocumentType::DepartmentRoster),
            ));
        }

        documents.push(RosterDocument::new(
            self.company_content(records.len(), &groups, spotlight),
            metadata(source, COMPANY_WIDE, records.len(), DocumentType::CompanyRoster),
        ));

        if let Some(group) = spotlight {
            debug!(department = group.department, "Adding spotlight documents");
            for (content, document_type) in [
                (self.spotlight_detailed(group), DocumentType::SpotlightDetailed),
                (self.spotlight_table(group), DocumentType::SpotlightTable),
                (self.spotlight_simple(group), DocumentType::SpotlightSimple),
            ] {
                documents.push(RosterDocument::new(
                    content,
                    metadata(source, group.department, group.len(), document_type),
                ));
            }
        }

        documents
    }

    // -- Private helpers --

    fn spotlight_group<'g, 'a>(
        &self,
        groups: &'g [DepartmentGroup<'a>],
    ) -> Option<&'g DepartmentGroup<'a>> {
        let name = self.options.spotlight_department.as_deref()?;
        groups
            .iter()
            .find(|g| g.department == name && !g.is_empty())
    }

    fn field<'r>(&'r self, value: &'r Option<String>) -> &'r str {
        value.as_deref().unwrap_or(&self.options.placeholder)
    }

    fn age(&self, record: &EmployeeRecord) -> String {
        record
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| self.options.placeholder.clone())
    }

    fn list(&self, values: &[&str]) -> String {
        if values.is_empty() {
            self.options.placeholder.clone()
        } else {
            values.join(", ")
        }
    }

    fn breakdown(&self, counts: &[(&str, usize)]) -> String {
        if counts.is_empty() {
            return self.options.placeholder.clone();
        }
        counts
            .iter()
            .map(|(value, n)| format!("{value}: {n}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn department_content(&self, group: &DepartmentGroup<'_>, highlighted: bool) -> String {
        let dept = group.department;
        let count = group.len();
        let mut lines = vec![
            format!("[Employee directory: {dept}]"),
            format!("Department: {dept}"),
            format!("Headcount: {count}"),
            String::new(),
            "[Employees]".to_string(),
        ];

        for (i, e) in group.members.iter().enumerate() {
            lines.extend([
                format!(
                    "{}. {} ({})",
                    i + 1,
                    self.field(&e.full_name),
                    self.field(&e.employee_id)
                ),
                format!(
                    "   Gender: {} | Age: {}",
                    self.field(&e.gender),
                    self.age(e)
                ),
                format!(
                    "   Title: {} | Employment type: {}",
                    self.field(&e.title),
                    self.field(&e.employment_type)
                ),
                format!("   Hire date: {}", self.field(&e.hire_date)),
                format!("   Email: {}", self.field(&e.email)),
                format!("   Skills: {}", self.field(&e.skills)),
                format!("   Certifications: {}", self.field(&e.certifications)),
                format!(
                    "   Education: {} {} (graduated {})",
                    self.field(&e.university),
                    self.field(&e.faculty),
                    self.field(&e.graduation_date)
                ),
                String::new(),
            ]);
        }

        lines.extend([
            "[Department statistics]".to_string(),
            format!("By title: {}", self.breakdown(&group.title_counts())),
            format!(
                "By employment type: {}",
                self.breakdown(&group.employment_type_counts())
            ),
            format!("By gender: {}", self.breakdown(&group.gender_counts())),
            String::new(),
            "[Search keywords]".to_string(),
            format!(
                "{dept}, {dept} department, {dept} team, {dept} staff, {dept} members, {GENERIC_DEPARTMENT_KEYWORDS}"
            ),
            format!("Titles: {}", self.list(&group.distinct_titles())),
            format!(
                "Employment types: {}",
                self.list(&group.distinct_employment_types())
            ),
        ]);

        if highlighted {
            lines.extend([
                format!("belongs to {dept}, employees of {dept}, staff of {dept}, everyone in {dept}"),
                format!("{dept} list, {dept} roster, {dept} headcount {count}, all {count} members of {dept}"),
            ]);
        }

        lines.push(String::new());
        lines.join("\n")
    }

    fn company_content(
        &self,
        total: usize,
        groups: &[DepartmentGroup<'_>],
        spotlight: Option<&DepartmentGroup<'_>>,
    ) -> String {
        let names: Vec<&str> = groups.iter().map(|g| g.department).collect();
        let mut lines = vec![
            "[Company-wide employee directory]".to_string(),
            format!("Total employees: {total}"),
            format!("Departments: {}", groups.len()),
            format!("Department list: {}", self.list(&names)),
        ];

        if let Some(group) = spotlight {
            let dept = group.department;
            lines.extend([
                String::new(),
                format!("[Spotlight: all members of {dept}]"),
                format!("{dept} headcount: {}", group.len()),
                format!("Every employee who belongs to {dept}:"),
            ]);
            for (i, e) in group.members.iter().enumerate() {
                lines.extend([
                    format!("{}. [{dept}] {}", i + 1, self.field(&e.full_name)),
                    format!("   - Employee ID: {}", self.field(&e.employee_id)),
                    format!("   - Title: {}", self.field(&e.title)),
                    format!("   - Employment type: {}", self.field(&e.employment_type)),
                    format!("   - Age: {}", self.age(e)),
                    format!("   - Hire date: {}", self.field(&e.hire_date)),
                ]);
            }
            lines.extend([
                String::new(),
                format!("{dept} has {} members.", group.len()),
            ]);
        }

        lines.extend([String::new(), "[Headcount by department]".to_string()]);
        for group in groups {
            lines.push(format!("- {}: {}", group.department, group.len()));
        }

        lines.extend([String::new(), "[Search keywords]".to_string()]);
        lines.extend(COMPANY_KEYWORDS.iter().map(|k| k.to_string()));
        lines.join("\n")
    }

    fn spotlight_detailed(&self, group: &DepartmentGroup<'_>) -> String {
        let dept = group.department;
        let mut lines = vec![
            format!("[{dept} member profiles]"),
            format!("{dept} total headcount: {}", group.len()),
            String::new(),
            format!("[All {dept} members in detail]"),
        ];
        for (i, e) in group.members.iter().enumerate() {
            lines.extend([
                String::new(),
                format!("## {dept} member {}", i + 1),
                format!("[{}]", self.field(&e.full_name)),
                format!("- Employee ID: {}", self.field(&e.employee_id)),
                format!("- Department: {dept}"),
                format!("- Title: {}", self.field(&e.title)),
                format!("- Employment type: {}", self.field(&e.employment_type)),
                format!("- Gender: {}", self.field(&e.gender)),
                format!("- Age: {}", self.age(e)),
                format!("- Hire date: {}", self.field(&e.hire_date)),
                format!("- Email: {}", self.field(&e.email)),
                format!("- Skills: {}", self.field(&e.skills)),
                format!("- Certifications: {}", self.field(&e.certifications)),
                format!(
                    "- Education: {} {} (graduated {})",
                    self.field(&e.university),
                    self.field(&e.faculty),
                    self.field(&e.graduation_date)
                ),
            ]);
        }
        lines.extend([
            String::new(),
            format!("[{dept} search keywords]"),
            format!("{dept}, {dept} members, {dept} staff, {dept} team, employee information, staff information"),
            format!("{dept} headcount {}, belongs to {dept}, {dept} list", group.len()),
        ]);
        lines.join("\n")
    }

    fn spotlight_table(&self, group: &DepartmentGroup<'_>) -> String {
        let dept = group.department;
        let mut lines = vec![
            format!("[{dept} member table]"),
            format!("Members of {dept}: {}", group.len()),
            String::new(),
            "| No. | Name | Employee ID | Title | Employment type | Age | Hire date |".to_string(),
            "|-----|------|-------------|-------|-----------------|-----|-----------|".to_string(),
        ];
        for (i, e) in group.members.iter().enumerate() {
            lines.push(format!(
                "| {} | {} | {} | {} | {} | {} | {} |",
                i + 1,
                cell(self.field(&e.full_name)),
                cell(self.field(&e.employee_id)),
                cell(self.field(&e.title)),
                cell(self.field(&e.employment_type)),
                cell(&self.age(e)),
                cell(self.field(&e.hire_date)),
            ));
        }
        lines.extend([
            String::new(),
            format!("The table above lists every employee who belongs to {dept}."),
            format!("{} employees in total are assigned to {dept}.", group.len()),
            String::new(),
            format!("{dept} members, {dept} staff, {dept} list, {dept} team"),
        ]);
        lines.join("\n")
    }

    fn spotlight_simple(&self, group: &DepartmentGroup<'_>) -> String {
        let dept = group.department;
        let mut lines = vec![
            format!("[{dept} member list]"),
            format!("{dept} has {} employees.", group.len()),
            String::new(),
            format!("Everyone in {dept}:"),
        ];
        for (i, e) in group.members.iter().enumerate() {
            lines.push(format!(
                "{}. {} - {} ({})",
                i + 1,
                self.field(&e.full_name),
                self.field(&e.title),
                self.field(&e.employment_type)
            ));
        }
        lines.extend([
            String::new(),
            format!("This is the complete list of employees in {dept}."),
            format!("{dept}, belongs to {dept}, {dept} members, {dept} list"),
            format!("{dept} total {}", group.len()),
        ]);
        lines.join("\n")
    }
}

fn metadata(
    source: &str,
    department: &str,
    employee_count: usize,
    document_type: DocumentType,
) -> DocumentMetadata {
    DocumentMetadata {
        source: source.to_string(),
        department: department.to_string(),
        employee_count,
        document_type,
    }
}

fn cell(value: &str) -> String {
    value.replace('|', "\\|")
}
