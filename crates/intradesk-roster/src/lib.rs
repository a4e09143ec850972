//! Employee roster ingestion for Intradesk.
//!
//! Reads the roster CSV and restates it as keyword-dense prose documents,
//! one per department plus a company-wide summary, ready for an external
//! embedding and indexing step.

pub mod error;
pub mod formatter;
pub mod group;
pub mod record;

pub use error::RosterError;
pub use formatter::{FormatterOptions, RosterFormatter};
pub use group::{group_by_department, DepartmentGroup, UNASSIGNED_DEPARTMENT};
pub use record::{read_records, read_records_from, EmployeeRecord, REQUIRED_COLUMNS};
