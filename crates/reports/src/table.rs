//! Report data model and the rendering seam.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// A report with no tables or a table with no rows.
    #[error("report '{0}' has no content")]
    Empty(String),

    /// The rendering backend failed.
    #[error("render failed: {0}")]
    Render(String),
}

/// One titled table inside a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(title: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            title: title.into(),
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }
}

/// A downloadable report: a filename plus one or more tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub filename: String,
    pub tables: Vec<Table>,
}

impl TableReport {
    pub fn new(filename: impl Into<String>, tables: Vec<Table>) -> Self {
        Self {
            filename: filename.into(),
            tables,
        }
    }
}

/// Renders a report into PDF bytes. The concrete backend is supplied by the
/// host; builders never depend on it.
pub trait PdfRenderer {
    fn render(&self, report: &TableReport) -> Result<Vec<u8>, ReportError>;
}
