//! `paypack-reports` — printable tabular reports.
//!
//! Builders assemble report data (titles, headers, rows) from the domain;
//! turning a report into PDF bytes is the renderer's concern, behind
//! [`PdfRenderer`]. Visual layout is deliberately out of scope here.

pub mod builders;
pub mod format;
pub mod table;

pub use builders::{
    CollectionSummary, cell_report, property_details, property_listing, sector_report,
    village_report,
};
pub use table::{PdfRenderer, ReportError, Table, TableReport};
