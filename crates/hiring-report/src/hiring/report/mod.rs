mod summary;
pub mod views;

pub use summary::{build_report, HiringReport, JobSummary};
pub use views::{ApplicationView, HiringReportView, OutcomeTally};
