//! Employer hiring summaries: the pure report builder and the thin glue
//! (data sources, grouping, filtering, dashboard state, HTTP) around it.

pub mod board;
mod collect;
pub mod dashboard;
pub mod domain;
pub mod filter;
pub mod grouping;
pub mod report;
pub mod router;

#[cfg(test)]
mod tests;

pub use board::{sample_board, CsvJobBoard, InMemoryJobBoard, JobBoard, JobBoardError};
pub use collect::{collect_report, report_from_grouped, CollectedReport};
pub use dashboard::{DashboardError, EmployerDashboard};
pub use domain::{
    Application, ApplicationId, ApplicationOutcome, ApplicationsByJob, Job, JobId, UNTITLED,
};
pub use filter::StatusFilter;
pub use grouping::{group_by_job, GroupedApplications};
pub use report::{build_report, HiringReport, JobSummary};
pub use router::hiring_router;
