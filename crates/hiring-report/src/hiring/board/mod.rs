//! Data sources for employer jobs and their applications.

mod export;
mod memory;
mod sample;

pub use export::CsvJobBoard;
pub use memory::InMemoryJobBoard;
pub use sample::sample_board;

use super::domain::{Application, Job, JobId};

/// Read access to an employer's postings and the applications against them.
pub trait JobBoard: Send + Sync {
    fn list_employer_jobs(&self) -> Result<Vec<Job>, JobBoardError>;
    fn list_applications_for_job(&self, job_id: &JobId)
        -> Result<Vec<Application>, JobBoardError>;
}

/// Error enumeration for data source failures.
#[derive(Debug, thiserror::Error)]
pub enum JobBoardError {
    #[error("job board unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read job board export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid job board CSV data: {0}")]
    Csv(#[from] csv::Error),
}
