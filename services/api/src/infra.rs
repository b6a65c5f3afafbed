use hiring_report::config::DataSourceConfig;
use hiring_report::hiring::{
    sample_board, Application, CsvJobBoard, InMemoryJobBoard, Job, JobBoard, JobBoardError, JobId,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Board selected from configuration or command-line overrides.
#[derive(Debug, Clone)]
pub(crate) enum ConfiguredBoard {
    Sample(InMemoryJobBoard),
    Csv(CsvJobBoard),
}

impl ConfiguredBoard {
    pub(crate) fn from_config(config: &DataSourceConfig) -> Self {
        match config {
            DataSourceConfig::Sample => Self::Sample(sample_board()),
            DataSourceConfig::Csv { jobs, applications } => {
                Self::Csv(CsvJobBoard::new(jobs.clone(), applications.clone()))
            }
        }
    }

    /// CLI paths win over configuration when both are given.
    pub(crate) fn resolve(
        config: &DataSourceConfig,
        jobs_csv: Option<PathBuf>,
        applications_csv: Option<PathBuf>,
    ) -> Result<Self, hiring_report::config::ConfigError> {
        match DataSourceConfig::from_paths(jobs_csv, applications_csv)? {
            DataSourceConfig::Sample => Ok(Self::from_config(config)),
            overridden => Ok(Self::from_config(&overridden)),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Sample(_) => "built-in sample board".to_string(),
            Self::Csv(board) => format!(
                "CSV export ({}, {})",
                board.jobs_path().display(),
                board.applications_path().display()
            ),
        }
    }
}

impl JobBoard for ConfiguredBoard {
    fn list_employer_jobs(&self) -> Result<Vec<Job>, JobBoardError> {
        match self {
            Self::Sample(board) => board.list_employer_jobs(),
            Self::Csv(board) => board.list_employer_jobs(),
        }
    }

    fn list_applications_for_job(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<Application>, JobBoardError> {
        match self {
            Self::Sample(board) => board.list_applications_for_job(job_id),
            Self::Csv(board) => board.list_applications_for_job(job_id),
        }
    }
}
