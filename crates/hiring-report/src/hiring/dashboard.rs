use std::sync::Arc;

use tracing::warn;

use super::board::{JobBoard, JobBoardError};
use super::collect::report_from_grouped;
use super::domain::{Application, Job, JobId};
use super::filter::StatusFilter;
use super::grouping::group_by_job;
use super::report::HiringReport;

/// Employer-facing view state: the posted jobs, the selected job, its fetched
/// applications, the listing filter and the hiring report derived from them.
///
/// Every change to jobs or applications replaces the report with a freshly
/// built one. Fetch failures are logged and leave the previous data in place.
pub struct EmployerDashboard<B> {
    board: Arc<B>,
    jobs: Vec<Job>,
    selected: Option<JobId>,
    applications: Vec<Application>,
    orphaned: Vec<Application>,
    filter: StatusFilter,
    report: HiringReport,
}

impl<B> EmployerDashboard<B>
where
    B: JobBoard + 'static,
{
    pub fn new(board: Arc<B>) -> Self {
        Self {
            board,
            jobs: Vec::new(),
            selected: None,
            applications: Vec::new(),
            orphaned: Vec::new(),
            filter: StatusFilter::All,
            report: HiringReport::default(),
        }
    }

    /// Reload the employer's jobs from the board.
    pub fn refresh_jobs(&mut self) -> Result<(), DashboardError> {
        match self.board.list_employer_jobs() {
            Ok(jobs) => {
                self.jobs = jobs;
                self.recompute();
                Ok(())
            }
            Err(error) => {
                warn!(%error, "failed to fetch employer jobs");
                Err(error.into())
            }
        }
    }

    /// Select a known job and fetch its applications.
    pub fn select_job(&mut self, job_id: &JobId) -> Result<(), DashboardError> {
        if !self.jobs.iter().any(|job| &job.id == job_id) {
            return Err(DashboardError::UnknownJob(job_id.clone()));
        }
        self.selected = Some(job_id.clone());

        let fetched = self.board.list_applications_for_job(job_id);
        let result = match fetched {
            Ok(applications) => {
                self.applications = applications;
                Ok(())
            }
            Err(error) => {
                warn!(%job_id, %error, "failed to fetch applications for job");
                Err(error.into())
            }
        };

        self.recompute();
        result
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn status_filter(&self) -> &StatusFilter {
        &self.filter
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn selected_job(&self) -> Option<&Job> {
        let selected = self.selected.as_ref()?;
        self.jobs.iter().find(|job| &job.id == selected)
    }

    /// Applications of the selected job that pass the status filter.
    pub fn visible_applications(&self) -> Vec<Application> {
        if self.selected.is_none() {
            return Vec::new();
        }
        self.filter.apply(&self.applications)
    }

    pub fn report(&self) -> &HiringReport {
        &self.report
    }

    pub fn orphaned(&self) -> &[Application] {
        &self.orphaned
    }

    fn recompute(&mut self) {
        let grouped = group_by_job(&self.jobs, &self.applications);
        self.report = report_from_grouped(&self.jobs, &grouped);
        self.orphaned = grouped.orphaned;
    }
}

/// Error raised by dashboard operations. Board failures are non-fatal: the
/// dashboard has already logged them and kept its last-known data.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("job {0} is not among the employer's listed jobs")]
    UnknownJob(JobId),
    #[error(transparent)]
    Board(#[from] JobBoardError),
}
