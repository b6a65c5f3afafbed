use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use super::board::JobBoard;
use super::domain::{ApplicationsByJob, Job, JobId};
use super::grouping::GroupedApplications;
use super::report::{build_report, HiringReport};

/// Report over every listed job, with the jobs whose applications could not
/// be fetched. Those jobs still appear in the report with zero counts.
#[derive(Debug, Clone, Serialize)]
pub struct CollectedReport {
    pub jobs: Vec<Job>,
    pub report: HiringReport,
    pub degraded_jobs: Vec<JobId>,
    pub jobs_unavailable: bool,
}

/// Fetch all jobs and their applications from `board` and summarise them.
///
/// Failures never abort collection: an unavailable job listing yields an
/// empty report, and a failed application fetch counts as no applications.
pub fn collect_report<B: JobBoard + ?Sized>(board: &B) -> CollectedReport {
    let (jobs, jobs_unavailable) = match board.list_employer_jobs() {
        Ok(jobs) => (jobs, false),
        Err(error) => {
            warn!(%error, "failed to fetch employer jobs");
            (Vec::new(), true)
        }
    };

    let mut applications_by_job = ApplicationsByJob::new();
    let mut degraded_jobs = Vec::new();
    let mut seen = HashSet::new();

    for job in &jobs {
        if !seen.insert(&job.id) {
            continue;
        }
        match board.list_applications_for_job(&job.id) {
            Ok(applications) => {
                applications_by_job.insert(job.id.clone(), applications);
            }
            Err(error) => {
                warn!(job_id = %job.id, %error, "failed to fetch applications for job");
                degraded_jobs.push(job.id.clone());
            }
        }
    }

    debug!(jobs = jobs.len(), degraded = degraded_jobs.len(), "hiring report collected");

    CollectedReport {
        report: build_report(&jobs, &applications_by_job),
        jobs,
        degraded_jobs,
        jobs_unavailable,
    }
}

/// Summarise an already grouped snapshot; orphans are reported, not counted.
pub fn report_from_grouped(jobs: &[Job], grouped: &GroupedApplications) -> HiringReport {
    if !grouped.orphaned.is_empty() {
        debug!(
            orphaned = grouped.orphaned.len(),
            "applications reference jobs missing from the listing"
        );
    }
    build_report(jobs, &grouped.by_job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hiring::board::{InMemoryJobBoard, JobBoardError};
    use crate::hiring::domain::Application;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct PartialBoard(InMemoryJobBoard);

    impl JobBoard for PartialBoard {
        fn list_employer_jobs(&self) -> Result<Vec<Job>, JobBoardError> {
            self.0.list_employer_jobs()
        }

        fn list_applications_for_job(
            &self,
            job_id: &JobId,
        ) -> Result<Vec<Application>, JobBoardError> {
            if job_id.as_str() == "b" {
                return Err(JobBoardError::Unavailable("shard down".to_string()));
            }
            self.0.list_applications_for_job(job_id)
        }
    }

    #[test]
    fn failed_job_fetch_degrades_to_zero_counts() {
        let board = PartialBoard(
            InMemoryJobBoard::default()
                .with_job(Job::new("a", "Dev"))
                .with_job(Job::new("b", "Ops"))
                .with_application(Application::new("1", "a", "Ada", Some("hired")))
                .with_application(Application::new("2", "b", "Bo", Some("hired"))),
        );

        let collected = collect_report(&board);

        assert!(!collected.jobs_unavailable);
        assert_eq!(collected.degraded_jobs, [JobId::from("b")]);
        assert_eq!(
            collected.report.lines(),
            [
                "Dev: Hired 1, Rejected 0, Other 0, Total 1",
                "Ops: Hired 0, Rejected 0, Other 0, Total 0",
            ]
        );
    }

    #[test]
    fn duplicate_job_ids_are_fetched_once_even_when_failing() {
        struct CountingBoard {
            inner: InMemoryJobBoard,
            fetches: AtomicUsize,
        }

        impl JobBoard for CountingBoard {
            fn list_employer_jobs(&self) -> Result<Vec<Job>, JobBoardError> {
                self.inner.list_employer_jobs()
            }

            fn list_applications_for_job(
                &self,
                _job_id: &JobId,
            ) -> Result<Vec<Application>, JobBoardError> {
                self.fetches.fetch_add(1, Ordering::SeqCst);
                Err(JobBoardError::Unavailable("shard down".to_string()))
            }
        }

        let board = CountingBoard {
            inner: InMemoryJobBoard::default()
                .with_job(Job::new("b", "Ops"))
                .with_job(Job::new("b", "Ops (repost)")),
            fetches: AtomicUsize::new(0),
        };

        let collected = collect_report(&board);

        assert_eq!(board.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(collected.degraded_jobs, [JobId::from("b")]);
        assert_eq!(collected.report.len(), 2);
    }

    #[test]
    fn unavailable_listing_yields_empty_report() {
        struct Down;
        impl JobBoard for Down {
            fn list_employer_jobs(&self) -> Result<Vec<Job>, JobBoardError> {
                Err(JobBoardError::Unavailable("maintenance".to_string()))
            }
            fn list_applications_for_job(
                &self,
                _job_id: &JobId,
            ) -> Result<Vec<Application>, JobBoardError> {
                unreachable!("no jobs to fetch applications for")
            }
        }

        let collected = collect_report(&Down);
        assert!(collected.jobs_unavailable);
        assert!(collected.report.is_empty());
    }
}
