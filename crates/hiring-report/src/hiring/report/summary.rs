use super::super::domain::{Application, ApplicationOutcome, ApplicationsByJob, Job, JobId};
use super::views::{HiringReportView, OutcomeTally};
use serde::Serialize;
use std::fmt;

/// Outcome counts for a single job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobSummary {
    pub job_id: JobId,
    pub title: String,
    pub hired: usize,
    pub rejected: usize,
    pub other: usize,
    pub total: usize,
}

impl JobSummary {
    fn from_applications(job: &Job, applications: &[Application]) -> Self {
        let tally = applications
            .iter()
            .fold(OutcomeTally::default(), |mut tally, application| {
                tally.record(application.outcome());
                tally
            });

        Self {
            job_id: job.id.clone(),
            title: job.display_title().to_string(),
            hired: tally.hired,
            rejected: tally.rejected,
            other: tally.other,
            total: tally.total(),
        }
    }

    pub fn count(&self, outcome: ApplicationOutcome) -> usize {
        match outcome {
            ApplicationOutcome::Hired => self.hired,
            ApplicationOutcome::Rejected => self.rejected,
            ApplicationOutcome::Other => self.other,
        }
    }
}

impl fmt::Display for JobSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Hired {}, Rejected {}, Other {}, Total {}",
            self.title, self.hired, self.rejected, self.other, self.total
        )
    }
}

/// Per-job summaries in the order the jobs were supplied.
///
/// A report is a snapshot: it owns its strings and is rebuilt, never patched,
/// when either input changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HiringReport {
    summaries: Vec<JobSummary>,
}

impl HiringReport {
    pub fn summaries(&self) -> &[JobSummary] {
        &self.summaries
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    pub fn get(&self, job_id: &JobId) -> Option<&JobSummary> {
        self.summaries.iter().find(|summary| &summary.job_id == job_id)
    }

    pub fn lines(&self) -> Vec<String> {
        self.summaries.iter().map(ToString::to_string).collect()
    }

    pub fn totals(&self) -> OutcomeTally {
        self.summaries
            .iter()
            .fold(OutcomeTally::default(), |tally, summary| OutcomeTally {
                hired: tally.hired + summary.hired,
                rejected: tally.rejected + summary.rejected,
                other: tally.other + summary.other,
            })
    }

    pub fn view(&self) -> HiringReportView {
        HiringReportView {
            summaries: self.summaries.clone(),
            totals: self.totals(),
            lines: self.lines(),
        }
    }
}

/// Summarise every job in `jobs`, in order.
///
/// Jobs without an entry in `applications_by_job` report zero counts. Jobs
/// sharing an id each get their own summary over the same applications.
pub fn build_report(jobs: &[Job], applications_by_job: &ApplicationsByJob) -> HiringReport {
    let summaries = jobs
        .iter()
        .map(|job| {
            let applications = applications_by_job
                .get(&job.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            JobSummary::from_applications(job, applications)
        })
        .collect();

    HiringReport { summaries }
}
