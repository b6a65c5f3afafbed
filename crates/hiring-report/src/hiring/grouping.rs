use super::domain::{Application, ApplicationsByJob, Job};
use std::collections::HashSet;

/// Applications split by the job they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedApplications {
    pub by_job: ApplicationsByJob,
    /// Applications referencing a job id that is not in the job list. They are
    /// kept for inspection and never counted in a report.
    pub orphaned: Vec<Application>,
}

/// Group a flat application list under the given jobs, preserving input order
/// within each job. Every job id receives an entry, empty if unmatched.
pub fn group_by_job(jobs: &[Job], applications: &[Application]) -> GroupedApplications {
    let known: HashSet<_> = jobs.iter().map(|job| &job.id).collect();
    let mut by_job: ApplicationsByJob = jobs
        .iter()
        .map(|job| (job.id.clone(), Vec::new()))
        .collect();
    let mut orphaned = Vec::new();

    for application in applications {
        if known.contains(&application.job_id) {
            by_job
                .entry(application.job_id.clone())
                .or_default()
                .push(application.clone());
        } else {
            orphaned.push(application.clone());
        }
    }

    GroupedApplications { by_job, orphaned }
}
