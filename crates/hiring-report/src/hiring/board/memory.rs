use super::{JobBoard, JobBoardError};
use crate::hiring::domain::{Application, Job, JobId};

/// Board backed by owned vectors; listing applications filters by job id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobBoard {
    jobs: Vec<Job>,
    applications: Vec<Application>,
}

impl InMemoryJobBoard {
    pub fn new(jobs: Vec<Job>, applications: Vec<Application>) -> Self {
        Self { jobs, applications }
    }

    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn with_application(mut self, application: Application) -> Self {
        self.applications.push(application);
        self
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }
}

impl JobBoard for InMemoryJobBoard {
    fn list_employer_jobs(&self) -> Result<Vec<Job>, JobBoardError> {
        Ok(self.jobs.clone())
    }

    fn list_applications_for_job(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<Application>, JobBoardError> {
        Ok(self
            .applications
            .iter()
            .filter(|application| &application.job_id == job_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applications_are_scoped_to_the_requested_job() {
        let board = InMemoryJobBoard::default()
            .with_job(Job::new("a", "Dev"))
            .with_job(Job::new("b", "Ops"))
            .with_application(Application::new("1", "a", "Ada", Some("hired")))
            .with_application(Application::new("2", "b", "Bo", None));

        assert_eq!(board.list_employer_jobs().expect("jobs listed").len(), 2);
        let for_b = board
            .list_applications_for_job(&JobId::from("b"))
            .expect("applications listed");
        assert_eq!(for_b.len(), 1);
        assert_eq!(for_b[0].applicant_name, "Bo");
        assert!(board
            .list_applications_for_job(&JobId::from("missing"))
            .expect("applications listed")
            .is_empty());
    }
}
