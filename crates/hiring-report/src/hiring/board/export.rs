use super::{JobBoard, JobBoardError};
use crate::hiring::domain::{Application, ApplicationId, Job, JobId};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Board reading two CSV exports from disk on every call:
/// `jobs.csv` with `id,title` and `applications.csv` with
/// `id,job_id,applicant_name,status`.
#[derive(Debug, Clone)]
pub struct CsvJobBoard {
    jobs_path: PathBuf,
    applications_path: PathBuf,
}

impl CsvJobBoard {
    pub fn new(jobs_path: impl Into<PathBuf>, applications_path: impl Into<PathBuf>) -> Self {
        Self {
            jobs_path: jobs_path.into(),
            applications_path: applications_path.into(),
        }
    }

    pub fn jobs_path(&self) -> &Path {
        &self.jobs_path
    }

    pub fn applications_path(&self) -> &Path {
        &self.applications_path
    }
}

impl JobBoard for CsvJobBoard {
    fn list_employer_jobs(&self) -> Result<Vec<Job>, JobBoardError> {
        let file = std::fs::File::open(&self.jobs_path)?;
        parse_jobs(file)
    }

    fn list_applications_for_job(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<Application>, JobBoardError> {
        let file = std::fs::File::open(&self.applications_path)?;
        let applications = parse_applications(file)?
            .into_iter()
            .filter(|application| &application.job_id == job_id)
            .collect();
        Ok(applications)
    }
}

fn parse_jobs<R: Read>(reader: R) -> Result<Vec<Job>, JobBoardError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut jobs = Vec::new();

    for record in csv_reader.deserialize::<JobRow>() {
        let row = record?;
        jobs.push(Job {
            id: JobId(row.id),
            title: row.title,
        });
    }

    Ok(jobs)
}

fn parse_applications<R: Read>(reader: R) -> Result<Vec<Application>, JobBoardError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut applications = Vec::new();

    for record in csv_reader.deserialize::<ApplicationRow>() {
        let row = record?;
        applications.push(Application {
            id: ApplicationId(row.id),
            job_id: JobId(row.job_id),
            applicant_name: row.applicant_name.unwrap_or_default(),
            status: row.status,
        });
    }

    Ok(applications)
}

#[derive(Debug, Deserialize)]
struct JobRow {
    id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    id: String,
    job_id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    applicant_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.is_empty()))
}
