use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Title rendered for jobs posted without one.
pub const UNTITLED: &str = "Untitled";

/// Identifier wrapper for employer job postings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier wrapper for candidate applications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

impl From<&str> for ApplicationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A position posted by the employer. Missing fields default on input, and
/// the document-store field names (`_id`) are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, alias = "_id")]
    pub id: JobId,
    #[serde(default)]
    pub title: Option<String>,
}

impl Job {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: JobId(id.into()),
            title: Some(title.into()),
        }
    }

    pub fn untitled(id: impl Into<String>) -> Self {
        Self {
            id: JobId(id.into()),
            title: None,
        }
    }

    /// Title for display, falling back to [`UNTITLED`] when absent or empty.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => UNTITLED,
        }
    }
}

/// A candidate's submission against one job.
///
/// Every field defaults on input so partially populated records still flow
/// through listing and reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    #[serde(default, alias = "_id")]
    pub id: ApplicationId,
    #[serde(default, alias = "job", alias = "jobId")]
    pub job_id: JobId,
    #[serde(default, alias = "applicantName")]
    pub applicant_name: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl Application {
    pub fn new(
        id: impl Into<String>,
        job_id: impl Into<String>,
        applicant_name: impl Into<String>,
        status: Option<&str>,
    ) -> Self {
        Self {
            id: ApplicationId(id.into()),
            job_id: JobId(job_id.into()),
            applicant_name: applicant_name.into(),
            status: status.map(str::to_string),
        }
    }

    pub fn outcome(&self) -> ApplicationOutcome {
        ApplicationOutcome::classify(self.status.as_deref())
    }

    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }
}

/// Reporting bucket an application status falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationOutcome {
    Hired,
    Rejected,
    Other,
}

impl ApplicationOutcome {
    /// Case-insensitive match on `hired` / `rejected`; anything else, including
    /// a missing status, is `Other`. Surrounding whitespace is significant.
    pub fn classify(status: Option<&str>) -> Self {
        match status.map(str::to_lowercase).as_deref() {
            Some("hired") => Self::Hired,
            Some("rejected") => Self::Rejected,
            _ => Self::Other,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
            Self::Other => "Other",
        }
    }
}

/// Applications keyed by the job they were submitted against.
pub type ApplicationsByJob = HashMap<JobId, Vec<Application>>;
