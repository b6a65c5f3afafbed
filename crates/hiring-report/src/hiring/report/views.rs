use super::super::domain::{Application, ApplicationOutcome};
use super::summary::JobSummary;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Running outcome counts; `total` is always derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    pub hired: usize,
    pub rejected: usize,
    pub other: usize,
}

impl OutcomeTally {
    pub fn record(&mut self, outcome: ApplicationOutcome) {
        match outcome {
            ApplicationOutcome::Hired => self.hired += 1,
            ApplicationOutcome::Rejected => self.rejected += 1,
            ApplicationOutcome::Other => self.other += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.hired + self.rejected + self.other
    }
}

impl Serialize for OutcomeTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("OutcomeTally", 4)?;
        state.serialize_field("hired", &self.hired)?;
        state.serialize_field("rejected", &self.rejected)?;
        state.serialize_field("other", &self.other)?;
        state.serialize_field("total", &self.total())?;
        state.end()
    }
}

/// Serializable report payload for API and CLI consumers.
#[derive(Debug, Clone, Serialize)]
pub struct HiringReportView {
    pub summaries: Vec<JobSummary>,
    pub totals: OutcomeTally,
    pub lines: Vec<String>,
}

/// Public listing entry for a single application.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationView {
    pub id: String,
    pub applicant_name: String,
    pub status: String,
    pub outcome: ApplicationOutcome,
}

impl From<&Application> for ApplicationView {
    fn from(application: &Application) -> Self {
        Self {
            id: application.id.0.clone(),
            applicant_name: application.applicant_name.clone(),
            status: application.status_label().to_string(),
            outcome: application.outcome(),
        }
    }
}

impl ApplicationView {
    /// `"<applicant> - <status>"`, as shown in the application list.
    pub fn line(&self) -> String {
        format!("{} - {}", self.applicant_name, self.status)
    }
}
