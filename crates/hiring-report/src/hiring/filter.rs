use super::domain::Application;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Narrows the application list shown for a selected job.
///
/// Matching is exact and case-sensitive; it only affects what is listed and
/// never feeds into report counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(raw.to_string())
        }
    }

    pub fn matches(&self, application: &Application) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => application.status.as_deref() == Some(status.as_str()),
        }
    }

    pub fn apply(&self, applications: &[Application]) -> Vec<Application> {
        applications
            .iter()
            .filter(|application| self.matches(application))
            .cloned()
            .collect()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(status) => f.write_str(status),
        }
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applications() -> Vec<Application> {
        vec![
            Application::new("1", "a", "Ada", Some("hired")),
            Application::new("2", "a", "Bo", Some("Hired")),
            Application::new("3", "a", "Cy", None),
            Application::new("4", "a", "Di", Some("rejected")),
        ]
    }

    #[test]
    fn all_keeps_everything() {
        assert_eq!(StatusFilter::parse("ALL"), StatusFilter::All);
        assert_eq!(StatusFilter::parse(""), StatusFilter::All);
        assert_eq!(StatusFilter::All.apply(&applications()).len(), 4);
    }

    #[test]
    fn only_matches_exact_status() {
        let filter = StatusFilter::parse("hired");
        let kept: Vec<_> = filter
            .apply(&applications())
            .into_iter()
            .map(|application| application.applicant_name)
            .collect();
        assert_eq!(kept, ["Ada"]);
    }

    #[test]
    fn missing_status_never_matches_specific_filter() {
        let filter = StatusFilter::Only(String::new());
        assert!(!filter.matches(&Application::new("3", "a", "Cy", None)));
    }

    #[test]
    fn serde_uses_plain_strings() {
        let filter: StatusFilter = serde_json::from_str("\"rejected\"").expect("parses");
        assert_eq!(filter, StatusFilter::Only("rejected".to_string()));
        let missing: StatusFilter = serde_json::from_str("null").expect("parses");
        assert_eq!(missing, StatusFilter::All);
        assert_eq!(
            serde_json::to_string(&StatusFilter::All).expect("serializes"),
            "\"all\""
        );
    }
}
