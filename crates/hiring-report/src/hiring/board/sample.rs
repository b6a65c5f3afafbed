use super::InMemoryJobBoard;
use crate::hiring::domain::{Application, Job};

/// Small employer board used by the demo command and when no CSV export is
/// configured. Includes an untitled posting, a posting with no applicants and
/// statuses in mixed case.
pub fn sample_board() -> InMemoryJobBoard {
    InMemoryJobBoard::new(
        vec![
            Job::new("job-backend", "Backend Engineer"),
            Job::new("job-design", "Product Designer"),
            Job::untitled("job-draft"),
            Job::new("job-support", "Support Specialist"),
        ],
        vec![
            Application::new("app-001", "job-backend", "Ada Lovelace", Some("Hired")),
            Application::new("app-002", "job-backend", "Grace Hopper", Some("rejected")),
            Application::new("app-003", "job-backend", "Alan Turing", Some("interviewing")),
            Application::new("app-004", "job-backend", "Barbara Liskov", None),
            Application::new("app-005", "job-design", "Dieter Rams", Some("HIRED")),
            Application::new("app-006", "job-design", "Susan Kare", Some("Rejected")),
            Application::new("app-007", "job-draft", "Ken Thompson", Some("")),
            Application::new("app-008", "job-archived", "Linus Torvalds", Some("hired")),
        ],
    )
}
