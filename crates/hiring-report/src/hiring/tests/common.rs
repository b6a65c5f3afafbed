use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::hiring::board::{InMemoryJobBoard, JobBoard, JobBoardError};
use crate::hiring::domain::{Application, Job, JobId};
use crate::hiring::router::hiring_router;

pub(super) fn board() -> InMemoryJobBoard {
    InMemoryJobBoard::default()
        .with_job(Job::new("a", "Dev"))
        .with_job(Job::untitled("b"))
        .with_application(Application::new("1", "a", "Ada", Some("Hired")))
        .with_application(Application::new("2", "a", "Bo", Some("rejected")))
        .with_application(Application::new("3", "a", "Cy", Some("")))
        .with_application(Application::new("4", "a", "Di", None))
        .with_application(Application::new("5", "orphan", "Ed", Some("hired")))
}

pub(super) fn router() -> axum::Router {
    hiring_router(Arc::new(board()))
}

pub(super) struct UnavailableBoard;

impl JobBoard for UnavailableBoard {
    fn list_employer_jobs(&self) -> Result<Vec<Job>, JobBoardError> {
        Err(JobBoardError::Unavailable("database offline".to_string()))
    }

    fn list_applications_for_job(
        &self,
        _job_id: &JobId,
    ) -> Result<Vec<Application>, JobBoardError> {
        Err(JobBoardError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
