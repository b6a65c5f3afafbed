use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::board::{JobBoard, JobBoardError};
use super::collect::{collect_report, report_from_grouped};
use super::domain::{Application, Job, JobId};
use super::filter::StatusFilter;
use super::grouping::group_by_job;
use super::report::{ApplicationView, HiringReportView};

/// Router builder exposing the employer job, application and report endpoints.
pub fn hiring_router<B>(board: Arc<B>) -> Router
where
    B: JobBoard + 'static,
{
    Router::new()
        .route("/api/v1/employer/jobs", get(jobs_handler::<B>))
        .route(
            "/api/v1/employer/jobs/:job_id/applications",
            get(applications_handler::<B>),
        )
        .route(
            "/api/v1/employer/hiring-report",
            get(employer_report_handler::<B>),
        )
        .route("/api/v1/hiring/report", post(snapshot_report_handler))
        .with_state(board)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApplicationsQuery {
    #[serde(default)]
    pub(crate) status: StatusFilter,
}

/// Jobs and a flat application list supplied by the caller.
#[derive(Debug, Default, Deserialize)]
pub struct HiringSnapshot {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub applications: Vec<Application>,
}

#[derive(Debug, Serialize)]
pub struct EmployerReportResponse {
    #[serde(flatten)]
    pub report: HiringReportView,
    pub degraded_jobs: Vec<JobId>,
    pub jobs_unavailable: bool,
}

#[derive(Debug, Serialize)]
pub struct SnapshotReportResponse {
    #[serde(flatten)]
    pub report: HiringReportView,
    pub orphaned_applications: Vec<Application>,
}

fn unavailable(error: JobBoardError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
}

pub(crate) async fn jobs_handler<B>(State(board): State<Arc<B>>) -> Response
where
    B: JobBoard + 'static,
{
    match board.list_employer_jobs() {
        Ok(jobs) => (StatusCode::OK, Json(json!({ "jobs": jobs }))).into_response(),
        Err(error) => {
            warn!(%error, "failed to fetch employer jobs");
            unavailable(error)
        }
    }
}

pub(crate) async fn applications_handler<B>(
    State(board): State<Arc<B>>,
    Path(job_id): Path<String>,
    Query(query): Query<ApplicationsQuery>,
) -> Response
where
    B: JobBoard + 'static,
{
    let job_id = JobId(job_id);
    match board.list_applications_for_job(&job_id) {
        Ok(applications) => {
            let listed: Vec<ApplicationView> = query
                .status
                .apply(&applications)
                .iter()
                .map(ApplicationView::from)
                .collect();
            let payload = json!({
                "job_id": job_id,
                "status_filter": query.status,
                "applications": listed,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => {
            warn!(%job_id, %error, "failed to fetch applications for job");
            unavailable(error)
        }
    }
}

pub(crate) async fn employer_report_handler<B>(
    State(board): State<Arc<B>>,
) -> Json<EmployerReportResponse>
where
    B: JobBoard + 'static,
{
    let collected = collect_report(board.as_ref());
    Json(EmployerReportResponse {
        report: collected.report.view(),
        degraded_jobs: collected.degraded_jobs,
        jobs_unavailable: collected.jobs_unavailable,
    })
}

pub(crate) async fn snapshot_report_handler(
    Json(snapshot): Json<HiringSnapshot>,
) -> Json<SnapshotReportResponse> {
    let grouped = group_by_job(&snapshot.jobs, &snapshot.applications);
    let report = report_from_grouped(&snapshot.jobs, &grouped);
    Json(SnapshotReportResponse {
        report: report.view(),
        orphaned_applications: grouped.orphaned,
    })
}
