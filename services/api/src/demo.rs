use crate::infra::ConfiguredBoard;
use chrono::Local;
use clap::Args;
use hiring_report::config::AppConfig;
use hiring_report::error::AppError;
use hiring_report::hiring::report::ApplicationView;
use hiring_report::hiring::{
    collect_report, sample_board, DashboardError, EmployerDashboard, HiringReport, JobBoard,
    JobId, StatusFilter,
};
use hiring_report::telemetry;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Jobs CSV export (`id,title`); defaults to HIRING_JOBS_CSV
    #[arg(long)]
    pub(crate) jobs_csv: Option<PathBuf>,
    /// Applications CSV export (`id,job_id,applicant_name,status`); defaults to HIRING_APPLICATIONS_CSV
    #[arg(long)]
    pub(crate) applications_csv: Option<PathBuf>,
    /// Job to select; without it applications are fetched for every job
    #[arg(long)]
    pub(crate) job: Option<String>,
    /// Status filter for the selected job's application list
    #[arg(long, default_value = "all")]
    pub(crate) status: String,
    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Status filter applied while browsing each job's applications
    #[arg(long)]
    pub(crate) status: Option<String>,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        jobs_csv,
        applications_csv,
        job,
        status,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let board = ConfiguredBoard::resolve(&config.data_source, jobs_csv, applications_csv)?;

    println!("Employer hiring report");
    println!("Data source: {}", board.describe());
    let board = Arc::new(board);

    let Some(job) = job else {
        let collected = collect_report(board.as_ref());
        if !collected.degraded_jobs.is_empty() {
            println!(
                "Applications unavailable for: {}",
                join_ids(&collected.degraded_jobs)
            );
        }
        return print_summary(&collected.report, json);
    };

    let mut dashboard = EmployerDashboard::new(board);
    dashboard.set_status_filter(StatusFilter::parse(&status));
    select_requested_job(&mut dashboard, &JobId(job))?;

    render_dashboard(&dashboard);
    print_summary(dashboard.report(), json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let filter = args
        .status
        .as_deref()
        .map(StatusFilter::parse)
        .unwrap_or_default();

    println!(
        "Employer hiring demo ({})",
        Local::now().format("%Y-%m-%d %H:%M")
    );
    let board = Arc::new(sample_board());
    let mut dashboard = EmployerDashboard::new(board.clone());
    dashboard.set_status_filter(filter);
    dashboard.refresh_jobs()?;

    let job_ids: Vec<JobId> = dashboard.jobs().iter().map(|job| job.id.clone()).collect();
    for job_id in &job_ids {
        dashboard.select_job(job_id)?;
        println!();
        render_dashboard(&dashboard);
        print_summary(dashboard.report(), false)?;
        if !dashboard.orphaned().is_empty() {
            println!(
                "({} fetched application(s) reference unknown jobs)",
                dashboard.orphaned().len()
            );
        }
    }

    let stray = board
        .applications()
        .iter()
        .filter(|application| !job_ids.contains(&application.job_id))
        .count();
    println!("\nAll jobs at once");
    let collected = collect_report(board.as_ref());
    print_summary(&collected.report, false)?;
    if stray > 0 {
        println!("{stray} application(s) reference jobs no longer listed and are not counted");
    }

    Ok(())
}

/// Load the job list and select `job_id`. An application fetch failure is
/// tolerated (already logged, listing stays empty); an unknown job is an
/// error, reported as the listing failure when the job list never loaded.
fn select_requested_job<B: JobBoard + 'static>(
    dashboard: &mut EmployerDashboard<B>,
    job_id: &JobId,
) -> Result<(), AppError> {
    let refreshed = dashboard.refresh_jobs();
    match (refreshed, dashboard.select_job(job_id)) {
        (_, Ok(())) | (_, Err(DashboardError::Board(_))) => Ok(()),
        (Err(listing), Err(DashboardError::UnknownJob(_))) => Err(listing.into()),
        (Ok(()), Err(err)) => Err(err.into()),
    }
}

fn render_dashboard<B: JobBoard + 'static>(dashboard: &EmployerDashboard<B>) {
    println!("Jobs");
    for job in dashboard.jobs() {
        let marker = match dashboard.selected_job() {
            Some(selected) if selected.id == job.id => "*",
            _ => "-",
        };
        println!("{marker} {} ({})", job.display_title(), job.id);
    }

    let Some(selected) = dashboard.selected_job() else {
        return;
    };
    println!(
        "\nApplications for {} [status: {}]",
        selected.display_title(),
        dashboard.status_filter()
    );
    let visible = dashboard.visible_applications();
    if visible.is_empty() {
        println!("- none");
    }
    for application in &visible {
        println!("- {}", ApplicationView::from(application).line());
    }
}

fn print_summary(report: &HiringReport, json: bool) -> Result<(), AppError> {
    if json {
        let payload = serde_json::to_string_pretty(&report.view())
            .map_err(|err| AppError::Io(err.into()))?;
        println!("{payload}");
        return Ok(());
    }

    println!("\nHiring summary");
    if report.is_empty() {
        println!("- no jobs listed");
    }
    for line in report.lines() {
        println!("- {line}");
    }
    let totals = report.totals();
    println!(
        "Overall: Hired {}, Rejected {}, Other {}, Total {}",
        totals.hired,
        totals.rejected,
        totals.other,
        totals.total()
    );
    Ok(())
}

fn join_ids(ids: &[JobId]) -> String {
    ids.iter()
        .map(JobId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
