use hiring_report::hiring::{
    build_report, group_by_job, Application, ApplicationsByJob, Job, JobId, UNTITLED,
};

fn status_grid() -> Vec<Option<&'static str>> {
    vec![
        Some("hired"),
        Some("Hired"),
        Some("HIRED"),
        Some("rejected"),
        Some("Rejected"),
        Some("pending"),
        Some(""),
        None,
    ]
}

fn fixture() -> (Vec<Job>, ApplicationsByJob) {
    let jobs = vec![
        Job::new("backend", "Backend Engineer"),
        Job::untitled("draft"),
        Job::new("design", "Designer"),
        Job::new("empty-title", ""),
    ];

    let mut applications = Vec::new();
    for (index, status) in status_grid().into_iter().enumerate() {
        applications.push(Application::new(
            format!("backend-{index}"),
            "backend",
            format!("Candidate {index}"),
            status,
        ));
    }
    applications.push(Application::new("design-1", "design", "Dee", Some("REJECTED")));
    applications.push(Application::new("stray-1", "closed", "Stray", Some("hired")));

    let grouped = group_by_job(&jobs, &applications);
    (jobs, grouped.by_job)
}

#[test]
fn report_has_one_summary_per_job_in_input_order() {
    let (jobs, by_job) = fixture();
    let report = build_report(&jobs, &by_job);

    assert_eq!(report.len(), jobs.len());
    let ids: Vec<&JobId> = report.summaries().iter().map(|s| &s.job_id).collect();
    let expected: Vec<&JobId> = jobs.iter().map(|job| &job.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn totals_equal_sum_of_buckets() {
    let (jobs, by_job) = fixture();
    for summary in build_report(&jobs, &by_job).summaries() {
        assert_eq!(
            summary.total,
            summary.hired + summary.rejected + summary.other,
            "{summary}"
        );
    }
}

#[test]
fn case_insensitive_counts_and_fallbacks() {
    let (jobs, by_job) = fixture();
    let report = build_report(&jobs, &by_job);

    let backend = report.get(&JobId::from("backend")).expect("backend summary");
    assert_eq!(backend.hired, 3);
    assert_eq!(backend.rejected, 2);
    assert_eq!(backend.other, 3);
    assert_eq!(backend.total, 8);

    let draft = report.get(&JobId::from("draft")).expect("draft summary");
    assert_eq!(draft.title, UNTITLED);
    assert_eq!(draft.total, 0);

    let empty_title = report
        .get(&JobId::from("empty-title"))
        .expect("empty title summary");
    assert_eq!(empty_title.title, UNTITLED);
}

#[test]
fn orphaned_applications_are_not_counted() {
    let (jobs, by_job) = fixture();
    let report = build_report(&jobs, &by_job);
    let counted: usize = report.summaries().iter().map(|s| s.total).sum();
    assert_eq!(counted, 9);
}

#[test]
fn missing_map_entry_means_zero_counts() {
    let jobs = vec![Job::new("a", "Dev")];
    let report = build_report(&jobs, &ApplicationsByJob::new());
    assert_eq!(
        report.lines(),
        ["Dev: Hired 0, Rejected 0, Other 0, Total 0"]
    );
}

#[test]
fn repeated_builds_are_equal() {
    let (jobs, by_job) = fixture();
    let first = build_report(&jobs, &by_job);
    let _unrelated = build_report(&[Job::new("x", "Other")], &ApplicationsByJob::new());
    let second = build_report(&jobs, &by_job);
    assert_eq!(first, second);
}

#[test]
fn documented_example_produces_expected_summary() {
    let jobs = vec![Job::new("a", "Dev")];
    let mut by_job = ApplicationsByJob::new();
    by_job.insert(
        JobId::from("a"),
        vec![
            Application::new("1", "a", "", Some("Hired")),
            Application::new("2", "a", "", Some("rejected")),
            Application::new("3", "a", "", Some("")),
            Application::default(),
        ],
    );

    let report = build_report(&jobs, &by_job);
    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(
        json,
        serde_json::json!([
            { "job_id": "a", "title": "Dev", "hired": 1, "rejected": 1, "other": 2, "total": 4 }
        ])
    );
}

#[test]
fn empty_jobs_give_empty_report() {
    let mut by_job = ApplicationsByJob::new();
    by_job.insert(
        JobId::from("a"),
        vec![Application::new("1", "a", "Ada", Some("hired"))],
    );
    assert!(build_report(&[], &by_job).is_empty());
}
