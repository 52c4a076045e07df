/// Integration tests for the application layer
mod test_utilities;

use iq_license_report::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use test_utilities::mocks::*;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/raw_report.json")
}

fn sample_report() -> Report {
    Report::new(vec![
        Component::new(
            Some("pkg:npm/a@1.0.0".to_string()),
            vec![License::new("MIT", "MIT License")],
            vec![
                License::new("Not-Supported", "Not Supported"),
                License::new("Apache-2.0", "Apache License 2.0"),
            ],
        ),
        Component::new(
            Some("pkg:npm/b@1.0.0".to_string()),
            vec![License::new("MIT", "MIT License")],
            vec![],
        ),
    ])
}

#[tokio::test]
async fn test_generate_license_report_happy_path() {
    let repository = MockReportRepository::new().with_report("app1", "build", sample_report());
    let progress_reporter = MockProgressReporter::new();

    let use_case = GenerateLicenseReportUseCase::new(
        repository,
        progress_reporter.clone(),
        LicenseSetReducer::default(),
    );

    let response = use_case
        .execute(LicenseReportRequest::new("app1", "build"))
        .await
        .unwrap();

    assert_eq!(response.component_count, 2);
    assert_eq!(
        response.licenses,
        vec![
            License::new("Apache-2.0", "Apache License 2.0"),
            License::new("MIT", "MIT License"),
        ]
    );
    assert!(progress_reporter.message_count() >= 3);
    assert!(progress_reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Waiting:")));
}

#[tokio::test]
async fn test_generate_license_report_unknown_stage() {
    let repository = MockReportRepository::new().with_report("app1", "build", sample_report());
    let progress_reporter = MockProgressReporter::new();

    let use_case = GenerateLicenseReportUseCase::new(
        repository,
        progress_reporter.clone(),
        LicenseSetReducer::default(),
    );

    let error = use_case
        .execute(LicenseReportRequest::new("app1", "release"))
        .await
        .unwrap_err();

    assert_eq!(ExitCode::for_error(&error), ExitCode::ApplicationError);
    assert!(progress_reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Error:")));
}

#[tokio::test]
async fn test_report_file_to_html_file() {
    let use_case = GenerateLicenseReportUseCase::new(
        RawReportFileReader::new(fixture_path()),
        MockProgressReporter::new(),
        LicenseSetReducer::default(),
    );

    let response = use_case
        .execute(LicenseReportRequest::new("app1", "build"))
        .await
        .unwrap();

    assert_eq!(response.component_count, 5);
    let ids: Vec<&str> = response.licenses.iter().map(|l| l.license_id()).collect();
    assert_eq!(ids, vec!["Apache-2.0", "BSD-2-Clause", "MIT", "UNSPECIFIED"]);

    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("licenses.html");
    let renderer: Arc<dyn ReportRenderer> = Arc::new(HtmlReportRenderer::new().unwrap());
    let sink = SinkFactory::create(OutputMode::File(output_path.clone()), renderer);
    sink.deliver(&response.app_id, &response.licenses)
        .await
        .unwrap();

    let html = std::fs::read_to_string(&output_path).unwrap();
    assert!(html.contains("<title>Licenses for app1</title>"));
    assert_eq!(html.matches("<li>").count(), 4);
    assert!(!html.contains("Not-Supported"));
    assert!(html.contains("<footer>Created "));
}

#[tokio::test]
async fn test_identity_by_id_and_name_keeps_name_variants() {
    let report = Report::new(vec![Component::new(
        None,
        vec![
            License::new("MIT", "MIT"),
            License::new("MIT", "MIT License"),
        ],
        vec![],
    )]);

    let by_id = GenerateLicenseReportUseCase::new(
        MockReportRepository::new().with_report("app1", "build", report.clone()),
        MockProgressReporter::new(),
        LicenseSetReducer::new(LicenseIdentity::LicenseId, NoiseBlocklist::default()),
    );
    let by_id_and_name = GenerateLicenseReportUseCase::new(
        MockReportRepository::new().with_report("app1", "build", report),
        MockProgressReporter::new(),
        LicenseSetReducer::new(LicenseIdentity::LicenseIdAndName, NoiseBlocklist::default()),
    );

    let request = LicenseReportRequest::new("app1", "build");
    let first = by_id.execute(request.clone()).await.unwrap();
    let second = by_id_and_name.execute(request).await.unwrap();

    assert_eq!(first.licenses, vec![License::new("MIT", "MIT")]);
    assert_eq!(second.licenses.len(), 2);
}

#[tokio::test]
async fn test_missing_report_file_is_application_error() {
    let use_case = GenerateLicenseReportUseCase::new(
        RawReportFileReader::new(PathBuf::from("/nonexistent/raw_report.json")),
        MockProgressReporter::new(),
        LicenseSetReducer::default(),
    );

    let error = use_case
        .execute(LicenseReportRequest::new("app1", "build"))
        .await
        .unwrap_err();

    assert!(matches!(
        error.downcast_ref::<ReportError>(),
        Some(ReportError::Backend { .. })
    ));
    assert_eq!(ExitCode::for_error(&error), ExitCode::ApplicationError);
}
