use crate::application::dto::{LicenseReportRequest, LicenseReportResponse};
use crate::license_report::services::LicenseSetReducer;
use crate::ports::outbound::{ProgressReporter, ReportRepository};
use crate::shared::Result;

/// GenerateLicenseReportUseCase - Core use case for the license report
///
/// Fetches the report of an application once, and reduces it to the license
/// set every sink renders from. A fetch failure is returned before any sink
/// is started.
///
/// # Type Parameters
/// * `RREPO` - ReportRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateLicenseReportUseCase<RREPO, PR> {
    report_repository: RREPO,
    progress_reporter: PR,
    reducer: LicenseSetReducer,
}

impl<RREPO, PR> GenerateLicenseReportUseCase<RREPO, PR>
where
    RREPO: ReportRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateLicenseReportUseCase with injected dependencies
    pub fn new(
        report_repository: RREPO,
        progress_reporter: PR,
        reducer: LicenseSetReducer,
    ) -> Self {
        Self {
            report_repository,
            progress_reporter,
            reducer,
        }
    }

    /// Executes the license report use case
    ///
    /// # Arguments
    /// * `request` - Application ID and stage of the report
    ///
    /// # Returns
    /// LicenseReportResponse with the reduced license set
    pub async fn execute(&self, request: LicenseReportRequest) -> Result<LicenseReportResponse> {
        self.progress_reporter.report_waiting(&format!(
            "Fetching the '{}' report of '{}'...",
            request.stage, request.app_id
        ));

        let report = match self
            .report_repository
            .fetch_report(&request.app_id, &request.stage)
            .await
        {
            Ok(report) => report,
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Could not fetch the report");
                return Err(e);
            }
        };

        self.progress_reporter.report(&format!(
            "📖 Report contains {} component(s)",
            report.components().len()
        ));

        let licenses = self.reducer.reduce(&report);
        tracing::debug!(
            identity = %self.reducer.identity(),
            blocklist = self.reducer.blocklist().len(),
            licenses = licenses.len(),
            "reduced report"
        );

        self.progress_reporter
            .report_completion(&format!("✅ Found {} distinct license(s)", licenses.len()));

        Ok(LicenseReportResponse::new(
            request.app_id,
            request.stage,
            report.components().len(),
            licenses,
        ))
    }
}
