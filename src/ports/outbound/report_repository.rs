use crate::license_report::domain::Report;
use crate::shared::Result;
use async_trait::async_trait;

/// ReportRepository port for fetching application reports
///
/// This port abstracts the policy-management backend (IQ Server, or a raw
/// report saved on disk) that the license report is built from.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Fetches the raw report of an application at a given stage
    ///
    /// # Arguments
    /// * `app_id` - Public ID of the application
    /// * `stage` - Evaluation stage (e.g. `build`, `release`)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The application or a report for the stage does not exist
    /// - The backend cannot be reached or rejects the credentials
    /// - The response cannot be parsed
    async fn fetch_report(&self, app_id: &str, stage: &str) -> Result<Report>;
}
