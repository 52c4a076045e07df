/// LicenseReportRequest - Request DTO for the license report use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseReportRequest {
    /// Public ID of the IQ Server application
    pub app_id: String,
    /// Evaluation stage of the report (e.g. `build`, `release`)
    pub stage: String,
}

impl LicenseReportRequest {
    pub fn new(app_id: impl Into<String>, stage: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            stage: stage.into(),
        }
    }
}
