use crate::license_report::domain::License;

/// LicenseReportResponse - Response DTO of the license report use case
///
/// Carries everything a sink needs to deliver the page, plus counts for
/// progress output.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseReportResponse {
    pub app_id: String,
    pub stage: String,
    /// Number of components in the fetched report
    pub component_count: usize,
    /// Distinct, noise-filtered licenses sorted by license ID
    pub licenses: Vec<License>,
}

impl LicenseReportResponse {
    pub fn new(
        app_id: String,
        stage: String,
        component_count: usize,
        licenses: Vec<License>,
    ) -> Self {
        Self {
            app_id,
            stage,
            component_count,
            licenses,
        }
    }
}
