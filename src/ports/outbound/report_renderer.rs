use crate::license_report::domain::License;
use crate::shared::Result;

/// ReportRenderer port for turning a license set into a document
///
/// Implementations must be safe to call concurrently: the HTTP sink renders
/// once per request from several workers.
pub trait ReportRenderer: Send + Sync {
    /// Renders the license report of an application
    ///
    /// # Errors
    /// Returns an error if the template cannot be applied
    fn render(&self, app_id: &str, licenses: &[License]) -> Result<String>;
}
