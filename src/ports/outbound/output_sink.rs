use crate::license_report::domain::License;
use crate::shared::Result;
use async_trait::async_trait;

/// OutputSink port for delivering the rendered report
///
/// A sink owns its renderer and decides when to render: once for a file,
/// once per request for the HTTP server.
#[async_trait(?Send)]
pub trait OutputSink {
    /// Delivers the license report of `app_id`
    ///
    /// For the file sink this returns once the file is written; for the HTTP
    /// sink it only returns when the server stops or fails to start.
    ///
    /// # Errors
    /// Returns an error if rendering, writing or binding fails
    async fn deliver(&self, app_id: &str, licenses: &[License]) -> Result<()>;
}
