use crate::adapters::outbound::filesystem::FileSink;
use crate::adapters::outbound::server::ServerSink;
use crate::application::dto::OutputMode;
use crate::ports::outbound::{OutputSink, ReportRenderer};
use std::sync::Arc;

/// Factory for creating output sinks
///
/// This factory selects the sink adapter for an [`OutputMode`] and hands it
/// the renderer built at startup, so every sink renders through the same
/// compiled template.
pub struct SinkFactory;

impl SinkFactory {
    /// Creates a sink for the specified output mode
    ///
    /// # Arguments
    /// * `mode` - Where the report goes (file or HTTP server)
    /// * `renderer` - Renderer shared with the sink
    ///
    /// # Examples
    /// ```
    /// use iq_license_report::adapters::outbound::renderers::HtmlReportRenderer;
    /// use iq_license_report::application::dto::OutputMode;
    /// use iq_license_report::application::factories::SinkFactory;
    /// use std::path::PathBuf;
    /// use std::sync::Arc;
    ///
    /// let renderer = Arc::new(HtmlReportRenderer::new().unwrap());
    /// let sink = SinkFactory::create(OutputMode::File(PathBuf::from("licenses.html")), renderer);
    /// ```
    pub fn create(mode: OutputMode, renderer: Arc<dyn ReportRenderer>) -> Box<dyn OutputSink> {
        match mode {
            OutputMode::File(path) => Box::new(FileSink::new(path, renderer)),
            OutputMode::Serve { host, port } => Box::new(ServerSink::new(host, port, renderer)),
        }
    }

    /// Returns the progress message for the specified output mode
    pub fn progress_message(mode: &OutputMode) -> String {
        match mode {
            OutputMode::File(_) => format!("📝 Writing HTML report to {}...", mode.describe()),
            OutputMode::Serve { .. } => format!("🌐 Serving HTML report on {}", mode.describe()),
        }
    }
}
