/// Outbound ports (Driven ports) - Infrastructure interfaces
pub mod output_sink;
pub mod progress_reporter;
pub mod report_renderer;
pub mod report_repository;

pub use output_sink::OutputSink;
pub use progress_reporter::ProgressReporter;
pub use report_renderer::ReportRenderer;
pub use report_repository::ReportRepository;
