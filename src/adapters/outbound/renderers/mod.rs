/// Renderer adapters turning a license set into a document
mod html_renderer;

pub use html_renderer::HtmlReportRenderer;
