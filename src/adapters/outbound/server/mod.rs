/// HTTP adapters serving the report
mod http_sink;

pub use http_sink::{configure, ReportPage, ServerSink};
