/// Filesystem adapters for reading saved reports and writing the HTML page
mod file_sink;
mod report_file_reader;

pub use file_sink::FileSink;
pub use report_file_reader::RawReportFileReader;
