/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod license_report_request;
mod license_report_response;
mod output_mode;

pub use license_report_request::LicenseReportRequest;
pub use license_report_response::LicenseReportResponse;
pub use output_mode::OutputMode;
