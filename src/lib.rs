//! iq-license-report - License report generator for Nexus IQ applications
//!
//! This library fetches the raw policy report of an application from IQ
//! Server, reduces every declared and observed license to a sorted set of
//! distinct, informative licenses, and renders that set as an HTML page
//! written to a file or served over HTTP. It follows hexagonal architecture
//! and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_report`): Licenses, the identity policy, the
//!   noise blocklist and the reducer
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): IQ Server client, report file reader, HTML
//!   renderer, file and HTTP sinks
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use iq_license_report::prelude::*;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<()> {
//! let repository = RawReportFileReader::new(PathBuf::from("raw-report.json"));
//! let use_case = GenerateLicenseReportUseCase::new(
//!     repository,
//!     StderrProgressReporter::new(),
//!     LicenseSetReducer::default(),
//! );
//!
//! let response = use_case
//!     .execute(LicenseReportRequest::new("app1", "build"))
//!     .await?;
//!
//! let renderer: Arc<dyn ReportRenderer> = Arc::new(HtmlReportRenderer::new()?);
//! let sink = SinkFactory::create(OutputMode::File(PathBuf::from("licenses.html")), renderer);
//! sink.deliver(&response.app_id, &response.licenses).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_report;
pub mod logging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSink, RawReportFileReader};
    pub use crate::adapters::outbound::network::{IqCredentials, IqServerClient};
    pub use crate::adapters::outbound::renderers::HtmlReportRenderer;
    pub use crate::adapters::outbound::server::ServerSink;
    pub use crate::application::dto::{LicenseReportRequest, LicenseReportResponse, OutputMode};
    pub use crate::application::factories::SinkFactory;
    pub use crate::application::use_cases::GenerateLicenseReportUseCase;
    pub use crate::license_report::domain::{Component, License, Report};
    pub use crate::license_report::policies::{LicenseIdentity, NoiseBlocklist};
    pub use crate::license_report::services::LicenseSetReducer;
    pub use crate::ports::outbound::{
        OutputSink, ProgressReporter, ReportRenderer, ReportRepository,
    };
    pub use crate::shared::error::{ExitCode, ReportError};
    pub use crate::shared::Result;
}
