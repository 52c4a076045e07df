use clap::Parser;
use std::path::PathBuf;

use iq_license_report::adapters::outbound::network::IqCredentials;
use iq_license_report::config::SettingsOverrides;
use iq_license_report::license_report::policies::LicenseIdentity;

/// Render the licenses of a Nexus IQ application as an HTML page
#[derive(Parser, Debug)]
#[command(name = "iq-license-report")]
#[command(version)]
#[command(
    about = "Render the licenses of a Nexus IQ application as an HTML page",
    long_about = None
)]
pub struct Args {
    /// IQ Server base URL [default: http://localhost:8070]
    #[arg(long = "iq", env = "IQ_SERVER_URL", value_name = "URL")]
    pub iq_url: Option<String>,

    /// IQ Server credentials
    #[arg(
        long,
        env = "IQ_AUTH",
        value_name = "USER:PASSWORD",
        default_value = "admin:admin123",
        hide_env_values = true
    )]
    pub auth: IqCredentials,

    /// Public ID of the application
    #[arg(long = "app-id", env = "IQ_APP_ID", value_name = "ID")]
    pub app_id: String,

    /// Evaluation stage of the report [default: build]
    #[arg(long, value_name = "STAGE")]
    pub stage: Option<String>,

    /// Write the HTML page to this file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Serve the HTML page over HTTP on this port
    #[arg(long, value_name = "PORT")]
    pub serve: Option<u16>,

    /// Address the HTTP server binds to [default: 0.0.0.0]
    #[arg(long, value_name = "ADDR")]
    pub host: Option<String>,

    /// Read the raw report from this JSON file instead of IQ Server
    #[arg(long = "report-file", value_name = "PATH")]
    pub report_file: Option<PathBuf>,

    /// How license records are told apart: license-id or license-id-and-name
    #[arg(long, value_name = "IDENTITY")]
    pub identity: Option<LicenseIdentity>,

    /// License ID to hide from the report (replaces the default list).
    /// Can be specified multiple times: --blocklist UNKNOWN --blocklist Not-Declared
    #[arg(long = "blocklist", value_name = "LICENSE_ID")]
    pub blocklist: Vec<String>,

    /// Only hide 'Not-Supported' licenses
    #[arg(long = "minimal-blocklist", conflicts_with = "blocklist")]
    pub minimal_blocklist: bool,

    /// Path to a config file [default: ./iq-license-report.config.yml if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Settings given on the command line, to be merged with the config file
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            iq_url: self.iq_url.clone(),
            stage: self.stage.clone(),
            identity: self.identity,
            blocklist: self.blocklist.clone(),
            minimal_blocklist: self.minimal_blocklist,
        }
    }
}
