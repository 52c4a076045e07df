mod cli;

use cli::Args;
use iq_license_report::adapters::outbound::console::StderrProgressReporter;
use iq_license_report::adapters::outbound::filesystem::RawReportFileReader;
use iq_license_report::adapters::outbound::network::IqServerClient;
use iq_license_report::adapters::outbound::renderers::HtmlReportRenderer;
use iq_license_report::application::dto::{LicenseReportRequest, LicenseReportResponse, OutputMode};
use iq_license_report::application::factories::SinkFactory;
use iq_license_report::application::use_cases::GenerateLicenseReportUseCase;
use iq_license_report::config::{self, ConfigFile, ReportSettings};
use iq_license_report::license_report::services::LicenseSetReducer;
use iq_license_report::logging;
use iq_license_report::ports::outbound::{ReportRenderer, ReportRepository};
use iq_license_report::shared::error::{ExitCode, ReportError};
use iq_license_report::shared::Result;
use std::path::Path;
use std::process;
use std::sync::Arc;

#[actix_web::main]
async fn main() {
    // Parse command-line arguments (clap exits with code 2 on its own errors)
    let args = Args::parse_args();

    logging::init_logging();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    // Everything that can be checked locally is checked before any network activity
    validate_app_id(&args.app_id)?;
    let config = load_config(args.config.as_deref())?;
    let settings = ReportSettings::resolve(args.overrides(), config.as_ref())?;
    let output_mode = OutputMode::select(args.file.clone(), args.serve, args.host.clone())?;

    // A broken template is a startup failure
    let renderer: Arc<dyn ReportRenderer> = Arc::new(HtmlReportRenderer::new()?);

    let reducer = LicenseSetReducer::new(settings.identity, settings.blocklist.clone());
    let request = LicenseReportRequest::new(args.app_id.clone(), settings.stage.clone());

    let response = match &args.report_file {
        Some(path) => {
            let repository = RawReportFileReader::new(path.clone());
            generate(repository, reducer, request).await?
        }
        None => {
            let repository = IqServerClient::new(&settings.iq_url, args.auth.clone())?;
            generate(repository, reducer, request).await?
        }
    };

    eprintln!("{}", SinkFactory::progress_message(&output_mode));
    let is_file = matches!(output_mode, OutputMode::File(_));
    let sink = SinkFactory::create(output_mode, renderer);
    sink.deliver(&response.app_id, &response.licenses).await?;

    if is_file {
        eprintln!("✅ License report for '{}' written", response.app_id);
    }

    Ok(())
}

async fn generate<R: ReportRepository>(
    repository: R,
    reducer: LicenseSetReducer,
    request: LicenseReportRequest,
) -> Result<LicenseReportResponse> {
    let use_case =
        GenerateLicenseReportUseCase::new(repository, StderrProgressReporter::new(), reducer);
    use_case.execute(request).await
}

fn load_config(path: Option<&Path>) -> Result<Option<ConfigFile>> {
    match path {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

fn validate_app_id(app_id: &str) -> Result<()> {
    if app_id.trim().is_empty() {
        return Err(ReportError::configuration(
            "The application ID must not be empty",
            "Pass --app-id <ID> or set IQ_APP_ID",
        )
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_app_id_valid() {
        assert!(validate_app_id("bitwarden-core").is_ok());
    }

    #[test]
    fn test_validate_app_id_empty() {
        let error = validate_app_id("  ").unwrap_err();
        assert_eq!(ExitCode::for_error(&error), ExitCode::InvalidArguments);
        assert!(format!("{}", error).contains("application ID must not be empty"));
    }

    #[test]
    fn test_load_config_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.yml");
        fs::write(&config_path, "stage: release\n").unwrap();

        let config = load_config(Some(&config_path)).unwrap().unwrap();
        assert_eq!(config.stage.as_deref(), Some("release"));
    }

    #[test]
    fn test_load_config_explicit_path_missing() {
        let error = load_config(Some(Path::new("/nonexistent/custom.yml"))).unwrap_err();
        assert_eq!(ExitCode::for_error(&error), ExitCode::InvalidArguments);
    }
}
