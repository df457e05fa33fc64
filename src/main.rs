mod cli;
mod config;

use anyhow::Context;
use clap::Parser;
use cli::{Args, Command};
use config::Settings;
use sentinel_scan::adapters::outbound::console::StderrProgressReporter;
use sentinel_scan::adapters::outbound::filesystem::FileSystemSourceReader;
use sentinel_scan::adapters::outbound::network::HttpScanClient;
use sentinel_scan::application::dto::{OutputFormat, RepositoryScanRequest, UploadRequest};
use sentinel_scan::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use sentinel_scan::application::read_models::{ReportReadModelBuilder, ReportView};
use sentinel_scan::application::use_cases::{
    BrowseReportsUseCase, ScanFilesUseCase, ScanRepositoryUseCase,
};
use sentinel_scan::shared::error::ExitCode;
use sentinel_scan::shared::Result;
use std::io::IsTerminal;
use std::process;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are reported through clap errors too
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments.as_i32()
            } else {
                ExitCode::Success.as_i32()
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    init_logging(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let current_dir = std::env::current_dir().context("Failed to determine current directory")?;
    let config_file = config::load_config(args.config.as_deref(), &current_dir)?;
    let settings = Settings::resolve(&args, config_file.as_ref());
    log::debug!("effective settings: {:?}", settings);

    let presenter_type = PresenterType::from_output(args.output.clone());
    let colored = FormatterFactory::supports_color(settings.format)
        && presenter_type.is_terminal_candidate()
        && !args.no_color
        && std::io::stdout().is_terminal();
    let formatter = FormatterFactory::create(settings.format, colored);

    // Keep stderr clean when JSON is piped to another tool
    let progress_reporter = if settings.format == OutputFormat::Json {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    let scan_service = HttpScanClient::new(&settings.server_url, settings.timeout)?;
    let server_url = scan_service.base_url().to_string();

    let mut exit_code = ExitCode::Success;
    let rendered = match args.command {
        Command::Upload { paths } => {
            let use_case =
                ScanFilesUseCase::new(FileSystemSourceReader::new(), scan_service, progress_reporter);
            let report = use_case.execute(UploadRequest::new(paths)).await?;
            let view = ReportReadModelBuilder::build_report(&report, settings.severity);
            exit_code = findings_exit_code(&view, &settings);
            formatter.format_report(&view)?
        }
        Command::Repo { url } => {
            let use_case = ScanRepositoryUseCase::new(scan_service, progress_reporter);
            let report = use_case.execute(RepositoryScanRequest::new(url)).await?;
            let view = ReportReadModelBuilder::build_report(&report, settings.severity);
            exit_code = findings_exit_code(&view, &settings);
            formatter.format_report(&view)?
        }
        Command::Show { scan_id } => {
            let use_case = BrowseReportsUseCase::new(scan_service, progress_reporter);
            let report = use_case.show(&scan_id).await?;
            let view = ReportReadModelBuilder::build_report(&report, settings.severity);
            exit_code = findings_exit_code(&view, &settings);
            formatter.format_report(&view)?
        }
        Command::History => {
            let use_case = BrowseReportsUseCase::new(scan_service, progress_reporter);
            let reports = use_case.history().await?;
            formatter.format_history(&ReportReadModelBuilder::build_history(&reports))?
        }
        Command::Health => {
            let use_case = BrowseReportsUseCase::new(scan_service, progress_reporter);
            let health = use_case.health().await?;
            if !health.is_ok() {
                anyhow::bail!(
                    "Service at {} reported status '{}'\n\n💡 Hint: Check the service logs.",
                    server_url,
                    health.status
                );
            }
            format!("✅ Service at {} is healthy ({})\n", server_url, health.status)
        }
    };

    PresenterFactory::create(presenter_type).present(&rendered)?;

    if exit_code == ExitCode::FindingsDetected {
        eprintln!("⚠️  Findings at or above the --fail-on level were reported");
    }
    Ok(exit_code)
}

fn findings_exit_code(view: &ReportView, settings: &Settings) -> ExitCode {
    match &settings.fail_on {
        Some(threshold) if view.findings.has_rows_meeting(threshold) => ExitCode::FindingsDetected,
        _ => ExitCode::Success,
    }
}
