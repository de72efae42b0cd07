//! CLI entrypoint for apisnap
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use apisnap_application::{
    ExportApiUseCase, NoProgress, RunTasksOutput, RunTasksUseCase, TaskProgressNotifier,
};
use apisnap_domain::{ApiSnapshotPlugin, ApiTasks, OutputFormat, TaskName};
use apisnap_infrastructure::{
    CommandApiExtractor, ConfigLoader, FileConfig, LocalSnapshotFiles, Severity,
};
use apisnap_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter, SimpleProgress};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("Starting apisnap");

    let config = load_config(&cli)?;

    // === Dependency Injection ===
    let project = config
        .project
        .to_project()
        .context("invalid [project] configuration")?;
    let settings = config.api.to_settings(&project);
    let tasks = ApiSnapshotPlugin::apply(&project, settings);

    let files = Arc::new(LocalSnapshotFiles::new());
    let extractor = Arc::new(
        CommandApiExtractor::new(&config.api.extractor).with_args(&config.api.extractor_args),
    );

    let requested = match &cli.command {
        Command::Config => {
            ConfigLoader::print_config_sources(cli.config.as_ref());
            println!();
            println!(
                "{}",
                ConsoleFormatter::format_request_options(&config.request.to_request_options())
            );
            println!("Released API: {}", tasks.settings().api_file().display());
            return Ok(());
        }
        Command::Tasks => {
            print!("{}", ConsoleFormatter::format_tasks(&tasks));
            return Ok(());
        }
        Command::Export { no_deps: true } => {
            let output = ExportApiUseCase::new(files)
                .execute(tasks.export())
                .await?;
            let run = RunTasksOutput {
                executed: vec![TaskName::ExportApi],
                export: Some(output),
                ..Default::default()
            };
            print_run(&run, cli.output);
            return Ok(());
        }
        Command::Build => vec![TaskName::BuildApi],
        Command::Export { no_deps: false } => vec![TaskName::ExportApi],
        Command::Check => vec![TaskName::CheckApi],
        Command::Run { tasks: names } => names
            .iter()
            .map(|n| n.parse::<TaskName>())
            .collect::<Result<Vec<_>, _>>()?,
    };

    let use_case = RunTasksUseCase::new(extractor, files.clone(), files);
    let output = run_tasks(&use_case, &tasks, &requested, &cli).await?;

    print_run(&output, cli.output);

    if let Some(check) = &output.check
        && !check.is_compatible()
    {
        bail!(
            "public API differs from {}",
            check.baseline.display()
        );
    }

    Ok(())
}

/// Load configuration and apply command-line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {e}"))?
    };

    if let Some(dir) = &cli.project_dir {
        config.project.project_dir = Some(dir.clone());
    }
    if let Some(version) = &cli.project_version {
        config.project.version = version.clone();
    }
    if let Some(api_file) = &cli.api_file {
        config.api.api_file = Some(api_file.clone());
    }

    let mut errors = Vec::new();
    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => errors.push(issue.message),
        }
    }
    if !errors.is_empty() {
        bail!("invalid configuration:\n  {}", errors.join("\n  "));
    }

    Ok(config)
}

async fn run_tasks(
    use_case: &RunTasksUseCase,
    tasks: &ApiTasks,
    requested: &[TaskName],
    cli: &Cli,
) -> Result<RunTasksOutput> {
    let progress: Box<dyn TaskProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    Ok(use_case
        .execute_with_progress(tasks, requested, progress.as_ref())
        .await?)
}

fn print_run(output: &RunTasksOutput, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", ConsoleFormatter::format_run(output)),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(output)),
    }
}
