use clap::Parser;
use sbom_cli::adapters::inbound::CommandRouter;
use sbom_cli::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
use sbom_cli::adapters::outbound::filesystem::{JsonFileStore, DEFAULT_SBOM_FILE};
use sbom_cli::cli::{render_usage, Args};
use sbom_cli::config::{self, ConfigFile};
use sbom_cli::ports::outbound::ProgressReporter;
use sbom_cli::shared::error::ExitCode;
use sbom_cli::shared::Result;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version come through here as well
            let printed = e.print();
            process::exit(parse_exit_code(&e, printed).as_i32());
        }
    };

    let command_name = args.command.name();

    if let Err(e) = run(args) {
        eprintln!("{}", render_usage(Some(command_name)).trim_end());
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::Failure.as_i32());
    }
}

/// Help and version output succeed only if they were actually written;
/// argument errors always fail.
fn parse_exit_code(e: &clap::Error, printed: io::Result<()>) -> ExitCode {
    match printed {
        Ok(()) if !e.use_stderr() => ExitCode::Success,
        _ => ExitCode::Failure,
    }
}

fn run(args: Args) -> Result<()> {
    let (config, config_source) = match args.config.as_deref() {
        Some(path) => (
            config::load_config_from_path(path)?,
            Some(path.to_path_buf()),
        ),
        None => match config::discover_config(Path::new("."))? {
            Some(config) => (config, Some(PathBuf::from(config::CONFIG_FILENAME))),
            None => (ConfigFile::default(), None),
        },
    };

    let settings = Settings::resolve(&args, &config);

    let store = JsonFileStore::new(settings.file);
    let progress_reporter = StderrProgressReporter::verbose(settings.verbose);
    if let Some(source) = config_source {
        progress_reporter.report(&format!("📋 Using config file: {}", source.display()));
    }
    for key in config.unknown_keys() {
        progress_reporter.report_error(&format!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        ));
    }
    let presenter = StdoutPresenter::new();

    CommandRouter::new(store, progress_reporter, presenter).route(args.command)
}

/// Effective settings after merging the command line over the config file
#[derive(Debug, PartialEq)]
struct Settings {
    file: PathBuf,
    verbose: bool,
}

impl Settings {
    fn resolve(args: &Args, config: &ConfigFile) -> Self {
        let file = args
            .file
            .clone()
            .or_else(|| config.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SBOM_FILE));
        let verbose = args.verbose || config.verbose.unwrap_or(false);

        Self { file, verbose }
    }
}
