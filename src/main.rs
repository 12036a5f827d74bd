use clap::{CommandFactory, Parser};
use std::io;
use std::process::ExitCode;

use devjump::cli::Cli;
use devjump::config::Config;
use devjump::error::Result;
use devjump::selector::{Resolution, SelectOptions, Selector};
use devjump::sink::SelectionSink;
use devjump::{scanner, shell, status};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);
    tracing::debug!(?cli, "parsed arguments");

    if let Some(shell_kind) = cli.completions {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell_kind, &mut command, name, &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    if let Some(wrapper_shell) = cli.init {
        print!("{}", shell::wrapper_script(wrapper_shell));
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        // Resolved or listed without committing.
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Scan, resolve, commit. Returns whether a selection was committed.
fn run(cli: &Cli) -> Result<bool> {
    let sink = SelectionSink::from_env();

    if cli.previous {
        let path = sink.previous()?;
        tracing::debug!(path = %path.display(), "reusing previous selection");
        return Ok(true);
    }

    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(?config, "loaded configuration");

    let roots = config.roots()?;
    let kinds = config.vcs_kinds()?;

    let mut projects: Vec<_> = scanner::scan(&roots, &kinds)?.into_iter().collect();

    if cli.status {
        for project in &mut projects {
            let state = status::status_of(project.path(), project.vcs());
            project.set_status(state);
        }
    }

    let options = SelectOptions {
        list_only: cli.list,
        color_status: cli.status,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let selector = Selector::new(stdin.lock(), stdout.lock(), options);

    match selector.resolve(projects, &cli.pattern)? {
        Resolution::Chosen(project) => sink.commit(&project, cli.list),
        Resolution::Listed => Ok(false),
    }
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("devjump={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}
