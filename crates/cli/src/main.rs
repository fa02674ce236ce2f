use clap::Parser;
use log::{debug, info};
use std::io::{stdin, stdout};
use std::process::ExitCode;

use disk_console_cli::cli_args::{Args, ConfirmPolicy, Provider, RunMode};
use disk_console_cli::console::{run_interactive, summary_line};
use disk_console_cli::prompt::TerminalPrompt;
use disk_console_cli::render::TerminalRenderer;
use disk_console_core::backend::{Backend, HttpBackend};
use disk_console_core::config::{self, ClientConfig, CommandEncoding};
use disk_console_core::error::Result;
use disk_console_core::file_handling;
use disk_console_core::orchestrator::Orchestrator;
use disk_console_core::prompt::{Confirm, FixedAnswer};
use disk_console_core::registry::LocalRegistry;
use disk_console_core::session::{OutputLog, Session};

/// Load the config file and apply command-line overrides
fn initialize_config(args: &Args) -> Result<ClientConfig> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{config_path}`");

    let mut client_config = config::load_config(&config_path)?;
    if let Some(server) = &args.server {
        client_config = client_config.with_server_url(server)?;
    }
    if args.json_body {
        client_config = client_config.with_command_encoding(CommandEncoding::Json);
    }

    Ok(client_config)
}

fn build_prompt(policy: ConfirmPolicy) -> Box<dyn Confirm> {
    match policy {
        ConfirmPolicy::Ask => Box::new(TerminalPrompt::stdio()),
        ConfirmPolicy::AlwaysYes => Box::new(FixedAnswer(true)),
        ConfirmPolicy::AlwaysNo => Box::new(FixedAnswer(false)),
    }
}

/// Run `batch` once and report how it went. Returns `false` if it was aborted.
fn run_once<B: Backend, C: Confirm>(orchestrator: &mut Orchestrator<'_, B, C>, batch: &str) -> bool {
    let report = orchestrator.run_batch(batch);
    let summary = summary_line(&report);
    if report.is_aborted() {
        eprintln!("{summary}");
    } else {
        info!("{summary}");
    }
    !report.is_aborted()
}

fn execute() -> Result<bool> {
    let args = Args::parse();
    let policy = args.get_confirm_policy()?;
    let client_config = initialize_config(&args)?;

    let backend = HttpBackend::new(client_config)?;
    let registry = LocalRegistry::with_builtins();
    let log = OutputLog::with_observer(Box::new(TerminalRenderer::new(stdout())));
    let session = Session::with_log(log);
    let mut orchestrator = Orchestrator::new(&registry, &backend, build_prompt(policy), session);

    match args.run_mode() {
        RunMode::Execute(text) => Ok(run_once(&mut orchestrator, &text)),
        RunMode::Script(path) => {
            let script = file_handling::read_script(&path)?;
            Ok(run_once(&mut orchestrator, &script))
        }
        RunMode::Interactive { staged_script } => {
            if let Some(path) = staged_script {
                let script = file_handling::read_script(&path)?;
                orchestrator.session_mut().stage_input(&script);
            }
            let stats = run_interactive(&mut orchestrator, &mut stdin(), &mut stdout())?;
            Ok(stats.aborted_batches == 0)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
