use anyhow::{Context, Result};
use std::process::ExitCode;

use linkfarm::host::ProcessHost;
use linkfarm::{config, shell, util};
use linkfarm_core::{BridgeOutcome, Session, terminal};

const USAGE: &str = "usage: <command that prints paths> | linkfarm";

fn main() -> ExitCode {
    util::init_tracing();

    match run() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    if !terminal::stdin_is_piped() {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    }

    let config = config::load()?;
    util::install_panic_hook(&config.resolved_temp_root(), &config.program_tag);
    let mut session = Session::from_process(&config).context("Failed to read working directory")?;
    let mut host = ProcessHost::new(std::io::stdout());

    // One thread, one task: the bridge only awaits on stdin.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build runtime")?;

    let result = runtime.block_on(async {
        let mut stdin = tokio::io::stdin();
        linkfarm_core::run(&mut stdin, &mut session, &mut host, &config).await
    });
    // A timed-out stdin read may still be parked on the blocking pool.
    runtime.shutdown_background();

    let report = match result {
        Ok(BridgeOutcome::Linked(report)) => report,
        Ok(BridgeOutcome::Empty) => {
            eprintln!("linkfarm: no paths on stdin");
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            tracing::error!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    eprintln!("linkfarm: {}", report.manifest);

    let code = match terminal::reattach_stdin() {
        Ok(()) => shell::run_shell(&session.current_path).map(|status| {
            status
                .code()
                .map_or(ExitCode::FAILURE, |c| ExitCode::from(c as u8))
        }),
        Err(e) => {
            tracing::warn!(error = %e, "no terminal to hand over to, skipping shell");
            Ok(ExitCode::SUCCESS)
        }
    };

    if let Err(e) = session.teardown() {
        tracing::warn!(error = %e, "failed to remove link directory");
    }

    code
}
