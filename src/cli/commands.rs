//! Command execution: token, dispatch, one request, print.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument, warn};

use crate::application::services::TokenService;
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::{global_config_path, Settings};
use crate::domain::{dispatch, Dispatch, Platform, COMMANDS};
use crate::infrastructure::di::ServiceContainer;

/// Entry point used by `main`: loads settings, wires real services, runs.
pub fn execute_command(cli: &Cli, platform: Platform) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut out);
        return Ok(());
    }

    let settings = Settings::load()?.with_overrides(cli.host.clone(), cli.port);
    debug!("settings: {:?}", settings);

    if cli.show_config {
        if let Some(path) = global_config_path() {
            output::line(&mut out, &format!("# {}", path.display()))?;
        }
        output::line(&mut out, &settings.to_toml()?)?;
        return Ok(());
    }

    let container = ServiceContainer::new(settings, platform)?;
    run(cli, &container, &mut out)
}

/// Resolve the token, dispatch `cli.argv`, and write the result to `out`.
///
/// Usage mistakes and unknown commands are written to `out` and return `Ok`.
#[instrument(skip_all, fields(argv = ?cli.argv))]
pub fn run(cli: &Cli, container: &ServiceContainer, out: &mut dyn Write) -> CliResult<()> {
    let source = TokenService::select_source(
        cli.authtoken.as_deref(),
        cli.authtoken_path.as_deref(),
        container.settings.authtoken_path.as_deref(),
        container.platform,
    );
    let token = container.token_service().resolve(&source)?;

    match dispatch(&cli.argv) {
        Dispatch::Request(op) => {
            let doc = container.controller_service(token).execute(&op)?;
            output::json(out, &doc)?;
        }
        Dispatch::Usage(usage) => {
            debug!("run: wrong argument count");
            output::line(out, usage)?;
        }
        Dispatch::Unknown(cmd) => {
            warn!("run: unknown command {:?}", cmd);
            output::line(out, &format!("Unknown command: {cmd}"))?;
            output::line(
                out,
                &format!("Available commands: {}", COMMANDS.join(", ")),
            )?;
            output::line(out, &Cli::command().render_long_help())?;
        }
    }
    Ok(())
}
