//! `webaccess-criteria` binary.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, warn};

use webaccess_cli::cli::{Cli, execute};
use webaccess_cli::config::CliConfig;
use webaccess_cli::logging::init_logging;
use webaccess_rules::localization::{current_languages, select_localizations, supports};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = CliConfig::from_env()?.apply_overrides(cli.log_level, cli.language.clone());
    init_logging(&config);

    if let Some(language) = &config.language {
        if !supports(language).wrap_err("failed to list the embedded message languages")? {
            warn!(%language, "no messages for the requested language, using English");
        }
        select_localizations(std::slice::from_ref(language))
            .wrap_err_with(|| format!("failed to load messages for {language}"))?;
        let active: Vec<String> = current_languages().iter().map(ToString::to_string).collect();
        debug!(active = %active.join(", "), "selected message languages");
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    let status = execute(&cli.command, &mut stdout.lock(), &mut stderr.lock())?;
    Ok(status.into())
}
