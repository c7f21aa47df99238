//! Application orchestrator.
//! Loads/merges config, initializes logging, builds the transfer request and
//! runs (or, with --dry-run, plans) the relocation.

use anyhow::{Result, anyhow};
use tracing::debug;

use fastlink::cli::Args;
use fastlink::config::{ConfigLocation, config_location};
use fastlink::output as out;
use fastlink::{plan, relocate};

use crate::logging::init_tracing;

fn print_config_location(args: &Args) -> Result<()> {
    let location = config_location(args.config.as_deref())?;
    match &location {
        ConfigLocation::Flag(p) => {
            out::print_info(format!("Using --config (explicit):\n  {}", p.display()));
        }
        ConfigLocation::Env(p) => {
            out::print_info(format!("Using FASTLINK_CONFIG (explicit):\n  {}", p.display()));
            out::print_info("To override, unset FASTLINK_CONFIG or pass --config.");
        }
        ConfigLocation::Default(p) => {
            out::print_info(format!("Default fastlink config path:\n  {}", p.display()));
        }
    }
    if location.path().exists() {
        out::print_info("A config file exists at that location.");
    } else {
        out::print_info("No config file exists there yet; built-in defaults apply.");
    }
    Ok(())
}

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    if args.print_config {
        return print_config_location(&args);
    }

    let settings = args.load_settings()?;
    let cfg = settings.config;

    // Held until return so the file appender flushes.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json)?;
    if let Some(e) = &settings.skipped {
        debug!(kind = e.kind(), error = %e, "config file skipped; DESTINATION given");
    }
    debug!(?cfg, "starting fastlink");

    let source = args
        .source
        .as_deref()
        .ok_or_else(|| anyhow!("SOURCE argument is required"))?;

    let request = cfg.transfer_request(source)?;

    if cfg.dry_run {
        let p = plan(&request)?;
        out::print_plan(&request.source, &p);
        return Ok(());
    }

    let result = relocate(&request)?;
    out::print_user(out::result_line(&request.source, &result));
    Ok(())
}
