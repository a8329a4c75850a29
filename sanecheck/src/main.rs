mod check;
mod config;

use anyhow::Context;
use argh::FromArgs;
use check::check_config;
use config::Config;
use log::Level;
use sane_types::{SStatus, VersionCode};
use std::{path::PathBuf, process};
use strum::IntoEnumIterator;

#[derive(FromArgs)]
/// Check SANE device and option descriptions
struct Args {
    /// path to description file
    #[argh(option)]
    config: Option<PathBuf>,

    /// print status codes with their messages
    #[argh(switch)]
    statuses: bool,

    /// enable extra logs
    #[argh(switch)]
    verbose: bool,
}

fn main() {
    let args: Args = argh::from_env();

    simple_logger::init_with_level(if args.verbose {
        Level::Trace
    } else {
        Level::Info
    })
    .unwrap();

    hello(&args);

    if let Err(err) = init() {
        log::error!("Failed to initialize: {err:#}");
        process::exit(1);
    }

    if args.statuses {
        print_statuses();
    }

    let Some(path) = args.config else {
        if !args.statuses {
            log::error!("Nothing to do, pass --config or --statuses");
            process::exit(2);
        }
        return;
    };

    let config = match Config::read_from(&path) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to read config: {err:#}");
            process::exit(1);
        }
    };

    if args.verbose {
        log::debug!("Use config {config:#?}");
    }

    let problems = check_config(&config);
    for problem in &problems {
        log::error!("{problem:#}");
    }

    if !problems.is_empty() {
        log::error!("Found {} problems in '{}'", problems.len(), path.display());
        process::exit(1);
    }

    log::info!(
        "All {} devices in '{}' are valid",
        config.devices.len(),
        path.display()
    );
}

fn hello(args: &Args) {
    log::info!(
        "{bin} version {version}, commit {commit}, config from {config_path}, verbose {verbose}",
        bin = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        commit = env!("GIT_COMMIT_HASH"),
        config_path = args
            .config
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "nowhere".to_owned()),
        verbose = if args.verbose { "on" } else { "off" },
    );
}

fn init() -> anyhow::Result<()> {
    sane_types::init(VersionCode::current(0), None)
        .into_result()
        .context("initializing SANE types")
}

fn print_statuses() {
    for status in SStatus::iter() {
        let name: &'static str = status.into();
        println!("{code:>2} {name:<12} {message}", code = status.value(), message = status.message());
    }
}
