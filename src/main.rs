//! Entry point for **workspacer**.
//!
//! Each invocation parses the command line, loads the configuration,
//! queries the window manager once and prints the result.

use clap::Parser;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use workspacer::cli::Cli;
use workspacer::config::{config_dir, Config};
use workspacer::i3::wm::I3Wm;
use workspacer::switcher::{Report, SwitcherError, Workspacer};

/// Load the config from `explicit`, or from
/// `$XDG_CONFIG_HOME/workspacer/config.json` if present.
///
/// An explicitly named file must exist.
fn load_config(explicit: Option<&Path>) -> Result<Config, SwitcherError> {
    let config = match explicit {
        Some(path) => {
            info!("loading config from {}", path.display());
            Config::load(path)?
        }
        None => {
            let path: PathBuf = config_dir().join("config.json");
            debug!("looking for config at {}", path.display());
            Config::load_or_default(&path)?
        }
    };
    Ok(config)
}

fn run(cli: &Cli) -> Result<Report, SwitcherError> {
    let config = load_config(cli.config.as_deref())?;

    let (command, range) = cli.request();

    let socket = cli.socket.as_deref().or(config.socket_path.as_deref());
    let wm = I3Wm::discover(socket).map_err(|e| SwitcherError::WindowManager(e.to_string()))?;
    debug!("using socket {}", wm.socket().display());

    Workspacer::new(wm).serve(&config, command, &range)
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let report = match run(&cli) {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if cli.json {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("failed to encode report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", report);
    }
}
