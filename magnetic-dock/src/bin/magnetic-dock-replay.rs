use anyhow::{Context, Result};
use clap::{Command, arg, command, value_parser};
use magnetic_dock::replay::{Scenario, replay};
use magnetic_dock::utils::log::setup_logging;
use magnetic_dock_core::DockPosition;
use std::path::PathBuf;

fn cli() -> Command {
    command!("magnetic-dock-replay")
        .about("Replays a scripted docking session and prints what the child window does")
        .help_template(magnetic_dock::get_help_template())
        .args(&[
            arg!(-c --config <FILE> "Configuration file to use instead of the XDG config file."),
            arg!(-p --positions <POSITIONS> "Comma separated dock positions, overrides the config.")
                .value_delimiter(',')
                .value_parser(value_parser!(DockPosition)),
            arg!(-l --"log-level" <LEVEL> "Log filter, overrides the config."),
            arg!(<SCENARIO> "Scenario file to replay."),
        ])
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => magnetic_dock::load_from_path(&PathBuf::from(path))
            .with_context(|| format!("Cannot load config {path}"))?,
        None => magnetic_dock::load(),
    };
    if let Some(positions) = matches.get_many::<DockPosition>("positions") {
        config.positions = positions.copied().collect();
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.log_level.clone_from(level);
    }
    let _log_guard = setup_logging(&config.log_level);

    let scenario_path = matches
        .get_one::<String>("SCENARIO")
        .map(PathBuf::from)
        .context("No scenario given")?;
    let scenario = Scenario::load(&scenario_path)
        .with_context(|| format!("Cannot load scenario {}", scenario_path.display()))?;

    for report in replay(&scenario, config)? {
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}
