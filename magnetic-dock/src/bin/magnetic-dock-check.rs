use anyhow::Result;
use clap::{arg, command};
use magnetic_dock::Config;
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = command!("magnetic-dock-check")
        .about("Checks syntax of the configuration file")
        .help_template(magnetic_dock::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config file otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(PathBuf::from);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m magnetic-dock version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    match check_config_file(config_file, verbose) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            println!("\x1b[0;94m::\x1b[0m Checking values . . .");
            if config.check(verbose) {
                println!("\x1b[0;92m    -> Configuration is valid \x1b[0m");
            } else {
                println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m Configuration has problems, see above \x1b[0m");
                std::process::exit(1);
            }
        }
        Err(e) => {
            println!("Configuration failed. Reason: {e:?}");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn check_config_file(path: Option<PathBuf>, verbose: bool) -> Result<Config> {
    let path = match path {
        Some(path) => {
            println!("\x1b[1;35mNote: Using file {} \x1b[0m", path.display());
            path
        }
        None => magnetic_dock::default_path()?,
    };
    if verbose {
        dbg!(&path);
    }
    if !path.exists() {
        println!("\x1b[1;93mWARN: {} does not exist, checking the defaults.\x1b[0m", path.display());
        return Ok(Config::default());
    }
    magnetic_dock::load_from_path(&path)
}
