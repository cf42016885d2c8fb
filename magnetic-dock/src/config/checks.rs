use super::Config;
use std::collections::HashSet;
use tracing_subscriber::EnvFilter;

impl Config {
    /// Run every check, returning true if the configuration is usable.
    pub fn check(&self, verbose: bool) -> bool {
        let distance = self.check_adsorb_distance(verbose);
        let title_bar = self.check_title_bar_height(verbose);
        let positions = self.check_positions(verbose);
        let log_level = self.check_log_level(verbose);
        distance && title_bar && positions && log_level
    }

    pub fn check_adsorb_distance(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking adsorb_distance: {}", self.adsorb_distance);
        }
        if self.adsorb_distance.is_finite() && self.adsorb_distance > 0.0 {
            return true;
        }
        println!("adsorb_distance must be a positive number, the child would never dock.");
        false
    }

    pub fn check_title_bar_height(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking title_bar_height: {}", self.title_bar_height);
        }
        if self.title_bar_height.is_finite() && self.title_bar_height >= 0.0 {
            return true;
        }
        println!("title_bar_height must not be negative.");
        false
    }

    /// Duplicates are harmless but almost certainly a typo. An empty list
    /// is valid and disables docking.
    pub fn check_positions(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking positions: {:?}", self.positions);
        }
        if self.positions.is_empty() {
            println!("No dock positions are enabled, the child window will never dock.");
        }
        let mut seen = HashSet::new();
        let duplicates: Vec<_> = self
            .positions
            .iter()
            .filter(|position| !seen.insert(**position))
            .collect();
        if duplicates.is_empty() {
            return true;
        }
        for position in duplicates {
            println!("Dock position {position} is listed more than once.");
        }
        false
    }

    pub fn check_log_level(&self, verbose: bool) -> bool {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => {
                if verbose {
                    println!("Log level is ok.");
                }
                true
            }
            Err(err) => {
                println!("Log level is invalid: {err}");
                false
            }
        }
    }
}
