//! Configuration, logging and tooling around [`magnetic_dock_core`].
mod config;
pub mod replay;
pub mod utils;

pub use config::*;

/// Serializes tests that read or change environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[must_use]
pub const fn get_help_template() -> &'static str {
    "\
{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}
"
}
