//! Command-line front end for the demo scenario.

pub mod console;
pub mod output;

pub use console::ConsoleReporter;

use crate::config::ConfigManager;
use crate::errors::{BankError, Result};
use crate::report::SilentReporter;
use crate::{scenario, utils};

pub const USAGE: &str = "\
Usage: bank_core_demo [OPTIONS]

Runs the savings/checking account walk-through.

Options:
  --json     Print the scenario results as JSON
  --plain    Print bare text without labels or colour
  -h, --help Show this message";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CliOptions {
    pub json: bool,
    pub plain: bool,
    pub help: bool,
}

impl CliOptions {
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        for arg in args {
            match arg.as_ref() {
                "--json" => options.json = true,
                "--plain" => options.plain = true,
                "-h" | "--help" => options.help = true,
                other => return Err(BankError::InvalidArgument(other.to_string())),
            }
        }
        Ok(options)
    }
}

/// Loads configuration, sets up logging and output, then runs the scenario.
pub fn run_cli<I, S>(args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let options = CliOptions::parse(args)?;
    if options.help {
        println!("{USAGE}");
        return Ok(());
    }

    let manager = ConfigManager::new();
    let config = manager.load()?;
    utils::init_tracing(&config.log_filter);
    tracing::debug!(path = %manager.path().display(), "configuration loaded");

    let mut prefs = output::OutputPreferences::from(&config);
    if options.plain {
        prefs.plain_output = true;
    }
    output::configure_color(config.ui_color_enabled, &prefs);
    output::set_preferences(prefs);

    if options.json {
        let report = scenario::run(&mut SilentReporter);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        scenario::run(&mut ConsoleReporter::new());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_flags() {
        let options = CliOptions::parse(["--json", "--plain"]).expect("valid flags");
        assert!(options.json && options.plain && !options.help);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = CliOptions::parse(["--verbose"]).expect_err("unknown flag");
        assert!(matches!(err, BankError::InvalidArgument(ref arg) if arg == "--verbose"));
    }

    #[test]
    fn empty_args_use_defaults() {
        let options = CliOptions::parse(Vec::<String>::new()).expect("no args");
        assert_eq!(options, CliOptions::default());
    }
}
