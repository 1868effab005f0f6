use std::path::Path;

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_config(args: &ConfigArgs) -> i32 {
    match run_config_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_impl(args: &ConfigArgs) -> Result<()> {
    match &args.action {
        ConfigAction::Validate { config } => {
            let loader = FileConfigLoader::new();
            loader.load_from_path(config)?;
            println!("Configuration is valid: {}", config.display());
            Ok(())
        }
        ConfigAction::Show { config } => {
            let effective = load_effective(config.as_deref())?;
            print!("{}", toml::to_string_pretty(&effective)?);
            Ok(())
        }
    }
}

fn load_effective(path: Option<&Path>) -> Result<Config> {
    let loader = FileConfigLoader::new();
    path.map_or_else(|| loader.load(), |p| loader.load_from_path(p))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
