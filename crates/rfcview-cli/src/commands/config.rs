//! `rfcview config` subcommands

use clap::{Args, Subcommand, ValueEnum};

use crate::config::{config_file_path, Config};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Keys accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigKey {
    #[value(name = "index_path")]
    IndexPath,
    #[value(name = "rankdir")]
    Rankdir,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::IndexPath => "index_path",
            ConfigKey::Rankdir => "rankdir",
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print one setting
    Get {
        #[arg(value_enum)]
        key: ConfigKey,
    },
    /// Store one setting
    Set {
        #[arg(value_enum)]
        key: ConfigKey,
        value: String,
    },
    /// Remove one setting, restoring its default
    Unset {
        #[arg(value_enum)]
        key: ConfigKey,
    },
    /// Print every setting
    List,
    /// Print where settings are stored
    Path,
    /// Write an empty settings file
    Init {
        /// Replace the file if present
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &ConfigArgs) -> anyhow::Result<()> {
    let path = config_file_path();

    match &args.command {
        ConfigCommands::Get { key } => println!("{}", describe(&Config::load(), *key)),
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load();
            config.set(key.as_str(), value)?;
            config.save()?;
            tracing::info!("Stored {} in {:?}", key.as_str(), path);
            println!("{} = {}", key.as_str(), describe(&config, *key));
        }
        ConfigCommands::Unset { key } => {
            let mut config = Config::load();
            match key {
                ConfigKey::IndexPath => config.index_path = None,
                ConfigKey::Rankdir => config.rankdir = None,
            }
            config.save()?;
            println!("{} cleared", key.as_str());
        }
        ConfigCommands::List => {
            let config = Config::load();
            let state = if path.exists() { "" } else { " (missing, using defaults)" };
            println!("# {}{}", path.display(), state);
            for key in ConfigKey::value_variants() {
                println!("{} = {}", key.as_str(), describe(&config, *key));
            }
        }
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!("{} exists; pass --force to replace it", path.display());
            }
            Config::default().save()?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn describe(config: &Config, key: ConfigKey) -> String {
    config
        .get(key.as_str())
        .unwrap_or_else(|| "(not set)".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_config() {
        let names: Vec<&str> = ConfigKey::value_variants().iter().map(|k| k.as_str()).collect();
        assert_eq!(names, Config::keys());
    }

    #[test]
    fn test_describe_unset() {
        let mut config = Config::default();
        assert_eq!(describe(&config, ConfigKey::Rankdir), "(not set)");

        config.set("rankdir", "rl").unwrap();
        assert_eq!(describe(&config, ConfigKey::Rankdir), "RL");
    }
}
