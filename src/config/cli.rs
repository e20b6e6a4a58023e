use crate::config::toml_config::{LogFormat, TomlConfig};
use crate::config::Settings;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vaxnotify")]
#[command(about = "Subscribe a device for vaccine slot notifications")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Backend base URL")]
    pub base_url: Option<String>,

    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Send one subscription request to the backend
    Subscribe {
        #[arg(long, allow_hyphen_values = true)]
        pincode: String,

        #[arg(long, allow_negative_numbers = true)]
        age: i64,

        #[arg(long, help = "Push registration token of this device")]
        token: String,
    },
    /// Log background messages read as JSON lines from stdin or a file
    Listen {
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

impl CliConfig {
    /// Loads the configuration file, if any, and applies command-line
    /// overrides on top.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        let mut settings = Settings::from_toml(file);

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(format) = self.log_format {
            settings.log_format = format;
        }
        settings.verbose |= self.verbose;

        Ok(settings)
    }
}
