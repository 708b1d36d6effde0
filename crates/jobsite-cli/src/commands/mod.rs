//! CLI command definitions and dispatch.

pub mod config;
pub mod migrate;
pub mod pin;
pub mod routes;
pub mod token;

use clap::{Parser, Subcommand};

use jobsite_core::config::AppConfig;
use jobsite_core::error::AppError;

use crate::output::OutputFormat;

/// JobSite Gateway operator tools
#[derive(Debug, Parser)]
#[command(name = "jobsite-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Hash a PIN for a stored credential
    HashPin(pin::HashPinArgs),
    /// Verify and decode a session token
    InspectToken(token::InspectTokenArgs),
    /// Validate configuration, including the signing secret
    CheckConfig,
    /// List every route with its enforcement class
    Routes,
    /// Apply pending PostgreSQL migrations
    Migrate,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::HashPin(args) => pin::execute(args, self.format),
            Commands::InspectToken(args) => token::execute(args, &self.config, self.format),
            Commands::CheckConfig => config::execute(&self.config, self.format),
            Commands::Routes => routes::execute(self.format),
            Commands::Migrate => migrate::execute(&self.config).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_from(config_path)
}
