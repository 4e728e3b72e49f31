pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::database::{self, Store};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio CLI - administration for the portfolio API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Apply pending database migrations")]
    Migrate,

    #[command(about = "Create an account that can obtain API tokens")]
    CreateUser {
        #[arg(help = "Username")]
        username: String,
        #[arg(long, help = "Password (read from stdin if not provided)")]
        password: Option<String>,
        #[arg(long, help = "Create the account disabled")]
        inactive: bool,
    },

    #[command(about = "Issue an access/refresh token pair without going through HTTP")]
    Token {
        #[arg(help = "Username")]
        username: String,
        #[arg(long, help = "Password")]
        password: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let config = crate::config::config();

    match cli.command {
        Commands::Migrate => commands::migrate::handle(config, output_format).await,
        Commands::CreateUser {
            username,
            password,
            inactive,
        } => commands::user::handle(config, &username, password, !inactive, output_format).await,
        Commands::Token { username, password } => {
            commands::token::handle(config, &username, &password, output_format).await
        }
    }
}

/// Open the configured database with migrations applied.
pub(crate) async fn open_store(config: &AppConfig) -> anyhow::Result<Store> {
    let store = database::connect(&config.database).await?;
    store.migrate().await?;
    Ok(store)
}
