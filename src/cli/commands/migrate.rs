use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::{open_store, OutputFormat};
use crate::config::AppConfig;

pub async fn handle(config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    open_store(config).await?;
    output_success(
        &output_format,
        &format!("Migrations applied to {}", config.database.url),
        Some(json!({ "database": config.database.url })),
    )
}
