use anyhow::bail;

use crate::auth::{password::verify_password, TokenKeys};
use crate::cli::{open_store, OutputFormat};
use crate::config::AppConfig;

pub async fn handle(
    config: &AppConfig,
    username: &str,
    password: &str,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let store = open_store(config).await?;

    let user = match store.find_user_by_username(username).await? {
        Some(user) if user.is_active && verify_password(password, &user.password_hash) => user,
        _ => bail!("No active account found with the given credentials"),
    };

    let pair = TokenKeys::new(&config.security)?.issue_pair(&user)?;

    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pair)?),
        OutputFormat::Text => {
            println!("access:  {}", pair.access);
            println!("refresh: {}", pair.refresh);
        }
    }
    Ok(())
}
