use std::io::{self, BufRead};

use anyhow::{bail, Context};
use serde_json::json;

use crate::auth::password::hash_password;
use crate::cli::utils::output_success;
use crate::cli::{open_store, OutputFormat};
use crate::config::AppConfig;

pub async fn handle(
    config: &AppConfig,
    username: &str,
    password: Option<String>,
    is_active: bool,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    if username.trim().is_empty() {
        bail!("username may not be blank");
    }

    let password = match password {
        Some(password) => password,
        None => read_password()?,
    };
    if password.is_empty() {
        bail!("password may not be empty");
    }

    let store = open_store(config).await?;
    let user = store
        .insert_user(username, &hash_password(&password), is_active)
        .await
        .with_context(|| format!("could not create user {}", username))?;

    output_success(
        &output_format,
        &format!("Created user {} (id {})", user.username, user.id),
        Some(json!({
            "id": user.id,
            "username": user.username,
            "is_active": user.is_active,
        })),
    )
}

fn read_password() -> anyhow::Result<String> {
    eprint!("Password: ");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
