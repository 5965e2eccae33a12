use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::config::ServerConfig;

pub fn check_config(config_file: Option<&Path>) -> Result<()> {
    let config = ServerConfig::load(config_file)?;

    println!("bind_address         = {}", config.bind_address);
    println!("static_dir           = {}", config.static_dir.display());
    println!("index_file           = {}", config.index_file);
    println!("request_timeout_secs = {}", config.request_timeout_secs);

    config.validate()?;
    info!("Configuration OK, serving {}", config.index_path().display());
    Ok(())
}
