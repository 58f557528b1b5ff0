use std::path::Path;

use anyhow::Context;

use crate::{app_config::AppConfig, profile::Profile};

pub fn init_cmd(config: &AppConfig, profile_path: &Path) -> Result<(), anyhow::Error> {
    if profile_path.exists() {
        println!("Profile already exists at {}", profile_path.display());
        return Ok(());
    }

    if let Some(parent) = profile_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let profile = Profile {
        server_url: Some(config.server_url.clone()),
        page_size: config.page_size,
    };
    profile.save(profile_path)?;

    println!("Created profile at {}", profile_path.display());
    Ok(())
}
