#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated config/data directories for one CLI run
pub struct TestContext {
    pub temp_dir: TempDir,
    pub session_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let session_path = temp_dir.path().join("data").join("storefront").join("session");

        Self {
            temp_dir,
            session_path,
        }
    }

    pub fn profile_path(&self) -> PathBuf {
        self.temp_dir
            .path()
            .join("config")
            .join("storefront")
            .join("profile.toml")
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("storefront").unwrap();
        cmd.env("XDG_CONFIG_HOME", self.temp_dir.path().join("config"))
            .env("XDG_DATA_HOME", self.temp_dir.path().join("data"))
            .env_remove("STOREFRONT_URL")
            .env_remove("STOREFRONT_PROFILE")
            .env_remove("STOREFRONT_SESSION_FILE")
            .env_remove("STOREFRONT_PASSWORD");
        cmd
    }
}
