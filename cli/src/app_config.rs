use std::path::Path;

use serde::Serialize;

use crate::{
    args::ConfigArgs,
    profile::{default_session_path, Profile},
};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Serialize)]
pub struct AppConfig {
    pub profile_path: String,
    pub profile_exists: bool,
    pub server_url: String,
    pub session_file: String,
    pub page_size: Option<i64>,
}

impl AppConfig {
    /// Command line and environment win over the profile, the profile over defaults
    pub fn from_args(args: ConfigArgs, profile_path: &Path, profile: Option<&Profile>) -> Self {
        let server_url = args
            .server_url
            .or_else(|| profile.and_then(|p| p.server_url.clone()))
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let session_file = args
            .session_file
            .unwrap_or_else(|| default_session_path().to_string_lossy().into_owned());

        AppConfig {
            profile_path: profile_path.to_string_lossy().into_owned(),
            profile_exists: profile.is_some(),
            server_url,
            session_file,
            page_size: profile.and_then(|p| p.page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(server_url: Option<&str>) -> ConfigArgs {
        ConfigArgs {
            profile_path: None,
            server_url: server_url.map(|s| s.to_string()),
            session_file: Some("/tmp/storefront-session".to_string()),
        }
    }

    #[test]
    fn test_defaults_without_profile() {
        let config = AppConfig::from_args(args(None), Path::new("/tmp/profile.toml"), None);

        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert!(!config.profile_exists);
        assert_eq!(config.page_size, None);
    }

    #[test]
    fn test_args_override_profile() {
        let profile = Profile {
            server_url: Some("http://profile:1".to_string()),
            page_size: Some(6),
        };

        let from_profile =
            AppConfig::from_args(args(None), Path::new("/tmp/p.toml"), Some(&profile));
        assert_eq!(from_profile.server_url, "http://profile:1");
        assert_eq!(from_profile.page_size, Some(6));

        let from_args = AppConfig::from_args(
            args(Some("http://args:2")),
            Path::new("/tmp/p.toml"),
            Some(&profile),
        );
        assert_eq!(from_args.server_url, "http://args:2");
    }
}
