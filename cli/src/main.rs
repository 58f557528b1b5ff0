#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
#![warn(clippy::expect_used)]

use std::path::Path;

use crate::app_config::AppConfig;
use args::{CliArgs, Command};
use clap::Parser;
use commands::{
    account::account_cmd,
    config::config_cmd,
    init::init_cmd,
    login::{login_cmd, logout_cmd},
    products::products_cmd,
};
use profile::{get_profile_path, Profile};
use session_file::SessionFile;
use web_client::ApiClient;

mod app_config;
mod args;
mod commands;
mod formatters;
mod profile;
mod session_file;
mod web_client;

#[cfg(test)]
mod test;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let profile_path = get_profile_path(&args.config.profile_path);

    if let Some(command) = args.command {
        let profile = Profile::from_path(&profile_path)?;
        let config = AppConfig::from_args(args.config, &profile_path, profile.as_ref());

        match command {
            Command::Config => config_cmd(config)?,
            Command::Init => init_cmd(&config, &profile_path)?,
            Command::Login(login_args) => {
                let (client, session) = connect(&config)?;
                login_cmd(&client, &session, login_args)?
            }
            Command::Logout => {
                let (client, session) = connect(&config)?;
                logout_cmd(&client, &session)?
            }
            Command::Account(account_args) => {
                let (client, session) = connect(&config)?;
                account_cmd(&client, &session, account_args)?
            }
            Command::Products(products_args) => {
                let (client, session) = connect(&config)?;
                products_cmd(&client, &session, products_args, config.page_size)?
            }
        }
    }

    Ok(())
}

fn connect(config: &AppConfig) -> anyhow::Result<(ApiClient, SessionFile)> {
    let session = SessionFile::new(Path::new(&config.session_file));
    let client = ApiClient::new(&config.server_url, session.load()?)?;

    Ok((client, session))
}
