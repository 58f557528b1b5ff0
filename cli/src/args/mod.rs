use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use storefront_core::{Availability, SortBy};

#[derive(Parser, Debug)]
#[command(
    name = "storefront",
    version,
    about,
    long_about = "Command line client for the storefront admin API"
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Args, Serialize)]
pub struct ConfigArgs {
    /// Path to profile configuration file
    #[arg(long, short, env = "STOREFRONT_PROFILE")]
    pub profile_path: Option<String>,

    /// Base URL of the storefront server
    #[arg(long, env = "STOREFRONT_URL")]
    pub server_url: Option<String>,

    /// Where the session cookie is kept between runs
    #[arg(long, env = "STOREFRONT_SESSION_FILE")]
    pub session_file: Option<String>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Prints out current configuration
    Config,
    /// Writes a profile with the current settings
    Init,
    /// Starts a session
    Login(LoginArgs),
    /// Ends the current session
    Logout,
    /// Shows the logged in account
    Account(AccountArgs),
    /// Lists and filters products
    Products(ProductsArgs),
}

#[derive(Debug, Args, PartialEq)]
pub struct LoginArgs {
    #[arg(long, short)]
    pub username: String,
    #[arg(long, short, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Plain,
    Json,
}

#[derive(Debug, Args, PartialEq)]
pub struct AccountArgs {
    /// Output format (pretty, plain, or json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum SortArg {
    /// Keep catalog order
    None,
    Name,
    Price,
}

impl From<SortArg> for SortBy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::None => SortBy::None,
            SortArg::Name => SortBy::Name,
            SortArg::Price => SortBy::Price,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum AvailabilityArg {
    All,
    InStock,
    ArrivingSoon,
}

impl From<AvailabilityArg> for Availability {
    fn from(arg: AvailabilityArg) -> Self {
        match arg {
            AvailabilityArg::All => Availability::All,
            AvailabilityArg::InStock => Availability::InStock,
            AvailabilityArg::ArrivingSoon => Availability::ArrivingSoon,
        }
    }
}

#[derive(Debug, Args, PartialEq)]
pub struct ProductsArgs {
    /// Fetch the whole catalog in one response, ignoring filters
    #[arg(long, conflicts_with_all = ["name", "sort_by", "availability", "max_price", "page_size", "cursor", "page"])]
    pub all: bool,

    /// Search term matched against name and description
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, value_enum)]
    pub sort_by: Option<SortArg>,

    #[arg(long, value_enum)]
    pub availability: Option<AvailabilityArg>,

    /// Only products at or below this price
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Products per page (default 12)
    #[arg(long, short = 'l')]
    pub page_size: Option<i64>,

    /// Page token printed by a previous call
    #[arg(long)]
    pub cursor: Option<String>,

    /// Jump straight to a page (1-based)
    #[arg(long, conflicts_with = "cursor", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Output format (pretty, plain, or json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,
}
