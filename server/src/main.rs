#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
#![warn(clippy::expect_used)]

use auth::AdminAccount;
use config::ServerConfig;
use errors::ApplicationError;
use router::setup_router;
use state::AppState;
use storefront_core::Catalog;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod auth;
mod config;
mod errors;
mod model;
mod router;
mod session;
mod state;

#[cfg(test)]
mod test;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    if let Err(e) = run().await {
        // Print the error using Display
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run() -> Result<(), ApplicationError> {
    setup_tracing();

    let config = ServerConfig::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => {
            info!("Loading catalog from {:?}", path);
            Catalog::from_path(path)?
        }
        None => Catalog::builtin()?,
    };
    info!("Catalog ready with {} products", catalog.len());

    let admin = AdminAccount::new(
        &config.admin_username,
        &config.admin_password,
        &config.admin_name,
    )?;

    if !config.secure_cookies {
        info!("Session cookies are not marked Secure; set STOREFRONT_SECURE_COOKIES behind HTTPS");
    }

    let app = setup_router(AppState::new(catalog, admin), config.secure_cookies);

    let address = config.address();
    info!("Starting server on {}", address);

    let listener = TcpListener::bind(address)
        .await
        .map_err(ApplicationError::from)?;

    info!(
        "Listening on: {}",
        listener.local_addr().map_err(ApplicationError::from)?
    );

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ApplicationError::CannotServe)?;
    Ok(())
}

fn setup_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{crate_name}=debug,tower_http=debug",
                    crate_name = env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
