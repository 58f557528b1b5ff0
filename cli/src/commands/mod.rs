use crate::{session_file::SessionFile, web_client::FetchError};

pub mod account;
pub mod config;
pub mod init;
pub mod login;
pub mod products;

/// Forget the saved session when the server rejects it; the caller has to log in again.
fn handle_unauthorized<T>(
    result: Result<T, FetchError>,
    session: &SessionFile,
) -> anyhow::Result<T> {
    match result {
        Err(FetchError::Unauthorized(message)) => {
            session.clear()?;
            anyhow::bail!("{}. Run `storefront login` to start a new session.", message)
        }
        other => Ok(other?),
    }
}
