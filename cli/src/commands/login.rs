use crate::{
    args::LoginArgs,
    session_file::SessionFile,
    web_client::{ApiClient, FetchError},
};

pub fn login_cmd(
    client: &ApiClient,
    session: &SessionFile,
    args: LoginArgs,
) -> Result<(), anyhow::Error> {
    match client.login(&args.username, &args.password) {
        Ok(token) => {
            session.save(&token)?;
            println!("User successfully logged in.");
            Ok(())
        }
        Err(FetchError::Unauthorized(message)) => {
            // The server ended whatever session we had
            session.clear()?;
            anyhow::bail!("Login failed: {}", message)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn logout_cmd(client: &ApiClient, session: &SessionFile) -> Result<(), anyhow::Error> {
    let result = client.logout();
    session.clear()?;
    result?;

    println!("Logged out.");
    Ok(())
}
