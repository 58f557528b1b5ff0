use crate::{
    args::AccountArgs, formatters::print_account, session_file::SessionFile,
    web_client::ApiClient,
};

use super::handle_unauthorized;

pub fn account_cmd(
    client: &ApiClient,
    session: &SessionFile,
    args: AccountArgs,
) -> Result<(), anyhow::Error> {
    let account = handle_unauthorized(client.account(), session)?;
    print_account(&account, args.output)?;

    Ok(())
}
