use storefront_core::{cursor, FilterRequest};

use crate::{
    args::ProductsArgs, formatters::ProductsFormatter, session_file::SessionFile,
    web_client::ApiClient,
};

use super::handle_unauthorized;

pub fn products_cmd(
    client: &ApiClient,
    session: &SessionFile,
    args: ProductsArgs,
    default_page_size: Option<i64>,
) -> Result<(), anyhow::Error> {
    let page = if args.all {
        handle_unauthorized(client.products(), session)?
    } else {
        let filters = build_filter_request(&args, default_page_size);
        handle_unauthorized(client.filter_products(&filters), session)?
    };

    let mut formatter = ProductsFormatter::new(args.output);
    formatter
        .print_page(&page)
        .map_err(|e| anyhow::anyhow!("Error while formatting products: {}", e))?;

    Ok(())
}

fn build_filter_request(args: &ProductsArgs, default_page_size: Option<i64>) -> FilterRequest {
    FilterRequest {
        name: args.name.clone(),
        sort_by: args.sort_by.map(Into::into).unwrap_or_default(),
        availability: args.availability.map(Into::into).unwrap_or_default(),
        max_price: args.max_price,
        cursor: args
            .cursor
            .clone()
            .or_else(|| args.page.map(|page| cursor::encode(page as usize))),
        page_size: args.page_size.or(default_page_size),
    }
}
