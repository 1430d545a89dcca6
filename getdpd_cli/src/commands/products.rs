use anyhow::Result;
use clap::Args;
use getdpd_api::{Client, ProductQuery};

use crate::output::{print_response, OutputFormat};

#[derive(Args)]
pub struct ProductsArgs {
    /// Get a single product by ID
    #[arg(long)]
    pub id: Option<u64>,

    /// Only list products of this storefront
    #[arg(long)]
    pub storefront_id: Option<String>,
}

pub fn run(args: &ProductsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = match args.id {
        Some(id) => client.get_product(id)?,
        None => client.get_products(&build_query(args))?,
    };
    print_response(&resp, format)
}

fn build_query(args: &ProductsArgs) -> ProductQuery {
    let mut query = ProductQuery::default();
    if let Some(storefront_id) = &args.storefront_id {
        query = query.with_storefront_id(storefront_id);
    }
    query
}
