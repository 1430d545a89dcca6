use anyhow::Result;
use clap::Args;
use getdpd_api::Client;

use crate::output::{print_response, OutputFormat};

#[derive(Args)]
pub struct StorefrontsArgs {
    /// Get a single storefront by ID
    #[arg(long)]
    pub id: Option<u64>,
}

pub fn run(args: &StorefrontsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = match args.id {
        Some(id) => client.get_storefront(id)?,
        None => client.get_storefronts()?,
    };
    print_response(&resp, format)
}
