use anyhow::Result;
use clap::Args;
use getdpd_api::{Client, SubscriberQuery};

use crate::output::{print_response, OutputFormat};

#[derive(Args)]
pub struct SubscribersArgs {
    /// Storefront the subscribers belong to
    #[arg(long)]
    pub storefront_id: u64,

    /// Get a single subscriber by ID
    #[arg(long)]
    pub id: Option<String>,

    /// Get a single subscriber by username (mail address)
    #[arg(long)]
    pub username: Option<String>,
}

#[derive(Args)]
pub struct VerifySubscriberArgs {
    #[arg(long)]
    pub storefront_id: u64,

    /// Subscriber ID
    #[arg(long)]
    pub id: Option<String>,

    /// Subscriber username (mail address)
    #[arg(long)]
    pub username: Option<String>,
}

pub fn run(args: &SubscribersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = if args.id.is_none() && args.username.is_none() {
        client.get_subscribers(args.storefront_id)?
    } else {
        let query = build_query(args.id.as_deref(), args.username.as_deref());
        client.get_subscriber(args.storefront_id, &query)?
    };
    print_response(&resp, format)
}

pub fn run_verify(
    args: &VerifySubscriberArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let query = build_query(args.id.as_deref(), args.username.as_deref());
    let resp = client.verify_subscriber(args.storefront_id, &query)?;
    print_response(&resp, format)
}

fn build_query(id: Option<&str>, username: Option<&str>) -> SubscriberQuery {
    let mut query = SubscriberQuery::default();
    if let Some(id) = id {
        query = query.with_id(id);
    }
    if let Some(username) = username {
        query = query.with_username(username);
    }
    query
}
