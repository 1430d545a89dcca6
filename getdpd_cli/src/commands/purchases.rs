use anyhow::Result;
use clap::Args;
use getdpd_api::{Client, PurchaseFilter, PurchaseQuery};

use crate::output::{print_response, OutputFormat};

/// Only one filter reaches the API; when several are given, the first in
/// this order wins: status, product, storefront, customer, subscriber,
/// customer email/first/last name, dates, total, total-op, ship.
#[derive(Args)]
pub struct PurchasesArgs {
    /// Get a single purchase by ID
    #[arg(long)]
    pub id: Option<u64>,

    /// Filter by status (e.g. paid, refunded)
    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub product_id: Option<String>,

    #[arg(long)]
    pub storefront_id: Option<String>,

    #[arg(long)]
    pub customer_id: Option<String>,

    #[arg(long)]
    pub subscriber_id: Option<String>,

    #[arg(long)]
    pub customer_email: Option<String>,

    #[arg(long)]
    pub customer_first_name: Option<String>,

    #[arg(long)]
    pub customer_last_name: Option<String>,

    /// Earliest purchase date
    #[arg(long)]
    pub date_min: Option<String>,

    /// Latest purchase date
    #[arg(long)]
    pub date_max: Option<String>,

    #[arg(long)]
    pub total: Option<String>,

    /// Comparison operator applied to --total
    #[arg(long)]
    pub total_op: Option<String>,

    #[arg(long)]
    pub ship: Option<String>,
}

pub fn run(args: &PurchasesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = match args.id {
        Some(id) => client.get_purchase(id)?,
        None => client.get_purchases(&build_query(args))?,
    };
    print_response(&resp, format)
}

fn build_query(args: &PurchasesArgs) -> PurchaseQuery {
    let filters = [
        (PurchaseFilter::Status, &args.status),
        (PurchaseFilter::ProductId, &args.product_id),
        (PurchaseFilter::StorefrontId, &args.storefront_id),
        (PurchaseFilter::CustomerId, &args.customer_id),
        (PurchaseFilter::SubscriberId, &args.subscriber_id),
        (PurchaseFilter::CustomerEmail, &args.customer_email),
        (PurchaseFilter::CustomerFirstName, &args.customer_first_name),
        (PurchaseFilter::CustomerLastName, &args.customer_last_name),
        (PurchaseFilter::DateMin, &args.date_min),
        (PurchaseFilter::DateMax, &args.date_max),
        (PurchaseFilter::Total, &args.total),
        (PurchaseFilter::TotalOp, &args.total_op),
        (PurchaseFilter::Ship, &args.ship),
    ];
    filters
        .into_iter()
        .fold(PurchaseQuery::default(), |query, (filter, value)| match value {
            Some(value) => query.with_filter(filter, value),
            None => query,
        })
}
