use anyhow::Result;
use clap::Args;
use getdpd_api::{Client, CustomerFilter, CustomerQuery};

use crate::output::{print_response, OutputFormat};

#[derive(Args)]
pub struct CustomersArgs {
    /// Get a single customer by ID
    #[arg(long)]
    pub id: Option<u64>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    /// Customers who bought this product
    #[arg(long)]
    pub product_id: Option<String>,

    #[arg(long)]
    pub receives_newsletters: Option<String>,

    #[arg(long)]
    pub date_min: Option<String>,

    #[arg(long)]
    pub date_max: Option<String>,
}

pub fn run(args: &CustomersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = match args.id {
        Some(id) => client.get_customer(id)?,
        None => client.get_customers(&build_query(args))?,
    };
    print_response(&resp, format)
}

fn build_query(args: &CustomersArgs) -> CustomerQuery {
    let filters = [
        (CustomerFilter::Email, &args.email),
        (CustomerFilter::FirstName, &args.first_name),
        (CustomerFilter::LastName, &args.last_name),
        (CustomerFilter::ProductId, &args.product_id),
        (CustomerFilter::ReceivesNewsletters, &args.receives_newsletters),
        (CustomerFilter::DateMin, &args.date_min),
        (CustomerFilter::DateMax, &args.date_max),
    ];
    filters
        .into_iter()
        .fold(CustomerQuery::default(), |query, (filter, value)| match value {
            Some(value) => query.with_filter(filter, value),
            None => query,
        })
}
