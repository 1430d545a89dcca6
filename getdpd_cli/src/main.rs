mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use getdpd_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "getdpd")]
#[command(about = "Query storefronts, products, purchases, subscribers and customers from the DPD API")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Raw, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List storefronts or fetch one by ID
    Storefronts(commands::storefronts::StorefrontsArgs),
    /// List products or fetch one by ID
    Products(commands::products::ProductsArgs),
    /// List purchases or fetch one by ID
    Purchases(Box<commands::purchases::PurchasesArgs>),
    /// List the subscribers of a storefront or look one up
    Subscribers(commands::subscribers::SubscribersArgs),
    /// Verify that a subscriber exists on a storefront
    VerifySubscriber(commands::subscribers::VerifySubscriberArgs),
    /// List customers or fetch one by ID
    Customers(commands::customers::CustomersArgs),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("getdpd=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = cli.output;

    let client = Client::new(config::from_env()?)?;
    tracing::debug!("Using API root {}", client.base_url());

    match &cli.command {
        Commands::Storefronts(args) => commands::storefronts::run(args, &client, &format)?,
        Commands::Products(args) => commands::products::run(args, &client, &format)?,
        Commands::Purchases(args) => commands::purchases::run(args.as_ref(), &client, &format)?,
        Commands::Subscribers(args) => commands::subscribers::run(args, &client, &format)?,
        Commands::VerifySubscriber(args) => {
            commands::subscribers::run_verify(args, &client, &format)?
        }
        Commands::Customers(args) => commands::customers::run(args, &client, &format)?,
    }

    Ok(())
}
