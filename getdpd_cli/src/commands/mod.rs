//! CLI subcommand implementations.

pub mod customers;
pub mod products;
pub mod purchases;
pub mod storefronts;
pub mod subscribers;
