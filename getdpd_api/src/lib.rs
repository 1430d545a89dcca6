//! Blocking client for the DPD (getdpd.com) REST API: storefronts, products,
//! purchases, subscribers and customers.
//!
//! Every call sends one request authenticated with HTTP basic auth and
//! returns the raw body of a `200 OK`, or a typed [`Error`] classified from
//! the response status.

mod client;
mod config;
mod errors;
mod query;
mod resources;
mod response;

pub use self::client::{diagnostic_log, Client};
pub use self::config::{ClientConfig, API_VERSION, BASE_URL, DEFAULT_LANGUAGE};
pub use self::errors::{classify, Error, ErrorKind};
pub use self::query::{
    CustomerFilter, CustomerQuery, Filter, FilterSet, ProductQuery, PurchaseFilter, PurchaseQuery,
    Query, QueryParameters, SubscriberQuery, SubscriberTarget,
};
pub use self::response::ApiResponse;
pub use reqwest::Method;
