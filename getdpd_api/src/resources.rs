//! One method per DPD resource. Each builds a path and parameters and hands
//! them to [`Client::get`].

use crate::{
    query::{
        CustomerQuery, ProductQuery, PurchaseQuery, Query, QueryParameters, SubscriberQuery,
        SubscriberTarget,
    },
    ApiResponse, Client, Error,
};

const DOT_SEGMENT_ID: &str = "a subscriber id cannot be \".\" or \"..\"";

impl Client {
    /// Lists all storefronts of the account.
    pub fn get_storefronts(&self) -> Result<ApiResponse, Error> {
        self.get("storefronts", &QueryParameters::new())
    }

    /// Fetches a single storefront by its numeric ID.
    pub fn get_storefront(&self, storefront_id: u64) -> Result<ApiResponse, Error> {
        self.get(&format!("storefronts/{}", storefront_id), &QueryParameters::new())
    }

    /// Lists products, optionally restricted to one storefront.
    pub fn get_products(&self, query: &ProductQuery) -> Result<ApiResponse, Error> {
        self.get("products", &query.to_params())
    }

    /// Fetches a single product by its numeric ID.
    pub fn get_product(&self, product_id: u64) -> Result<ApiResponse, Error> {
        self.get(&format!("products/{}", product_id), &QueryParameters::new())
    }

    /// Lists purchases. Only the highest-precedence filter of `query` is sent.
    pub fn get_purchases(&self, query: &PurchaseQuery) -> Result<ApiResponse, Error> {
        self.get("purchases", &query.to_params())
    }

    /// Fetches a single purchase by its numeric ID.
    pub fn get_purchase(&self, purchase_id: u64) -> Result<ApiResponse, Error> {
        self.get(&format!("purchases/{}", purchase_id), &QueryParameters::new())
    }

    /// Lists the subscribers of a storefront.
    pub fn get_subscribers(&self, storefront_id: u64) -> Result<ApiResponse, Error> {
        self.get(
            &format!("storefronts/{}/subscribers", storefront_id),
            &QueryParameters::new(),
        )
    }

    /// Fetches one subscriber, either by id (`subscribers/{id}`) or by
    /// username (`subscribers?username=...`).
    ///
    /// The id is sent as a single percent-encoded path segment, so it can
    /// never address anything outside `storefronts/{sid}/subscribers/`.
    pub fn get_subscriber(
        &self,
        storefront_id: u64,
        query: &SubscriberQuery,
    ) -> Result<ApiResponse, Error> {
        let base = format!("storefronts/{}/subscribers", storefront_id);
        match query.target()? {
            SubscriberTarget::Id(id) => {
                if matches!(id, "." | "..") {
                    tracing::error!("Rejected subscriber id {:?}", id);
                    return Err(Error::InvalidArgument(DOT_SEGMENT_ID));
                }
                let storefront = storefront_id.to_string();
                self.get_segments(
                    &["storefronts", storefront.as_str(), "subscribers", id],
                    &QueryParameters::new(),
                )
            }
            SubscriberTarget::Username(username) => {
                self.get(&base, &QueryParameters::new().with("username", username))
            }
        }
    }

    /// Checks whether a subscriber exists on a storefront.
    pub fn verify_subscriber(
        &self,
        storefront_id: u64,
        query: &SubscriberQuery,
    ) -> Result<ApiResponse, Error> {
        let params = query.verify_params()?;
        self.get(
            &format!("storefronts/{}/subscribers/verify", storefront_id),
            &params,
        )
    }

    /// Lists customers. Only the highest-precedence filter of `query` is sent.
    pub fn get_customers(&self, query: &CustomerQuery) -> Result<ApiResponse, Error> {
        self.get("customers", &query.to_params())
    }

    /// Fetches a single customer by its numeric ID.
    pub fn get_customer(&self, customer_id: u64) -> Result<ApiResponse, Error> {
        self.get(&format!("customers/{}", customer_id), &QueryParameters::new())
    }
}
