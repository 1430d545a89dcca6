use super::{Query, QueryParameters};

/// Filters for listing products.
#[derive(Clone, Debug, Default)]
pub struct ProductQuery {
    pub storefront_id: Option<String>,
}

impl Query for ProductQuery {
    fn to_params(&self) -> QueryParameters {
        let mut params = QueryParameters::new();
        params.push_non_empty("storefront_id", self.storefront_id.as_deref());
        params
    }
}

impl ProductQuery {
    /// Restricts the listing to products of one storefront.
    pub fn with_storefront_id(mut self, storefront_id: impl Into<String>) -> Self {
        self.storefront_id = Some(storefront_id.into());
        self
    }
}
