use std::str::FromStr;

use super::{Filter, FilterSet, Query, QueryParameters};

/// Filters accepted by the purchases listing, in precedence order.
///
/// Only one filter is sent per request: the first non-empty one in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PurchaseFilter {
    Status,
    ProductId,
    StorefrontId,
    CustomerId,
    SubscriberId,
    CustomerEmail,
    CustomerFirstName,
    CustomerLastName,
    DateMin,
    DateMax,
    Total,
    TotalOp,
    Ship,
}

impl PurchaseFilter {
    /// Every filter, highest precedence first.
    pub const ALL: [PurchaseFilter; 13] = [
        PurchaseFilter::Status,
        PurchaseFilter::ProductId,
        PurchaseFilter::StorefrontId,
        PurchaseFilter::CustomerId,
        PurchaseFilter::SubscriberId,
        PurchaseFilter::CustomerEmail,
        PurchaseFilter::CustomerFirstName,
        PurchaseFilter::CustomerLastName,
        PurchaseFilter::DateMin,
        PurchaseFilter::DateMax,
        PurchaseFilter::Total,
        PurchaseFilter::TotalOp,
        PurchaseFilter::Ship,
    ];
}

impl Filter for PurchaseFilter {
    fn param_name(self) -> &'static str {
        match self {
            PurchaseFilter::Status => "status",
            PurchaseFilter::ProductId => "product_id",
            PurchaseFilter::StorefrontId => "storefront_id",
            PurchaseFilter::CustomerId => "customer_id",
            PurchaseFilter::SubscriberId => "subscriber_id",
            PurchaseFilter::CustomerEmail => "customer_email",
            PurchaseFilter::CustomerFirstName => "customer_first_name",
            PurchaseFilter::CustomerLastName => "customer_last_name",
            PurchaseFilter::DateMin => "date_min",
            PurchaseFilter::DateMax => "date_max",
            PurchaseFilter::Total => "total",
            PurchaseFilter::TotalOp => "total_op",
            PurchaseFilter::Ship => "ship",
        }
    }
}

impl std::fmt::Display for PurchaseFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.param_name())
    }
}

impl FromStr for PurchaseFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PurchaseFilter::ALL
            .into_iter()
            .find(|filter| filter.param_name() == s)
            .ok_or(())
    }
}

/// Filters for listing purchases.
#[derive(Clone, Debug, Default)]
pub struct PurchaseQuery {
    pub filters: FilterSet<PurchaseFilter>,
}

impl Query for PurchaseQuery {
    fn to_params(&self) -> QueryParameters {
        self.filters.to_params()
    }
}

impl PurchaseQuery {
    pub fn with_filter(mut self, filter: PurchaseFilter, value: impl Into<String>) -> Self {
        self.filters.set(filter, value);
        self
    }

    /// Purchase status, e.g. `paid` or `refunded`.
    pub fn with_status(self, status: impl Into<String>) -> Self {
        self.with_filter(PurchaseFilter::Status, status)
    }

    pub fn with_product_id(self, product_id: impl Into<String>) -> Self {
        self.with_filter(PurchaseFilter::ProductId, product_id)
    }

    pub fn with_storefront_id(self, storefront_id: impl Into<String>) -> Self {
        self.with_filter(PurchaseFilter::StorefrontId, storefront_id)
    }

    pub fn with_customer_id(self, customer_id: impl Into<String>) -> Self {
        self.with_filter(PurchaseFilter::CustomerId, customer_id)
    }

    pub fn with_subscriber_id(self, subscriber_id: impl Into<String>) -> Self {
        self.with_filter(PurchaseFilter::SubscriberId, subscriber_id)
    }

    pub fn with_customer_email(self, email: impl Into<String>) -> Self {
        self.with_filter(PurchaseFilter::CustomerEmail, email)
    }

    pub fn with_customer_first_name(self, first_name: impl Into<String>) -> Self {
        self.with_filter(PurchaseFilter::CustomerFirstName, first_name)
    }

    pub fn with_customer_last_name(self, last_name: impl Into<String>) -> Self {
        self.with_filter(PurchaseFilter::CustomerLastName, last_name)
    }

    pub fn with_date_min(self, date_min: impl Into<String>) -> Self {
        self.with_filter(PurchaseFilter::DateMin, date_min)
    }

    pub fn with_date_max(self, date_max: impl Into<String>) -> Self {
        self.with_filter(PurchaseFilter::DateMax, date_max)
    }

    pub fn with_total(self, total: impl Into<String>) -> Self {
        self.with_filter(PurchaseFilter::Total, total)
    }

    /// Comparison operator applied to `total`.
    pub fn with_total_op(self, total_op: impl Into<String>) -> Self {
        self.with_filter(PurchaseFilter::TotalOp, total_op)
    }

    pub fn with_ship(self, ship: impl Into<String>) -> Self {
        self.with_filter(PurchaseFilter::Ship, ship)
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn status_wins_over_product_id() {
        let params = PurchaseQuery::default()
            .with_product_id("5")
            .with_status("paid")
            .to_params();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("status"), Some("paid"));
        assert_eq!(params.get("product_id"), None);
    }

    #[test]
    fn lowest_precedence_alone_is_sent() {
        let params = PurchaseQuery::default().with_ship("1").to_params();
        assert_eq!(params.get("ship"), Some("1"));
    }

    #[test]
    fn empty_higher_filter_falls_through() {
        let params = PurchaseQuery::default()
            .with_status("")
            .with_customer_email("a@b.com")
            .to_params();
        assert_eq!(params.get("customer_email"), Some("a@b.com"));
    }

    #[test]
    fn precedence_matches_declaration_order() {
        for pair in PurchaseFilter::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn filter_names_round_trip() {
        assert_eq!("total_op".parse::<PurchaseFilter>(), Ok(PurchaseFilter::TotalOp));
        assert_eq!(PurchaseFilter::CustomerFirstName.to_string(), "customer_first_name");
        assert!("nope".parse::<PurchaseFilter>().is_err());
    }

    #[test]
    fn renders_url() {
        let url = Url::parse("https://api.getdpd.com/v2/purchases").unwrap();
        insta::assert_snapshot!(
            PurchaseQuery::default()
                .with_date_max("2024-01-31")
                .with_date_min("2024-01-01")
                .add_to_url(&url)
                .as_str(),
            @"https://api.getdpd.com/v2/purchases?date_min=2024-01-01"
        );
    }
}
