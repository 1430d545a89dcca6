use std::str::FromStr;

use super::{Filter, FilterSet, Query, QueryParameters};

/// Filters accepted by the customers listing, in precedence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CustomerFilter {
    Email,
    FirstName,
    LastName,
    ProductId,
    ReceivesNewsletters,
    DateMin,
    DateMax,
}

impl CustomerFilter {
    /// Every filter, highest precedence first.
    pub const ALL: [CustomerFilter; 7] = [
        CustomerFilter::Email,
        CustomerFilter::FirstName,
        CustomerFilter::LastName,
        CustomerFilter::ProductId,
        CustomerFilter::ReceivesNewsletters,
        CustomerFilter::DateMin,
        CustomerFilter::DateMax,
    ];
}

impl Filter for CustomerFilter {
    fn param_name(self) -> &'static str {
        match self {
            CustomerFilter::Email => "email",
            CustomerFilter::FirstName => "first_name",
            CustomerFilter::LastName => "last_name",
            CustomerFilter::ProductId => "product_id",
            CustomerFilter::ReceivesNewsletters => "receives_newsletters",
            CustomerFilter::DateMin => "date_min",
            CustomerFilter::DateMax => "date_max",
        }
    }
}

impl std::fmt::Display for CustomerFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.param_name())
    }
}

impl FromStr for CustomerFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CustomerFilter::ALL
            .into_iter()
            .find(|filter| filter.param_name() == s)
            .ok_or(())
    }
}

/// Filters for listing customers. Only the highest-precedence non-empty
/// filter is sent.
#[derive(Clone, Debug, Default)]
pub struct CustomerQuery {
    pub filters: FilterSet<CustomerFilter>,
}

impl Query for CustomerQuery {
    fn to_params(&self) -> QueryParameters {
        self.filters.to_params()
    }
}

impl CustomerQuery {
    pub fn with_filter(mut self, filter: CustomerFilter, value: impl Into<String>) -> Self {
        self.filters.set(filter, value);
        self
    }

    pub fn with_email(self, email: impl Into<String>) -> Self {
        self.with_filter(CustomerFilter::Email, email)
    }

    pub fn with_first_name(self, first_name: impl Into<String>) -> Self {
        self.with_filter(CustomerFilter::FirstName, first_name)
    }

    pub fn with_last_name(self, last_name: impl Into<String>) -> Self {
        self.with_filter(CustomerFilter::LastName, last_name)
    }

    pub fn with_product_id(self, product_id: impl Into<String>) -> Self {
        self.with_filter(CustomerFilter::ProductId, product_id)
    }

    pub fn with_receives_newsletters(self, receives: impl Into<String>) -> Self {
        self.with_filter(CustomerFilter::ReceivesNewsletters, receives)
    }

    pub fn with_date_min(self, date_min: impl Into<String>) -> Self {
        self.with_filter(CustomerFilter::DateMin, date_min)
    }

    pub fn with_date_max(self, date_max: impl Into<String>) -> Self {
        self.with_filter(CustomerFilter::DateMax, date_max)
    }
}
