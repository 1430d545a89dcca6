//! Shared query infrastructure: [`QueryParameters`], the [`Query`] trait and
//! the single-filter precedence engine [`FilterSet`].

use std::collections::BTreeMap;

use url::Url;

/// Trait implemented by all query builders.
pub trait Query {
    /// Renders the builder into the parameters sent with the request.
    fn to_params(&self) -> QueryParameters;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        self.to_params().add_to_url(url)
    }
}

/// Ordered query string parameters for a single request.
///
/// Only non-empty values are ever stored; an empty set means the request is
/// sent without a query string at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParameters {
    pairs: Vec<(String, String)>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name=value` unless the value is absent or empty.
    pub fn push_non_empty(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.pairs.push((name.to_string(), value.to_string()));
        }
    }

    /// Builder form of [`QueryParameters::push_non_empty`].
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.push_non_empty(name, Some(value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns the first value recorded for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Appends the parameters to the URL. An empty set leaves the URL untouched,
    /// so no bare `?` is produced.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if self.is_empty() {
            return url;
        }
        {
            let mut query = url.query_pairs_mut();
            for (name, value) in self.iter() {
                query.append_pair(name, value);
            }
        }
        url
    }
}

/// A filter that participates in single-filter precedence.
///
/// The `Ord` implementation is the precedence: the smallest filter wins.
/// Deriving `Ord` on a fieldless enum makes declaration order the precedence.
pub trait Filter: Copy + Ord + std::fmt::Debug {
    /// Query parameter name sent for this filter.
    fn param_name(self) -> &'static str;
}

/// A set of optional filters of which only the highest-precedence non-empty
/// one is sent.
///
/// The DPD list endpoints accept one filter per request. When callers set
/// several, the lower-precedence ones are dropped and logged at debug level.
#[derive(Clone, Debug)]
pub struct FilterSet<F: Filter> {
    values: BTreeMap<F, String>,
}

impl<F: Filter> Default for FilterSet<F> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<F: Filter> FilterSet<F> {
    /// Sets (or replaces) the value for `filter`.
    pub fn set(&mut self, filter: F, value: impl Into<String>) {
        self.values.insert(filter, value.into());
    }

    pub fn get(&self, filter: F) -> Option<&str> {
        self.values.get(&filter).map(String::as_str)
    }

    /// The highest-precedence filter with a non-empty value.
    pub fn first_present(&self) -> Option<(F, &str)> {
        self.values
            .iter()
            .find(|(_, value)| !value.is_empty())
            .map(|(filter, value)| (*filter, value.as_str()))
    }

    /// Renders the winning filter, if any, as query parameters.
    pub fn to_params(&self) -> QueryParameters {
        let mut params = QueryParameters::new();
        if let Some((winner, value)) = self.first_present() {
            params.push_non_empty(winner.param_name(), Some(value));
            let dropped: Vec<F> = self
                .values
                .iter()
                .filter(|(filter, value)| **filter > winner && !value.is_empty())
                .map(|(filter, _)| *filter)
                .collect();
            if !dropped.is_empty() {
                tracing::debug!(
                    "Sending filter {:?}; ignoring lower-precedence filters {:?}",
                    winner,
                    dropped
                );
            }
        }
        params
    }
}
