use crate::Error;

use super::QueryParameters;

/// Identifies one subscriber of a storefront, by id or by username (mail).
///
/// When both are set the id wins. Neither set is rejected with
/// [`Error::InvalidArgument`] before any request is made.
#[derive(Clone, Debug, Default)]
pub struct SubscriberQuery {
    pub id: Option<String>,
    pub username: Option<String>,
}

/// How a [`SubscriberQuery`] addresses the subscriber.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubscriberTarget<'a> {
    Id(&'a str),
    Username(&'a str),
}

const MISSING_SUBSCRIBER: &str = "a subscriber id or username is required";

impl SubscriberQuery {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The subscriber's username, which is their mail address.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Picks the identifying value, ignoring empty strings.
    pub fn target(&self) -> Result<SubscriberTarget<'_>, Error> {
        if let Some(id) = non_empty(&self.id) {
            return Ok(SubscriberTarget::Id(id));
        }
        if let Some(username) = non_empty(&self.username) {
            return Ok(SubscriberTarget::Username(username));
        }
        Err(Error::InvalidArgument(MISSING_SUBSCRIBER))
    }

    /// Parameters for the verify endpoint: `id` or `username`.
    pub(crate) fn verify_params(&self) -> Result<QueryParameters, Error> {
        Ok(match self.target()? {
            SubscriberTarget::Id(id) => QueryParameters::new().with("id", id),
            SubscriberTarget::Username(username) => {
                QueryParameters::new().with("username", username)
            }
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
