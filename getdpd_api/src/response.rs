//! The raw body of a successful API call.

use serde::de::DeserializeOwned;

use crate::Error;

/// Body of a `200 OK` response, byte for byte as received.
///
/// The client never decodes it; [`ApiResponse::text`], [`ApiResponse::json`]
/// and [`ApiResponse::value`] are opt-in views for callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    body: Vec<u8>,
}

impl ApiResponse {
    pub(crate) fn new(body: Vec<u8>) -> Self {
        Self { body }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }

    /// The body as UTF-8 text. Invalid sequences are an error, never replaced.
    pub fn text(&self) -> Result<&str, Error> {
        std::str::from_utf8(&self.body).map_err(|e| {
            tracing::error!("Response body is not valid UTF-8: {}", e);
            Error::InvalidUtf8(e)
        })
    }

    /// Deserializes the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(|e| {
            tracing::error!("Failed to parse response body: {}", e);
            Error::Parse(e)
        })
    }

    /// Parses the body as untyped JSON.
    pub fn value(&self) -> Result<serde_json::Value, Error> {
        self.json()
    }
}

impl From<Vec<u8>> for ApiResponse {
    fn from(body: Vec<u8>) -> Self {
        Self::new(body)
    }
}

impl From<String> for ApiResponse {
    fn from(body: String) -> Self {
        Self::new(body.into_bytes())
    }
}

impl From<ApiResponse> for Vec<u8> {
    fn from(response: ApiResponse) -> Self {
        response.body
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::ErrorKind;

    use super::*;

    #[derive(Deserialize)]
    struct Storefront {
        id: u64,
        name: String,
    }

    #[test]
    fn body_is_untouched() {
        let raw = "  {\"id\": 1}\n";
        let response = ApiResponse::from(raw.to_string());
        assert_eq!(response.text().unwrap(), raw);
        assert_eq!(response.bytes(), raw.as_bytes());
        assert_eq!(response.into_bytes(), raw.as_bytes());
    }

    #[test]
    fn non_utf8_bytes_are_kept() {
        let raw = vec![0xEF, 0xBB, 0xBF, b'{', b'"', b'a', b'"', b':', b'"', 0xFF, b'"', b'}'];
        let response = ApiResponse::new(raw.clone());
        assert_eq!(response.bytes(), raw.as_slice());

        let err = response.text().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(matches!(err, Error::InvalidUtf8(_)));
        assert_eq!(response.value().unwrap_err().kind(), ErrorKind::Parse);
        assert_eq!(Vec::from(response), raw);
    }

    #[test]
    fn json_decodes_typed() {
        let response = ApiResponse::from(r#"{"id": 7, "name": "Main"}"#.to_string());
        let storefront: Storefront = response.json().unwrap();
        assert_eq!(storefront.id, 7);
        assert_eq!(storefront.name, "Main");
    }

    #[test]
    fn value_decodes_untyped() {
        let response = ApiResponse::from(r#"[{"id": 1}, {"id": 2}]"#.to_string());
        let value = response.value().unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let response = ApiResponse::from("{not json}".to_string());
        let err = response.value().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
