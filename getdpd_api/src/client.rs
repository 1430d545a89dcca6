//! HTTP client for the DPD REST API.

use reqwest::{
    blocking,
    header::{HeaderMap, USER_AGENT},
    Method, StatusCode, Version,
};
use url::Url;

use crate::{
    config::{ClientConfig, BASE_URL},
    errors::classify,
    query::QueryParameters,
    response::ApiResponse,
    Error,
};

/// Synchronous client for the DPD REST API.
///
/// Every call is one blocking request authenticated with HTTP basic auth
/// (account username/password). There is no retry, caching, or pagination.
/// The configuration is read-only after construction and the underlying
/// `reqwest::blocking::Client` is safe to share, so a single `Client` can be
/// used from several threads at once.
pub struct Client {
    /// Root every request path is resolved against. Always ends with `/`.
    base_url: Url,
    config: ClientConfig,
    http: blocking::Client,
}

const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client for the production API at [`BASE_URL`].
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Self::with_base_url(BASE_URL, config)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, config: ClientConfig) -> Result<Self, Error> {
        let mut base_url = Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            Error::InvalidUrl(e)
        })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http = blocking::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport(e)
        })?;
        Ok(Self {
            base_url,
            config,
            http,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn get_url(&self, path: &str, params: &QueryParameters) -> Result<Url, Error> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| {
                tracing::error!("Invalid URL constructed for {}: {}", path, e);
                Error::InvalidUrl(e)
            })?;
        Ok(params.add_to_url(&url))
    }

    /// Resolves `segments` below the base URL, percent-encoding each one so
    /// that `/`, `?` or `#` inside a caller-supplied value stay in its segment.
    fn get_segments_url(&self, segments: &[&str], params: &QueryParameters) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL {} cannot carry path segments", self.base_url);
                Error::InvalidArgument("base URL cannot carry path segments")
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(params.add_to_url(&url))
    }

    /// Sends one authenticated request and returns the raw body of a `200 OK`.
    ///
    /// Any other status is turned into a typed error by [`classify`], carrying
    /// the status line and response headers. Transport failures are returned
    /// as [`Error::Transport`] untouched.
    pub fn execute(
        &self,
        method: Method,
        path: &str,
        params: &QueryParameters,
    ) -> Result<ApiResponse, Error> {
        let url = self.get_url(path, params)?;
        self.send(method, url)
    }

    /// `GET` of a path given as individual segments, each percent-encoded.
    pub(crate) fn get_segments(
        &self,
        segments: &[&str],
        params: &QueryParameters,
    ) -> Result<ApiResponse, Error> {
        let url = self.get_segments_url(segments, params)?;
        self.send(Method::GET, url)
    }

    fn send(&self, method: Method, url: Url) -> Result<ApiResponse, Error> {
        tracing::debug!("{} {}", method, url);
        let path = url.path().to_string();

        let resp = self
            .http
            .request(method, url)
            .header(USER_AGENT, concat!("getdpd_api/", env!("CARGO_PKG_VERSION")))
            .basic_auth(self.config.username(), Some(self.config.password()))
            .send()
            .map_err(|e| {
                tracing::error!("Failed to send request to {}: {}", path, e);
                Error::Transport(e)
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            let log = diagnostic_log(resp.version(), status, resp.headers());
            tracing::error!("Request to {} failed with status {}", path, status);
            return Err(classify(status.as_u16(), log));
        }

        let body = resp.bytes().map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;
        Ok(ApiResponse::new(body.to_vec()))
    }

    /// Shorthand for a `GET` through [`Client::execute`].
    pub fn get(&self, path: &str, params: &QueryParameters) -> Result<ApiResponse, Error> {
        self.execute(Method::GET, path, params)
    }
}

/// Renders the status line and every response header as one `\r\n`-joined
/// string. Repeated headers are collapsed into one line with comma-joined values.
pub fn diagnostic_log(version: Version, status: StatusCode, headers: &HeaderMap) -> String {
    let status_line = format!(
        "{:?} {} {}",
        version,
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    );
    let mut lines = vec![status_line.trim_end().to_string()];
    for name in headers.keys() {
        let values: Vec<String> = headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect();
        lines.push(format!("{}: {}", name, values.join(", ")));
    }
    lines.join("\r\n")
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new("partner", "token", "user", "pass")
    }

    #[test]
    fn new_targets_production_root() {
        let client = Client::new(config()).unwrap();
        assert_eq!(client.base_url().as_str(), BASE_URL);
    }

    #[test]
    fn with_base_url_adds_trailing_slash() {
        let client = Client::with_base_url("http://127.0.0.1:8080", config()).unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/");

        let client = Client::with_base_url("http://127.0.0.1:8080/v2", config()).unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/v2/");
    }

    #[test]
    fn with_base_url_rejects_garbage() {
        let result = Client::with_base_url("not a url", config());
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn get_url_joins_relative_path() {
        let client = Client::new(config()).unwrap();
        let url = client
            .get_url("storefronts/7/subscribers", &QueryParameters::new())
            .unwrap();
        insta::assert_snapshot!(url.as_str(), @"https://api.getdpd.com/v2/storefronts/7/subscribers");

        let url = client.get_url("/products/42", &QueryParameters::new()).unwrap();
        assert_eq!(url.as_str(), "https://api.getdpd.com/v2/products/42");
    }

    #[test]
    fn get_url_appends_params() {
        let client = Client::new(config()).unwrap();
        let params = QueryParameters::new().with("username", "a@b.com");
        let url = client
            .get_url("storefronts/3/subscribers/verify", &params)
            .unwrap();
        insta::assert_snapshot!(
            url.as_str(),
            @"https://api.getdpd.com/v2/storefronts/3/subscribers/verify?username=a%40b.com"
        );
    }

    #[test]
    fn get_segments_url_encodes_each_segment() {
        let client = Client::new(config()).unwrap();
        let url = client
            .get_segments_url(
                &["storefronts", "7", "subscribers", "../../customers?status=paid#x"],
                &QueryParameters::new(),
            )
            .unwrap();
        insta::assert_snapshot!(
            url.as_str(),
            @"https://api.getdpd.com/v2/storefronts/7/subscribers/..%2F..%2Fcustomers%3Fstatus=paid%23x"
        );
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn get_segments_url_keeps_params() {
        let client = Client::with_base_url("http://127.0.0.1:8080", config()).unwrap();
        let params = QueryParameters::new().with("username", "a@b.com");
        let url = client
            .get_segments_url(&["storefronts", "7", "subscribers"], &params)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/storefronts/7/subscribers?username=a%40b.com"
        );
    }

    #[test]
    fn diagnostic_log_lists_status_and_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers.append("x-dpd", HeaderValue::from_static("a"));
        headers.append("x-dpd", HeaderValue::from_static("b"));

        let log = diagnostic_log(Version::HTTP_11, StatusCode::NOT_FOUND, &headers);
        assert_eq!(
            log,
            "HTTP/1.1 404 Not Found\r\ncontent-type: application/json\r\nx-dpd: a, b"
        );
    }

    #[test]
    fn diagnostic_log_without_headers() {
        let log = diagnostic_log(Version::HTTP_11, StatusCode::IM_A_TEAPOT, &HeaderMap::new());
        assert_eq!(log, "HTTP/1.1 418 I'm a teapot");
    }
}
