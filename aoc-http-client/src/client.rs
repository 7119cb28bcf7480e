//! AOC HTTP client implementation

use crate::error::AocError;
use log::debug;
use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue};
use std::time::Duration;
use zeroize::Zeroize;

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Connect, read and whole-request timeout applied to every client
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Raw answer of the input endpoint
///
/// The status is reported as received; no status is treated as an error here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl InputResponse {
    /// Whether the status lies in `200..=299`
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// The main AOC HTTP client
///
/// Performs a single `GET` against the puzzle input endpoint per call. Idle
/// connections are never kept, so each fetch opens and closes its own
/// connection.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let session = "your_session_cookie";
///
/// let response = client.fetch_input(2024, 1, session).await?;
/// println!("Status {}: {} bytes", response.status, response.body.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl AocClient {
    /// Create a new AOC client with the default base URL and timeouts
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_http_client::AocClient;
    ///
    /// let client = AocClient::new().expect("Failed to create client");
    /// ```
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the AOC client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Create a secure cookie header value from a session string
    ///
    /// The header is flagged sensitive and the temporary string is zeroized.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| AocError::ClientInit("Invalid session cookie format".to_string()));
        cookie_string.zeroize();

        let mut sensitive_header = header_value?;
        sensitive_header.set_sensitive(true);
        Ok(sensitive_header)
    }

    /// Build `{base}/{year}/day/{day}/input`
    fn input_url(&self, year: u16, day: u8) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[&year.to_string(), "day", &day.to_string(), "input"]);
        Ok(url)
    }

    /// Fetch puzzle input for a specific year and day
    ///
    /// Sends exactly one request with the session carried as a cookie. The
    /// status code is returned untouched alongside the body text; any status,
    /// including 4xx/5xx and redirects, is a successful transport outcome.
    ///
    /// Dropping the returned future aborts the request.
    ///
    /// # Arguments
    ///
    /// * `year` - The AOC year (e.g., 2024)
    /// * `day` - The day number (1-25)
    /// * `session` - The session cookie value (without "session=" prefix)
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error (unreachable host, timeout, ...)
    /// * `AocError::Body` - A 2xx body could not be read as text
    /// * `AocError::ClientInit` - The session contains bytes not allowed in a header
    pub async fn fetch_input(
        &self,
        year: u16,
        day: u8,
        session: &str,
    ) -> Result<InputResponse, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let url = self.input_url(year, day)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(COOKIE, cookie_header)
            .send()
            .await?;

        let status = response.status();
        debug!("Input endpoint answered {}", status);

        // Error bodies are informational only, a failed read must not mask the status
        let body = if status.is_success() {
            response.text().await.map_err(AocError::Body)?
        } else {
            response.text().await.unwrap_or_default()
        };

        Ok(InputResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Builder for configuring an AOC HTTP client
///
/// Whatever `reqwest::ClientBuilder` is supplied, the built client always uses
/// the configured timeout for connect, read and the whole request, never
/// keeps idle connections, sends `Content-Type: text/plain` and does not
/// follow redirects.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Default client
/// let client = AocClient::builder().build()?;
///
/// // Custom base URL for testing
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .build()?;
///
/// // Custom timeout
/// let client = AocClient::builder()
///     .timeout(Duration::from_secs(5))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::ClientBuilder>,
    timeout: Option<Duration>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
            timeout: None,
        }
    }

    /// Set a custom base URL for the client
    ///
    /// Mostly useful for pointing at a mock server. The URL is parsed at
    /// builder time.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder
    ///
    /// Proxies, TLS roots and the like are taken from `builder`. Timeouts,
    /// pooling, default headers and the redirect policy are overridden.
    pub fn client_builder(mut self, builder: reqwest::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Override [`DEFAULT_TIMEOUT`]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the AOC client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::Client::builder().use_rustls_tls());

        let client = builder
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient { client, base_url })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
