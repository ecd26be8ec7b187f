//! Blocking HTTP GET over libcurl.
//!
//! One easy handle per request: follow redirects, bounded connect and total
//! time, whole body collected in memory.

use std::fmt;
use std::time::Duration;

const MAX_REDIRECTS: u32 = 10;

/// Request policy shared by every GET a provider makes.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub user_agent: String,
    /// Total transfer budget per request.
    pub timeout: Duration,
}

impl HttpOptions {
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            timeout,
        }
    }
}

/// Error returned by a single GET (curl failure or HTTP error).
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, invalid URL, etc.).
    Curl(curl::Error),
    /// HTTP response had a non-2xx status.
    Http(u32),
    /// A URL could not be built (bad base URL or unusable link in a page).
    Url(url::ParseError),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
            FetchError::Url(e) => write!(f, "invalid URL: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Url(e) => Some(e),
            FetchError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Curl(e)
    }
}

impl From<url::ParseError> for FetchError {
    fn from(e: url::ParseError) -> Self {
        FetchError::Url(e)
    }
}

/// GETs `url` and returns the response body.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn get(url: &str, opts: &HttpOptions) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;
    easy.useragent(&opts.user_agent)?;
    easy.connect_timeout(opts.timeout)?;
    easy.timeout(opts.timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        tracing::debug!(url, code, "GET returned non-success status");
        return Err(FetchError::Http(code));
    }
    tracing::trace!(url, bytes = body.len(), "GET ok");
    Ok(body)
}
