use std::future::Future;

use crate::DEFAULT_URL_TEMPLATE;
use crate::error::Error;

/// Marker substituted with the 5-character hex prefix when building the
/// request URL from a template.
pub const PREFIX_PLACEHOLDER: &str = "{prefix}";

/// Capability the [`Finder`](crate::Finder) consumes: resolve a 5-character
/// hex prefix to the raw newline-delimited range body.
///
/// The built-in implementation is [`HttpFetcher`]. Anything that can produce
/// the body works, such as a client for a self-hosted mirror or a fixture in
/// tests.
pub trait RangeFetch {
    /// Fetches the candidate lines for `prefix`, or fails with a transport
    /// error. "No match" is not this layer's concern: every valid prefix has
    /// a non-empty range.
    fn fetch(&self, prefix: &str) -> impl Future<Output = Result<String, Error>> + Send;
}

// Split once at construction so each request is a plain splice.
#[derive(Debug, Clone)]
struct UrlTemplate {
    head: String,
    tail: String,
}

impl UrlTemplate {
    fn parse(template: &str) -> Result<Self, Error> {
        match template.split_once(PREFIX_PLACEHOLDER) {
            Some((head, tail)) if !tail.contains(PREFIX_PLACEHOLDER) => Ok(Self {
                head: head.to_string(),
                tail: tail.to_string(),
            }),
            _ => Err(Error::InvalidTemplate { template: template.to_string() }),
        }
    }

    fn url_for(&self, prefix: &str) -> String {
        format!("{}{}{}", self.head, prefix, self.tail)
    }
}

/// Default transport: one GET per lookup against the Pwned Passwords range
/// endpoint, or whatever compatible host the template names.
///
/// Timeout, proxy and TLS policy belong to the injected [`reqwest::Client`];
/// the fetcher adds no retries and no caching on top.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    template: UrlTemplate,
}

impl HttpFetcher {
    /// Creates a fetcher from a client and a URL template containing exactly
    /// one [`PREFIX_PLACEHOLDER`].
    pub fn new(client: reqwest::Client, template: &str) -> Result<Self, Error> {
        Ok(Self { client, template: UrlTemplate::parse(template)? })
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        let template =
            UrlTemplate::parse(DEFAULT_URL_TEMPLATE).expect("default template is well formed");
        Self { client: reqwest::Client::new(), template }
    }
}

impl RangeFetch for HttpFetcher {
    async fn fetch(&self, prefix: &str) -> Result<String, Error> {
        let url = self.template.url_for(prefix);
        tracing::debug!(prefix, %url, "fetching range");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| Error::HttpRequest { prefix: prefix.to_string(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                prefix: prefix.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| Error::HttpRequest { prefix: prefix.to_string(), source })
    }
}
