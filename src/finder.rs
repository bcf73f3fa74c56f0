use sha1::{Digest, Sha1};

use crate::conversion::digest_to_hex;
use crate::error::Error;
use crate::fetcher::{HttpFetcher, RangeFetch};
use crate::{DEFAULT_URL_TEMPLATE, DIGEST_LEN, PREFIX_LEN};

/// Looks up breach occurrence counts for SHA-1 digests without disclosing
/// them.
///
/// A `Finder` holds nothing but its fetcher and is immutable after
/// construction, so one instance can serve any number of concurrent lookups.
/// Each call performs exactly one fetch; there is no caching and no retrying
/// at this layer.
#[derive(Debug)]
pub struct Finder<F = HttpFetcher> {
    fetcher: F,
}

impl Finder<HttpFetcher> {
    /// A finder talking to the public Pwned Passwords API with a stock
    /// [`reqwest::Client`].
    pub fn new() -> Self {
        Self { fetcher: HttpFetcher::default() }
    }

    /// Starts a [`FinderBuilder`] for overriding the endpoint or the client.
    pub fn builder() -> FinderBuilder {
        FinderBuilder::new()
    }
}

impl Default for Finder<HttpFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: RangeFetch> Finder<F> {
    /// Wraps an arbitrary transport implementing [`RangeFetch`].
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Returns how many times the password behind `digest` has shown up in
    /// known breaches, or zero (without an error) when there is no record of
    /// it.
    ///
    /// `digest` must be a whole 20-byte SHA-1 output; anything shorter or
    /// longer is rejected before the network is touched. Only the first 5
    /// hex characters of the digest are sent upstream, the remaining 35 are
    /// matched locally against the returned range.
    pub async fn find(&self, digest: &[u8]) -> Result<i64, Error> {
        let sum: &[u8; DIGEST_LEN] = match digest.try_into() {
            Ok(sum) => sum,
            Err(_) if digest.len() < DIGEST_LEN => {
                return Err(Error::DigestTooShort { len: digest.len() });
            }
            Err(_) => return Err(Error::DigestTooLong { len: digest.len() }),
        };

        let hex = digest_to_hex(sum);
        let (prefix, suffix) = hex.split_at(PREFIX_LEN);
        // Hex rendering is pure ASCII.
        let prefix = std::str::from_utf8(prefix).unwrap();

        let body = self.fetcher.fetch(prefix).await?;

        match find_suffix(suffix, &body) {
            Some(line) => parse_count(line),
            None => Ok(0),
        }
    }

    /// Convenience over [`Finder::find`]: hashes `password` with SHA-1
    /// first.
    pub async fn find_password(&self, password: &str) -> Result<i64, Error> {
        let mut hasher = Sha1::new();
        hasher.update(password.as_bytes());
        let sum: [u8; DIGEST_LEN] = hasher.finalize().into();
        self.find(&sum).await
    }
}

/// Configuration for the HTTP-backed [`Finder`].
///
/// Both knobs have defaults: the public API endpoint and a stock
/// [`reqwest::Client`]. Timeouts, proxies and TLS settings are configured on
/// the client passed in.
#[derive(Debug, Default)]
pub struct FinderBuilder {
    url_template: Option<String>,
    client: Option<reqwest::Client>,
}

impl FinderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points lookups at a different host, e.g. a self-hosted copy of the
    /// range data. The template must contain `{prefix}` exactly once.
    pub fn url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = Some(template.into());
        self
    }

    /// Replaces the default [`reqwest::Client`].
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Fails only when the template is missing its placeholder or repeats
    /// it.
    pub fn build(self) -> Result<Finder<HttpFetcher>, Error> {
        let template = self.url_template.as_deref().unwrap_or(DEFAULT_URL_TEMPLATE);
        let client = self.client.unwrap_or_default();
        Ok(Finder { fetcher: HttpFetcher::new(client, template)? })
    }
}

/// First line whose leading bytes equal `suffix`. Comparison is byte-wise
/// and case-sensitive; a match anywhere past the start of a line does not
/// count.
fn find_suffix<'a>(suffix: &[u8], body: &'a str) -> Option<&'a str> {
    body.lines().find(|line| line.as_bytes().starts_with(suffix))
}

/// Splits a matched `SUFFIX:COUNT` line on its single delimiter and parses
/// the count field.
fn parse_count(line: &str) -> Result<i64, Error> {
    let Some((_, count)) = line.split_once(':') else {
        return Err(Error::MalformedLine { line: line.to_string() });
    };
    if count.contains(':') {
        return Err(Error::MalformedLine { line: line.to_string() });
    }
    count
        .parse()
        .map_err(|source| Error::InvalidCount { line: line.to_string(), source })
}
