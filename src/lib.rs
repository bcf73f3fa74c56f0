//! Client-side breach lookups against the Have I Been Pwned
//! [Pwned Passwords range API](https://haveibeenpwned.com/API/v3#PwnedPasswords).
//!
//! Lookups follow the k-anonymity scheme: only the first five hex characters
//! of a password's SHA-1 digest ever leave the process. The API answers with
//! every known suffix sharing that prefix, and the remaining 35 characters
//! are matched locally. The service learns which of 1,048,576 buckets a
//! password hashes into, and nothing else.
//!
//! # Usage
//!
//! ```no_run
//! use hibp_range_client::Finder;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), hibp_range_client::Error> {
//! let finder = Finder::new();
//!
//! let count = finder.find_password("password123").await?;
//! if count > 0 {
//!     println!("seen {count} times in known breaches");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Callers that already hold a SHA-1 digest can use [`Finder::find`]
//! directly. The endpoint and HTTP client are configurable through
//! [`Finder::builder`] (useful for self-hosted range data, see the
//! "Downloading the Data" notes in the HIBP docs), and the transport itself
//! is swappable via [`RangeFetch`].
//!
//! A zero count without an error means there is no evidence the password has
//! appeared in a breach; it is a normal result, not a failure. Some passwords
//! have been seen millions of times. What count is acceptable is the
//! caller's policy decision.

pub mod conversion;
pub mod error;
pub mod fetcher;
pub mod finder;

pub use error::Error;
pub use fetcher::{HttpFetcher, PREFIX_PLACEHOLDER, RangeFetch};
pub use finder::{Finder, FinderBuilder};

/// SHA-1 output size in bytes; [`Finder::find`] rejects any other length.
pub const DIGEST_LEN: usize = 20;

/// Number of leading hex characters disclosed to the remote service.
pub const PREFIX_LEN: usize = 5;

/// Number of trailing hex characters kept local and matched against the
/// candidate lines.
pub const SUFFIX_LEN: usize = DIGEST_LEN * 2 - PREFIX_LEN;

/// Range endpoint of the public Pwned Passwords API.
pub const DEFAULT_URL_TEMPLATE: &str = "https://api.pwnedpasswords.com/range/{prefix}";
