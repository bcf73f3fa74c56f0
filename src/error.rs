use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("digest is {len} bytes, shorter than the 20-byte SHA-1 output")]
    DigestTooShort { len: usize },

    #[error("digest is {len} bytes, longer than the 20-byte SHA-1 output")]
    DigestTooLong { len: usize },

    #[error("url template must contain the {{prefix}} placeholder exactly once: {template:?}")]
    InvalidTemplate { template: String },

    #[error("range request failed for prefix {prefix}: {source}")]
    HttpRequest {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for prefix {prefix}")]
    HttpStatus { prefix: String, status: u16 },

    #[error("malformed range line: {line:?}")]
    MalformedLine { line: String },

    #[error("range line {line:?} has a bad count: {source}")]
    InvalidCount {
        line: String,
        #[source]
        source: ParseIntError,
    },
}
