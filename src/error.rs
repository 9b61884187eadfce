/// Errors that can occur while encoding or decoding a
/// [`LogMessage`](crate::LogMessage).
///
/// Construction never fails: a message is plain owned data and every field
/// combination is valid, so the error cases are limited to the JSON
/// encode/decode pair.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The message failed to serialize to JSON.
    ///
    /// Note: This is an error in this crate. If you spot this, please open an
    /// issue.
    #[error("encoding log message failed with {0}")]
    Encode(serde_json::Error),

    /// The document could not be decoded into a log message. The input was
    /// not valid JSON, or its fields did not match the message shape.
    #[error("decoding log message failed with {0}")]
    Decode(serde_json::Error),
}
