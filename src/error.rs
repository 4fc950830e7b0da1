//! Failure taxonomy for a usage report run.

/// Every way a report can fail. All of them are terminal.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Neither flags, environment nor positional arguments supplied both keys.
    #[error("Access Key ID and Secret Access Key must be provided as arguments or flags")]
    MissingCredentials,

    /// The request could not be built or sent.
    #[error("error making request")]
    Request(#[source] ureq::Error),

    /// The endpoint answered with something other than 200.
    #[error("received status code {0}")]
    UnexpectedStatus(u16),

    /// The response body could not be read.
    #[error("error reading response")]
    BodyRead(#[source] ureq::Error),

    /// The response body is not a JSON object.
    #[error("error parsing JSON")]
    MalformedResponse(#[source] serde_json::Error),

    /// The body is `null`, or `Records` is missing, not an array, or empty.
    #[error("no records found in response")]
    NoRecords,

    /// The first entry of `Records` is not an object.
    #[error("invalid record format")]
    InvalidRecordShape,

    /// The summary could not be encoded.
    #[error("error marshaling output JSON")]
    OutputSerialization(#[source] serde_json::Error),
}
