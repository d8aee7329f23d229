use thiserror::Error;

/// The library’s specialized `Result` type.
pub type Result<T> = std::result::Result<T, Error>;

/// Possible errors while validating remote definitions, encoding buttons or
/// handing a Pronto code to a transmitter.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("remote definition parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed remote definition: missing fields, wrong types or
    /// out-of-range device/subdevice/function values. Raised at load time;
    /// a single bad button rejects the whole remote.
    #[error("config error: {0}")]
    Config(String),

    /// Unknown remote name or button name at send time.
    #[error("lookup error: {0}")]
    Lookup(String),

    #[error("Pronto sending error: {0}")]
    Transmitting(String),
}
