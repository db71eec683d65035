#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown vendor prefix: {0}")]
    UnknownVendorPrefix(String),
}
pub type Result<T> = std::result::Result<T, Error>;
