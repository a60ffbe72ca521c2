use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AuctionInterfaceError {
    #[error("no bump seed produces an off-curve address for these seeds")]
    AddressSpaceExhausted,
    #[error("unsupported settlement token type {0}")]
    UnsupportedTokenType(u64),
    #[error("amount {0} cannot be expressed in base units")]
    InvalidAmount(f64),
    #[error("invalid auction account data: {0}")]
    InvalidAccountData(String),
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for AuctionInterfaceError {
    fn from(e: std::io::Error) -> Self {
        AuctionInterfaceError::Serialization(e.to_string())
    }
}
