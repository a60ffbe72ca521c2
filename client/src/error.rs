use open_auction_interface::AuctionInterfaceError;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_sdk::signature::Signature;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AuctionClientError {
    #[error("address holds no usable auction state")]
    NotFound,
    #[error("address derivation exhausted every bump seed")]
    AddressSpaceExhausted,
    #[error("ledger endpoint unavailable: {0}")]
    NetworkUnavailable(String),
    #[error("failed to build transaction: {0}")]
    BuildError(String),
    #[error("transaction {0} was not confirmed in time, re-fetch state before resubmitting")]
    ConfirmationTimeout(Signature),
    #[error("unsupported settlement token type {0}")]
    UnsupportedTokenType(u64),
    #[error("transaction failed: {0}")]
    TransactionFailed(String),
}

impl From<AuctionInterfaceError> for AuctionClientError {
    fn from(e: AuctionInterfaceError) -> Self {
        match e {
            AuctionInterfaceError::AddressSpaceExhausted => AuctionClientError::AddressSpaceExhausted,
            AuctionInterfaceError::UnsupportedTokenType(index) => {
                AuctionClientError::UnsupportedTokenType(index)
            }
            other => AuctionClientError::BuildError(other.to_string()),
        }
    }
}

impl From<ClientError> for AuctionClientError {
    fn from(e: ClientError) -> Self {
        match e.kind() {
            ClientErrorKind::SigningError(_) => AuctionClientError::BuildError(e.to_string()),
            ClientErrorKind::TransactionError(_) => {
                AuctionClientError::TransactionFailed(e.to_string())
            }
            _ => AuctionClientError::NetworkUnavailable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use solana_sdk::transaction::TransactionError;

    #[test]
    fn transport_errors_are_retryable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        let error = AuctionClientError::from(ClientError::from(ClientErrorKind::Io(io)));
        assert!(matches!(error, AuctionClientError::NetworkUnavailable(_)));
    }

    #[test]
    fn rejected_transactions_are_failures() {
        let kind = ClientErrorKind::TransactionError(TransactionError::AccountNotFound);
        let error = AuctionClientError::from(ClientError::from(kind));
        assert!(matches!(error, AuctionClientError::TransactionFailed(_)));
    }

    #[test]
    fn interface_errors_keep_their_kind() {
        assert_eq!(
            AuctionClientError::from(AuctionInterfaceError::AddressSpaceExhausted),
            AuctionClientError::AddressSpaceExhausted
        );
        assert_eq!(
            AuctionClientError::from(AuctionInterfaceError::UnsupportedTokenType(3)),
            AuctionClientError::UnsupportedTokenType(3)
        );
        assert!(matches!(
            AuctionClientError::from(AuctionInterfaceError::InvalidAmount(-1.0)),
            AuctionClientError::BuildError(_)
        ));
    }
}
