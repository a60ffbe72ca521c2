use crate::AuctionClientError;
use solana_account_decoder::UiAccountEncoding;
use solana_client::client_error::ClientErrorKind;
use solana_client::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_client::rpc_request::RpcError;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::{self, Transaction};
use std::sync::Arc;

/// Server-side filter applied when scanning the accounts of a program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountFilter {
    /// Exact length of the account data.
    DataSize(u64),
    /// Account data at `offset` starts with `bytes`.
    Memcmp { offset: usize, bytes: Vec<u8> },
}

impl AccountFilter {
    pub fn matches(&self, data: &[u8]) -> bool {
        match self {
            AccountFilter::DataSize(size) => data.len() as u64 == *size,
            AccountFilter::Memcmp { offset, bytes } => data
                .get(*offset..)
                .map_or(false, |tail| tail.starts_with(bytes)),
        }
    }

    fn to_rpc_filter(&self) -> RpcFilterType {
        match self {
            AccountFilter::DataSize(size) => RpcFilterType::DataSize(*size),
            AccountFilter::Memcmp { offset, bytes } => {
                RpcFilterType::Memcmp(Memcmp::new_base58_encoded(*offset, bytes))
            }
        }
    }
}

/// Read and submit endpoint of the ledger.
///
/// Every call may block on the network. Implementations are expected to be
/// shareable between threads so independent actions can run concurrently.
pub trait Ledger {
    /// Returns `None` if nothing is stored at `pubkey`.
    fn account(&self, pubkey: &Pubkey) -> Result<Option<Account>, AuctionClientError>;

    /// Returns every account owned by `program_id` that passes all filters.
    fn program_accounts(
        &self,
        program_id: &Pubkey,
        filters: &[AccountFilter],
    ) -> Result<Vec<(Pubkey, Account)>, AuctionClientError>;

    fn latest_blockhash(&self) -> Result<Hash, AuctionClientError>;

    /// Hands a signed transaction over to the network.
    fn submit(&self, transaction: &Transaction) -> Result<Signature, AuctionClientError>;

    /// Returns `None` while the transaction has not reached `commitment`.
    fn signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<Option<transaction::Result<()>>, AuctionClientError>;
}

impl<L: Ledger + ?Sized> Ledger for &L {
    fn account(&self, pubkey: &Pubkey) -> Result<Option<Account>, AuctionClientError> {
        (**self).account(pubkey)
    }

    fn program_accounts(
        &self,
        program_id: &Pubkey,
        filters: &[AccountFilter],
    ) -> Result<Vec<(Pubkey, Account)>, AuctionClientError> {
        (**self).program_accounts(program_id, filters)
    }

    fn latest_blockhash(&self) -> Result<Hash, AuctionClientError> {
        (**self).latest_blockhash()
    }

    fn submit(&self, transaction: &Transaction) -> Result<Signature, AuctionClientError> {
        (**self).submit(transaction)
    }

    fn signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<Option<transaction::Result<()>>, AuctionClientError> {
        (**self).signature_status(signature, commitment)
    }
}

impl<L: Ledger + ?Sized> Ledger for Arc<L> {
    fn account(&self, pubkey: &Pubkey) -> Result<Option<Account>, AuctionClientError> {
        (**self).account(pubkey)
    }

    fn program_accounts(
        &self,
        program_id: &Pubkey,
        filters: &[AccountFilter],
    ) -> Result<Vec<(Pubkey, Account)>, AuctionClientError> {
        (**self).program_accounts(program_id, filters)
    }

    fn latest_blockhash(&self) -> Result<Hash, AuctionClientError> {
        (**self).latest_blockhash()
    }

    fn submit(&self, transaction: &Transaction) -> Result<Signature, AuctionClientError> {
        (**self).submit(transaction)
    }

    fn signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<Option<transaction::Result<()>>, AuctionClientError> {
        (**self).signature_status(signature, commitment)
    }
}

impl Ledger for RpcClient {
    fn account(&self, pubkey: &Pubkey) -> Result<Option<Account>, AuctionClientError> {
        let response = self.get_account_with_commitment(pubkey, self.commitment())?;
        Ok(response.value)
    }

    fn program_accounts(
        &self,
        program_id: &Pubkey,
        filters: &[AccountFilter],
    ) -> Result<Vec<(Pubkey, Account)>, AuctionClientError> {
        let config = RpcProgramAccountsConfig {
            filters: Some(filters.iter().map(AccountFilter::to_rpc_filter).collect()),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                commitment: Some(self.commitment()),
                ..RpcAccountInfoConfig::default()
            },
            ..RpcProgramAccountsConfig::default()
        };
        Ok(self.get_program_accounts_with_config(program_id, config)?)
    }

    fn latest_blockhash(&self) -> Result<Hash, AuctionClientError> {
        Ok(self.get_latest_blockhash()?)
    }

    fn submit(&self, transaction: &Transaction) -> Result<Signature, AuctionClientError> {
        self.send_transaction(transaction).map_err(|e| match e.kind() {
            // preflight simulation rejected the transaction
            ClientErrorKind::RpcError(RpcError::RpcResponseError { .. }) => {
                AuctionClientError::TransactionFailed(e.to_string())
            }
            _ => e.into(),
        })
    }

    fn signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<Option<transaction::Result<()>>, AuctionClientError> {
        Ok(self.get_signature_status_with_commitment(signature, commitment)?)
    }
}
