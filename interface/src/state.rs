use crate::error::AuctionInterfaceError;
use crate::token::SettlementToken;
use crate::{discriminator, AUCTION_BASE_LEN, BID_SLOT_LEN, DISCRIMINATOR_LEN};

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::clock::UnixTimestamp;
use solana_program::pubkey::Pubkey;
use std::convert::TryFrom;

/// Lifecycle of an auction.
#[repr(u8)]
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionStatus {
    /// Accepting bids until the end time.
    Active,
    /// Cancelled by the owner before any bid was placed.
    Cancelled,
    /// Ended and settled through a withdrawal or reclamation.
    Finished,
}

/// A bid held in one of the auction's bid slots.
#[repr(C)]
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct BidSlot {
    /// The public key of the bidder's wallet.
    pub bidder: Pubkey,
    /// The bid amount (in base units of the settlement token).
    pub amount: u64,
}

/// The state of an open auction as stored by the auction program.
#[repr(C)]
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq)]
pub struct AuctionRecord {
    /// Owner of the auction and of the auctioned item.
    pub owner: Pubkey,
    /// Mint of the auctioned item.
    pub mint: Pubkey,
    /// Title of the auction, its first 32 bytes take part in the seeds.
    pub title: String,
    /// Minimum accepted bid (in base units of the settlement token).
    pub floor: u64,
    /// Minimum raise over the highest bid (in base units).
    pub increment: u64,
    /// Start timestamp of the auction (in seconds).
    pub start_time: UnixTimestamp,
    /// End timestamp of the auction (in seconds).
    pub end_time: UnixTimestamp,
    /// Maximum number of bidders, fixes the size of the account.
    pub bidder_cap: u64,
    /// Current highest bid (in base units).
    pub highest_bid: u64,
    /// Wallet that placed the highest bid.
    pub highest_bidder: Pubkey,
    /// Selector of the settlement token, see [`SettlementToken`].
    pub spl_token: u64,
    /// Token account holding the auctioned item in escrow.
    pub escrow: Pubkey,
    /// Number of item tokens auctioned off.
    pub amount: u64,
    pub bump: u8,
    pub status: AuctionStatus,
    /// Bids that are still held by the auction.
    pub bids: Vec<BidSlot>,
}

impl AuctionRecord {
    pub fn discriminator() -> [u8; DISCRIMINATOR_LEN] {
        discriminator("account", "OpenAuction")
    }

    /// Size of the account the program allocates for an auction with the
    /// given bidder cap.
    pub fn account_len(bidder_cap: u64) -> Option<u64> {
        bidder_cap
            .checked_mul(BID_SLOT_LEN as u64)?
            .checked_add(AUCTION_BASE_LEN as u64)
    }

    /// Decodes raw account data. Bytes following the encoded record are
    /// reserved by the program and ignored.
    pub fn decode(data: &[u8]) -> Result<Self, AuctionInterfaceError> {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(AuctionInterfaceError::InvalidAccountData(format!(
                "expected at least {} bytes, got {}",
                DISCRIMINATOR_LEN,
                data.len()
            )));
        }
        let (tag, mut body) = data.split_at(DISCRIMINATOR_LEN);
        if tag != Self::discriminator() {
            return Err(AuctionInterfaceError::InvalidAccountData(
                "discriminator mismatch".to_owned(),
            ));
        }
        Self::deserialize(&mut body)
            .map_err(|e| AuctionInterfaceError::InvalidAccountData(e.to_string()))
    }

    /// Encodes the record into account data padded to the allocated size.
    pub fn encode(&self) -> Result<Vec<u8>, AuctionInterfaceError> {
        let account_len = Self::account_len(self.bidder_cap)
            .and_then(|len| usize::try_from(len).ok())
            .ok_or_else(|| {
                AuctionInterfaceError::Serialization("bidder cap is too large".to_owned())
            })?;
        let mut data = Self::discriminator().to_vec();
        self.serialize(&mut data)?;
        if data.len() > account_len {
            return Err(AuctionInterfaceError::Serialization(format!(
                "record needs {} bytes but the account holds {}",
                data.len(),
                account_len
            )));
        }
        data.resize(account_len, 0);
        Ok(data)
    }

    pub fn settlement_token(&self) -> Result<SettlementToken, AuctionInterfaceError> {
        SettlementToken::try_from(self.spl_token)
    }

    pub fn is_active(&self) -> bool {
        self.status == AuctionStatus::Active
    }

    /// Returns the highest bidder, if anybody has bid yet.
    pub fn top_bidder(&self) -> Option<Pubkey> {
        if self.highest_bidder == Pubkey::default() {
            None
        } else {
            Some(self.highest_bidder)
        }
    }
}
