use crate::get_auction::find_auction;
use crate::ledger::Ledger;
use crate::AuctionClientError;
use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;

/// Opt-in map from (item mint, bidder cap) to the auction's address.
///
/// Entries recorded at creation time take precedence over the program
/// account scan, which is only consulted for unknown pairs.
#[derive(Debug, Default)]
pub struct AuctionIndex {
    entries: HashMap<(Pubkey, u64), Pubkey>,
}

impl AuctionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previously recorded address, if any.
    pub fn insert(&mut self, item_mint: Pubkey, bidder_cap: u64, auction: Pubkey) -> Option<Pubkey> {
        self.entries.insert((item_mint, bidder_cap), auction)
    }

    pub fn get(&self, item_mint: &Pubkey, bidder_cap: u64) -> Option<Pubkey> {
        self.entries.get(&(*item_mint, bidder_cap)).copied()
    }

    pub fn remove(&mut self, item_mint: &Pubkey, bidder_cap: u64) -> Option<Pubkey> {
        self.entries.remove(&(*item_mint, bidder_cap))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks the pair up locally and falls back to scanning the ledger. A
    /// scanned address is recorded for later lookups.
    pub fn resolve<L: Ledger + ?Sized>(
        &mut self,
        ledger: &L,
        program_id: &Pubkey,
        item_mint: &Pubkey,
        bidder_cap: u64,
    ) -> Result<Option<Pubkey>, AuctionClientError> {
        if let Some(auction) = self.get(item_mint, bidder_cap) {
            return Ok(Some(auction));
        }
        let found = find_auction(ledger, program_id, item_mint, bidder_cap)?;
        if let Some(auction) = found {
            self.insert(*item_mint, bidder_cap, auction);
        }
        Ok(found)
    }
}
