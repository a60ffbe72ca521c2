use crate::ledger::{AccountFilter, Ledger};
use crate::AuctionClientError;
use log::{debug, warn};
use open_auction_interface::state::AuctionRecord;
use open_auction_interface::ITEM_MINT_OFFSET;
use solana_sdk::pubkey::Pubkey;

/// Fetches and decodes the auction stored at `auction_pubkey`.
///
/// Returns `None` both when nothing is stored there and when the stored data
/// is not an auction record of `program_id`.
pub fn get_auction<L: Ledger + ?Sized>(
    ledger: &L,
    program_id: &Pubkey,
    auction_pubkey: &Pubkey,
) -> Result<Option<AuctionRecord>, AuctionClientError> {
    let account = match ledger.account(auction_pubkey)? {
        Some(account) => account,
        None => return Ok(None),
    };

    if account.owner != *program_id {
        debug!(
            "account {} is owned by {}, not by the auction program",
            auction_pubkey, account.owner
        );
        return Ok(None);
    }

    match AuctionRecord::decode(&account.data) {
        Ok(record) => Ok(Some(record)),
        Err(e) => {
            debug!("account {} is not an auction: {}", auction_pubkey, e);
            Ok(None)
        }
    }
}

/// Scan filters selecting auctions of `item_mint` sized for `bidder_cap`
/// bidders. Returns `None` if no account can have that size.
pub fn auction_filters(item_mint: &Pubkey, bidder_cap: u64) -> Option<Vec<AccountFilter>> {
    let data_size = AuctionRecord::account_len(bidder_cap)?;
    Some(vec![
        AccountFilter::DataSize(data_size),
        AccountFilter::Memcmp {
            offset: ITEM_MINT_OFFSET,
            bytes: item_mint.to_bytes().to_vec(),
        },
    ])
}

/// Looks up the auction of `item_mint` with the given bidder cap by scanning
/// the program's accounts.
///
/// The pair is not guaranteed to be unique. When several auctions match, the
/// first one returned by the scan wins and the order of the scan is not
/// stable, so prefer the exact address once it is known.
pub fn find_auction<L: Ledger + ?Sized>(
    ledger: &L,
    program_id: &Pubkey,
    item_mint: &Pubkey,
    bidder_cap: u64,
) -> Result<Option<Pubkey>, AuctionClientError> {
    let filters = match auction_filters(item_mint, bidder_cap) {
        Some(filters) => filters,
        None => return Ok(None),
    };
    let matches = ledger.program_accounts(program_id, &filters)?;
    if matches.len() > 1 {
        warn!(
            "{} auctions of mint {} with bidder cap {}, using {}",
            matches.len(),
            item_mint,
            bidder_cap,
            matches[0].0
        );
    }
    Ok(matches.first().map(|(pubkey, _)| *pubkey))
}
