use crate::ledger::Ledger;
use crate::AuctionClientError;
use open_auction_interface::pda::associated_token_address;
use solana_sdk::pubkey::Pubkey;

/// Address of the token account holding `mint` for `owner`.
pub fn resolve(owner: &Pubkey, mint: &Pubkey) -> Result<Pubkey, AuctionClientError> {
    Ok(associated_token_address(owner, mint)?)
}

/// Absence is reported as `false`; only transport failures are errors.
pub fn account_exists<L: Ledger + ?Sized>(
    ledger: &L,
    pubkey: &Pubkey,
) -> Result<bool, AuctionClientError> {
    Ok(ledger.account(pubkey)?.is_some())
}
