use crate::{AuctionInterfaceError, MAX_TITLE_SEED_LEN};
use solana_program::pubkey::Pubkey;
use spl_associated_token_account::ID as ATA_ID;

const TOKEN_PROGRAM: &Pubkey = &spl_token::ID;

/// Fixed tag leading the seeds of every auction account.
pub const AUCTION_SEED_TAG: &[u8] = b"open auction";

/// An address computed from seeds, together with the bump seed that pushed it
/// off the ed25519 curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedAddress {
    pub address: Pubkey,
    pub bump: u8,
}

/// Searches bump seeds from 255 downwards until the seeds hash to an address
/// without a private key.
pub fn derive(seeds: &[&[u8]], program_id: &Pubkey) -> Result<DerivedAddress, AuctionInterfaceError> {
    Pubkey::try_find_program_address(seeds, program_id)
        .map(|(address, bump)| DerivedAddress { address, bump })
        .ok_or(AuctionInterfaceError::AddressSpaceExhausted)
}

/// The leading bytes of the title that take part in the auction seeds.
pub fn title_seed(title: &str) -> &[u8] {
    let bytes = title.as_bytes();
    &bytes[..bytes.len().min(MAX_TITLE_SEED_LEN)]
}

pub fn auction_seeds<'a>(owner: &'a Pubkey, title: &'a str) -> [&'a [u8]; 3] {
    [AUCTION_SEED_TAG, owner.as_ref(), title_seed(title)]
}

pub fn associated_token_seeds<'a>(owner: &'a Pubkey, mint: &'a Pubkey) -> [&'a [u8]; 3] {
    [owner.as_ref(), TOKEN_PROGRAM.as_ref(), mint.as_ref()]
}

pub fn auction_address(
    owner: &Pubkey,
    title: &str,
    program_id: &Pubkey,
) -> Result<DerivedAddress, AuctionInterfaceError> {
    derive(&auction_seeds(owner, title), program_id)
}

/// Address of the token account holding `mint` on behalf of `owner`.
pub fn associated_token_address(
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<Pubkey, AuctionInterfaceError> {
    derive(&associated_token_seeds(owner, mint), &ATA_ID).map(|derived| derived.address)
}

#[cfg(test)]
mod test {
    use super::*;
    use spl_associated_token_account::get_associated_token_address;

    #[test]
    fn derivation_is_deterministic() {
        let owner = Pubkey::new_unique();
        let first = auction_address(&owner, "My Auction", &crate::ID).unwrap();
        let second = auction_address(&owner, "My Auction", &crate::ID).unwrap();
        assert_eq!(first, second);

        let (expected, bump) =
            Pubkey::find_program_address(&auction_seeds(&owner, "My Auction"), &crate::ID);
        assert_eq!(first.address, expected);
        assert_eq!(first.bump, bump);
    }

    #[test]
    fn derivation_is_seed_sensitive() {
        let owner = Pubkey::new_unique();
        let base = auction_address(&owner, "My Auction", &crate::ID).unwrap();
        let other_title = auction_address(&owner, "My Auctioo", &crate::ID).unwrap();
        assert_ne!(base.address, other_title.address);

        let mut owner_bytes = owner.to_bytes();
        owner_bytes[31] ^= 1;
        let other_owner = Pubkey::new_from_array(owner_bytes);
        let flipped = auction_address(&other_owner, "My Auction", &crate::ID).unwrap();
        assert_ne!(base.address, flipped.address);

        let other_program = auction_address(&owner, "My Auction", &Pubkey::new_unique()).unwrap();
        assert_ne!(base.address, other_program.address);
    }

    #[test]
    fn long_titles_are_truncated() {
        let owner = Pubkey::new_unique();
        let title = "X".repeat(MAX_TITLE_SEED_LEN);
        let longer = format!("{}and then some", title);
        assert_eq!(title_seed(&longer).len(), MAX_TITLE_SEED_LEN);
        assert_eq!(
            auction_address(&owner, &title, &crate::ID).unwrap(),
            auction_address(&owner, &longer, &crate::ID).unwrap()
        );
        assert_eq!(title_seed("short"), b"short");
    }

    #[test]
    fn associated_token_address_matches_spl() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        assert_eq!(
            associated_token_address(&owner, &mint).unwrap(),
            get_associated_token_address(&owner, &mint)
        );
    }

    #[test]
    fn associated_token_address_is_injective() {
        let owner = Pubkey::new_unique();
        let mint_a = Pubkey::new_unique();
        let mint_b = Pubkey::new_unique();
        assert_ne!(
            associated_token_address(&owner, &mint_a).unwrap(),
            associated_token_address(&owner, &mint_b).unwrap()
        );
    }
}
