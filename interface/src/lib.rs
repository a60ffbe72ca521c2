//! Client-side view of the open auction program deployed on
//! [Solana](https://solana.com/): the addresses it derives, the record it
//! stores and the instructions it accepts.
mod error;

/// Instructions accepted by the auction program and their factories.
pub mod instruction;
/// Program Derived Addresses used by the auction program.
pub mod pda;
/// Data structures that describe an auction's on-chain state.
pub mod state;
/// Settlement tokens and the scaling of human amounts into base units.
pub mod token;

pub use error::AuctionInterfaceError;
pub use solana_program;
pub use spl_associated_token_account;
pub use spl_token;

use solana_program::hash::hash;

solana_program::declare_id!("3VwUm7B1u5VDonuwP4NXQVkkkam3NGpAuKanChxkRDAQ");

/// Length of the discriminator prefixing both account data and instruction
/// data.
pub const DISCRIMINATOR_LEN: usize = 8;
/// Bytes allocated for an auction account apart from its bid slots
/// (discriminator included).
pub const AUCTION_BASE_LEN: usize = DISCRIMINATOR_LEN + 367;
/// Bytes allocated for a single bid slot.
pub const BID_SLOT_LEN: usize = 40;
/// Absolute offset of the auction owner in the account data.
pub const OWNER_OFFSET: usize = DISCRIMINATOR_LEN;
/// Absolute offset of the auctioned item's mint in the account data.
pub const ITEM_MINT_OFFSET: usize = 40;
/// Maximum number of title bytes taking part in the auction seeds.
pub const MAX_TITLE_SEED_LEN: usize = 32;
/// Maximum number of title bytes an auction account can hold next to the
/// fixed size fields.
pub const MAX_TITLE_LEN: usize = 165;

/// First eight bytes of `sha256("<namespace>:<name>")`.
///
/// Accounts are tagged with the `account` namespace and the struct name,
/// instructions with the `global` namespace and the handler name.
pub fn discriminator(namespace: &str, name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let preimage = format!("{}:{}", namespace, name);
    let mut tag = [0u8; DISCRIMINATOR_LEN];
    tag.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..DISCRIMINATOR_LEN]);
    tag
}
