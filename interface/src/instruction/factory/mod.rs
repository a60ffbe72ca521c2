mod cancel_auction;
mod create_auction;
mod place_bid;
mod reclaim_bid;
mod reclaim_item;
mod withdraw_item;
mod withdraw_winning_bid;

pub use cancel_auction::*;
pub use create_auction::*;
pub use place_bid::*;
pub use reclaim_bid::*;
pub use reclaim_item::*;
pub use withdraw_item::*;
pub use withdraw_winning_bid::*;

use super::{CreateOpenAuctionData, OpenAuctionInstruction};
use crate::error::AuctionInterfaceError;
use crate::pda::DerivedAddress;
use crate::token::SettlementToken;

use solana_program::clock::UnixTimestamp;
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;
use solana_program::system_program::ID as SYS_ID;
use solana_program::sysvar::rent::ID as RENT_ID;
use spl_associated_token_account::ID as ATA_ID;
use spl_token::ID as TOKEN_ID;
