//! Client-side orchestration of the open auction program: resolves every
//! account an auction action touches, provisions missing token accounts,
//! submits the action and waits for it to settle.
mod config;
mod error;

/// Lookup of auction records by address or by item.
pub mod get_auction;
/// Opt-in local index of auction addresses.
pub mod index;
/// The ledger endpoint the client reads from and submits to.
pub mod ledger;
/// Auction actions built, signed and submitted end to end.
pub mod orchestrator;
/// Planning of token account creations.
pub mod provision;
/// Resolution of token accounts.
pub mod token_account;

pub use config::ClientConfig;
pub use error::AuctionClientError;
pub use open_auction_interface;
pub use orchestrator::{AuctionClient, CreateAuctionParams};
