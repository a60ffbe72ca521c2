use solana_sdk::clock::UnixTimestamp;
use solana_sdk::pubkey::Pubkey;
use std::path::PathBuf;
use structopt::StructOpt;

#[allow(unused)]
#[derive(Debug, StructOpt)]
#[structopt(about = "Drive open auctions on a Solana cluster (default = devnet)")]
pub struct AuctionCliOpt {
    #[structopt(
        long,
        short = "-l",
        help("Sets connection url to localhost"),
        conflicts_with("mainnet"),
        conflicts_with("devnet")
    )]
    pub localnet: bool,
    #[structopt(
        long,
        short = "-d",
        help("Sets connection url to devnet"),
        conflicts_with("mainnet"),
        conflicts_with("localnet")
    )]
    pub devnet: bool,
    #[structopt(
        long,
        short = "-m",
        help("Sets connection url to mainnet"),
        requires("keypair")
    )]
    pub mainnet: bool,
    #[structopt(long, help("Signing keypair file (default = ~/.config/solana/id.json)"))]
    pub keypair: Option<PathBuf>,
    #[structopt(long, help("Address of the deployed auction program"))]
    pub program_id: Option<Pubkey>,
    #[structopt(long, help("Seconds to wait for a transaction to be confirmed"))]
    pub timeout: Option<u64>,
    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    #[structopt(about = "Put an item up for auction")]
    Create {
        #[structopt(long, help("Mint of the auctioned item"))]
        item: Pubkey,
        #[structopt(long)]
        title: String,
        #[structopt(long, help("Minimum bid in settlement tokens"))]
        floor: f64,
        #[structopt(long, help("Minimum raise over the highest bid"))]
        increment: f64,
        #[structopt(long, default_value = "5")]
        bidder_cap: u64,
        #[structopt(long, help("Start timestamp [s]"))]
        start: UnixTimestamp,
        #[structopt(long, help("End timestamp [s]"))]
        end: UnixTimestamp,
        #[structopt(long, default_value = "1", help("Number of item tokens"))]
        amount: u64,
        #[structopt(long, default_value = "0", help("Settlement token selector"))]
        token: u64,
    },
    #[structopt(about = "Cancel an auction")]
    Cancel { auction: Pubkey },
    #[structopt(about = "Bid on an auction")]
    Bid { auction: Pubkey, amount: f64 },
    #[structopt(about = "Take back an outbid bid")]
    ReclaimBid { auction: Pubkey },
    #[structopt(about = "Take back an unsold item")]
    ReclaimItem { auction: Pubkey },
    #[structopt(about = "Collect the won item")]
    WithdrawItem { auction: Pubkey },
    #[structopt(about = "Collect the winning bid")]
    WithdrawWinningBid { auction: Pubkey },
    #[structopt(about = "Print the state of an auction")]
    Show { auction: Pubkey },
    #[structopt(about = "Look an auction up by its item and bidder cap")]
    Find {
        #[structopt(long)]
        item: Pubkey,
        #[structopt(long, default_value = "5")]
        bidder_cap: u64,
    },
    #[structopt(about = "Derive the address of an auction")]
    Address {
        #[structopt(long, help("Auction owner (default = signing keypair)"))]
        owner: Option<Pubkey>,
        #[structopt(long)]
        title: String,
    },
}
