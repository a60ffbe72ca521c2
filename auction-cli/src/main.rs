mod cli_opts;
mod cli_utils;

use cli_opts::{AuctionCliOpt, Command};
use cli_utils::*;

use open_auction_client::open_auction_interface::state::AuctionRecord;
use open_auction_client::open_auction_interface::token::SettlementToken;
use open_auction_client::{AuctionClient, ClientConfig, CreateAuctionParams};

use env_logger::Env;
use log::{error, info};

use solana_client::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signer::keypair::Keypair;
use solana_sdk::signer::Signer;
use std::time::Duration;
use structopt::StructOpt;

pub fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let opt = AuctionCliOpt::from_args();
    if let Err(e) = try_main(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn try_main(opt: AuctionCliOpt) -> Result<(), anyhow::Error> {
    let mut config = ClientConfig::default();
    if let Some(program_id) = opt.program_id {
        config.program_id = program_id;
    }
    if let Some(timeout) = opt.timeout {
        config.confirmation_timeout = Duration::from_secs(timeout);
    }

    let connection_url = cluster_url(opt.localnet, opt.mainnet);
    let connection = RpcClient::new_with_commitment(connection_url.to_owned(), config.commitment);
    let payer = parse_keypair(opt.keypair)?;
    info!("connected to {} as {}", connection_url, payer.pubkey());

    let client = AuctionClient::new(connection, payer, config);
    dispatch(&client, opt.command)
}

fn dispatch(client: &AuctionClient<RpcClient, Keypair>, command: Command) -> Result<(), anyhow::Error> {
    let signature = match command {
        Command::Create {
            item,
            title,
            floor,
            increment,
            bidder_cap,
            start,
            end,
            amount,
            token,
        } => {
            let auction = client.auction_address(&client.payer_pubkey(), &title)?;
            let params = CreateAuctionParams {
                item_mint: item,
                title,
                floor,
                increment,
                bidder_cap,
                start_time: start,
                end_time: end,
                amount,
                settlement_token: token,
            };
            let signature = client.create_auction(&params)?;
            info!("auction {} created", auction);
            signature
        }
        Command::Cancel { auction } => client.cancel_auction(&auction)?,
        Command::Bid { auction, amount } => client.place_bid(&auction, amount)?,
        Command::ReclaimBid { auction } => client.reclaim_bid(&auction)?,
        Command::ReclaimItem { auction } => client.reclaim_item(&auction)?,
        Command::WithdrawItem { auction } => client.withdraw_item(&auction)?,
        Command::WithdrawWinningBid { auction } => client.withdraw_winning_bid(&auction)?,
        Command::Show { auction } => {
            match client.auction_state(&auction)? {
                Some(record) => print_auction(&auction, &record),
                None => info!("no auction at {}", auction),
            }
            return Ok(());
        }
        Command::Find { item, bidder_cap } => {
            match client.find_auction(&item, bidder_cap)? {
                Some(auction) => info!("auction of {} found at {}", item, auction),
                None => info!("no auction of {} with bidder cap {}", item, bidder_cap),
            }
            return Ok(());
        }
        Command::Address { owner, title } => {
            let owner = owner.unwrap_or_else(|| client.payer_pubkey());
            info!("{}", client.auction_address(&owner, &title)?);
            return Ok(());
        }
    };
    info!("confirmed {}", signature);
    Ok(())
}

fn print_auction(auction: &Pubkey, record: &AuctionRecord) {
    info!("auction {} \"{}\" ({:?})", auction, record.title, record.status);
    info!("owner: {}", record.owner);
    info!("item: {} x {}", record.amount, record.mint);
    info!("time: {} - {} [s]", record.start_time, record.end_time);
    info!("bidders: {} / {}", record.bids.len(), record.bidder_cap);
    match SettlementToken::try_from(record.spl_token) {
        Ok(token) => {
            info!("floor: {}", token.to_human(record.floor));
            info!("highest bid: {}", token.to_human(record.highest_bid));
        }
        Err(e) => info!("{}", e),
    }
    if let Some(bidder) = record.top_bidder() {
        info!("highest bidder: {}", bidder);
    }
}
