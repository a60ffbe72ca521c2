use crate::get_auction::{find_auction, get_auction};
use crate::ledger::Ledger;
use crate::provision::plan_creations;
use crate::token_account::resolve;
use crate::{AuctionClientError, ClientConfig};

use log::{debug, info, warn};
use open_auction_interface::instruction::factory::*;
use open_auction_interface::pda::auction_address;
use open_auction_interface::state::AuctionRecord;
use open_auction_interface::token::{Scalar, SettlementToken, INCREMENT_TOKEN};
use open_auction_interface::MAX_TITLE_LEN;
use solana_sdk::clock::UnixTimestamp;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use std::convert::TryFrom;
use std::time::Instant;

/// Parameters of a new auction, amounts in human units.
#[derive(Clone, Debug)]
pub struct CreateAuctionParams {
    pub item_mint: Pubkey,
    pub title: String,
    pub floor: Scalar,
    pub increment: Scalar,
    pub bidder_cap: u64,
    pub start_time: UnixTimestamp,
    pub end_time: UnixTimestamp,
    /// Number of item tokens put up for auction.
    pub amount: u64,
    /// Selector of the settlement token.
    pub settlement_token: u64,
}

/// Builds, signs and submits auction actions on behalf of a single signing
/// identity, which acts as the owner, bidder or winner of each action.
///
/// Nothing is cached between calls: every action re-derives its addresses and
/// re-fetches the auction state it depends on, and nothing is retried.
pub struct AuctionClient<L, S> {
    ledger: L,
    payer: S,
    config: ClientConfig,
}

impl<L: Ledger, S: Signer> AuctionClient<L, S> {
    pub fn new(ledger: L, payer: S, config: ClientConfig) -> Self {
        Self {
            ledger,
            payer,
            config,
        }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub fn auction_address(&self, owner: &Pubkey, title: &str) -> Result<Pubkey, AuctionClientError> {
        Ok(auction_address(owner, title, &self.config.program_id)?.address)
    }

    pub fn auction_state(
        &self,
        auction_pubkey: &Pubkey,
    ) -> Result<Option<AuctionRecord>, AuctionClientError> {
        get_auction(&self.ledger, &self.config.program_id, auction_pubkey)
    }

    pub fn find_auction(
        &self,
        item_mint: &Pubkey,
        bidder_cap: u64,
    ) -> Result<Option<Pubkey>, AuctionClientError> {
        find_auction(&self.ledger, &self.config.program_id, item_mint, bidder_cap)
    }

    pub fn create_auction(
        &self,
        params: &CreateAuctionParams,
    ) -> Result<Signature, AuctionClientError> {
        let settlement_token = SettlementToken::try_from(params.settlement_token)?;
        if params.end_time <= params.start_time {
            return Err(AuctionClientError::BuildError(format!(
                "end time {} does not follow start time {}",
                params.end_time, params.start_time
            )));
        }
        if params.bidder_cap == 0 {
            return Err(AuctionClientError::BuildError(
                "bidder cap must be positive".to_owned(),
            ));
        }
        if params.title.len() > MAX_TITLE_LEN {
            return Err(AuctionClientError::BuildError(format!(
                "title is {} bytes long, at most {} fit",
                params.title.len(),
                MAX_TITLE_LEN
            )));
        }

        let owner = self.payer.pubkey();
        let auction = auction_address(&owner, &params.title, &self.config.program_id)?;
        let auction_token_account = resolve(&auction.address, &params.item_mint)?;
        let owner_token_account = resolve(&owner, &params.item_mint)?;
        debug!(
            "auction {} (bump {}), escrow {}",
            auction.address, auction.bump, auction_token_account
        );

        let args = CreateAuctionArgs {
            owner_pubkey: owner,
            owner_token_account,
            auction,
            auction_token_account,
            item_mint: params.item_mint,
            title: params.title.clone(),
            floor: settlement_token.to_base_units(params.floor)?,
            increment: INCREMENT_TOKEN.to_base_units(params.increment)?,
            start_time: params.start_time,
            end_time: params.end_time,
            bidder_cap: params.bidder_cap,
            amount: params.amount,
            settlement_token,
        };
        let instruction = create_auction(&self.config.program_id, &args)?;
        self.submit(vec![instruction])
    }

    pub fn cancel_auction(&self, auction_pubkey: &Pubkey) -> Result<Signature, AuctionClientError> {
        let args = CancelAuctionArgs {
            owner_pubkey: self.payer.pubkey(),
            auction_pubkey: *auction_pubkey,
        };
        let instruction = cancel_auction(&self.config.program_id, &args)?;
        self.submit(vec![instruction])
    }

    /// Places a bid of `amount` human units of the auction's settlement
    /// token.
    pub fn place_bid(
        &self,
        auction_pubkey: &Pubkey,
        amount: Scalar,
    ) -> Result<Signature, AuctionClientError> {
        let record = self.require_auction(auction_pubkey)?;
        let settlement_token = record.settlement_token()?;
        let settlement_mint = self.config.settlement_mint(settlement_token);
        let bidder = self.payer.pubkey();

        let args = PlaceBidArgs {
            bidder_pubkey: bidder,
            bidder_token_account: resolve(&bidder, &settlement_mint)?,
            auction_pubkey: *auction_pubkey,
            auction_token_account: resolve(auction_pubkey, &settlement_mint)?,
            settlement_mint,
            amount: settlement_token.to_base_units(amount)?,
        };
        let instruction = place_bid(&self.config.program_id, &args)?;
        self.submit(vec![instruction])
    }

    pub fn reclaim_bid(&self, auction_pubkey: &Pubkey) -> Result<Signature, AuctionClientError> {
        let record = self.require_auction(auction_pubkey)?;
        let settlement_mint = self.config.settlement_mint(record.settlement_token()?);
        let bidder = self.payer.pubkey();
        let plan = plan_creations(&self.ledger, &bidder, &bidder, &[settlement_mint])?;

        let args = ReclaimBidArgs {
            bidder_pubkey: bidder,
            bidder_token_account: plan.token_accounts[0],
            auction_pubkey: *auction_pubkey,
            auction_token_account: resolve(auction_pubkey, &settlement_mint)?,
        };
        let instruction = reclaim_bid(&self.config.program_id, &args)?;
        self.submit_with(plan.instructions, instruction)
    }

    /// Returns the unsold item to its owner.
    pub fn reclaim_item(&self, auction_pubkey: &Pubkey) -> Result<Signature, AuctionClientError> {
        let record = self.require_auction(auction_pubkey)?;
        let owner = self.payer.pubkey();
        let plan = plan_creations(&self.ledger, &owner, &owner, &[record.mint])?;

        let args = ReclaimItemArgs {
            owner_pubkey: owner,
            owner_token_account: plan.token_accounts[0],
            auction_pubkey: *auction_pubkey,
            auction_token_account: resolve(auction_pubkey, &record.mint)?,
            item_mint: record.mint,
        };
        let instruction = reclaim_item(&self.config.program_id, &args)?;
        self.submit_with(plan.instructions, instruction)
    }

    /// Transfers the item to the winning bidder.
    pub fn withdraw_item(&self, auction_pubkey: &Pubkey) -> Result<Signature, AuctionClientError> {
        let record = self.require_auction(auction_pubkey)?;
        let winner = self.payer.pubkey();
        let plan = plan_creations(&self.ledger, &winner, &winner, &[record.mint])?;

        let args = WithdrawItemArgs {
            winner_pubkey: winner,
            winner_token_account: plan.token_accounts[0],
            auction_pubkey: *auction_pubkey,
            auction_token_account: resolve(auction_pubkey, &record.mint)?,
            item_mint: record.mint,
        };
        let instruction = withdraw_item(&self.config.program_id, &args)?;
        self.submit_with(plan.instructions, instruction)
    }

    /// Transfers the winning bid to the auction owner.
    pub fn withdraw_winning_bid(
        &self,
        auction_pubkey: &Pubkey,
    ) -> Result<Signature, AuctionClientError> {
        let record = self.require_auction(auction_pubkey)?;
        let settlement_mint = self.config.settlement_mint(record.settlement_token()?);
        let owner = self.payer.pubkey();
        let plan = plan_creations(&self.ledger, &owner, &owner, &[settlement_mint])?;

        let args = WithdrawWinningBidArgs {
            owner_pubkey: owner,
            owner_token_account: plan.token_accounts[0],
            auction_pubkey: *auction_pubkey,
            auction_token_account: resolve(auction_pubkey, &settlement_mint)?,
        };
        let instruction = withdraw_winning_bid(&self.config.program_id, &args)?;
        self.submit_with(plan.instructions, instruction)
    }

    fn require_auction(&self, auction_pubkey: &Pubkey) -> Result<AuctionRecord, AuctionClientError> {
        self.auction_state(auction_pubkey)?
            .ok_or(AuctionClientError::NotFound)
    }

    fn submit_with(
        &self,
        mut instructions: Vec<Instruction>,
        action: Instruction,
    ) -> Result<Signature, AuctionClientError> {
        if !instructions.is_empty() {
            debug!("creating {} token account(s) first", instructions.len());
        }
        instructions.push(action);
        self.submit(instructions)
    }

    /// Signs and submits `instructions` as a single transaction, then blocks
    /// until it reaches the configured commitment.
    fn submit(&self, instructions: Vec<Instruction>) -> Result<Signature, AuctionClientError> {
        let payer = self.payer.pubkey();
        let latest_blockhash = self.ledger.latest_blockhash()?;

        let mut transaction = Transaction::new_with_payer(&instructions, Some(&payer));
        transaction
            .try_sign(&[&self.payer], latest_blockhash)
            .map_err(|e| AuctionClientError::BuildError(e.to_string()))?;

        let signature = self.ledger.submit(&transaction)?;
        info!("submitted transaction {}", signature);
        self.await_confirmation(&signature)?;
        Ok(signature)
    }

    fn await_confirmation(&self, signature: &Signature) -> Result<(), AuctionClientError> {
        let started = Instant::now();
        loop {
            // a failed status query leaves the outcome open until the timeout
            match self
                .ledger
                .signature_status(signature, self.config.commitment)
            {
                Ok(Some(Ok(()))) => {
                    info!(
                        "transaction {} reached {:?}",
                        signature, self.config.commitment.commitment
                    );
                    return Ok(());
                }
                Ok(Some(Err(e))) => {
                    return Err(AuctionClientError::TransactionFailed(format!(
                        "{}: {}",
                        signature, e
                    )))
                }
                Ok(None) => {}
                Err(e) => warn!("status of transaction {} unavailable: {}", signature, e),
            }
            if started.elapsed() >= self.config.confirmation_timeout {
                warn!(
                    "transaction {} not confirmed after {:?}",
                    signature, self.config.confirmation_timeout
                );
                return Err(AuctionClientError::ConfirmationTimeout(*signature));
            }
            std::thread::sleep(self.config.poll_interval);
        }
    }
}
