use crate::ledger::Ledger;
use crate::token_account::{account_exists, resolve};
use crate::AuctionClientError;
use log::debug;
use open_auction_interface::spl_associated_token_account::instruction::create_associated_token_account;
use open_auction_interface::spl_token::ID as TOKEN_ID;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use std::collections::HashSet;

/// Token accounts that have to be created before an action can execute.
#[derive(Debug, Default)]
pub struct ProvisionPlan {
    /// Creation instructions, to be submitted ahead of the action itself.
    pub instructions: Vec<Instruction>,
    /// The beneficiary's token account for each requested mint, in the order
    /// the mints were given.
    pub token_accounts: Vec<Pubkey>,
}

impl ProvisionPlan {
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Plans the creation of the beneficiary's missing token accounts, paid for
/// by `wallet`. When the two differ, the wallet's own token accounts are
/// planned as well. Nothing is submitted.
pub fn plan_creations<L: Ledger + ?Sized>(
    ledger: &L,
    wallet: &Pubkey,
    beneficiary: &Pubkey,
    mints: &[Pubkey],
) -> Result<ProvisionPlan, AuctionClientError> {
    let mut plan = ProvisionPlan::default();
    let mut planned = HashSet::new();

    for mint in mints {
        let token_account =
            ensure_account(ledger, &mut plan, &mut planned, wallet, beneficiary, mint)?;
        plan.token_accounts.push(token_account);
        if wallet != beneficiary {
            ensure_account(ledger, &mut plan, &mut planned, wallet, wallet, mint)?;
        }
    }

    Ok(plan)
}

fn ensure_account<L: Ledger + ?Sized>(
    ledger: &L,
    plan: &mut ProvisionPlan,
    planned: &mut HashSet<Pubkey>,
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<Pubkey, AuctionClientError> {
    let token_account = resolve(owner, mint)?;
    // the same account may be requested twice, it can only be created once
    if planned.contains(&token_account) || account_exists(ledger, &token_account)? {
        return Ok(token_account);
    }
    debug!(
        "token account {} of {} for mint {} will be created",
        token_account, owner, mint
    );
    plan.instructions
        .push(create_associated_token_account(payer, owner, mint, &TOKEN_ID));
    planned.insert(token_account);
    Ok(token_account)
}
