use super::*;

pub struct WithdrawWinningBidArgs {
    pub owner_pubkey: Pubkey,
    pub owner_token_account: Pubkey,
    pub auction_pubkey: Pubkey,
    pub auction_token_account: Pubkey,
}

// NOTE the owner precedes the escrow here, unlike in every other handler
pub fn withdraw_winning_bid(
    program_id: &Pubkey,
    args: &WithdrawWinningBidArgs,
) -> Result<Instruction, AuctionInterfaceError> {
    let accounts = vec![
        AccountMeta::new(args.auction_pubkey, false),
        AccountMeta::new(args.owner_pubkey, true),
        AccountMeta::new(args.auction_token_account, false),
        AccountMeta::new(args.owner_token_account, false),
        AccountMeta::new_readonly(TOKEN_ID, false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: OpenAuctionInstruction::WithdrawWinningBidOpen.pack()?,
    })
}
