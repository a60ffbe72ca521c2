use super::*;

pub struct WithdrawItemArgs {
    pub winner_pubkey: Pubkey,
    pub winner_token_account: Pubkey,
    pub auction_pubkey: Pubkey,
    pub auction_token_account: Pubkey,
    pub item_mint: Pubkey,
}

pub fn withdraw_item(
    program_id: &Pubkey,
    args: &WithdrawItemArgs,
) -> Result<Instruction, AuctionInterfaceError> {
    let accounts = vec![
        AccountMeta::new(args.auction_pubkey, false),
        AccountMeta::new(args.auction_token_account, false),
        AccountMeta::new(args.winner_pubkey, true),
        AccountMeta::new(args.winner_token_account, false),
        AccountMeta::new_readonly(args.item_mint, false),
        AccountMeta::new_readonly(TOKEN_ID, false),
        AccountMeta::new_readonly(ATA_ID, false),
        AccountMeta::new_readonly(SYS_ID, false),
        AccountMeta::new_readonly(RENT_ID, false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: OpenAuctionInstruction::WithdrawItemOpen.pack()?,
    })
}
