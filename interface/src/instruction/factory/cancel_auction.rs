use super::*;

pub struct CancelAuctionArgs {
    pub owner_pubkey: Pubkey,
    pub auction_pubkey: Pubkey,
}

pub fn cancel_auction(
    program_id: &Pubkey,
    args: &CancelAuctionArgs,
) -> Result<Instruction, AuctionInterfaceError> {
    let accounts = vec![
        AccountMeta::new(args.auction_pubkey, false),
        AccountMeta::new(args.owner_pubkey, true),
        AccountMeta::new_readonly(SYS_ID, false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: OpenAuctionInstruction::CancelOpenAuction.pack()?,
    })
}
