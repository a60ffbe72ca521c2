use super::*;

pub struct ReclaimBidArgs {
    pub bidder_pubkey: Pubkey,
    pub bidder_token_account: Pubkey,
    pub auction_pubkey: Pubkey,
    pub auction_token_account: Pubkey,
}

pub fn reclaim_bid(
    program_id: &Pubkey,
    args: &ReclaimBidArgs,
) -> Result<Instruction, AuctionInterfaceError> {
    let accounts = vec![
        AccountMeta::new(args.auction_pubkey, false),
        AccountMeta::new(args.auction_token_account, false),
        AccountMeta::new(args.bidder_pubkey, true),
        AccountMeta::new(args.bidder_token_account, false),
        AccountMeta::new_readonly(TOKEN_ID, false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: OpenAuctionInstruction::ReclaimOpenBid.pack()?,
    })
}
