use super::*;

pub struct PlaceBidArgs {
    pub bidder_pubkey: Pubkey,
    pub bidder_token_account: Pubkey,
    pub auction_pubkey: Pubkey,
    pub auction_token_account: Pubkey,
    pub settlement_mint: Pubkey,
    /// Bid amount in base units of the settlement token.
    pub amount: u64,
}

pub fn place_bid(
    program_id: &Pubkey,
    args: &PlaceBidArgs,
) -> Result<Instruction, AuctionInterfaceError> {
    let accounts = vec![
        AccountMeta::new(args.auction_pubkey, false),
        AccountMeta::new(args.auction_token_account, false),
        AccountMeta::new(args.bidder_pubkey, true),
        AccountMeta::new(args.bidder_token_account, false),
        AccountMeta::new_readonly(args.settlement_mint, false),
        AccountMeta::new_readonly(SYS_ID, false),
        AccountMeta::new_readonly(TOKEN_ID, false),
        AccountMeta::new_readonly(ATA_ID, false),
        AccountMeta::new_readonly(RENT_ID, false),
    ];

    let instruction = OpenAuctionInstruction::MakeOpenBid {
        amount: args.amount,
    };

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack()?,
    })
}
