use super::*;

pub struct CreateAuctionArgs {
    pub owner_pubkey: Pubkey,
    pub owner_token_account: Pubkey,
    pub auction: DerivedAddress,
    pub auction_token_account: Pubkey,
    pub item_mint: Pubkey,
    pub title: String,
    pub floor: u64,
    pub increment: u64,
    pub start_time: UnixTimestamp,
    pub end_time: UnixTimestamp,
    pub bidder_cap: u64,
    pub amount: u64,
    pub settlement_token: SettlementToken,
}

pub fn create_auction(
    program_id: &Pubkey,
    args: &CreateAuctionArgs,
) -> Result<Instruction, AuctionInterfaceError> {
    let accounts = vec![
        AccountMeta::new(args.auction.address, false),
        AccountMeta::new(args.auction_token_account, false),
        AccountMeta::new(args.owner_pubkey, true),
        AccountMeta::new(args.owner_token_account, false),
        AccountMeta::new_readonly(args.item_mint, false),
        AccountMeta::new_readonly(TOKEN_ID, false),
        AccountMeta::new_readonly(ATA_ID, false),
        AccountMeta::new_readonly(SYS_ID, false),
        AccountMeta::new_readonly(RENT_ID, false),
    ];

    let instruction = OpenAuctionInstruction::CreateOpenAuction(CreateOpenAuctionData {
        bump: args.auction.bump,
        title: args.title.clone(),
        floor: args.floor,
        increment: args.increment,
        start_time: args.start_time,
        end_time: args.end_time,
        bidder_cap: args.bidder_cap,
        amount: args.amount,
        spl_token: args.settlement_token.index(),
    });

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack()?,
    })
}
