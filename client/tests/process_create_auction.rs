use test_factory::*;

use open_auction_client::index::AuctionIndex;
use open_auction_client::open_auction_interface::state::AuctionStatus;
use open_auction_client::open_auction_interface::MAX_TITLE_LEN;
use open_auction_client::token_account::resolve;
use open_auction_client::AuctionClientError;
use solana_sdk::pubkey::Pubkey;

#[test]
fn test_process_create_auction() {
    let config = test_config();
    let ledger = test_ledger(&config);
    let owner = test_client(&ledger, &config);

    let (auction, item_mint) = create_sample_auction(&owner, &ledger);
    assert_eq!(ledger.submitted_count(), 1);

    let record = owner.auction_state(&auction).unwrap().unwrap();
    assert_eq!(record.owner, owner.payer_pubkey());
    assert_eq!(record.mint, item_mint);
    assert_eq!(record.title, "My Auction");
    // floor is scaled by the settlement token, the increment is not
    assert_eq!(record.floor, 1_000);
    assert_eq!(record.increment, 100_000_000_000);
    assert_eq!(record.bidder_cap, 5);
    assert_eq!(record.amount, 1);
    assert_eq!(record.spl_token, 0);
    assert_eq!(record.status, AuctionStatus::Active);
    assert!(record.end_time > record.start_time);
    assert_eq!(record.highest_bid, 0);
    assert_eq!(record.top_bidder(), None);
    assert_eq!(record.escrow, resolve(&auction, &item_mint).unwrap());
    assert!(ledger.has_account(&record.escrow));

    // the action is a single instruction, signed by the owner
    let instructions = ledger.last_instructions();
    assert_eq!(instructions.len(), 1);
    assert_eq!(instructions[0].program_id, config.program_id);
    assert_eq!(instructions[0].accounts[0], auction);
    assert_eq!(instructions[0].accounts[2], owner.payer_pubkey());
    assert_eq!(
        instructions[0].accounts[3],
        resolve(&owner.payer_pubkey(), &item_mint).unwrap()
    );
}

#[test]
fn test_find_auction_by_item() {
    let config = test_config();
    let ledger = test_ledger(&config);
    let owner = test_client(&ledger, &config);

    let (auction, item_mint) = create_sample_auction(&owner, &ledger);

    assert_eq!(owner.find_auction(&item_mint, 5).unwrap(), Some(auction));
    // the bidder cap is part of the account size
    assert_eq!(owner.find_auction(&item_mint, 4).unwrap(), None);
    assert_eq!(owner.find_auction(&item_mint, 6).unwrap(), None);
    // unrelated item
    assert_eq!(owner.find_auction(&Pubkey::new_unique(), 5).unwrap(), None);
    assert_eq!(
        owner.auction_state(&Pubkey::new_unique()).unwrap(),
        None
    );
}

#[test]
fn test_find_auction_with_ambiguous_item() {
    let config = test_config();
    let ledger = test_ledger(&config);
    let first_owner = test_client(&ledger, &config);
    let second_owner = test_client(&ledger, &config);

    let (first, item_mint) = create_sample_auction(&first_owner, &ledger);
    ledger.insert_token_account(&second_owner.payer_pubkey(), &item_mint);
    second_owner
        .create_auction(&sample_params(item_mint))
        .unwrap();
    let second = second_owner
        .auction_address(&second_owner.payer_pubkey(), "My Auction")
        .unwrap();
    assert_ne!(first, second);

    // either of them may be returned
    let found = first_owner.find_auction(&item_mint, 5).unwrap().unwrap();
    assert!(found == first || found == second);
}

#[test]
fn test_invalid_create_parameters() {
    let config = test_config();
    let ledger = test_ledger(&config);
    let owner = test_client(&ledger, &config);
    let item_mint = Pubkey::new_unique();

    let mut params = sample_params(item_mint);
    params.settlement_token = 2;
    assert_eq!(
        owner.create_auction(&params).err().unwrap(),
        AuctionClientError::UnsupportedTokenType(2)
    );

    let mut params = sample_params(item_mint);
    params.end_time = params.start_time;
    assert!(matches!(
        owner.create_auction(&params).err().unwrap(),
        AuctionClientError::BuildError(_)
    ));

    let mut params = sample_params(item_mint);
    params.bidder_cap = 0;
    assert!(matches!(
        owner.create_auction(&params).err().unwrap(),
        AuctionClientError::BuildError(_)
    ));

    let mut params = sample_params(item_mint);
    params.floor = -1.0;
    assert!(matches!(
        owner.create_auction(&params).err().unwrap(),
        AuctionClientError::BuildError(_)
    ));

    let mut params = sample_params(item_mint);
    params.increment = f64::NAN;
    assert!(matches!(
        owner.create_auction(&params).err().unwrap(),
        AuctionClientError::BuildError(_)
    ));

    let mut params = sample_params(item_mint);
    params.title = "X".repeat(MAX_TITLE_LEN + 1);
    assert!(matches!(
        owner.create_auction(&params).err().unwrap(),
        AuctionClientError::BuildError(_)
    ));

    // nothing reached the ledger
    assert_eq!(ledger.submitted_count(), 0);
}

#[test]
fn test_create_with_longest_title() {
    let config = test_config();
    let ledger = test_ledger(&config);
    let owner = test_client(&ledger, &config);
    let item_mint = Pubkey::new_unique();
    ledger.insert_token_account(&owner.payer_pubkey(), &item_mint);

    let mut params = sample_params(item_mint);
    params.title = "X".repeat(MAX_TITLE_LEN);
    owner.create_auction(&params).unwrap();

    let auction = owner
        .auction_address(&owner.payer_pubkey(), &params.title)
        .unwrap();
    let record = owner.auction_state(&auction).unwrap().unwrap();
    assert_eq!(record.title.len(), MAX_TITLE_LEN);
}

#[test]
fn test_create_with_secondary_token() {
    let config = test_config();
    let ledger = test_ledger(&config);
    let owner = test_client(&ledger, &config);
    let item_mint = Pubkey::new_unique();
    ledger.insert_token_account(&owner.payer_pubkey(), &item_mint);

    let mut params = sample_params(item_mint);
    params.title = "Secondary".to_owned();
    params.floor = 1.5;
    params.settlement_token = 1;
    owner.create_auction(&params).unwrap();

    let auction = owner
        .auction_address(&owner.payer_pubkey(), "Secondary")
        .unwrap();
    let record = owner.auction_state(&auction).unwrap().unwrap();
    assert_eq!(record.floor, 1_500_000_000);
    assert_eq!(record.increment, 100_000_000_000);
    assert_eq!(record.spl_token, 1);
}

#[test]
fn test_duplicate_auction_fails() {
    let config = test_config();
    let ledger = test_ledger(&config);
    let owner = test_client(&ledger, &config);

    let (_auction, item_mint) = create_sample_auction(&owner, &ledger);
    let error = owner.create_auction(&sample_params(item_mint)).err().unwrap();
    assert!(matches!(error, AuctionClientError::TransactionFailed(_)));
    assert_eq!(ledger.submitted_count(), 2);
}

#[test]
fn test_process_cancel_auction() {
    let config = test_config();
    let ledger = test_ledger(&config);
    let owner = test_client(&ledger, &config);

    let (auction, item_mint) = create_sample_auction(&owner, &ledger);
    owner.cancel_auction(&auction).unwrap();

    let instructions = ledger.last_instructions();
    assert_eq!(instructions.len(), 1);
    assert_eq!(
        instructions[0].accounts,
        vec![
            auction,
            owner.payer_pubkey(),
            solana_sdk::system_program::ID
        ]
    );
    assert_eq!(owner.auction_state(&auction).unwrap(), None);
    assert_eq!(owner.find_auction(&item_mint, 5).unwrap(), None);

    // the title is free again
    owner.create_auction(&sample_params(item_mint)).unwrap();
    assert!(owner.auction_state(&auction).unwrap().is_some());
}

#[test]
fn test_auction_index() {
    let config = test_config();
    let ledger = test_ledger(&config);
    let owner = test_client(&ledger, &config);
    let (auction, item_mint) = create_sample_auction(&owner, &ledger);

    let mut index = AuctionIndex::new();
    assert!(index.is_empty());
    assert_eq!(
        index
            .resolve(ledger.as_ref(), &config.program_id, &item_mint, 5)
            .unwrap(),
        Some(auction)
    );
    assert_eq!(index.len(), 1);
    assert_eq!(index.get(&item_mint, 5), Some(auction));

    // misses are not recorded
    assert_eq!(
        index
            .resolve(ledger.as_ref(), &config.program_id, &item_mint, 7)
            .unwrap(),
        None
    );
    assert_eq!(index.len(), 1);

    // recorded entries take precedence over the scan
    let recorded = Pubkey::new_unique();
    assert_eq!(index.insert(item_mint, 5, recorded), Some(auction));
    assert_eq!(
        index
            .resolve(ledger.as_ref(), &config.program_id, &item_mint, 5)
            .unwrap(),
        Some(recorded)
    );
    assert_eq!(index.remove(&item_mint, 5), Some(recorded));
    assert!(index.is_empty());
}
