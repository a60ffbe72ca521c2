pub mod factory;

use crate::error::AuctionInterfaceError;
use crate::{discriminator, DISCRIMINATOR_LEN};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::clock::UnixTimestamp;

/// Arguments of the `create_open_auction` handler.
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq)]
pub struct CreateOpenAuctionData {
    pub bump: u8,
    pub title: String,
    pub floor: u64,
    pub increment: u64,
    pub start_time: UnixTimestamp,
    pub end_time: UnixTimestamp,
    pub bidder_cap: u64,
    pub amount: u64,
    pub spl_token: u64,
}

/// Instructions of the auction program. Each is encoded as the handler's
/// discriminator followed by its borsh-encoded arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum OpenAuctionInstruction {
    CreateOpenAuction(CreateOpenAuctionData),
    CancelOpenAuction,
    MakeOpenBid { amount: u64 },
    ReclaimOpenBid,
    WithdrawItemOpen,
    WithdrawWinningBidOpen,
    ReclaimItemOpen,
}

const HANDLERS: [&str; 7] = [
    "create_open_auction",
    "cancel_open_auction",
    "make_open_bid",
    "reclaim_open_bid",
    "withdraw_item_open",
    "withdraw_winning_bid_open",
    "reclaim_item_open",
];

impl OpenAuctionInstruction {
    /// Name of the program handler processing this instruction.
    pub fn handler_name(&self) -> &'static str {
        match self {
            Self::CreateOpenAuction(_) => HANDLERS[0],
            Self::CancelOpenAuction => HANDLERS[1],
            Self::MakeOpenBid { .. } => HANDLERS[2],
            Self::ReclaimOpenBid => HANDLERS[3],
            Self::WithdrawItemOpen => HANDLERS[4],
            Self::WithdrawWinningBidOpen => HANDLERS[5],
            Self::ReclaimItemOpen => HANDLERS[6],
        }
    }

    pub fn pack(&self) -> Result<Vec<u8>, AuctionInterfaceError> {
        let mut data = discriminator("global", self.handler_name()).to_vec();
        match self {
            Self::CreateOpenAuction(args) => args.serialize(&mut data)?,
            Self::MakeOpenBid { amount } => amount.serialize(&mut data)?,
            _ => {}
        }
        Ok(data)
    }

    pub fn unpack(data: &[u8]) -> Result<Self, AuctionInterfaceError> {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(AuctionInterfaceError::Serialization(
                "instruction data is shorter than its discriminator".to_owned(),
            ));
        }
        let (tag, mut args) = data.split_at(DISCRIMINATOR_LEN);
        let handler = HANDLERS
            .iter()
            .find(|name| discriminator("global", name) == tag)
            .ok_or_else(|| {
                AuctionInterfaceError::Serialization("unknown instruction discriminator".to_owned())
            })?;
        let instruction = match *handler {
            "create_open_auction" => {
                Self::CreateOpenAuction(CreateOpenAuctionData::deserialize(&mut args)?)
            }
            "cancel_open_auction" => Self::CancelOpenAuction,
            "make_open_bid" => Self::MakeOpenBid {
                amount: u64::deserialize(&mut args)?,
            },
            "reclaim_open_bid" => Self::ReclaimOpenBid,
            "withdraw_item_open" => Self::WithdrawItemOpen,
            "withdraw_winning_bid_open" => Self::WithdrawWinningBidOpen,
            _ => Self::ReclaimItemOpen,
        };
        Ok(instruction)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bid_encoding() {
        let data = OpenAuctionInstruction::MakeOpenBid { amount: 1100 }
            .pack()
            .unwrap();
        assert_eq!(data.len(), 16);
        assert_eq!(&data[..8], &discriminator("global", "make_open_bid"));
        assert_eq!(&data[8..], &1100u64.to_le_bytes());
    }

    #[test]
    fn argumentless_instructions_carry_only_the_discriminator() {
        for instruction in [
            OpenAuctionInstruction::CancelOpenAuction,
            OpenAuctionInstruction::ReclaimOpenBid,
            OpenAuctionInstruction::WithdrawItemOpen,
            OpenAuctionInstruction::WithdrawWinningBidOpen,
            OpenAuctionInstruction::ReclaimItemOpen,
        ] {
            let data = instruction.pack().unwrap();
            assert_eq!(data.len(), DISCRIMINATOR_LEN);
            assert_eq!(OpenAuctionInstruction::unpack(&data).unwrap(), instruction);
        }
    }

    #[test]
    fn create_encoding() {
        let args = CreateOpenAuctionData {
            bump: 255,
            title: "My Auction".to_owned(),
            floor: 1000,
            increment: 100_000_000_000,
            start_time: 10,
            end_time: 20,
            bidder_cap: 5,
            amount: 1,
            spl_token: 0,
        };
        let data = OpenAuctionInstruction::CreateOpenAuction(args.clone())
            .pack()
            .unwrap();
        assert_eq!(data[8], 255);
        assert_eq!(&data[9..13], &10u32.to_le_bytes());
        assert_eq!(&data[13..23], b"My Auction");
        assert_eq!(&data[23..31], &1000u64.to_le_bytes());
        assert_eq!(
            OpenAuctionInstruction::unpack(&data).unwrap(),
            OpenAuctionInstruction::CreateOpenAuction(args)
        );
    }

    #[test]
    fn unknown_discriminator_is_rejected() {
        assert!(OpenAuctionInstruction::unpack(&[0u8; 8]).is_err());
        assert!(OpenAuctionInstruction::unpack(&[1, 2, 3]).is_err());
    }
}
