use crate::AuctionInterfaceError;
use solana_program::pubkey;
use solana_program::pubkey::Pubkey;
use std::convert::TryFrom;

pub type Scalar = f64;

/// Settlement mint deployed on devnet, used for both token slots unless
/// configured otherwise.
pub const DEVNET_SETTLEMENT_MINT: Pubkey = pubkey!("AsACVnuMa5jpmfp3BjArmb2qWg5A6HBkuXePwT37RrLY");

/// Bid increments are scaled with this token's decimals regardless of the
/// auction's settlement token.
// TODO: scale with the auction's own settlement token once the program's
// handler for `create_open_auction` confirms which unit it expects
pub const INCREMENT_TOKEN: SettlementToken = SettlementToken::Secondary;

/// Token types an auction may be settled in, indexed by the selector stored
/// in the auction record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettlementToken {
    Primary,
    Secondary,
}

impl SettlementToken {
    pub const ALL: [SettlementToken; 2] = [SettlementToken::Primary, SettlementToken::Secondary];

    pub fn index(self) -> u64 {
        match self {
            SettlementToken::Primary => 0,
            SettlementToken::Secondary => 1,
        }
    }

    /// Base units in a single human unit.
    pub fn decimal_factor(self) -> u64 {
        match self {
            SettlementToken::Primary => 100,
            SettlementToken::Secondary => 1_000_000_000,
        }
    }

    pub fn to_base_units(self, amount: Scalar) -> Result<u64, AuctionInterfaceError> {
        let scaled = (amount * self.decimal_factor() as Scalar).round();
        if !scaled.is_finite() || scaled < 0.0 || scaled >= u64::MAX as Scalar {
            return Err(AuctionInterfaceError::InvalidAmount(amount));
        }
        Ok(scaled as u64)
    }

    pub fn to_human(self, amount: u64) -> Scalar {
        amount as Scalar / self.decimal_factor() as Scalar
    }
}

impl TryFrom<u64> for SettlementToken {
    type Error = AuctionInterfaceError;
    fn try_from(index: u64) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(SettlementToken::Primary),
            1 => Ok(SettlementToken::Secondary),
            _ => Err(AuctionInterfaceError::UnsupportedTokenType(index)),
        }
    }
}
