use open_auction_interface::token::{SettlementToken, DEVNET_SETTLEMENT_MINT};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use std::time::Duration;

pub const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Parameters supplied by whoever bootstraps the client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Address of the deployed auction program.
    pub program_id: Pubkey,
    /// Mints of the settlement tokens, indexed by their selector.
    pub settlement_mints: [Pubkey; 2],
    /// Finality level a submitted transaction has to reach.
    pub commitment: CommitmentConfig,
    /// How long to wait for `commitment` before giving up.
    pub confirmation_timeout: Duration,
    /// Delay between two signature status queries.
    pub poll_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            program_id: open_auction_interface::ID,
            settlement_mints: [DEVNET_SETTLEMENT_MINT, DEVNET_SETTLEMENT_MINT],
            commitment: CommitmentConfig::confirmed(),
            confirmation_timeout: DEFAULT_CONFIRMATION_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl ClientConfig {
    pub fn settlement_mint(&self, token: SettlementToken) -> Pubkey {
        self.settlement_mints[token.index() as usize]
    }
}
