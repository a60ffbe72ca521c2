use anyhow::anyhow;
use solana_sdk::signer::keypair::{read_keypair_file, Keypair};
use std::path::PathBuf;

pub const DEFAULT_KEYPAIR_PATH: &str = ".config/solana/id.json";

/// Reads the keypair at `keypair`, falling back to the Solana CLI's default
/// keypair in the home directory.
pub fn parse_keypair(keypair: Option<PathBuf>) -> Result<Keypair, anyhow::Error> {
    let keypair_path = match keypair {
        Some(path) => path,
        None => {
            let home = std::env::var_os("HOME").ok_or_else(|| anyhow!("HOME is not set"))?;
            PathBuf::from(home).join(DEFAULT_KEYPAIR_PATH)
        }
    };
    read_keypair_file(&keypair_path)
        .map_err(|e| anyhow!("failed to read keypair {}: {}", keypair_path.display(), e))
}

pub fn cluster_url(localnet: bool, mainnet: bool) -> &'static str {
    if mainnet {
        "https://api.mainnet-beta.solana.com"
    } else if localnet {
        "http://localhost:8899"
    } else {
        "https://api.devnet.solana.com"
    }
}
