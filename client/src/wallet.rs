use std::thread;
use std::time::Duration;

use anchor_client::{
    solana_client::rpc_client::RpcClient,
    solana_sdk::{
        native_token::lamports_to_sol,
        pubkey::Pubkey,
        signature::Keypair,
        signer::SeedDerivable,
    },
};
use tracing::{debug, info};

use crate::{QuestError, Result};

/// How long to wait for an airdrop to land.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        PollConfig {
            attempts: 120,
            interval: Duration::from_millis(500),
        }
    }
}

/// Deterministic keypair for a seed phrase with an empty passphrase.
pub fn seeded_payer(seed_phrase: &str) -> Result<Keypair> {
    Keypair::from_seed_phrase_and_passphrase(seed_phrase, "")
        .map_err(|err| QuestError::SeedPhrase(err.to_string()))
}

pub fn airdrop_and_confirm(
    client: &RpcClient,
    to: &Pubkey,
    lamports: u64,
    poll: PollConfig,
) -> Result<()> {
    let signature = client.request_airdrop(to, lamports)?;
    debug!(%signature, lamports, "airdrop requested");

    for attempt in 1..=poll.attempts {
        // Transient RPC errors count as "not yet".
        if let Ok(true) = client.confirm_transaction(&signature) {
            debug!(%signature, attempt, "airdrop confirmed");
            return Ok(());
        }
        thread::sleep(poll.interval);
    }

    Err(QuestError::AirdropNotConfirmed {
        signature: signature.to_string(),
        attempts: poll.attempts,
    })
}

pub fn log_balance(client: &RpcClient, account: &Pubkey) -> Result<u64> {
    let lamports = client.get_balance(account)?;
    info!(
        "Payer balance in SOL = {}, in lamports = {}",
        lamports_to_sol(lamports),
        lamports
    );

    Ok(lamports)
}
