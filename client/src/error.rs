use anchor_client::solana_client::client_error::ClientError as RpcClientError;
use anchor_client::solana_sdk::pubkey::PubkeyError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuestError>;

#[derive(Debug, Error)]
pub enum QuestError {
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),

    #[error("invalid cluster {value:?}: {reason}")]
    InvalidCluster { value: String, reason: String },

    #[error("failed to read keypair from {path}: {reason}")]
    Keypair { path: String, reason: String },

    #[error("failed to derive keypair from seed phrase: {0}")]
    SeedPhrase(String),

    #[error(transparent)]
    Anchor(#[from] anchor_client::ClientError),

    #[error(transparent)]
    Rpc(#[from] RpcClientError),

    #[error("address derivation failed: {0}")]
    Pubkey(#[from] PubkeyError),

    #[error("failed to build instruction: {0}")]
    Instruction(String),

    #[error("airdrop {signature} not confirmed after {attempts} attempts")]
    AirdropNotConfirmed { signature: String, attempts: u32 },

    #[error("unexpected balance for {account}: expected {expected}, got {actual}")]
    UnexpectedBalance {
        account: String,
        expected: String,
        actual: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
