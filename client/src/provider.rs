use std::rc::Rc;

use anchor_client::{
    solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey, signature::Keypair},
    Client, Cluster, Program,
};
use tracing::debug;

use crate::config::ProviderConfig;
use crate::runner::{FundamentalProgram, TokenMinterProgram};
use crate::Result;

/// Connection context shared by every program handle: cluster endpoint,
/// signing wallet and commitment.
pub struct Provider {
    client: Client<Rc<Keypair>>,
    payer: Rc<Keypair>,
    cluster: Cluster,
}

impl Provider {
    pub fn new(cluster: Cluster, payer: Keypair, commitment: CommitmentConfig) -> Self {
        let payer = Rc::new(payer);
        let client = Client::new_with_options(cluster.clone(), payer.clone(), commitment);

        Self {
            client,
            payer,
            cluster,
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let payer = config.load_payer()?;
        debug!(cluster = %config.cluster.url(), wallet = %config.wallet.display(), "provider configured");

        Ok(Self::new(config.cluster.clone(), payer, config.commitment))
    }

    /// Provider configured from `ANCHOR_PROVIDER_URL` and `ANCHOR_WALLET`.
    pub fn env() -> Result<Self> {
        Self::from_config(&ProviderConfig::from_env()?)
    }

    pub fn payer(&self) -> &Keypair {
        &self.payer
    }

    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    pub fn program(&self, program_id: Pubkey) -> Result<Program<Rc<Keypair>>> {
        Ok(self.client.program(program_id)?)
    }

    pub fn anchor_fundamental(&self) -> Result<FundamentalProgram<Rc<Keypair>>> {
        Ok(FundamentalProgram::new(self.program(anchor_fundamental::ID)?))
    }

    pub fn token_minter(&self) -> Result<TokenMinterProgram<Rc<Keypair>>> {
        Ok(TokenMinterProgram::new(self.program(token_minter::ID)?))
    }
}
