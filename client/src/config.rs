use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anchor_client::{
    solana_sdk::{
        commitment_config::CommitmentConfig,
        signature::{read_keypair_file, Keypair},
    },
    Cluster,
};

use crate::{QuestError, Result};

/// Cluster name or RPC URL of the provider.
pub const PROVIDER_URL_ENV: &str = "ANCHOR_PROVIDER_URL";
/// Path to the JSON keypair that signs and pays for transactions.
pub const WALLET_ENV: &str = "ANCHOR_WALLET";
/// RPC endpoint used by the standalone scripts.
pub const RPC_URL_ENV: &str = "RPC_URL";

/// Seed phrase of the deterministic wallet used by the scripts.
pub const DEFAULT_SEED_PHRASE: &str = "test_wallet";

/// Provider settings, read once from the environment.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub cluster: Cluster,
    pub wallet: PathBuf,
    pub commitment: CommitmentConfig,
}

impl ProviderConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// Both `ANCHOR_PROVIDER_URL` and `ANCHOR_WALLET` are required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cluster = lookup(PROVIDER_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or(QuestError::MissingEnv(PROVIDER_URL_ENV))
            .and_then(|value| parse_cluster(value.trim()))?;

        let wallet = lookup(WALLET_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(QuestError::MissingEnv(WALLET_ENV))?;

        Ok(Self {
            cluster,
            wallet,
            commitment: CommitmentConfig::confirmed(),
        })
    }

    pub fn load_payer(&self) -> Result<Keypair> {
        read_keypair_file(&self.wallet).map_err(|err| QuestError::Keypair {
            path: self.wallet.display().to_string(),
            reason: err.to_string(),
        })
    }
}

pub fn parse_cluster(value: &str) -> Result<Cluster> {
    Cluster::from_str(value).map_err(|err| QuestError::InvalidCluster {
        value: value.to_string(),
        reason: err.to_string(),
    })
}

/// Settings shared by the RPC scripts.
#[derive(Debug, Clone)]
pub struct ScriptConfig {
    pub rpc_url: String,
    pub seed_phrase: String,
    pub commitment: CommitmentConfig,
}

impl ScriptConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rpc_url = lookup(RPC_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or(QuestError::MissingEnv(RPC_URL_ENV))?;

        Ok(Self {
            rpc_url,
            seed_phrase: DEFAULT_SEED_PHRASE.to_string(),
            commitment: CommitmentConfig::confirmed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use anchor_client::solana_sdk::signature::{write_keypair_file, Signer};

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn provider_reads_localnet() {
        let config = ProviderConfig::from_lookup(lookup(&[
            (PROVIDER_URL_ENV, "localnet"),
            (WALLET_ENV, "/tmp/id.json"),
        ]))
        .unwrap();

        assert_eq!(config.cluster, Cluster::Localnet);
        assert_eq!(config.wallet, PathBuf::from("/tmp/id.json"));
        assert_eq!(config.commitment, CommitmentConfig::confirmed());
    }

    #[test]
    fn provider_requires_provider_url() {
        let err = ProviderConfig::from_lookup(lookup(&[(WALLET_ENV, "id.json")])).unwrap_err();
        assert!(matches!(err, QuestError::MissingEnv(PROVIDER_URL_ENV)));

        let err = ProviderConfig::from_lookup(lookup(&[
            (PROVIDER_URL_ENV, ""),
            (WALLET_ENV, "id.json"),
        ]))
        .unwrap_err();
        assert!(matches!(err, QuestError::MissingEnv(PROVIDER_URL_ENV)));
    }

    #[test]
    fn provider_accepts_named_cluster_and_url() {
        let named = ProviderConfig::from_lookup(lookup(&[
            (PROVIDER_URL_ENV, "devnet"),
            (WALLET_ENV, "id.json"),
        ]))
        .unwrap();
        assert_eq!(named.cluster, Cluster::Devnet);

        let custom = ProviderConfig::from_lookup(lookup(&[
            (PROVIDER_URL_ENV, "http://127.0.0.1:8899"),
            (WALLET_ENV, "id.json"),
        ]))
        .unwrap();
        assert_eq!(custom.cluster.url(), "http://127.0.0.1:8899");
    }

    #[test]
    fn provider_requires_wallet() {
        let err = ProviderConfig::from_lookup(lookup(&[(PROVIDER_URL_ENV, "localnet")]))
            .unwrap_err();
        assert!(matches!(err, QuestError::MissingEnv(WALLET_ENV)));

        let err = ProviderConfig::from_lookup(lookup(&[
            (PROVIDER_URL_ENV, "localnet"),
            (WALLET_ENV, "  "),
        ]))
        .unwrap_err();
        assert!(matches!(err, QuestError::MissingEnv(WALLET_ENV)));
    }

    #[test]
    fn provider_rejects_unknown_cluster() {
        let err = ProviderConfig::from_lookup(lookup(&[
            (PROVIDER_URL_ENV, "not-a-cluster"),
            (WALLET_ENV, "id.json"),
        ]))
        .unwrap_err();
        assert!(matches!(err, QuestError::InvalidCluster { .. }));
    }

    #[test]
    fn load_payer_reads_keypair_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id.json");
        let keypair = Keypair::new();
        write_keypair_file(&keypair, &path).unwrap();

        let config = ProviderConfig {
            cluster: Cluster::Localnet,
            wallet: path,
            commitment: CommitmentConfig::confirmed(),
        };

        assert_eq!(config.load_payer().unwrap().pubkey(), keypair.pubkey());
    }

    #[test]
    fn load_payer_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ProviderConfig {
            cluster: Cluster::Localnet,
            wallet: dir.path().join("missing.json"),
            commitment: CommitmentConfig::confirmed(),
        };

        let err = config.load_payer().unwrap_err();
        assert!(matches!(err, QuestError::Keypair { .. }));
    }

    #[test]
    fn script_config_requires_rpc_url() {
        let err = ScriptConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, QuestError::MissingEnv(RPC_URL_ENV)));

        let config =
            ScriptConfig::from_lookup(lookup(&[(RPC_URL_ENV, "http://localhost:8899")])).unwrap();
        assert_eq!(config.rpc_url, "http://localhost:8899");
        assert_eq!(config.seed_phrase, DEFAULT_SEED_PHRASE);
    }
}
