//! The client's fixed settings, gathered once at start-up and shared immutably afterwards.

use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use anyhow::Context;
use gif_board_interface::BoardSchema;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
};

use crate::{
    keypair::read_keypair_file,
    logs::log_warning,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Cluster {
    Devnet,
    Testnet,
    MainnetBeta,
    Localnet,
}

impl Cluster {
    pub fn url(&self) -> &'static str {
        match self {
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Testnet => "https://api.testnet.solana.com",
            Self::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Self::Localnet => "http://localhost:8899",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(value: Commitment) -> Self {
        match value {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

/// Where the client's configuration comes from before anything is loaded from disk.
#[derive(Debug, Clone)]
pub struct ConfigSources {
    pub cluster: Cluster,
    /// Overrides the cluster's default RPC url.
    pub url: Option<String>,
    pub commitment: Commitment,
    pub idl_path: PathBuf,
    pub base_account_path: PathBuf,
}

pub struct BoardConfig {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    pub schema: BoardSchema,
    /// Owner of the board account. It ships with the client, so anyone holding the client can sign
    /// for the board.
    pub base_account: Keypair,
}

impl BoardConfig {
    pub fn new(
        rpc_url: impl Into<String>,
        commitment: CommitmentConfig,
        schema: BoardSchema,
        base_account: Keypair,
    ) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            commitment,
            schema,
            base_account,
        }
    }

    pub fn load(sources: &ConfigSources) -> anyhow::Result<Self> {
        let schema = load_schema(&sources.idl_path)?;
        let base_account = read_keypair_file(&sources.base_account_path)
            .context("Couldn't load the board account keypair")?;
        log_warning(
            "Board account",
            format!(
                "{} is signed for with a keypair bundled with the client",
                base_account.pubkey()
            ),
        );

        let rpc_url = sources
            .url
            .clone()
            .unwrap_or_else(|| sources.cluster.url().to_string());

        Ok(Self::new(
            rpc_url,
            sources.commitment.into(),
            schema,
            base_account,
        ))
    }

    pub fn program_id(&self) -> Pubkey {
        self.schema.program_id
    }

    pub fn board_address(&self) -> Pubkey {
        self.base_account.pubkey()
    }
}

pub fn load_schema(path: &Path) -> anyhow::Result<BoardSchema> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Couldn't read IDL file {}", path.display()))?;
    BoardSchema::from_json(&json).with_context(|| format!("Invalid IDL file {}", path.display()))
}

/// The Solana CLI's default keypair location, `~/.config/solana/id.json`.
pub fn default_wallet_path() -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
    home.join(".config").join("solana").join("id.json")
}
