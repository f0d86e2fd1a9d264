use std::path::PathBuf;

use clap::Parser;
use gif_board_client::config::{
    default_wallet_path,
    Cluster,
    Commitment,
    ConfigSources,
};

/// A terminal client for the Web3 public GIF board.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// The cluster whose public RPC endpoint to use.
    #[arg(long, env = "GIF_BOARD_CLUSTER", default_value_t = Cluster::Devnet)]
    pub cluster: Cluster,

    /// An RPC url to use instead of the cluster's public endpoint.
    #[arg(long, env = "GIF_BOARD_RPC_URL")]
    pub url: Option<String>,

    /// Commitment level for reads and transaction confirmation.
    #[arg(long, env = "GIF_BOARD_COMMITMENT", default_value_t = Commitment::Processed)]
    pub commitment: Commitment,

    /// The board program's IDL.
    #[arg(long, env = "GIF_BOARD_IDL", default_value = "idl.json")]
    pub idl: PathBuf,

    /// Keypair of the board account.
    #[arg(long, env = "GIF_BOARD_BASE_ACCOUNT", default_value = "keypair.json")]
    pub base_account: PathBuf,

    /// The wallet's keypair file. Defaults to the Solana CLI's keypair.
    #[arg(long, env = "GIF_BOARD_WALLET")]
    pub wallet: Option<PathBuf>,

    /// Treat the wallet as having already approved this client, so it connects on start-up.
    #[arg(long)]
    pub trusted: bool,
}

impl Cli {
    pub fn config_sources(&self) -> ConfigSources {
        ConfigSources {
            cluster: self.cluster,
            url: self.url.clone(),
            commitment: self.commitment,
            idl_path: self.idl.clone(),
            base_account_path: self.base_account.clone(),
        }
    }

    pub fn wallet_path(&self) -> PathBuf {
        self.wallet.clone().unwrap_or_else(default_wallet_path)
    }
}
