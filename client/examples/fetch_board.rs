//! Prints the board without connecting a wallet.
//!
//! Usage: `cargo run --example fetch_board -- <idl.json> <keypair.json> [rpc url]`

use std::path::PathBuf;

use gif_board_client::{
    config::{
        BoardConfig,
        Cluster,
        Commitment,
        ConfigSources,
    },
    ledger::{
        LedgerClient,
        RpcLedgerClient,
    },
    print_kv,
    wallet::KeypairFileWallet,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(idl_path), Some(base_account_path)) = (args.next(), args.next()) else {
        anyhow::bail!("Usage: fetch_board <idl.json> <keypair.json> [rpc url]");
    };

    let config = std::rc::Rc::new(BoardConfig::load(&ConfigSources {
        cluster: Cluster::Devnet,
        url: args.next(),
        commitment: Commitment::Confirmed,
        idl_path: PathBuf::from(idl_path),
        base_account_path: PathBuf::from(base_account_path),
    })?);

    // Reads don't need a wallet.
    let ledger = RpcLedgerClient::<KeypairFileWallet>::new(config.clone(), None);
    let entries = ledger.fetch_entries(&config.board_address()).await?;

    print_kv!("Board", config.board_address());
    for (i, entry) in entries.iter().enumerate() {
        print_kv!(format!("{i:>3}"), format!("{} (by {})", entry.link, entry.submitter));
    }

    Ok(())
}
