//! Runs the GIF board in the terminal: connects a wallet, initializes the board account if needed,
//! and submits gif links typed at the prompt.

use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use gif_board_client::{
    config::BoardConfig,
    ledger::RpcLedgerClient,
    logs::{
        log_error,
        log_info,
        log_warning,
    },
    notifier::TerminalNotifier,
    render::PrettySession,
    session::SessionController,
    wallet::KeypairFileWallet,
};
use tokio::{
    io::{
        stdin,
        AsyncBufReadExt,
        BufReader,
    },
    task::LocalSet,
};

use crate::{
    cli::Cli,
    command::{
        help,
        Command,
    },
    render_loop::RenderSubscription,
};

pub mod cli;
pub mod command;
pub mod render_loop;

type Controller = SessionController<
    Rc<KeypairFileWallet>,
    RpcLedgerClient<Rc<KeypairFileWallet>>,
    TerminalNotifier,
>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Rc::new(
        BoardConfig::load(&cli.config_sources()).context("Couldn't load the board config")?,
    );
    log_info("RPC", &config.rpc_url);
    log_info("Program", config.program_id());

    let wallet_path = cli.wallet_path();
    let wallet = KeypairFileWallet::detect(&wallet_path, cli.trusted).map(Rc::new);
    match &wallet {
        Some(wallet) => log_info("Wallet", wallet.path().display()),
        None => log_warning("Wallet", format!("no keypair at {}", wallet_path.display())),
    }

    let ledger = RpcLedgerClient::new(Rc::clone(&config), wallet.clone());
    let controller = SessionController::new(config, wallet, ledger, TerminalNotifier);

    LocalSet::new().run_until(run(controller)).await
}

async fn run(mut controller: Controller) -> anyhow::Result<()> {
    let _render = RenderSubscription::spawn(controller.subscribe());

    controller.startup_probe().await;

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                log_error("Command", e);
                continue;
            }
        };

        match command {
            Command::Connect => controller.connect().await,
            Command::Init => controller.bootstrap().await,
            Command::Input(text) => controller.set_input(text),
            Command::Submit(text) => {
                if let Some(text) = text {
                    controller.set_input(text);
                }
                controller.submit().await;
            }
            Command::Refresh => controller.refresh().await,
            Command::Show => println!("{}", PrettySession::new(&controller.session())),
            Command::Help => println!("{}", help()),
            Command::Quit => break,
        }
    }

    Ok(())
}
