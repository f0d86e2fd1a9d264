//! The ledger capability: reads the board account and sends the board program's two instructions.

use std::rc::Rc;

use gif_board_interface::{
    instructions::{
        add_gif,
        start_stuff_off,
    },
    state::BaseAccount,
};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};

use crate::{
    config::BoardConfig,
    error::{
        LedgerError,
        WalletError,
    },
    session::Entry,
    wallet::WalletProvider,
};

#[allow(async_fn_in_trait)]
pub trait LedgerClient {
    /// Reads the board account's entries, oldest first.
    async fn fetch_entries(&self, board: &Pubkey) -> Result<Vec<Entry>, LedgerError>;

    /// Creates the board account. `board` signs for its own creation; `payer` pays for it.
    async fn initialize_account(
        &self,
        board: &Keypair,
        payer: &Pubkey,
    ) -> Result<Signature, LedgerError>;

    /// Appends `link` to the board on behalf of `payer`.
    async fn append_entry(
        &self,
        board: &Pubkey,
        link: &str,
        payer: &Pubkey,
    ) -> Result<Signature, LedgerError>;
}

/// A [`LedgerClient`] over Solana JSON RPC. Transactions are paid for and co-signed by the
/// connected wallet.
pub struct RpcLedgerClient<W> {
    rpc: RpcClient,
    config: Rc<BoardConfig>,
    wallet: Option<W>,
}

impl<W: WalletProvider> RpcLedgerClient<W> {
    pub fn new(config: Rc<BoardConfig>, wallet: Option<W>) -> Self {
        let rpc = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment);
        Self::with_rpc(rpc, config, wallet)
    }

    pub fn with_rpc(rpc: RpcClient, config: Rc<BoardConfig>, wallet: Option<W>) -> Self {
        Self {
            rpc,
            config,
            wallet,
        }
    }

    async fn send(
        &self,
        payer: &Pubkey,
        signers: &[&Keypair],
        instruction: Instruction,
    ) -> Result<Signature, LedgerError> {
        let wallet = self
            .wallet
            .as_ref()
            .ok_or(LedgerError::Signing(WalletError::NotFound))?;

        let blockhash = self.rpc.get_latest_blockhash().await?;
        let mut transaction =
            Transaction::new_unsigned(Message::new(&[instruction], Some(payer)));
        transaction
            .try_partial_sign(signers, blockhash)
            .map_err(|e| LedgerError::Signing(WalletError::Rejected(e.to_string())))?;
        let transaction = wallet
            .sign_transaction(transaction)
            .await
            .map_err(LedgerError::Signing)?;

        Ok(self.rpc.send_and_confirm_transaction(&transaction).await?)
    }
}

impl<W: WalletProvider> LedgerClient for RpcLedgerClient<W> {
    async fn fetch_entries(&self, board: &Pubkey) -> Result<Vec<Entry>, LedgerError> {
        let account = self
            .rpc
            .get_account_with_commitment(board, self.config.commitment)
            .await?
            .value
            .ok_or(LedgerError::AccountNotFound)?;

        let base_account =
            BaseAccount::try_from_owner_and_data(&self.config.schema, &account.owner, &account.data)?;

        Ok(base_account
            .gif_list
            .into_iter()
            .map(|item| Entry {
                submitter: item.user(),
                link: item.gif_link,
            })
            .collect())
    }

    async fn initialize_account(
        &self,
        board: &Keypair,
        payer: &Pubkey,
    ) -> Result<Signature, LedgerError> {
        let instruction = start_stuff_off(&self.config.schema, &board.pubkey(), payer);
        self.send(payer, &[board], instruction).await
    }

    async fn append_entry(
        &self,
        board: &Pubkey,
        link: &str,
        payer: &Pubkey,
    ) -> Result<Signature, LedgerError> {
        let instruction = add_gif(&self.config.schema, board, payer, link);
        self.send(payer, &[], instruction).await
    }
}
