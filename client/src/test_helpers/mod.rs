//! Scripted stand-ins for the wallet, ledger, and notifier, for driving a [`SessionController`]
//! without a wallet or a cluster.

use std::{
    cell::RefCell,
    collections::HashMap,
    rc::Rc,
};

use gif_board_interface::BoardSchema;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
    },
    signer::Signer,
    transaction::Transaction,
};
use tokio::sync::watch;

use crate::{
    config::BoardConfig,
    error::{
        LedgerError,
        WalletError,
    },
    ledger::LedgerClient,
    notifier::Notifier,
    session::{
        Entry,
        Session,
        SessionController,
    },
    wallet::WalletProvider,
};

pub mod test_accounts;

pub const DEMO_IDL: &str = include_str!("../../../demos/idl.json");

pub type TestController = SessionController<FakeWallet, FakeLedger, RecordingNotifier>;

pub fn test_config() -> Rc<BoardConfig> {
    let schema = BoardSchema::from_json(DEMO_IDL).expect("Demo IDL should be valid");
    Rc::new(BoardConfig::new(
        "http://localhost:8899",
        CommitmentConfig::processed(),
        schema,
        test_accounts::board_account().insecure_clone(),
    ))
}

/// Builds a controller over the fakes, wiring the ledger to observe the session it serves.
pub fn new_controller(
    wallet: Option<FakeWallet>,
    ledger: FakeLedger,
) -> (TestController, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    let controller = SessionController::new(test_config(), wallet, ledger.clone(), notifier.clone());
    ledger.observe(controller.subscribe());
    (controller, notifier)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reply {
    Approve(Pubkey),
    Refuse,
    Never,
}

#[derive(Debug)]
struct FakeWalletState {
    trusted: Option<Pubkey>,
    on_request: Reply,
    probes: usize,
    requests: usize,
}

#[derive(Debug, Clone)]
pub struct FakeWallet(Rc<RefCell<FakeWalletState>>);

impl FakeWallet {
    fn new(trusted: Option<Pubkey>, on_request: Reply) -> Self {
        Self(Rc::new(RefCell::new(FakeWalletState {
            trusted,
            on_request,
            probes: 0,
            requests: 0,
        })))
    }

    /// Already trusts the client, so the start-up probe connects.
    pub fn trusting(address: Pubkey) -> Self {
        Self::new(Some(address), Reply::Approve(address))
    }

    /// Needs an explicit connect, which the user approves.
    pub fn approving(address: Pubkey) -> Self {
        Self::new(None, Reply::Approve(address))
    }

    /// Needs an explicit connect, which the user rejects.
    pub fn rejecting() -> Self {
        Self::new(None, Reply::Refuse)
    }

    /// Never answers a connection request.
    pub fn unresponsive() -> Self {
        Self::new(None, Reply::Never)
    }

    pub fn probes(&self) -> usize {
        self.0.borrow().probes
    }

    pub fn requests(&self) -> usize {
        self.0.borrow().requests
    }
}

impl WalletProvider for FakeWallet {
    async fn probe_existing_connection(&self) -> Result<Pubkey, WalletError> {
        let mut state = self.0.borrow_mut();
        state.probes += 1;
        state.trusted.ok_or(WalletError::NotTrusted)
    }

    async fn request_connection(&self) -> Result<Pubkey, WalletError> {
        let reply = {
            let mut state = self.0.borrow_mut();
            state.requests += 1;
            state.on_request
        };
        match reply {
            Reply::Approve(address) => Ok(address),
            Reply::Refuse => Err(WalletError::Rejected("User rejected the request.".into())),
            Reply::Never => std::future::pending().await,
        }
    }

    async fn sign_transaction(&self, transaction: Transaction) -> Result<Transaction, WalletError> {
        Ok(transaction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCall {
    Fetch {
        board: Pubkey,
    },
    Initialize {
        board: Pubkey,
        payer: Pubkey,
    },
    Append {
        board: Pubkey,
        link: String,
        payer: Pubkey,
    },
}

#[derive(Default)]
struct FakeLedgerState {
    /// Board accounts by address. A missing key is an account that doesn't exist.
    boards: HashMap<Pubkey, Vec<Entry>>,
    fail_fetch: Option<fn() -> LedgerError>,
    fail_initialize: bool,
    fail_append: bool,
    calls: Vec<LedgerCall>,
    observer: Option<watch::Receiver<Session>>,
    /// The session as it stood when each call was made, in call order.
    observed_sessions: Vec<Session>,
}

/// An in-memory board program. Failures are scripted per operation and persist until cleared.
#[derive(Clone, Default)]
pub struct FakeLedger(Rc<RefCell<FakeLedgerState>>);

fn scripted_failure() -> LedgerError {
    LedgerError::Signing(WalletError::Rejected("scripted failure".into()))
}

impl FakeLedger {
    /// A ledger on which `board` already exists with `entries`.
    pub fn with_board(board: Pubkey, entries: Vec<Entry>) -> Self {
        let ledger = Self::default();
        ledger.0.borrow_mut().boards.insert(board, entries);
        ledger
    }

    /// Makes every fetch fail with the error `make_error` builds.
    pub fn fail_fetch(&self, make_error: fn() -> LedgerError) {
        self.0.borrow_mut().fail_fetch = Some(make_error);
    }

    pub fn stop_failing_fetch(&self) {
        self.0.borrow_mut().fail_fetch = None;
    }

    pub fn fail_initialize(&self, fail: bool) {
        self.0.borrow_mut().fail_initialize = fail;
    }

    pub fn fail_append(&self, fail: bool) {
        self.0.borrow_mut().fail_append = fail;
    }

    pub fn observe(&self, session: watch::Receiver<Session>) {
        self.0.borrow_mut().observer = Some(session);
    }

    pub fn calls(&self) -> Vec<LedgerCall> {
        self.0.borrow().calls.clone()
    }

    /// Snapshots of the observed session, one per call made while observing.
    pub fn observed_sessions(&self) -> Vec<Session> {
        self.0.borrow().observed_sessions.clone()
    }

    pub fn observed_inputs(&self) -> Vec<String> {
        self.observed_sessions()
            .iter()
            .map(|session| session.input_buffer().to_string())
            .collect()
    }

    pub fn entries(&self, board: &Pubkey) -> Option<Vec<Entry>> {
        self.0.borrow().boards.get(board).cloned()
    }

    fn record(&self, call: LedgerCall) -> std::cell::RefMut<'_, FakeLedgerState> {
        let mut state = self.0.borrow_mut();
        let session = state
            .observer
            .as_ref()
            .map(|session| session.borrow().clone());
        if let Some(session) = session {
            state.observed_sessions.push(session);
        }
        state.calls.push(call);
        state
    }
}

impl LedgerClient for FakeLedger {
    async fn fetch_entries(&self, board: &Pubkey) -> Result<Vec<Entry>, LedgerError> {
        let state = self.record(LedgerCall::Fetch { board: *board });
        if let Some(make_error) = state.fail_fetch {
            return Err(make_error());
        }
        state
            .boards
            .get(board)
            .cloned()
            .ok_or(LedgerError::AccountNotFound)
    }

    async fn initialize_account(
        &self,
        board: &Keypair,
        payer: &Pubkey,
    ) -> Result<Signature, LedgerError> {
        let board = board.pubkey();
        let mut state = self.record(LedgerCall::Initialize {
            board,
            payer: *payer,
        });
        // The program refuses to initialize an account twice.
        if state.fail_initialize || state.boards.contains_key(&board) {
            return Err(scripted_failure());
        }
        state.boards.insert(board, vec![]);
        Ok(Signature::default())
    }

    async fn append_entry(
        &self,
        board: &Pubkey,
        link: &str,
        payer: &Pubkey,
    ) -> Result<Signature, LedgerError> {
        let mut state = self.record(LedgerCall::Append {
            board: *board,
            link: link.to_string(),
            payer: *payer,
        });
        if state.fail_append {
            return Err(scripted_failure());
        }
        let entries = state
            .boards
            .get_mut(board)
            .ok_or(LedgerError::AccountNotFound)?;
        entries.push(Entry {
            link: link.to_string(),
            submitter: *payer,
        });
        Ok(Signature::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier(Rc<RefCell<Vec<String>>>);

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}
