//! The session controller: the board's client-side state and the workflow that moves it between
//! disconnected, connected, uninitialized, and ready.
//!
//! Every capability call is awaited in place and every failure is absorbed here, turned into a
//! log line and (at most) a state transition. Nothing is retried, cancelled, or timed out.

use std::rc::Rc;

use solana_sdk::pubkey::Pubkey;
use tokio::sync::watch;

use crate::{
    config::BoardConfig,
    error::{
        LedgerError,
        SessionError,
    },
    ledger::LedgerClient,
    logs::{
        log_error,
        log_info,
        log_success,
        log_warning,
    },
    notifier::Notifier,
    wallet::WalletProvider,
};

/// One submitted link, as stored in the board account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub link: String,
    /// The wallet that submitted the link.
    pub submitter: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoardState {
    /// Connected, but the first list refresh hasn't completed yet.
    #[default]
    Unfetched,
    /// The board account doesn't exist yet (or couldn't be fetched).
    Uninitialized,
    Ready(Vec<Entry>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Connection {
    #[default]
    Disconnected,
    Connected {
        wallet_address: Pubkey,
        board: BoardState,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ConnectionStatus {
    Disconnected,
    Connected,
}

/// The user actions offered in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Connect,
    Initialize,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub(crate) connection: Connection,
    pub(crate) input_buffer: String,
}

impl Session {
    pub fn status(&self) -> ConnectionStatus {
        match self.connection {
            Connection::Disconnected => ConnectionStatus::Disconnected,
            Connection::Connected { .. } => ConnectionStatus::Connected,
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn wallet_address(&self) -> Option<&Pubkey> {
        match &self.connection {
            Connection::Connected { wallet_address, .. } => Some(wallet_address),
            Connection::Disconnected => None,
        }
    }

    pub fn board(&self) -> Option<&BoardState> {
        match &self.connection {
            Connection::Connected { board, .. } => Some(board),
            Connection::Disconnected => None,
        }
    }

    /// The fetched entries, only once the board is ready.
    pub fn entries(&self) -> Option<&[Entry]> {
        match self.board() {
            Some(BoardState::Ready(entries)) => Some(entries),
            _ => None,
        }
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn available_actions(&self) -> Vec<Action> {
        match self.board() {
            None => vec![Action::Connect],
            Some(BoardState::Unfetched) => vec![],
            Some(BoardState::Uninitialized) => vec![Action::Initialize],
            Some(BoardState::Ready(_)) => vec![Action::Submit],
        }
    }

    /// The payer for ledger writes when the board is in the sub-state an action requires.
    fn payer_if(&self, action: Action) -> Option<Pubkey> {
        self.available_actions()
            .contains(&action)
            .then(|| self.wallet_address().copied())
            .flatten()
    }
}

pub struct SessionController<W, L, N> {
    config: Rc<BoardConfig>,
    wallet: Option<W>,
    ledger: L,
    notifier: N,
    session: watch::Sender<Session>,
    probed: bool,
}

impl<W, L, N> SessionController<W, L, N>
where
    W: WalletProvider,
    L: LedgerClient,
    N: Notifier,
{
    /// `wallet` is `None` when no wallet provider exists in this environment.
    pub fn new(config: Rc<BoardConfig>, wallet: Option<W>, ledger: L, notifier: N) -> Self {
        let (session, _) = watch::channel(Session::default());
        Self {
            config,
            wallet,
            ledger,
            notifier,
            session,
            probed: false,
        }
    }

    /// A snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Registers for session changes. Dropping the receiver deregisters it.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.session.subscribe()
    }

    /// Connects silently if the wallet already trusts this client. Only the first call does
    /// anything.
    pub async fn startup_probe(&mut self) {
        if std::mem::replace(&mut self.probed, true) {
            return;
        }

        let Some(wallet) = &self.wallet else {
            self.report(&SessionError::ProviderUnavailable);
            return;
        };

        log_info("Wallet provider", "found, probing for a trusted connection");
        let probed = wallet.probe_existing_connection().await;
        match probed {
            Ok(address) => self.enter_connected(address).await,
            Err(e) => self.report(&SessionError::AuthorizationFailed(e)),
        }
    }

    /// Asks the wallet to authorize a connection.
    pub async fn connect(&mut self) {
        let Some(wallet) = &self.wallet else {
            log_warning("Connect", "no wallet provider to connect to");
            return;
        };

        let requested = wallet.request_connection().await;
        match requested {
            Ok(address) => self.enter_connected(address).await,
            Err(e) => self.report(&SessionError::AuthorizationFailed(e)),
        }
    }

    /// Re-fetches the board. Any failure leaves the board uninitialized.
    pub async fn refresh(&mut self) {
        if self.session.borrow().status() == ConnectionStatus::Disconnected {
            return;
        }

        let fetched = self
            .ledger
            .fetch_entries(&self.config.board_address())
            .await;
        let next = match fetched {
            Ok(entries) => {
                log_info("Fetched GIF list", format!("{} entries", entries.len()));
                BoardState::Ready(entries)
            }
            Err(e) => {
                self.report(&SessionError::FetchFailed(e));
                BoardState::Uninitialized
            }
        };

        self.session.send_modify(|session| {
            if let Connection::Connected { board, .. } = &mut session.connection {
                *board = next;
            }
        });
    }

    /// Creates the board account. Only available while the board is uninitialized.
    pub async fn bootstrap(&mut self) {
        let payer = self.session.borrow().payer_if(Action::Initialize);
        let Some(payer) = payer else {
            log_warning("Initialize", "the board isn't waiting to be initialized");
            return;
        };

        let config = Rc::clone(&self.config);
        let initialized = self
            .ledger
            .initialize_account(&config.base_account, &payer)
            .await;
        match initialized {
            Ok(signature) => {
                log_success("Created board account", config.board_address());
                log_info("Signature", signature);
                self.refresh().await;
            }
            Err(e) => self.report(&SessionError::BootstrapFailed(e)),
        }
    }

    /// Replaces the input buffer.
    pub fn set_input(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.session
            .send_modify(|session| session.input_buffer = text);
    }

    /// Sends the buffered link to the board. The buffer is cleared before the link is sent, so a
    /// failed submission loses it.
    pub async fn submit(&mut self) {
        let (payer, link) = {
            let session = self.session.borrow();
            let Some(payer) = session.payer_if(Action::Submit) else {
                log_warning("Submit", "the board isn't ready for submissions");
                return;
            };
            (payer, session.input_buffer.clone())
        };

        if link.is_empty() {
            log_warning("Submit", "No gif link given!");
            return;
        }

        self.session
            .send_modify(|session| session.input_buffer.clear());
        log_info("Gif link", &link);

        let appended = self
            .ledger
            .append_entry(&self.config.board_address(), &link, &payer)
            .await;
        match appended {
            Ok(signature) => {
                log_success("GIF sent to program", signature);
                self.refresh().await;
            }
            Err(e) => self.report(&SessionError::SubmitFailed(e)),
        }
    }

    async fn enter_connected(&mut self, wallet_address: Pubkey) {
        log_success("Connected with public key", wallet_address);
        self.session.send_modify(|session| {
            session.connection = Connection::Connected {
                wallet_address,
                board: BoardState::Unfetched,
            }
        });
        self.refresh().await;
    }

    fn report(&self, error: &SessionError) {
        match error {
            SessionError::FetchFailed(LedgerError::AccountNotFound) => {
                log_warning(error.category(), "board account not initialized")
            }
            _ => log_error(error.category(), error),
        }

        if error.is_user_visible() {
            self.notifier.alert(&error.to_string());
        }
    }
}
