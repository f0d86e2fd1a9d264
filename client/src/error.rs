//! Failure types for the two capabilities and the session controller's taxonomy of them.

use std::fmt;

use gif_board_interface::error::AccountDecodeError;
use solana_client::client_error::ClientError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// No wallet is present in this environment.
    NotFound,
    /// The wallet hasn't previously authorized this client, so it won't connect silently.
    NotTrusted,
    /// A signature was requested before the wallet authorized a connection.
    NotConnected,
    /// The user or the wallet refused the request.
    Rejected(String),
    /// The wallet's key material couldn't be read.
    Keypair(String),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("Wallet not found"),
            Self::NotTrusted => f.write_str("Wallet hasn't trusted this client yet"),
            Self::NotConnected => f.write_str("Wallet isn't connected"),
            Self::Rejected(reason) => write!(f, "Wallet rejected the request: {reason}"),
            Self::Keypair(reason) => write!(f, "Couldn't load the wallet keypair: {reason}"),
        }
    }
}

impl std::error::Error for WalletError {}

#[derive(Debug)]
pub enum LedgerError {
    /// The board account doesn't exist on chain.
    AccountNotFound,
    Rpc(ClientError),
    Decode(AccountDecodeError),
    Signing(WalletError),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccountNotFound => f.write_str("Board account not found"),
            Self::Rpc(e) => write!(f, "RPC request failed: {e}"),
            Self::Decode(e) => write!(f, "Couldn't decode the board account: {e}"),
            Self::Signing(e) => write!(f, "Couldn't sign the transaction: {e}"),
        }
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AccountNotFound => None,
            Self::Rpc(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::Signing(e) => Some(e),
        }
    }
}

impl From<ClientError> for LedgerError {
    fn from(e: ClientError) -> Self {
        LedgerError::Rpc(e)
    }
}

impl From<AccountDecodeError> for LedgerError {
    fn from(e: AccountDecodeError) -> Self {
        LedgerError::Decode(e)
    }
}

/// Every capability failure is classified into one of these at the controller boundary.
#[derive(Debug)]
pub enum SessionError {
    ProviderUnavailable,
    AuthorizationFailed(WalletError),
    FetchFailed(LedgerError),
    BootstrapFailed(LedgerError),
    SubmitFailed(LedgerError),
}

impl SessionError {
    /// Only a missing wallet is shown to the user; everything else is logged.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, Self::ProviderUnavailable)
    }

    pub fn category(&self) -> &'static str {
        match self {
            Self::ProviderUnavailable => "Provider unavailable",
            Self::AuthorizationFailed(_) => "Authorization failed",
            Self::FetchFailed(_) => "Fetch failed",
            Self::BootstrapFailed(_) => "Bootstrap failed",
            Self::SubmitFailed(_) => "Submit failed",
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProviderUnavailable => f.write_str("Wallet provider not found! Get a Solana wallet"),
            Self::AuthorizationFailed(e) => write!(f, "{e}"),
            Self::FetchFailed(e) | Self::BootstrapFailed(e) | Self::SubmitFailed(e) => {
                write!(f, "{e}")
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ProviderUnavailable => None,
            Self::AuthorizationFailed(e) => Some(e),
            Self::FetchFailed(e) | Self::BootstrapFailed(e) | Self::SubmitFailed(e) => Some(e),
        }
    }
}
