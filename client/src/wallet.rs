//! The wallet capability: something that holds the user's key, decides whether to connect, and
//! signs transactions on request.

use std::{
    cell::RefCell,
    path::{
        Path,
        PathBuf,
    },
    rc::Rc,
};

use solana_sdk::{
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    transaction::Transaction,
};

use crate::{
    error::WalletError,
    keypair::read_keypair_file,
    logs::log_info,
};

#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    /// Connects without prompting, succeeding only if the wallet already trusts this client.
    async fn probe_existing_connection(&self) -> Result<Pubkey, WalletError>;

    /// Asks the wallet to authorize a connection. May never resolve if the wallet never answers.
    async fn request_connection(&self) -> Result<Pubkey, WalletError>;

    /// Adds the connected account's signature to a transaction whose other signers have already
    /// partially signed it.
    async fn sign_transaction(&self, transaction: Transaction) -> Result<Transaction, WalletError>;
}

impl<W: WalletProvider> WalletProvider for Rc<W> {
    async fn probe_existing_connection(&self) -> Result<Pubkey, WalletError> {
        (**self).probe_existing_connection().await
    }

    async fn request_connection(&self) -> Result<Pubkey, WalletError> {
        (**self).request_connection().await
    }

    async fn sign_transaction(&self, transaction: Transaction) -> Result<Transaction, WalletError> {
        (**self).sign_transaction(transaction).await
    }
}

/// A wallet backed by a keypair file on disk. The file being present plays the part of a wallet
/// being installed; `trusted` plays the part of the user having approved this client before.
pub struct KeypairFileWallet {
    path: PathBuf,
    trusted: bool,
    connected: RefCell<Option<Keypair>>,
}

impl KeypairFileWallet {
    /// Returns `None` if there's no keypair file at `path`, i.e. no wallet is installed.
    pub fn detect(path: impl AsRef<Path>, trusted: bool) -> Option<Self> {
        let path = path.as_ref();
        path.is_file().then(|| Self {
            path: path.to_path_buf(),
            trusted,
            connected: RefCell::new(None),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn authorize(&self) -> Result<Pubkey, WalletError> {
        let keypair =
            read_keypair_file(&self.path).map_err(|e| WalletError::Keypair(format!("{e:#}")))?;
        let address = keypair.pubkey();
        log_info("Wallet authorized", address);
        *self.connected.borrow_mut() = Some(keypair);
        Ok(address)
    }
}

impl WalletProvider for KeypairFileWallet {
    async fn probe_existing_connection(&self) -> Result<Pubkey, WalletError> {
        if !self.trusted {
            return Err(WalletError::NotTrusted);
        }
        self.authorize()
    }

    async fn request_connection(&self) -> Result<Pubkey, WalletError> {
        self.authorize()
    }

    async fn sign_transaction(
        &self,
        mut transaction: Transaction,
    ) -> Result<Transaction, WalletError> {
        let connected = self.connected.borrow();
        let keypair = connected.as_ref().ok_or(WalletError::NotConnected)?;
        let blockhash = transaction.message.recent_blockhash;
        transaction
            .try_partial_sign(&[keypair], blockhash)
            .map_err(|e| WalletError::Rejected(e.to_string()))?;
        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        path::PathBuf,
    };

    use solana_sdk::{
        hash::Hash,
        message::Message,
    };

    use super::*;
    use crate::test_helpers::test_accounts::wallet_owner;

    struct TempKeypairFile(PathBuf);

    impl TempKeypairFile {
        fn new(name: &str, keypair: &Keypair) -> Self {
            let file_name = format!("gif-board-{}-{name}.json", std::process::id());
            let path = std::env::temp_dir().join(file_name);
            let json = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();
            fs::write(&path, json).unwrap();
            Self(path)
        }
    }

    impl Drop for TempKeypairFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn missing_file_means_no_wallet() {
        assert!(KeypairFileWallet::detect("/definitely/not/here.json", true).is_none());
    }

    #[tokio::test]
    async fn untrusted_wallet_needs_explicit_connect() {
        let file = TempKeypairFile::new("untrusted", wallet_owner());
        let wallet = KeypairFileWallet::detect(&file.0, false).unwrap();

        assert_eq!(
            wallet.probe_existing_connection().await,
            Err(WalletError::NotTrusted)
        );
        assert!(wallet.connected.borrow().is_none());
        assert_eq!(
            wallet.request_connection().await,
            Ok(wallet_owner().pubkey())
        );
        assert_eq!(
            wallet.connected.borrow().as_ref().map(Signer::pubkey),
            Some(wallet_owner().pubkey())
        );
    }

    #[tokio::test]
    async fn trusted_wallet_connects_silently() {
        let file = TempKeypairFile::new("trusted", wallet_owner());
        let wallet = KeypairFileWallet::detect(&file.0, true).unwrap();
        assert_eq!(
            wallet.probe_existing_connection().await,
            Ok(wallet_owner().pubkey())
        );
    }

    #[tokio::test]
    async fn signs_only_once_connected() {
        let file = TempKeypairFile::new("signing", wallet_owner());
        let wallet = KeypairFileWallet::detect(&file.0, false).unwrap();
        let payer = wallet_owner().pubkey();
        let message = Message::new_with_blockhash(&[], Some(&payer), &Hash::default());
        let unsigned = Transaction::new_unsigned(message);

        assert!(matches!(
            wallet.sign_transaction(unsigned.clone()).await,
            Err(WalletError::NotConnected)
        ));

        wallet.request_connection().await.unwrap();
        let signed = wallet.sign_transaction(unsigned).await.unwrap();
        assert!(signed.is_signed());
    }
}
