use gif_board_client::{
    error::{
        LedgerError,
        WalletError,
    },
    session::{
        BoardState,
        Entry,
    },
    test_helpers::{
        new_controller,
        test_accounts::{
            board_account,
            other_wallet,
            wallet_owner,
        },
        FakeLedger,
        FakeWallet,
    },
};
use gif_board_interface::error::AccountDecodeError;
use solana_sdk::signer::Signer;

fn one_entry() -> Vec<Entry> {
    vec![Entry {
        link: "http://x/0.gif".into(),
        submitter: other_wallet().pubkey(),
    }]
}

#[tokio::test]
async fn any_fetch_failure_means_uninitialized() {
    let failures: [fn() -> LedgerError; 4] = [
        || LedgerError::AccountNotFound,
        || LedgerError::Decode(AccountDecodeError::InvalidAccountDiscriminant),
        || LedgerError::Decode(AccountDecodeError::InvalidOwner),
        || LedgerError::Signing(WalletError::NotConnected),
    ];

    for failure in failures {
        let ledger = FakeLedger::with_board(board_account().pubkey(), one_entry());
        ledger.fail_fetch(failure);
        let wallet = FakeWallet::approving(wallet_owner().pubkey());
        let (mut controller, notifier) = new_controller(Some(wallet), ledger);

        controller.connect().await;

        let session = controller.session();
        assert_eq!(session.board(), Some(&BoardState::Uninitialized));
        assert_eq!(session.entries(), None);
        assert!(notifier.alerts().is_empty());
    }
}

#[tokio::test]
async fn refresh_recovers_once_fetch_succeeds() {
    let ledger = FakeLedger::with_board(board_account().pubkey(), one_entry());
    ledger.fail_fetch(|| LedgerError::Decode(AccountDecodeError::InsufficientByteLength));
    let wallet = FakeWallet::approving(wallet_owner().pubkey());
    let (mut controller, _) = new_controller(Some(wallet), ledger.clone());

    controller.connect().await;
    assert_eq!(
        controller.session().board(),
        Some(&BoardState::Uninitialized)
    );

    ledger.stop_failing_fetch();
    controller.refresh().await;
    assert_eq!(controller.session().entries(), Some(one_entry().as_slice()));
}

#[tokio::test]
async fn refresh_while_disconnected_makes_no_calls() {
    let ledger = FakeLedger::with_board(board_account().pubkey(), one_entry());
    let (mut controller, _) = new_controller(None, ledger.clone());

    controller.refresh().await;

    assert!(ledger.calls().is_empty());
    assert_eq!(controller.session().board(), None);
}
