use gif_board_client::{
    render::PrettySession,
    session::{
        Action,
        BoardState,
        ConnectionStatus,
    },
    test_helpers::{
        new_controller,
        test_accounts::{
            board_account,
            wallet_owner,
        },
        FakeLedger,
        FakeWallet,
        LedgerCall,
    },
};
use solana_sdk::signer::Signer;

#[tokio::test]
async fn connect_then_empty_board_is_ready() {
    let owner = wallet_owner().pubkey();
    let board = board_account().pubkey();
    let ledger = FakeLedger::with_board(board, vec![]);
    let (mut controller, notifier) =
        new_controller(Some(FakeWallet::approving(owner)), ledger.clone());

    controller.connect().await;

    let session = controller.session();
    assert_eq!(session.status(), ConnectionStatus::Connected);
    assert_eq!(session.wallet_address(), Some(&owner));
    assert_eq!(session.entries(), Some(&[][..]));
    assert_eq!(session.available_actions(), vec![Action::Submit]);
    assert_eq!(ledger.calls(), vec![LedgerCall::Fetch { board }]);
    assert!(notifier.alerts().is_empty());

    colored::control::set_override(false);
    let page = PrettySession::new(&session).to_string();
    assert!(page.contains("[submit] Submit"));
    assert!(page.contains("No GIFs yet"));
}

#[tokio::test]
async fn rejected_connect_is_logged_not_alerted() {
    let wallet = FakeWallet::rejecting();
    let ledger = FakeLedger::default();
    let (mut controller, notifier) = new_controller(Some(wallet.clone()), ledger.clone());

    controller.connect().await;

    assert_eq!(controller.session().status(), ConnectionStatus::Disconnected);
    assert_eq!(wallet.requests(), 1);
    assert!(notifier.alerts().is_empty());
    assert!(ledger.calls().is_empty());
}

#[tokio::test]
async fn connect_without_wallet_does_nothing() {
    let ledger = FakeLedger::default();
    let (mut controller, notifier) = new_controller(None, ledger.clone());

    controller.connect().await;

    assert_eq!(controller.session().status(), ConnectionStatus::Disconnected);
    assert!(notifier.alerts().is_empty());
    assert!(ledger.calls().is_empty());
}

#[tokio::test]
async fn unanswered_connect_leaves_session_untouched() {
    let wallet = FakeWallet::unresponsive();
    let ledger = FakeLedger::default();
    let (mut controller, _) = new_controller(Some(wallet.clone()), ledger.clone());

    tokio::select! {
        biased;
        _ = controller.connect() => panic!("An unanswered request shouldn't complete"),
        _ = async {} => {}
    }

    assert_eq!(wallet.requests(), 1);
    assert_eq!(controller.session().status(), ConnectionStatus::Disconnected);
    assert!(ledger.calls().is_empty());
}

#[tokio::test]
async fn connect_to_missing_board_is_uninitialized() {
    let owner = wallet_owner().pubkey();
    let (mut controller, _) =
        new_controller(Some(FakeWallet::approving(owner)), FakeLedger::default());

    let mut updates = controller.subscribe();
    controller.connect().await;

    assert!(updates.has_changed().unwrap());
    let session = updates.borrow_and_update().clone();
    assert_eq!(session.board(), Some(&BoardState::Uninitialized));
    assert_eq!(session.available_actions(), vec![Action::Initialize]);
}
