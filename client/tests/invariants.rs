use gif_board_client::{
    error::LedgerError,
    session::{
        BoardState,
        ConnectionStatus,
        Session,
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
        TestController,
    },
};
use solana_sdk::signer::Signer;

fn assert_address_iff_connected(session: &Session) {
    assert_eq!(
        session.wallet_address().is_some(),
        session.status() == ConnectionStatus::Connected,
        "{session:?}"
    );
    assert_eq!(session.board().is_some(), session.wallet_address().is_some());
}

#[derive(Debug, Clone, Copy)]
enum Event {
    Probe,
    Connect,
    Refresh,
    Bootstrap,
    Type(&'static str),
    Submit,
    BreakFetch,
    FixFetch,
    BreakAppend,
}

async fn apply(controller: &mut TestController, ledger: &FakeLedger, event: Event) {
    match event {
        Event::Probe => controller.startup_probe().await,
        Event::Connect => controller.connect().await,
        Event::Refresh => controller.refresh().await,
        Event::Bootstrap => controller.bootstrap().await,
        Event::Type(text) => controller.set_input(text),
        Event::Submit => controller.submit().await,
        Event::BreakFetch => ledger.fail_fetch(|| LedgerError::AccountNotFound),
        Event::FixFetch => ledger.stop_failing_fetch(),
        Event::BreakAppend => ledger.fail_append(true),
    }
}

#[tokio::test]
async fn wallet_address_is_defined_iff_connected() {
    use Event::*;

    let scripts: [&[Event]; 4] = [
        &[Probe, Submit, Bootstrap, Connect, Bootstrap, Type("a"), Submit, Refresh],
        &[Type("a"), Connect, BreakFetch, Refresh, Bootstrap, FixFetch, Refresh, Submit],
        &[Connect, Bootstrap, Type("b"), BreakAppend, Submit, Type(""), Submit, Probe],
        &[Refresh, Submit, Bootstrap, Probe, Connect, Connect, Refresh],
    ];
    let wallets = [
        Some(FakeWallet::approving(wallet_owner().pubkey())),
        Some(FakeWallet::trusting(other_wallet().pubkey())),
        Some(FakeWallet::rejecting()),
        None,
    ];

    for script in scripts {
        for wallet in wallets.iter().cloned() {
            let ledger = FakeLedger::default();
            let (mut controller, _) = new_controller(wallet, ledger.clone());
            let mut updates = controller.subscribe();

            assert_address_iff_connected(&controller.session());
            for event in script.iter().copied() {
                apply(&mut controller, &ledger, event).await;
                assert_address_iff_connected(&updates.borrow_and_update());
            }
            // The states published mid-operation, while a ledger call was pending.
            for session in ledger.observed_sessions() {
                assert_address_iff_connected(&session);
            }
        }
    }

    // Sanity check that at least one script actually exercised a ready board.
    let ledger = FakeLedger::default();
    let wallet = FakeWallet::approving(wallet_owner().pubkey());
    let (mut controller, _) = new_controller(Some(wallet), ledger.clone());
    for event in [Event::Connect, Event::Bootstrap, Event::Type("c"), Event::Submit] {
        apply(&mut controller, &ledger, event).await;
    }
    assert_eq!(
        ledger.entries(&board_account().pubkey()).map(|e| e.len()),
        Some(1)
    );
}

#[tokio::test]
async fn connecting_publishes_unfetched_before_the_first_fetch() {
    let owner = wallet_owner().pubkey();
    let ledger = FakeLedger::with_board(board_account().pubkey(), vec![]);
    let (mut controller, _) = new_controller(Some(FakeWallet::approving(owner)), ledger.clone());

    controller.connect().await;

    let observed = ledger.observed_sessions();
    assert_eq!(observed.len(), 1);
    assert_eq!(observed[0].wallet_address(), Some(&owner));
    assert_eq!(observed[0].board(), Some(&BoardState::Unfetched));
    assert_address_iff_connected(&observed[0]);
    assert_eq!(controller.session().board(), Some(&BoardState::Ready(vec![])));
}
