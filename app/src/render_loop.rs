use gif_board_client::{
    logs::log_divider,
    print_kv,
    render::PrettySession,
    session::Session,
};
use tokio::{
    sync::watch,
    task::JoinHandle,
};

/// Re-renders the board whenever the session changes. The subscription lasts as long as this
/// value: dropping it stops the task and releases the receiver.
pub struct RenderSubscription(JoinHandle<()>);

impl RenderSubscription {
    /// Must be called from within a `LocalSet`.
    pub fn spawn(updates: watch::Receiver<Session>) -> Self {
        Self::spawn_with(updates, render)
    }

    pub fn spawn_with(
        mut updates: watch::Receiver<Session>,
        mut render: impl FnMut(&Session) + 'static,
    ) -> Self {
        let handle = tokio::task::spawn_local(async move {
            let session = updates.borrow_and_update().clone();
            render(&session);
            while updates.changed().await.is_ok() {
                let session = updates.borrow_and_update().clone();
                render(&session);
            }
        });
        Self(handle)
    }
}

impl Drop for RenderSubscription {
    fn drop(&mut self) {
        self.0.abort();
    }
}

fn render(session: &Session) {
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, false);
    log_divider();
    print_kv!(format!("[{timestamp}]"), session.status());
    println!("{}", PrettySession::new(session));
}
