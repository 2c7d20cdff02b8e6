use std::sync::Arc;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use ritmo_core::auth::{
    classify_provider_error, AdminAllowList, AuthError, AuthUser, IdentityProvider, Principal,
    Result, SessionState,
};

/// Admin-only session gate over an [`IdentityProvider`].
///
/// The gate watches the provider's auth-state stream and keeps the current
/// [`SessionState`] on a watch channel, so late subscribers immediately see
/// the present state rather than only future transitions. A principal whose
/// email is not on the allow-list is signed out at the provider before the
/// state is published; observers only ever see `Admin` or `SignedOut`.
pub struct SessionGate {
    provider: Arc<dyn IdentityProvider>,
    allow_list: AdminAllowList,
    state: watch::Receiver<SessionState>,
    watcher: JoinHandle<()>,
}

impl SessionGate {
    /// Spawns the watcher task. The provider stream is subscribed before the
    /// task starts, so no transition emitted after this call is missed.
    pub fn new(provider: Arc<dyn IdentityProvider>, allow_list: AdminAllowList) -> Self {
        if allow_list.is_empty() {
            tracing::warn!("Admin allow-list is empty; every login will be denied");
        }

        let (tx, rx) = watch::channel(SessionState::Uninitialized);
        let events = provider.auth_state();
        let watcher = tokio::spawn(watch_auth_state(
            provider.clone(),
            allow_list.clone(),
            events,
            tx,
        ));

        Self {
            provider,
            allow_list,
            state: rx,
            watcher,
        }
    }

    /// The session state as last published by the watcher.
    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_admin(&self) -> bool {
        self.current().is_admin()
    }

    /// A fresh watch receiver. `borrow()` on it yields the current state
    /// right away; `changed()` resolves on the next transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.clone()
    }

    /// Signs an admin in. The allow-list is checked before the provider is
    /// contacted: an address that could never be accepted gets
    /// [`AuthError::AccessDenied`] without a provider round-trip, so the
    /// error reveals nothing about whether an account exists.
    ///
    /// On success this waits for the watcher to publish the new state, so
    /// [`Self::current`] already answers `Admin` when the call returns.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser> {
        if !self.allow_list.contains(email) {
            tracing::warn!(email, "Login rejected: not on the admin allow-list");
            return Err(AuthError::AccessDenied);
        }

        let mut state = self.state.clone();
        let principal = self
            .provider
            .sign_in(email, password)
            .await
            .map_err(|err| {
                let classified = classify_provider_error(err);
                tracing::warn!(email, error = %classified, "Provider sign-in failed");
                classified
            })?;

        // The provider has emitted the principal; the watcher publishes the
        // session on its own schedule. Wait for it so observers and the
        // returned value agree.
        while !state.borrow_and_update().is_admin() {
            if state.changed().await.is_err() {
                break;
            }
        }

        tracing::info!(uid = %principal.uid, "Admin signed in");
        Ok(AuthUser::admin(principal))
    }

    /// Ends the current session.
    pub async fn logout(&self) -> Result<()> {
        self.provider
            .sign_out()
            .await
            .map_err(classify_provider_error)?;
        tracing::info!("Signed out");
        Ok(())
    }
}

impl Drop for SessionGate {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}

async fn watch_auth_state(
    provider: Arc<dyn IdentityProvider>,
    allow_list: AdminAllowList,
    mut events: broadcast::Receiver<Option<Principal>>,
    tx: watch::Sender<SessionState>,
) {
    loop {
        let event = match events.recv().await {
            Ok(event) => event,
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                // Only the latest state matters; keep reading.
                tracing::warn!(skipped, "Auth-state stream lagged");
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        };

        let next = match event {
            Some(principal) if allow_list.contains(&principal.email) => {
                tracing::debug!(uid = %principal.uid, "Admin session established");
                SessionState::Admin(AuthUser::admin(principal))
            }
            Some(principal) => {
                // Sign the account out before anyone can observe it as
                // signed in. Covers sessions the provider restored on its
                // own as well as removals from the allow-list.
                tracing::warn!(
                    uid = %principal.uid,
                    "Non-admin principal on auth stream; forcing sign-out"
                );
                if let Err(err) = provider.sign_out().await {
                    tracing::error!(error = %err, "Forced sign-out failed");
                }
                SessionState::SignedOut
            }
            None => SessionState::SignedOut,
        };

        if tx.send(next).is_err() {
            // Gate dropped; nothing left to publish to.
            break;
        }
    }
}
