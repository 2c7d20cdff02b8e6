use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::broadcast;
use uuid::Uuid;

use ritmo_core::auth::{IdentityProvider, Principal, ProviderError};

/// Wrong-password attempts tolerated per account before the provider starts
/// answering `auth/too-many-requests`.
const MAX_FAILED_ATTEMPTS: usize = 5;

struct Account {
    uid: String,
    password: String,
    failed_attempts: usize,
}

/// In-process [`IdentityProvider`] with the error-code vocabulary of the
/// real backend, including its lockout behavior. Used by tests and local
/// development; accounts are registered up front.
pub struct MockIdentityProvider {
    accounts: Mutex<HashMap<String, Account>>,
    events: broadcast::Sender<Option<Principal>>,
    sign_in_calls: AtomicUsize,
    sign_out_calls: AtomicUsize,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            accounts: Mutex::new(HashMap::new()),
            events,
            sign_in_calls: AtomicUsize::new(0),
            sign_out_calls: AtomicUsize::new(0),
        }
    }

    /// Registers an account with a generated uid. Lookup is by lowercased
    /// email, matching how the real backend treats addresses.
    pub fn register(&self, email: &str, password: &str) {
        if let Ok(mut accounts) = self.accounts.lock() {
            accounts.insert(
                email.trim().to_lowercase(),
                Account {
                    uid: Uuid::new_v4().to_string(),
                    password: password.to_string(),
                    failed_attempts: 0,
                },
            );
        }
    }

    /// Pushes a raw auth-state transition, bypassing sign-in. Lets tests
    /// model sessions the backend restores on its own.
    pub fn emit(&self, principal: Option<Principal>) {
        // No receivers is fine; the event is simply unobserved.
        let _ = self.events.send(principal);
    }

    pub fn sign_in_calls(&self) -> usize {
        self.sign_in_calls.load(Ordering::SeqCst)
    }

    pub fn sign_out_calls(&self) -> usize {
        self.sign_out_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Principal, ProviderError> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);

        if !email.contains('@') {
            return Err(ProviderError::new(
                "auth/invalid-email",
                "the email address is badly formatted",
            ));
        }

        let principal = {
            let mut accounts = self
                .accounts
                .lock()
                .map_err(|_| ProviderError::new("auth/internal-error", "account store poisoned"))?;

            let account = accounts
                .get_mut(&email.trim().to_lowercase())
                .ok_or_else(|| {
                    ProviderError::new("auth/user-not-found", "no account for this email")
                })?;

            if account.failed_attempts >= MAX_FAILED_ATTEMPTS {
                return Err(ProviderError::new(
                    "auth/too-many-requests",
                    "access temporarily disabled due to many failed attempts",
                ));
            }

            if account.password != password {
                account.failed_attempts += 1;
                return Err(ProviderError::new("auth/wrong-password", "wrong password"));
            }

            account.failed_attempts = 0;
            Principal {
                uid: account.uid.clone(),
                email: email.trim().to_lowercase(),
            }
        };

        self.emit(Some(principal.clone()));
        Ok(principal)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.emit(None);
        Ok(())
    }

    fn auth_state(&self) -> broadcast::Receiver<Option<Principal>> {
        self.events.subscribe()
    }
}
