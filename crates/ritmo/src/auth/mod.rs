//! Session gate over the identity-provider seam, plus the in-process mock
//! provider used by tests and local development.

mod gate;
mod mock;

pub use gate::SessionGate;
pub use mock::MockIdentityProvider;
