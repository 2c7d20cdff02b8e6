//! Session types, the identity-provider seam and admin allow-list.

mod allowlist;
mod error;
mod traits;
mod types;

pub use allowlist::AdminAllowList;
pub use error::{classify_provider_error, AuthError, Result};
pub use traits::{IdentityProvider, ProviderError};
pub use types::{AuthUser, Principal, SessionState};
