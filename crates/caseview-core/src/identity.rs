//! Identity provider seam
//!
//! The facade asks the provider for the authenticated user whenever it is not
//! configured to trust a caller-supplied user name.

/// Source of the authenticated identity for the current request
pub trait IdentityProvider: Send + Sync {
    fn current_user_name(&self) -> String;
}

/// Provider that always reports the same user
///
/// Suitable for single-user deployments, service accounts and tests.
///
/// ```
/// use caseview_core::identity::{FixedIdentityProvider, IdentityProvider};
///
/// let provider = FixedIdentityProvider::new("bob");
/// assert_eq!(provider.current_user_name(), "bob");
/// ```
#[derive(Debug, Clone)]
pub struct FixedIdentityProvider {
    user: String,
}

impl FixedIdentityProvider {
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }
}

impl IdentityProvider for FixedIdentityProvider {
    fn current_user_name(&self) -> String {
        self.user.clone()
    }
}
