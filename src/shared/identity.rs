//! Caller identity used for audit stamping.

/// Sentinel actor recorded when no caller identity is available. Writes are
/// never blocked by a missing identity context.
pub const SYSTEM_ACTOR: &str = "system";

/// Resolves the acting user for audit stamping. The identifier is opaque to
/// this crate; whatever issued it (a session, a token, a job runner) lives
/// outside the persistence boundary.
pub trait IdentityContext: Send + Sync {
    /// The current actor, or `None` when the call carries no identity.
    fn current_actor(&self) -> Option<String>;
}

/// Fixed identity, the common case for request-scoped units of work.
#[derive(Debug, Clone)]
pub struct StaticIdentity(String);

impl StaticIdentity {
    pub fn new(actor: impl Into<String>) -> Self {
        Self(actor.into())
    }
}

impl IdentityContext for StaticIdentity {
    fn current_actor(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// No identity attached; stamping falls back to [`SYSTEM_ACTOR`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl IdentityContext for Anonymous {
    fn current_actor(&self) -> Option<String> {
        None
    }
}
