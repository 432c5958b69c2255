//! Credential callback seam.
//!
//! Mechanism implementations request credentials by filling a slice of
//! [`Callback`]s through a caller-supplied [`CallbackHandler`]. Factories —
//! including decorating factories — forward the handler verbatim and never
//! interpret callbacks themselves.

use crate::errors::SaslResult;

/// A single credential request a mechanism hands to the handler.
///
/// Each variant starts out unfilled; the handler writes the requested value
/// into the `Option` slot.
#[derive(Debug)]
pub enum Callback {
    /// Request for an authentication name.
    Name(Option<String>),
    /// Request for a password or other secret.
    Password(Option<Vec<u8>>),
    /// Request for a realm choice.
    Realm(Option<String>),
}

/// Supplies credentials to mechanisms on demand.
pub trait CallbackHandler: Send + Sync {
    /// Fill the requested callbacks in place.
    ///
    /// Returns `SaslError::Callback` when a requested credential cannot be
    /// supplied.
    fn handle(&self, callbacks: &mut [Callback]) -> SaslResult<()>;
}

/// A handler that supplies nothing.
///
/// Suitable for mechanisms that need no credentials (e.g. EXTERNAL or
/// ANONYMOUS) and for tests that only exercise factory plumbing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCallbacks;

impl CallbackHandler for NoCallbacks {
    fn handle(&self, _callbacks: &mut [Callback]) -> SaslResult<()> {
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
