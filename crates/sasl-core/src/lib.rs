//! # sasl-core
//!
//! Shared vocabulary for SASL client negotiation: the traits, errors, and
//! value types that factories and mechanism implementations agree on.
//!
//! This crate defines seams, not mechanisms:
//!
//! - **Factory trait**: [`SaslClientFactory`] — create a client session for a
//!   set of candidate mechanisms, or enumerate the supported mechanism names
//! - **Session trait**: [`SaslClient`] — the challenge/response surface of a
//!   negotiated mechanism
//! - **Callbacks**: [`Callback`] and [`CallbackHandler`], the credential seam
//!   factories pass through untouched
//! - **Errors**: [`SaslError`] hierarchy via `thiserror`
//! - **Properties**: opaque configuration map plus well-known keys
//! - **Mechanism names**: IANA-registered name constants in [`mechanism`]

#![deny(unsafe_code)]

pub mod callback;
pub mod errors;
pub mod factory;
pub mod mechanism;
pub mod props;

pub use callback::{Callback, CallbackHandler, NoCallbacks};
pub use errors::{SaslError, SaslResult};
pub use factory::{SaslClient, SaslClientFactory};
pub use props::Properties;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
