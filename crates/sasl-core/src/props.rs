//! Negotiation properties.
//!
//! Factories take an opaque key/value map and pass it through verbatim; only
//! the mechanism implementations at the bottom of a factory chain give the
//! entries meaning. The well-known keys below mirror the conventional SASL
//! policy properties.

use std::collections::HashMap;

/// Opaque configuration map handed through the factory chain.
pub type Properties = HashMap<String, serde_json::Value>;

/// Property key: forbid mechanisms that transmit credentials in cleartext.
pub const POLICY_NOPLAINTEXT: &str = "sasl.policy.noplaintext";

/// Property key: forbid mechanisms that accept anonymous logins.
pub const POLICY_NOANONYMOUS: &str = "sasl.policy.noanonymous";

/// Property key: require mechanisms that support forward secrecy.
pub const POLICY_FORWARD_SECRECY: &str = "sasl.policy.forward";

/// Property key: maximum receive buffer size in bytes.
pub const MAX_BUFFER: &str = "sasl.max.buffer";

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
