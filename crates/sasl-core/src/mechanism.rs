//! Well-known mechanism names.
//!
//! Constants for the IANA-registered mechanism names this ecosystem commonly
//! negotiates. Nothing in this crate requires names to come from this list;
//! factories treat mechanism names as opaque strings.

/// Cleartext username/password.
pub const PLAIN: &str = "PLAIN";

/// Anonymous access with an optional trace string.
pub const ANONYMOUS: &str = "ANONYMOUS";

/// Authentication established by an external channel (e.g. TLS client certs).
pub const EXTERNAL: &str = "EXTERNAL";

/// Kerberos v5 via GSS-API.
pub const GSSAPI: &str = "GSSAPI";

/// Digest challenge/response (historic).
pub const DIGEST_MD5: &str = "DIGEST-MD5";

/// HMAC-MD5 challenge/response (historic).
pub const CRAM_MD5: &str = "CRAM-MD5";

/// Salted challenge/response, SHA-1 variant.
pub const SCRAM_SHA_1: &str = "SCRAM-SHA-1";

/// Salted challenge/response, SHA-256 variant.
pub const SCRAM_SHA_256: &str = "SCRAM-SHA-256";

/// OAuth 2.0 bearer tokens.
pub const OAUTHBEARER: &str = "OAUTHBEARER";

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
