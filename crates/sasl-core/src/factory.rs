//! # Client factory and session traits
//!
//! Core abstraction for SASL client negotiation. Every factory — the ones
//! that host real mechanisms and the decorators layered on top of them —
//! implements [`SaslClientFactory`] to expose a uniform creation surface.
//!
//! Decorators hold their delegate by value; the blanket impls for `&T`,
//! `Box<T>`, and `Arc<T>` let callers choose owned or shared wiring without
//! changing the decorator types.

use std::sync::Arc;

use crate::callback::CallbackHandler;
use crate::errors::SaslResult;
use crate::props::Properties;

/// A negotiated client session for a single mechanism.
///
/// The challenge/response state machine behind this trait is owned entirely
/// by the mechanism implementation; factories only hand sessions out.
pub trait SaslClient: Send {
    /// IANA-registered name of the mechanism in use (e.g. `"SCRAM-SHA-256"`).
    fn mechanism_name(&self) -> &str;

    /// Whether this mechanism sends an initial response before any challenge.
    fn has_initial_response(&self) -> bool;

    /// Evaluate a server challenge and produce the client's response bytes.
    fn evaluate_challenge(&mut self, challenge: &[u8]) -> SaslResult<Vec<u8>>;

    /// Whether negotiation has completed.
    fn is_complete(&self) -> bool;
}

impl std::fmt::Debug for dyn SaslClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaslClient")
            .field("mechanism", &self.mechanism_name())
            .finish_non_exhaustive()
    }
}

/// Creates client sessions and enumerates supported mechanisms.
///
/// Implementors must be `Send + Sync` so factory chains can be shared across
/// threads; every call is synchronous and a pure function of its arguments
/// plus construction-time configuration.
pub trait SaslClientFactory: Send + Sync {
    /// Create a client session for the first suitable candidate mechanism.
    ///
    /// # Arguments
    ///
    /// * `mechanisms` — candidate mechanism names in preference order; may be
    ///   empty.
    /// * `authorization_id` — identity to act as, when distinct from the
    ///   authentication identity.
    /// * `protocol` — name of the application protocol (e.g. `"ldap"`).
    /// * `server_name` — fully qualified host name of the server.
    /// * `props` — opaque configuration, passed through verbatim.
    /// * `callback_handler` — credential source for the selected mechanism.
    ///
    /// Returns `SaslError::NoSuchMechanism` when no candidate can be
    /// satisfied.
    fn create_client(
        &self,
        mechanisms: &[String],
        authorization_id: Option<&str>,
        protocol: &str,
        server_name: &str,
        props: &Properties,
        callback_handler: &dyn CallbackHandler,
    ) -> SaslResult<Box<dyn SaslClient>>;

    /// The mechanism names this factory can negotiate under `props`.
    fn mechanism_names(&self, props: &Properties) -> Vec<String>;
}

impl<T: SaslClientFactory + ?Sized> SaslClientFactory for &T {
    fn create_client(
        &self,
        mechanisms: &[String],
        authorization_id: Option<&str>,
        protocol: &str,
        server_name: &str,
        props: &Properties,
        callback_handler: &dyn CallbackHandler,
    ) -> SaslResult<Box<dyn SaslClient>> {
        (**self).create_client(
            mechanisms,
            authorization_id,
            protocol,
            server_name,
            props,
            callback_handler,
        )
    }

    fn mechanism_names(&self, props: &Properties) -> Vec<String> {
        (**self).mechanism_names(props)
    }
}

impl<T: SaslClientFactory + ?Sized> SaslClientFactory for Box<T> {
    fn create_client(
        &self,
        mechanisms: &[String],
        authorization_id: Option<&str>,
        protocol: &str,
        server_name: &str,
        props: &Properties,
        callback_handler: &dyn CallbackHandler,
    ) -> SaslResult<Box<dyn SaslClient>> {
        (**self).create_client(
            mechanisms,
            authorization_id,
            protocol,
            server_name,
            props,
            callback_handler,
        )
    }

    fn mechanism_names(&self, props: &Properties) -> Vec<String> {
        (**self).mechanism_names(props)
    }
}

impl<T: SaslClientFactory + ?Sized> SaslClientFactory for Arc<T> {
    fn create_client(
        &self,
        mechanisms: &[String],
        authorization_id: Option<&str>,
        protocol: &str,
        server_name: &str,
        props: &Properties,
        callback_handler: &dyn CallbackHandler,
    ) -> SaslResult<Box<dyn SaslClient>> {
        (**self).create_client(
            mechanisms,
            authorization_id,
            protocol,
            server_name,
            props,
            callback_handler,
        )
    }

    fn mechanism_names(&self, props: &Properties) -> Vec<String> {
        (**self).mechanism_names(props)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::NoCallbacks;
    use crate::errors::SaslError;
    use assert_matches::assert_matches;

    struct StubClient(String);

    impl SaslClient for StubClient {
        fn mechanism_name(&self) -> &str {
            &self.0
        }
        fn has_initial_response(&self) -> bool {
            false
        }
        fn evaluate_challenge(&mut self, _challenge: &[u8]) -> SaslResult<Vec<u8>> {
            Ok(Vec::new())
        }
        fn is_complete(&self) -> bool {
            true
        }
    }

    struct StubFactory;

    impl SaslClientFactory for StubFactory {
        fn create_client(
            &self,
            mechanisms: &[String],
            _authorization_id: Option<&str>,
            _protocol: &str,
            _server_name: &str,
            _props: &Properties,
            _callback_handler: &dyn CallbackHandler,
        ) -> SaslResult<Box<dyn SaslClient>> {
            match mechanisms.first() {
                Some(name) => Ok(Box::new(StubClient(name.clone()))),
                None => Err(SaslError::NoSuchMechanism {
                    mechanisms: mechanisms.to_vec(),
                }),
            }
        }

        fn mechanism_names(&self, _props: &Properties) -> Vec<String> {
            vec!["PLAIN".to_string()]
        }
    }

    #[test]
    fn factory_is_object_safe() {
        fn assert_object_safe(_: &dyn SaslClientFactory) {}
        let _ = assert_object_safe;
    }

    #[test]
    fn factory_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SaslClientFactory>();
    }

    #[test]
    fn blanket_impls_forward() {
        let props = Properties::new();
        let boxed: Box<dyn SaslClientFactory> = Box::new(StubFactory);
        assert_eq!(boxed.mechanism_names(&props), vec!["PLAIN".to_string()]);

        let shared = Arc::new(StubFactory);
        assert_eq!(shared.mechanism_names(&props), vec!["PLAIN".to_string()]);

        let borrowed = &StubFactory;
        assert_eq!(borrowed.mechanism_names(&props), vec!["PLAIN".to_string()]);
    }

    #[test]
    fn empty_candidate_list_is_rejected_by_stub() {
        let props = Properties::new();
        let result = StubFactory.create_client(&[], None, "ldap", "srv.example.org", &props, &NoCallbacks);
        assert_matches!(result, Err(SaslError::NoSuchMechanism { .. }));
    }
}
