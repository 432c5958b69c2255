//! SASL error types.

/// Result type alias for SASL operations.
pub type SaslResult<T> = Result<T, SaslError>;

/// Errors raised by client factories and client sessions.
///
/// Decorating factories never add failure kinds of their own; whatever the
/// wrapped factory raises propagates unchanged to the caller.
#[derive(Debug, thiserror::Error)]
pub enum SaslError {
    /// None of the offered mechanisms can be satisfied by this factory.
    #[error("no suitable mechanism among [{}]", mechanisms.join(", "))]
    NoSuchMechanism {
        /// The candidate mechanism names that were offered.
        mechanisms: Vec<String>,
    },

    /// A mechanism failed during challenge/response evaluation.
    #[error("mechanism {mechanism} failed: {message}")]
    MechanismFailed {
        /// Name of the failing mechanism.
        mechanism: String,
        /// Failure description.
        message: String,
    },

    /// A parameter was malformed or out of range.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: String,
        /// What was wrong with it.
        message: String,
    },

    /// The callback handler could not supply a requested credential.
    #[error("callback failed: {0}")]
    Callback(String),

    /// The operation is not supported by this factory or session.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_such_mechanism_display() {
        let err = SaslError::NoSuchMechanism {
            mechanisms: vec!["PLAIN".to_string(), "GSSAPI".to_string()],
        };
        assert_eq!(err.to_string(), "no suitable mechanism among [PLAIN, GSSAPI]");
    }

    #[test]
    fn mechanism_failed_display() {
        let err = SaslError::MechanismFailed {
            mechanism: "SCRAM-SHA-256".to_string(),
            message: "server signature mismatch".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "mechanism SCRAM-SHA-256 failed: server signature mismatch"
        );
    }

    #[test]
    fn invalid_parameter_display() {
        let err = SaslError::InvalidParameter {
            name: "sasl.max.buffer".to_string(),
            message: "must be a positive integer".to_string(),
        };
        assert!(err.to_string().contains("sasl.max.buffer"));
        assert!(err.to_string().contains("positive integer"));
    }

    #[test]
    fn callback_display() {
        let err = SaslError::Callback("no password available".to_string());
        assert_eq!(err.to_string(), "callback failed: no password available");
    }
}
