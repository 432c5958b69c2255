//! # Sorted mechanism factory
//!
//! A delegating [`SaslClientFactory`] that reorders mechanism-name lists
//! before mechanism selection, using either a [`MechanismComparator`] or a
//! [`MechanismPriority`] allow-list. Exactly one of the two is configured at
//! construction; the factory is immutable afterwards and adds no failure
//! kinds of its own.
//!
//! The two strategies deliberately cover different entry points:
//!
//! - comparator mode sorts both [`create_client`] candidates and
//!   [`mechanism_names`] output;
//! - priority mode applies only to [`mechanism_names`] — candidate lists
//!   passed to [`create_client`] are forwarded untouched. Callers that want
//!   the allow-list to drive selection feed `mechanism_names` back into
//!   `create_client` themselves.
//!
//! [`create_client`]: SaslClientFactory::create_client
//! [`mechanism_names`]: SaslClientFactory::mechanism_names

use std::hash::{Hash, Hasher};

use sasl_core::{CallbackHandler, Properties, SaslClient, SaslClientFactory, SaslResult};
use tracing::trace;

use crate::comparator::{LexicalOrder, MechanismComparator};
use crate::priority::MechanismPriority;

/// The configured reordering. Exactly one variant exists per factory, so the
/// "both set" and "neither set" states are unrepresentable.
#[derive(Clone, Debug)]
enum Strategy<C> {
    Comparator(C),
    Priority(MechanismPriority),
}

/// A delegating [`SaslClientFactory`] that reorders mechanism-name lists.
///
/// `F` is the wrapped factory; `C` the comparator type, defaulting to
/// [`LexicalOrder`] so priority-mode factories need no annotation.
///
/// ```ignore
/// let preferred = SortedMechanismClientFactory::with_priority(
///     provider,
///     ["SCRAM-SHA-256", "SCRAM-SHA-1", "PLAIN"],
/// );
/// ```
#[derive(Clone, Debug)]
pub struct SortedMechanismClientFactory<F, C = LexicalOrder> {
    delegate: F,
    strategy: Strategy<C>,
}

impl<F, C> SortedMechanismClientFactory<F, C> {
    /// Wrap `delegate`, ordering every mechanism-name list with `comparator`.
    pub fn with_comparator(delegate: F, comparator: C) -> Self {
        Self {
            delegate,
            strategy: Strategy::Comparator(comparator),
        }
    }

    /// The wrapped factory.
    pub fn delegate(&self) -> &F {
        &self.delegate
    }

    /// Unwrap, returning the delegate.
    pub fn into_inner(self) -> F {
        self.delegate
    }

    /// The configured comparator, if this factory is in comparator mode.
    pub fn comparator(&self) -> Option<&C> {
        match &self.strategy {
            Strategy::Comparator(comparator) => Some(comparator),
            Strategy::Priority(_) => None,
        }
    }

    /// The configured allow-list, if this factory is in priority mode.
    pub fn priority(&self) -> Option<&MechanismPriority> {
        match &self.strategy {
            Strategy::Comparator(_) => None,
            Strategy::Priority(priority) => Some(priority),
        }
    }
}

impl<F> SortedMechanismClientFactory<F, LexicalOrder> {
    /// Wrap `delegate` with an allow-list built from `names`, in the order
    /// given. Duplicate names keep their first position; unknown names are
    /// tolerated and simply never match.
    pub fn with_priority<I, S>(delegate: F, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_priority_list(delegate, MechanismPriority::with_mechanisms(names))
    }

    /// Wrap `delegate` with an already-built allow-list.
    pub fn with_priority_list(delegate: F, priority: MechanismPriority) -> Self {
        Self {
            delegate,
            strategy: Strategy::Priority(priority),
        }
    }
}

impl<F, C> SaslClientFactory for SortedMechanismClientFactory<F, C>
where
    F: SaslClientFactory,
    C: MechanismComparator + Send + Sync,
{
    fn create_client(
        &self,
        mechanisms: &[String],
        authorization_id: Option<&str>,
        protocol: &str,
        server_name: &str,
        props: &Properties,
        callback_handler: &dyn CallbackHandler,
    ) -> SaslResult<Box<dyn SaslClient>> {
        let mut candidates = mechanisms.to_vec();
        if let Strategy::Comparator(comparator) = &self.strategy {
            candidates.sort_by(|a, b| comparator.compare(a, b));
            trace!(?candidates, "sorted candidate mechanisms");
        }
        // Priority mode forwards the candidates untouched; the allow-list
        // applies to mechanism_names only.
        self.delegate.create_client(
            &candidates,
            authorization_id,
            protocol,
            server_name,
            props,
            callback_handler,
        )
    }

    fn mechanism_names(&self, props: &Properties) -> Vec<String> {
        let advertised = self.delegate.mechanism_names(props);
        match &self.strategy {
            Strategy::Comparator(comparator) => {
                let mut names = advertised;
                names.sort_by(|a, b| comparator.compare(a, b));
                names
            }
            Strategy::Priority(priority) => {
                let selected = priority.apply(&advertised);
                trace!(?advertised, ?selected, "applied mechanism priority list");
                selected
            }
        }
    }
}

/// Equality tracks the delegate and, in comparator mode, the comparator.
/// Priority lists are not consulted: two priority-mode factories over equal
/// delegates compare equal whatever their lists contain. Kept as-is; see
/// `tests::priority_lists_do_not_affect_equality_known_quirk`.
impl<F: PartialEq, C: PartialEq> PartialEq for SortedMechanismClientFactory<F, C> {
    fn eq(&self, other: &Self) -> bool {
        self.delegate == other.delegate
            && match (&self.strategy, &other.strategy) {
                (Strategy::Comparator(a), Strategy::Comparator(b)) => a == b,
                (Strategy::Priority(_), Strategy::Priority(_)) => true,
                _ => false,
            }
    }
}

impl<F: Eq, C: Eq> Eq for SortedMechanismClientFactory<F, C> {}

impl<F: Hash, C: Hash> Hash for SortedMechanismClientFactory<F, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Fixed order: delegate, factory-kind tag, comparator. The priority
        // list is excluded to stay consistent with eq.
        self.delegate.hash(state);
        "sorted-mechanism-client-factory".hash(state);
        if let Strategy::Comparator(comparator) = &self.strategy {
            comparator.hash(state);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
