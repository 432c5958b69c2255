//! # sasl-ordering
//!
//! Mechanism-list ordering for SASL client factories.
//!
//! A server advertises mechanisms in whatever order it likes; a client that
//! cares about preference (try SCRAM before PLAIN, never offer ANONYMOUS)
//! wraps its factory in [`SortedMechanismClientFactory`], which reorders
//! mechanism-name lists before selection happens:
//!
//! - **Comparator mode**: sort candidate lists with a
//!   [`MechanismComparator`] total order
//! - **Priority mode**: filter and reorder advertised names against a
//!   [`MechanismPriority`] allow-list
//!
//! The decorator owns no negotiation logic and is immutable after
//! construction; everything else is forwarded to the wrapped factory
//! unchanged.

#![deny(unsafe_code)]

pub mod comparator;
pub mod priority;
pub mod sorted;

pub use comparator::{LexicalOrder, MechanismComparator};
pub use priority::MechanismPriority;
pub use sorted::SortedMechanismClientFactory;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
