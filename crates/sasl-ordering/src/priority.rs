//! Prioritized mechanism allow-lists.

use serde::{Deserialize, Serialize};

/// An ordered allow-list of mechanism names.
///
/// Position in the list is precedence: earlier names are preferred. Names are
/// deduplicated on insert (a repeated name keeps its first position), and the
/// list may freely contain names no factory actually supports — applying the
/// list never invents names, it only intersects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct MechanismPriority {
    names: Vec<String>,
}

impl From<Vec<String>> for MechanismPriority {
    fn from(names: Vec<String>) -> Self {
        Self::with_mechanisms(names)
    }
}

impl From<MechanismPriority> for Vec<String> {
    fn from(priority: MechanismPriority) -> Self {
        priority.names
    }
}

impl MechanismPriority {
    /// An empty priority list. Applying it selects nothing.
    ///
    /// Each call produces an independent value; growing one list never
    /// affects another.
    #[must_use]
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    /// Build a list from names in the given order.
    pub fn with_mechanisms<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut priority = Self::empty();
        for name in names {
            priority.add(name);
        }
        priority
    }

    /// Append a name at the lowest precedence. Duplicates are ignored.
    pub fn add<S: Into<String>>(&mut self, name: S) {
        let name = name.into();
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    /// Whether the list contains `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of distinct names in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// The configured names, highest precedence first.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Intersect `candidates` with this list, ordered by precedence.
    ///
    /// The result contains exactly the candidates that appear in this list,
    /// in this list's order. Candidates outside the list are dropped;
    /// configured names absent from `candidates` do not appear.
    #[must_use]
    pub fn apply(&self, candidates: &[String]) -> Vec<String> {
        self.names
            .iter()
            .filter(|name| candidates.iter().any(|c| c == *name))
            .cloned()
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_selects_nothing() {
        let priority = MechanismPriority::empty();
        assert!(priority.is_empty());
        assert_eq!(priority.apply(&strings(&["PLAIN", "GSSAPI"])), Vec::<String>::new());
    }

    #[test]
    fn duplicates_keep_first_position() {
        let priority = MechanismPriority::with_mechanisms(["PLAIN", "GSSAPI", "PLAIN"]);
        assert_eq!(priority.names(), &strings(&["PLAIN", "GSSAPI"]));
        assert_eq!(priority.len(), 2);
    }

    #[test]
    fn unknown_names_are_tolerated() {
        let priority = MechanismPriority::with_mechanisms(["NOT-A-MECH", "PLAIN"]);
        assert!(priority.contains("NOT-A-MECH"));
        // apply never invents the unknown name
        assert_eq!(priority.apply(&strings(&["PLAIN"])), strings(&["PLAIN"]));
    }

    #[test]
    fn apply_orders_by_precedence_not_candidate_order() {
        let priority = MechanismPriority::with_mechanisms(["PLAIN", "DIGEST-MD5"]);
        let candidates = strings(&["DIGEST-MD5", "GSSAPI", "PLAIN"]);
        assert_eq!(priority.apply(&candidates), strings(&["PLAIN", "DIGEST-MD5"]));
    }

    #[test]
    fn apply_is_an_intersection() {
        let priority = MechanismPriority::with_mechanisms(["EXTERNAL", "SCRAM-SHA-256"]);
        // EXTERNAL not offered, SCRAM offered
        let candidates = strings(&["SCRAM-SHA-256", "PLAIN"]);
        assert_eq!(priority.apply(&candidates), strings(&["SCRAM-SHA-256"]));
    }

    #[test]
    fn independent_values_do_not_share_state() {
        let mut a = MechanismPriority::empty();
        let b = MechanismPriority::empty();
        a.add("PLAIN");
        assert!(b.is_empty());
    }

    #[test]
    fn serde_roundtrip_is_a_bare_array() {
        let priority = MechanismPriority::with_mechanisms(["PLAIN", "GSSAPI"]);
        let json = serde_json::to_string(&priority).unwrap();
        assert_eq!(json, r#"["PLAIN","GSSAPI"]"#);
        let back: MechanismPriority = serde_json::from_str(&json).unwrap();
        assert_eq!(back, priority);
    }

    #[test]
    fn deserialization_dedups() {
        let back: MechanismPriority = serde_json::from_str(r#"["PLAIN","PLAIN","GSSAPI"]"#).unwrap();
        assert_eq!(back.names(), &strings(&["PLAIN", "GSSAPI"]));
    }
}
