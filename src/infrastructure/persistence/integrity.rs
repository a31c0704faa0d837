//! Delete-time referential integrity policy.
//!
//! The policy table is configuration, not hard-coded behavior: every
//! relationship has a name, and relationships without an explicit entry take
//! the conservative restrict default.

use std::collections::HashMap;

/// What happens when a row with active dependents is soft-deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Reject the delete while active dependents exist.
    Restrict,
    /// Let the delete through; handling dependents is the caller's job.
    NoAction,
}

/// Relationships the default rule set relaxes to [`DeletePolicy::NoAction`].
pub const AREA_SPACE: &str = "area.space";
pub const SPACE_COORDINATE: &str = "space.coordinate";

/// Per-relationship delete policy, keyed by `"parent.child"` names.
#[derive(Debug, Clone)]
pub struct IntegrityRules {
    overrides: HashMap<&'static str, DeletePolicy>,
}

impl Default for IntegrityRules {
    fn default() -> Self {
        let mut overrides = HashMap::new();
        // The location mid-levels leave children to the caller.
        overrides.insert(AREA_SPACE, DeletePolicy::NoAction);
        overrides.insert(SPACE_COORDINATE, DeletePolicy::NoAction);
        Self { overrides }
    }
}

impl IntegrityRules {
    /// Restrict everything, including the relationships the default set
    /// relaxes.
    pub fn restrict_all() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    pub fn set(&mut self, relationship: &'static str, policy: DeletePolicy) -> &mut Self {
        self.overrides.insert(relationship, policy);
        self
    }

    pub fn policy(&self, relationship: &str) -> DeletePolicy {
        self.overrides
            .get(relationship)
            .copied()
            .unwrap_or(DeletePolicy::Restrict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_relationships_default_to_restrict() {
        let rules = IntegrityRules::default();
        assert_eq!(rules.policy("plant.area"), DeletePolicy::Restrict);
        assert_eq!(rules.policy("model.asset"), DeletePolicy::Restrict);
        assert_eq!(rules.policy(AREA_SPACE), DeletePolicy::NoAction);
        assert_eq!(rules.policy(SPACE_COORDINATE), DeletePolicy::NoAction);
    }

    #[test]
    fn overrides_replace_defaults() {
        let mut rules = IntegrityRules::default();
        rules.set(AREA_SPACE, DeletePolicy::Restrict);
        assert_eq!(rules.policy(AREA_SPACE), DeletePolicy::Restrict);

        let strict = IntegrityRules::restrict_all();
        assert_eq!(strict.policy(AREA_SPACE), DeletePolicy::Restrict);
    }
}
