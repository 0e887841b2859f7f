//! Invariant checking for navigation state.
//!
//! Invariants are properties that must hold after every handled event, for
//! any event sequence. State is captured into a [`NavigationSnapshot`] and
//! checked by every registered [`Invariant`].
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let snapshot = NavigationSnapshot::capture(&router);
//! registry.assert_all(&snapshot, "after rotate");
//! ```

mod checks;
mod snapshot;

pub use checks::{SelectionInBounds, SlotContextPresent, StackCoversDepth};
pub use snapshot::NavigationSnapshot;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// What went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// A property checked against a snapshot.
pub trait Invariant: Send + Sync {
    /// Name for error reporting.
    fn name(&self) -> &'static str;

    /// `Ok(())` if the property holds.
    fn check(&self, state: &NavigationSnapshot) -> InvariantResult;
}

/// Set of invariants checked together.
#[derive(Default)]
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every navigation invariant.
    ///
    /// - [`SelectionInBounds`]: cursor stays on an entry
    /// - [`StackCoversDepth`]: enough history for every return
    /// - [`SlotContextPresent`]: slot menus know their SCSI id
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(SelectionInBounds);
        registry.add(StackCoversDepth);
        registry.add(SlotContextPresent);
        registry
    }

    /// Add an invariant.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check everything, collecting all violations.
    pub fn check_all(&self, state: &NavigationSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Check everything, panicking with `context` on any violation.
    #[allow(clippy::panic)]
    pub fn assert_all(&self, state: &NavigationSnapshot, context: &str) {
        if let Err(violations) = self.check_all(state) {
            let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
            panic!("Invariant violation {context}:\n  {}", messages.join("\n  "));
        }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use ctrlboard_app::MenuId;

    use super::*;

    #[test]
    fn standard_registry_has_invariants() {
        let registry = InvariantRegistry::standard();
        assert_eq!(registry.len(), 3);
        assert!(InvariantRegistry::new().is_empty());
    }

    #[test]
    fn root_snapshot_passes() {
        let snapshot = NavigationSnapshot {
            menu: MenuId::ScsiId,
            entries: 8,
            selection: 7,
            stack_depth: 0,
            slot: None,
        };

        assert!(InvariantRegistry::standard().check_all(&snapshot).is_ok());
    }

    #[test]
    fn reports_every_violation() {
        let snapshot = NavigationSnapshot {
            menu: MenuId::Images,
            entries: 2,
            selection: 2,
            stack_depth: 1,
            slot: None,
        };

        let violations = InvariantRegistry::standard().check_all(&snapshot).unwrap_err();
        let names: Vec<_> = violations.iter().map(|v| v.invariant).collect();
        assert_eq!(names, vec!["SelectionInBounds", "StackCoversDepth", "SlotContextPresent"]);
    }
}
