//! Transition representation

use crate::state_machine::StateId;
use std::fmt;

/// A directed edge permitting movement from one state to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub from_state: StateId,
    pub to_state: StateId,
}

impl Transition {
    pub fn new(from_state: StateId, to_state: StateId) -> Self {
        Self {
            from_state,
            to_state,
        }
    }

    /// Whether this transition leaves `state`
    pub fn leaves(&self, state: StateId) -> bool {
        self.from_state == state
    }
}

impl From<(StateId, StateId)> for Transition {
    fn from((from_state, to_state): (StateId, StateId)) -> Self {
        Self::new(from_state, to_state)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from_state, self.to_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Transition::new(0, 1).to_string(), "0 -> 1");
    }

    #[test]
    fn test_leaves() {
        let transition: Transition = (2, 5).into();
        assert!(transition.leaves(2));
        assert!(!transition.leaves(5));
    }
}
