//! State machine module - States, transitions and the transition table

use crate::{Error, Result};

pub mod state;
pub mod table;
pub mod transition;

// Re-export key types
pub use state::{StateId, StateSpace};
pub use table::{Lookup, LookupMode, TransitionTable};
pub use transition::Transition;

/// A loaded machine definition
#[derive(Debug, Clone)]
pub struct Machine {
    pub states: StateSpace,
    pub table: TransitionTable,
}

impl Machine {
    pub fn new(states: StateSpace, table: TransitionTable) -> Self {
        Self { states, table }
    }

    /// Reject a state identifier outside the machine's state space
    pub fn check_state(&self, state: StateId) -> Result<()> {
        if self.states.contains(state) {
            Ok(())
        } else {
            Err(Error::StateOutOfRange {
                state,
                n_states: self.states.len(),
            })
        }
    }

    /// Identifiers in the table that fall outside the state space, in order of appearance
    pub fn out_of_range_states(&self) -> Vec<StateId> {
        self.table
            .transitions()
            .iter()
            .flat_map(|t| [t.from_state, t.to_state])
            .filter(|&s| !self.states.contains(s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_state() {
        let machine = Machine::new(StateSpace::new(2), TransitionTable::default());
        assert!(machine.check_state(1).is_ok());
        assert!(matches!(
            machine.check_state(2),
            Err(Error::StateOutOfRange {
                state: 2,
                n_states: 2
            })
        ));
    }

    #[test]
    fn test_out_of_range_states() {
        let table = vec![Transition::new(0, 3), Transition::new(-1, 1)]
            .into_iter()
            .collect();
        let machine = Machine::new(StateSpace::new(2), table);
        assert_eq!(machine.out_of_range_states(), vec![3, -1]);
    }
}
