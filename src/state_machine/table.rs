//! Transition table and lookup

use crate::state_machine::{StateId, Transition};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a requested move is checked against the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LookupMode {
    /// Only the first transition leaving the current state is consulted
    #[default]
    FirstMatch,
    /// Any transition leaving the current state may match
    AnyMatch,
}

impl LookupMode {
    pub fn name(&self) -> &'static str {
        match self {
            LookupMode::FirstMatch => "first-match",
            LookupMode::AnyMatch => "any-match",
        }
    }
}

/// Result of checking a requested move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The move is in the table
    Allowed,
    /// The current state has transitions, but not to the requested state
    Denied,
    /// No transition leaves the current state
    NoTransitions,
}

/// The transitions of a machine, in the order they were defined.
///
/// Immutable once built. Alongside the ordered entries it keeps an index from
/// each source state to its destinations, also in definition order.
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    transitions: Vec<Transition>,
    outgoing: HashMap<StateId, Vec<StateId>>,
}

impl TransitionTable {
    pub fn new(transitions: Vec<Transition>) -> Self {
        let mut outgoing: HashMap<StateId, Vec<StateId>> = HashMap::new();
        for transition in &transitions {
            outgoing
                .entry(transition.from_state)
                .or_default()
                .push(transition.to_state);
        }

        Self {
            transitions,
            outgoing,
        }
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Transitions in definition order
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Destinations reachable from `state` in one move, in definition order
    pub fn destinations(&self, state: StateId) -> &[StateId] {
        self.outgoing.get(&state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check whether moving from `current` to `requested` is permitted
    pub fn lookup(&self, mode: LookupMode, current: StateId, requested: StateId) -> Lookup {
        match mode {
            LookupMode::FirstMatch => self.lookup_first(current, requested),
            LookupMode::AnyMatch => self.lookup_any(current, requested),
        }
    }

    /// Scan in order and decide on the first entry leaving `current`.
    ///
    /// A later entry from the same state is never reached, so a state with
    /// several outgoing transitions only accepts its first destination.
    fn lookup_first(&self, current: StateId, requested: StateId) -> Lookup {
        match self.transitions.iter().find(|t| t.leaves(current)) {
            Some(t) if t.to_state == requested => Lookup::Allowed,
            Some(_) => Lookup::Denied,
            None => Lookup::NoTransitions,
        }
    }

    fn lookup_any(&self, current: StateId, requested: StateId) -> Lookup {
        let destinations = self.destinations(current);
        if destinations.is_empty() {
            Lookup::NoTransitions
        } else if destinations.contains(&requested) {
            Lookup::Allowed
        } else {
            Lookup::Denied
        }
    }
}

impl FromIterator<Transition> for TransitionTable {
    fn from_iter<I: IntoIterator<Item = Transition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
