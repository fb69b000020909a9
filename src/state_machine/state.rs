//! State representation

/// Identifier of a state.
///
/// Signed because identifiers read from the console are not required to lie
/// inside the machine's state space.
pub type StateId = i64;

/// The contiguous set of states `0..count` of a machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSpace {
    count: usize,
}

impl StateSpace {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether `state` names one of the machine's states
    pub fn contains(&self, state: StateId) -> bool {
        state >= 0 && (state as u64) < self.count as u64
    }
}
