//! Definition loader
//!
//! Reads the machine from the console: the counts of states and transitions,
//! each transition as a `(from, to)` pair, then the starting state.

use crate::console::{TokenReader, prompt};
use crate::state_machine::{Machine, StateId, StateSpace, Transition, TransitionTable};
use crate::{Error, Result};
use std::io::{BufRead, Write};

/// A machine definition together with the state the walk starts from
#[derive(Debug, Clone)]
pub struct Definition {
    pub machine: Machine,
    pub start: StateId,
}

/// Run the definition dialogue.
///
/// With `strict` set, identifiers outside `[0, n_states)` are rejected;
/// otherwise they are accepted as-is.
pub fn load_definition<R: BufRead, W: Write>(
    input: &mut TokenReader<R>,
    out: &mut W,
    strict: bool,
) -> Result<Definition> {
    prompt(out, "number of state and transitions: ")?;
    let n_states = read_count(input, "number of states")?;
    let n_transitions = read_count(input, "number of transitions")?;

    let states = StateSpace::new(n_states);
    let mut transitions = Vec::new();
    for i in 1..=n_transitions {
        prompt(out, &format!("transition number {} : ", i))?;
        let from_state = input.next_value(&format!("source state of transition {}", i))?;
        let to_state = input.next_value(&format!("destination state of transition {}", i))?;
        let transition = Transition::new(from_state, to_state);
        tracing::debug!("Read transition {}: {}", i, transition);
        transitions.push(transition);
    }

    let machine = Machine::new(states, TransitionTable::new(transitions));

    prompt(out, "starting state: ")?;
    let start: StateId = input.next_value("starting state")?;

    for state in machine.out_of_range_states() {
        if strict {
            return Err(Error::StateOutOfRange { state, n_states });
        }
        tracing::debug!("Accepting out-of-range state {} in transition table", state);
    }

    if strict {
        machine.check_state(start)?;
    } else if !machine.states.contains(start) {
        tracing::debug!("Accepting out-of-range starting state {}", start);
    }

    tracing::info!(
        "Loaded machine with {} state(s) and {} transition(s), starting at {}",
        machine.states.len(),
        machine.table.len(),
        start
    );

    Ok(Definition { machine, start })
}

fn read_count<R: BufRead>(input: &mut TokenReader<R>, what: &str) -> Result<usize> {
    let value: i64 = input.next_value(what)?;
    usize::try_from(value).map_err(|_| Error::NegativeCount {
        what: what.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(input: &str, strict: bool) -> (Result<Definition>, String) {
        let mut reader = TokenReader::new(Cursor::new(input.to_string()));
        let mut out = Vec::new();
        let result = load_definition(&mut reader, &mut out, strict);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_load_linear_machine() {
        let (result, transcript) = load("3 2\n0 1\n1 2\n0\n", false);
        let definition = result.unwrap();

        assert_eq!(definition.machine.states.len(), 3);
        assert_eq!(
            definition.machine.table.transitions(),
            &[Transition::new(0, 1), Transition::new(1, 2)]
        );
        assert_eq!(definition.start, 0);
        assert_eq!(
            transcript,
            "number of state and transitions: \
             transition number 1 : \
             transition number 2 : \
             starting state: "
        );
    }

    #[test]
    fn test_load_without_transitions() {
        let (result, transcript) = load("2 0 1", false);
        let definition = result.unwrap();
        assert!(definition.machine.table.is_empty());
        assert_eq!(definition.start, 1);
        assert_eq!(transcript, "number of state and transitions: starting state: ");
    }

    #[test]
    fn test_lenient_accepts_out_of_range() {
        let (result, _) = load("2 1\n0 7\n-3\n", false);
        let definition = result.unwrap();
        assert_eq!(definition.machine.table.transitions(), &[Transition::new(0, 7)]);
        assert_eq!(definition.start, -3);
    }

    #[test]
    fn test_strict_rejects_out_of_range_transition() {
        let (result, _) = load("2 1\n0 7\n0\n", true);
        assert!(matches!(
            result,
            Err(Error::StateOutOfRange {
                state: 7,
                n_states: 2
            })
        ));
    }

    #[test]
    fn test_strict_rejects_out_of_range_start() {
        let (result, _) = load("2 1\n0 1\n2\n", true);
        assert!(matches!(
            result,
            Err(Error::StateOutOfRange {
                state: 2,
                n_states: 2
            })
        ));
    }

    #[test]
    fn test_negative_count() {
        let (result, _) = load("-1 0\n", false);
        assert!(matches!(result, Err(Error::NegativeCount { value: -1, .. })));
    }

    #[test]
    fn test_truncated_input() {
        let (result, transcript) = load("3 2\n0 1\n", false);
        let err = result.unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { .. }));
        assert!(err.to_string().contains("source state of transition 2"));
        assert!(transcript.ends_with("transition number 2 : "));
    }

    #[test]
    fn test_huge_transition_count_runs_out_of_input() {
        let (result, transcript) = load("1 9223372036854775807\n", false);
        assert!(matches!(result, Err(Error::UnexpectedEof { .. })));
        assert!(transcript.ends_with("transition number 1 : "));
    }

    #[test]
    fn test_malformed_token() {
        let (result, _) = load("3 two\n", false);
        assert!(matches!(result, Err(Error::InvalidNumber { ref token, .. }) if token == "two"));
    }
}
