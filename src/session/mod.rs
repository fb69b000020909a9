//! Interactive session - load a machine from the console and walk it

use crate::console::{TokenReader, prompt};
use crate::state_machine::{Lookup, LookupMode, Machine, StateId};
use crate::{Error, Result};
use std::io::{BufRead, Write};

pub mod loader;

pub use loader::{Definition, load_definition};

pub const MSG_SUCCESS: &str = "transition successful";
pub const MSG_ILLEGAL: &str = "illegal transition, not defined in transitions table";
pub const MSG_INVALID_INPUT: &str = "invalid input, expected a state number";

/// Tokens accepted at the `next state: ` prompt to end the walk
pub const EXIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

/// Why a walk stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Input reached end of file
    InputClosed,
    /// The user typed an exit command
    ExitCommand,
}

/// A machine being walked from a current state
#[derive(Debug, Clone)]
pub struct Session {
    machine: Machine,
    current: StateId,
    mode: LookupMode,
}

impl Session {
    pub fn new(machine: Machine, start: StateId, mode: LookupMode) -> Self {
        Self {
            machine,
            current: start,
            mode,
        }
    }

    pub fn from_definition(definition: Definition, mode: LookupMode) -> Self {
        Self::new(definition.machine, definition.start, mode)
    }

    pub fn current(&self) -> StateId {
        self.current
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Attempt a move; the current state changes only when the move is allowed
    pub fn step(&mut self, requested: StateId) -> Lookup {
        let outcome = self
            .machine
            .table
            .lookup(self.mode, self.current, requested);

        tracing::debug!(
            "Step {} -> {} ({}): {:?}",
            self.current,
            requested,
            self.mode.name(),
            outcome
        );

        if outcome == Lookup::Allowed {
            self.current = requested;
        }
        outcome
    }

    /// Run the prompt loop until input closes or an exit command is typed
    pub fn walk<R: BufRead, W: Write>(
        &mut self,
        input: &mut TokenReader<R>,
        out: &mut W,
    ) -> Result<SessionEnd> {
        loop {
            writeln!(out, "current state: {}", self.current)?;
            prompt(out, "next state: ")?;

            let Some(token) = input.next_token()? else {
                // Keep the shell prompt off the dangling "next state: " line
                writeln!(out)?;
                return Ok(SessionEnd::InputClosed);
            };

            if EXIT_COMMANDS.contains(&token.as_str()) {
                return Ok(SessionEnd::ExitCommand);
            }

            let requested: StateId = match token.parse() {
                Ok(state) => state,
                Err(_) => {
                    tracing::debug!("{}", Error::invalid_number(token, "next state"));
                    writeln!(out, "{}", MSG_INVALID_INPUT)?;
                    continue;
                }
            };

            match self.step(requested) {
                Lookup::Allowed => writeln!(out, "{}", MSG_SUCCESS)?,
                Lookup::Denied => writeln!(out, "{}", MSG_ILLEGAL)?,
                Lookup::NoTransitions => {}
            }
        }
    }
}

/// Load a definition from `input` and walk it, returning the final session
pub fn run<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    mode: LookupMode,
    strict: bool,
) -> Result<(Session, SessionEnd)> {
    let mut input = TokenReader::new(reader);
    let definition = load_definition(&mut input, out, strict)?;
    let mut session = Session::from_definition(definition, mode);
    let end = session.walk(&mut input, out)?;

    tracing::info!(
        "Session ended ({:?}) in state {}",
        end,
        session.current()
    );

    Ok((session, end))
}
