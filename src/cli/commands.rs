//! CLI command implementations

/// Walk command implementation
pub mod walk {
    use crate::Result;
    use crate::cli::SessionSettings;
    use crate::session;

    /// Run an interactive session on the process's stdin and stdout
    pub fn execute(settings: SessionSettings) -> Result<()> {
        tracing::debug!(
            "Starting session (lookup: {}, strict: {})",
            settings.lookup.name(),
            settings.strict
        );

        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout().lock();
        let (session, end) = session::run(
            stdin.lock(),
            &mut stdout,
            settings.lookup,
            settings.strict,
        )?;

        tracing::debug!(
            "Final state {} after {:?} ({} state(s) defined)",
            session.current(),
            end,
            session.machine().states.len()
        );

        Ok(())
    }
}
