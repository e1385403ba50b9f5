//! Service manager invocation for `restart` commands.

use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Restart a systemd unit, blocking until systemctl returns.
pub fn restart(unit: &str) -> Result<()> {
    run_checked("systemctl", &["restart", unit])
}

/// Run an external command and require a zero exit status.
///
/// A spawn failure or non-zero exit both surface as errors naming the
/// exact command line attempted.
fn run_checked(program: &str, args: &[&str]) -> Result<()> {
    debug!(program, ?args, "invoking external command");

    let argv: Vec<&str> = std::iter::once(program).chain(args.iter().copied()).collect();
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|_| Error::command_failed(&argv))?;

    if !status.success() {
        return Err(Error::command_failed(&argv));
    }
    Ok(())
}
