//! Privilege and precondition checks run before domain operations.
//!
//! The root check runs once per invocation, before any domain action is
//! dispatched. The file checks run per operation: `get` and `restart` need
//! the config file to already exist, `set` only needs the parent directory.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Require an effective uid of 0.
///
/// Called by the dispatcher before any domain action. Kept separate from
/// command construction so argument parsing and codec logic stay testable
/// without privileges.
pub fn ensure_root() -> Result<()> {
    check_euid(effective_uid())
}

/// Pure uid comparison, split out so the policy is testable without root.
fn check_euid(euid: u32) -> Result<()> {
    if euid != 0 {
        return Err(Error::NotRoot);
    }
    Ok(())
}

fn effective_uid() -> u32 {
    // geteuid is always successful; no error path to handle.
    unsafe { libc::geteuid() }
}

/// Preconditions for `get` and `restart`: the config directory exists
/// (created if missing) and the config file itself is present.
pub fn pre_checks(config: &Path) -> Result<()> {
    ensure_parent(config)?;
    if !config.exists() {
        return Err(Error::missing_config(config));
    }
    Ok(())
}

/// Create the parent directory of a config path, including intermediates.
///
/// `set` overwrites the file wholesale and needs only this.
pub fn ensure_parent(config: &Path) -> Result<()> {
    if let Some(parent) = config.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
