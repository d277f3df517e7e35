//! Running the `-exec` program and reporting how it ends.
//!
//! The child is created with `fork` + `execv` rather than
//! [`std::process::Command`] for two reasons that are part of the contract:
//! the argument vector is exactly the matched paths (no program name in
//! `argv[0]`), and a failed `execv` must show up as the child exiting with a
//! failure status, not as a spawn error in the parent. Waiting uses
//! `waitpid` with `WUNTRACED | WCONTINUED` so stop and continue transitions
//! are reported too.

#![allow(unsafe_code)]

use std::ffi::{CString, OsStr};
use std::fmt;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use tracing::debug;

use crate::error::FindError;

/// One status transition of the child, as reported by `waitpid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Exited normally with this status code.
    Exited(i32),

    /// Terminated by this signal.
    Killed(i32),

    /// Stopped by this signal. Not terminal.
    Stopped(i32),

    /// Resumed after a stop. Not terminal.
    Continued,
}

impl ProcessOutcome {
    /// Classify a raw `waitpid` status word.
    ///
    /// Returns `None` for a status that fits none of the four shapes.
    pub fn from_raw(status: libc::c_int) -> Option<Self> {
        if libc::WIFEXITED(status) {
            Some(Self::Exited(libc::WEXITSTATUS(status)))
        } else if libc::WIFSIGNALED(status) {
            Some(Self::Killed(libc::WTERMSIG(status)))
        } else if libc::WIFSTOPPED(status) {
            Some(Self::Stopped(libc::WSTOPSIG(status)))
        } else if libc::WIFCONTINUED(status) {
            Some(Self::Continued)
        } else {
            None
        }
    }

    /// Whether the child is gone. Waiting stops only on these.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exited(_) | Self::Killed(_))
    }
}

impl fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited(code) => write!(f, "exited, status = {code}"),
            Self::Killed(sig)  => write!(f, "killed by signal {sig}"),
            Self::Stopped(sig) => write!(f, "stopped by signal {sig}"),
            Self::Continued    => write!(f, "continued"),
        }
    }
}

/// Run `program` with `args` as its whole argument vector, then print every
/// status transition to `out` until the child exits or is killed.
///
/// Returns the terminal outcome. A child that cannot load `program` writes a
/// message to stderr and exits with status 1, which is reported like any
/// other exit.
///
/// # Errors
///
/// [`FindError::InvalidArgument`] if the program or an argument contains a
/// NUL byte, [`FindError::Spawn`] if `fork` fails, [`FindError::Wait`] if
/// `waitpid` fails and [`FindError::Output`] if `out` cannot be written.
pub fn run_and_report<S, W>(program: &Path, args: &[S], out: &mut W) -> Result<ProcessOutcome, FindError>
where
    S: AsRef<OsStr>,
    W: Write,
{
    // Everything the child needs is allocated here, before forking.
    let c_program = to_cstring(program.as_os_str())?;
    let c_args = args
        .iter()
        .map(|a| to_cstring(a.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let mut argv: Vec<*const libc::c_char> = c_args.iter().map(|a| a.as_ptr()).collect();
    argv.push(std::ptr::null());
    let failure = format!("treefind: cannot execute {}\n", program.display()).into_bytes();

    // Buffered output would otherwise be duplicated into the child.
    out.flush().map_err(FindError::Output)?;
    io::stdout().flush().map_err(FindError::Output)?;

    // SAFETY: the child only calls async-signal-safe functions (execv,
    // write, _exit) on memory prepared above.
    let pid = unsafe { libc::fork() };
    if pid == -1 {
        return Err(FindError::Spawn(io::Error::last_os_error()));
    }
    if pid == 0 {
        unsafe {
            libc::execv(c_program.as_ptr(), argv.as_ptr());
            // Only reached if execv failed. Nothing to recover before _exit.
            let _ = libc::write(libc::STDERR_FILENO, failure.as_ptr().cast(), failure.len());
            libc::_exit(libc::EXIT_FAILURE);
        }
    }

    debug!(pid, program = %program.display(), args = args.len(), "spawned child");
    wait_and_report(pid, out)
}

fn wait_and_report<W: Write>(pid: libc::pid_t, out: &mut W) -> Result<ProcessOutcome, FindError> {
    loop {
        let mut status: libc::c_int = 0;
        // SAFETY: `status` is a valid out-pointer for the duration of the call.
        let ret = unsafe { libc::waitpid(pid, &mut status, libc::WUNTRACED | libc::WCONTINUED) };
        if ret == -1 {
            return Err(FindError::Wait(io::Error::last_os_error()));
        }

        let Some(outcome) = ProcessOutcome::from_raw(status) else {
            continue;
        };

        debug!(pid, %outcome, "child status");
        writeln!(out, "{outcome}").map_err(FindError::Output)?;

        if outcome.is_terminal() {
            return Ok(outcome);
        }
    }
}

fn to_cstring(s: &OsStr) -> Result<CString, FindError> {
    CString::new(s.as_bytes()).map_err(|_| FindError::InvalidArgument(s.to_string_lossy().into_owned()))
}
