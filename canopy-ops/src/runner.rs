//! Command runner abstraction for executing git.
//!
//! [`GitRunner`] is the seam the dispatcher and fallback policy execute
//! through. [`SystemGitRunner`] is the production implementation that spawns
//! the real executable. [`MockRunner`] is the test double that records
//! argument vectors and returns preset responses.
//!
//! Invocations are always argument vectors — never a shell string — so remote
//! URLs and prefixes taken from configuration cannot be reinterpreted by a
//! shell.

use std::cell::RefCell;
use std::process::Command;

use colored::Colorize;

use crate::error::OpsError;

/// Outcome of one external invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub status: i32,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// A zero-status result with the given stdout. Test fixture helper.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            status: 0,
        }
    }
}

/// Trait for executing one git invocation synchronously.
///
/// A non-zero exit is returned as [`OpsError::CommandFailed`] — the runner
/// never aborts the process; callers decide whether to retry, skip or abort.
pub trait GitRunner {
    fn run(&self, args: &[String]) -> Result<CommandResult, OpsError>;
}

// ---------------------------------------------------------------------------
// SystemGitRunner
// ---------------------------------------------------------------------------

/// Production runner that spawns the `git` executable and blocks until it
/// exits. No timeout is enforced on the child process.
pub struct SystemGitRunner {
    program: String,
}

impl SystemGitRunner {
    pub fn new() -> Self {
        Self {
            program: "git".to_owned(),
        }
    }

    /// Override the executable name (resolved via `PATH`).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SystemGitRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for SystemGitRunner {
    fn run(&self, args: &[String]) -> Result<CommandResult, OpsError> {
        tracing::debug!("exec: {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| OpsError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        // A signal-terminated child has no exit code; treat it as an
        // ordinary failure with status 1.
        let status = output.status.code().unwrap_or(1);
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if status != 0 {
            if !stderr.trim().is_empty() {
                eprintln!("{}", stderr.trim_end().red());
            }
            return Err(OpsError::CommandFailed { status, stderr });
        }

        Ok(CommandResult {
            stdout,
            stderr,
            status,
        })
    }
}

// ---------------------------------------------------------------------------
// MockRunner
// ---------------------------------------------------------------------------

/// Test-double runner that records argument vectors and returns
/// pre-configured responses (in order; defaults to success once exhausted).
pub struct MockRunner {
    responses: RefCell<Vec<Result<CommandResult, OpsError>>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_responses(responses: Vec<Result<CommandResult, OpsError>>) -> Self {
        let mut reversed = responses;
        reversed.reverse();
        Self {
            responses: RefCell::new(reversed),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every argument vector this runner has executed, in call order.
    pub fn executed(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// A failure response with the given exit status. Fixture helper.
    pub fn failure(status: i32, stderr: &str) -> Result<CommandResult, OpsError> {
        Err(OpsError::CommandFailed {
            status,
            stderr: stderr.to_owned(),
        })
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for MockRunner {
    fn run(&self, args: &[String]) -> Result<CommandResult, OpsError> {
        self.calls.borrow_mut().push(args.to_vec());
        match self.responses.borrow_mut().pop() {
            Some(response) => response,
            None => Ok(CommandResult::ok("")),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
