//! Mapping from a requested operation to a concrete git invocation.
//!
//! Each operation expands to a fixed subcommand template:
//!
//! ```text
//! git subtree <add|pull|push> --prefix <prefix> <remote> <branch> [--squash]
//! ```
//!
//! Add and pull route through the fallback policy across all candidate
//! remotes. Push targets exactly one remote — the primary `repo_urls` entry —
//! because pushing the same change to several remotes non-atomically is a
//! distinct side effect per target, not an equivalent-outcome retry.

use std::fmt;
use std::str::FromStr;

use canopy_core::{Subtree, SubtreeName};

use crate::error::OpsError;
use crate::fallback;
use crate::runner::{CommandResult, GitRunner};

/// A subtree operation requested against one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Pull,
    Push,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Pull => "pull",
            Operation::Push => "push",
        }
    }

    /// Whether the operation may retry across candidate remotes.
    pub fn supports_fallback(&self) -> bool {
        !matches!(self, Operation::Push)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "pull" => Ok(Operation::Pull),
            "push" => Ok(Operation::Push),
            other => Err(OpsError::UnknownOperation(other.to_owned())),
        }
    }
}

/// Build the argument vector for one invocation of `op` against `remote`.
pub(crate) fn subtree_args(op: Operation, unit: &Subtree, remote: &str) -> Vec<String> {
    let mut args = vec![
        "subtree".to_owned(),
        op.as_str().to_owned(),
        "--prefix".to_owned(),
        unit.prefix.display().to_string(),
        remote.to_owned(),
        unit.branch.clone(),
    ];
    if unit.squash && op.supports_fallback() {
        args.push("--squash".to_owned());
    }
    args
}

/// Execute `op` for the named unit.
///
/// Add/pull try every candidate remote in declared order and short-circuit on
/// the first success; push invokes the runner once against the primary
/// remote. Errors are returned, never swallowed — the caller decides whether
/// a failure aborts the run or is recorded in a batch summary.
pub fn run_operation(
    runner: &dyn GitRunner,
    op: Operation,
    name: &SubtreeName,
    unit: &Subtree,
) -> Result<CommandResult, OpsError> {
    if unit.repo_urls.is_empty() {
        return Err(OpsError::NoRemotes {
            name: name.0.clone(),
        });
    }
    match op {
        Operation::Add | Operation::Pull => fallback::try_candidates(runner, op, name, unit),
        Operation::Push => runner.run(&subtree_args(op, unit, unit.primary_remote())),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::runner::MockRunner;

    fn unit(urls: &[&str]) -> Subtree {
        Subtree {
            prefix: PathBuf::from("third_party/lib-a"),
            branch: "main".to_owned(),
            repo_urls: urls.iter().map(|s| s.to_string()).collect(),
            squash: false,
        }
    }

    #[test]
    fn operation_parses_known_names() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("pull".parse::<Operation>().unwrap(), Operation::Pull);
        assert_eq!("push".parse::<Operation>().unwrap(), Operation::Push);
    }

    #[test]
    fn unknown_operation_rejected_before_any_invocation() {
        let err = "rebase".parse::<Operation>().unwrap_err();
        assert!(matches!(err, OpsError::UnknownOperation(ref s) if s == "rebase"));
    }

    #[test]
    fn pull_args_match_subcommand_template() {
        let u = unit(&["https://a.example/repo.git"]);
        let args = subtree_args(Operation::Pull, &u, "https://a.example/repo.git");
        assert_eq!(
            args,
            vec![
                "subtree",
                "pull",
                "--prefix",
                "third_party/lib-a",
                "https://a.example/repo.git",
                "main",
            ]
        );
    }

    #[test]
    fn squash_appended_for_add_and_pull_only() {
        let mut u = unit(&["https://a.example/repo.git"]);
        u.squash = true;
        let add = subtree_args(Operation::Add, &u, "https://a.example/repo.git");
        assert_eq!(add.last().map(String::as_str), Some("--squash"));
        let push = subtree_args(Operation::Push, &u, "https://a.example/repo.git");
        assert!(!push.contains(&"--squash".to_owned()));
    }

    #[test]
    fn push_only_targets_primary_remote() {
        let u = unit(&[
            "https://primary.example/repo.git",
            "https://mirror-1.example/repo.git",
            "https://mirror-2.example/repo.git",
        ]);
        let runner = MockRunner::new();
        run_operation(&runner, Operation::Push, &"lib-a".into(), &u).unwrap();

        let executed = runner.executed();
        assert_eq!(executed.len(), 1, "push must never fall back");
        assert!(executed[0].contains(&"https://primary.example/repo.git".to_owned()));
    }

    #[test]
    fn push_failure_is_terminal_not_retried() {
        let u = unit(&[
            "https://primary.example/repo.git",
            "https://mirror.example/repo.git",
        ]);
        let runner =
            MockRunner::with_responses(vec![MockRunner::failure(1, "remote rejected")]);
        let err = run_operation(&runner, Operation::Push, &"lib-a".into(), &u).unwrap_err();
        assert!(matches!(err, OpsError::CommandFailed { .. }));
        assert_eq!(runner.call_count(), 1);
    }

    #[test]
    fn no_remotes_rejected_without_spawning() {
        let u = unit(&[]);
        let runner = MockRunner::new();
        let err = run_operation(&runner, Operation::Pull, &"lib-a".into(), &u).unwrap_err();
        assert!(matches!(err, OpsError::NoRemotes { .. }));
        assert_eq!(runner.call_count(), 0);
    }
}
