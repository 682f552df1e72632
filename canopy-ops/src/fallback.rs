//! First-success-wins retry across candidate remotes.
//!
//! Remote mirrors can be transiently unreachable or renamed; trying alternates
//! in declared priority order gives resilience without manual intervention,
//! and stopping at the first success keeps cost proportional to the first
//! reachable mirror, not the full list.

use canopy_core::{Subtree, SubtreeName};

use crate::dispatch::{subtree_args, Operation};
use crate::error::OpsError;
use crate::runner::{CommandResult, GitRunner};

/// Attempt `op` against each of the unit's candidate remotes in declared
/// order. The first success short-circuits; each failure is logged and the
/// next candidate tried. Exhausting all candidates yields
/// [`OpsError::Exhausted`] carrying the last underlying error.
pub fn try_candidates(
    runner: &dyn GitRunner,
    op: Operation,
    name: &SubtreeName,
    unit: &Subtree,
) -> Result<CommandResult, OpsError> {
    let total = unit.repo_urls.len();
    let mut last_err: Option<OpsError> = None;

    for (idx, remote) in unit.repo_urls.iter().enumerate() {
        tracing::info!("{op} '{name}': remote {remote} ({}/{total})", idx + 1);
        match runner.run(&subtree_args(op, unit, remote)) {
            Ok(result) => return Ok(result),
            Err(err) => {
                tracing::warn!("{op} '{name}' failed against {remote}: {err}");
                last_err = Some(err);
            }
        }
    }

    match last_err {
        Some(source) => Err(OpsError::Exhausted {
            name: name.0.clone(),
            attempts: total,
            source: Box::new(source),
        }),
        None => Err(OpsError::NoRemotes {
            name: name.0.clone(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::runner::{CommandResult, MockRunner};

    fn unit(urls: &[&str]) -> Subtree {
        Subtree {
            prefix: PathBuf::from("third_party/lib-a"),
            branch: "main".to_owned(),
            repo_urls: urls.iter().map(|s| s.to_string()).collect(),
            squash: false,
        }
    }

    #[test]
    fn first_success_short_circuits_remaining_candidates() {
        let u = unit(&[
            "https://u1.example/r.git",
            "https://u2.example/r.git",
            "https://u3.example/r.git",
        ]);
        let runner = MockRunner::with_responses(vec![
            MockRunner::failure(128, "fatal: could not read from remote"),
            Ok(CommandResult::ok("pulled")),
        ]);

        let result = try_candidates(&runner, Operation::Pull, &"lib-a".into(), &u).unwrap();
        assert_eq!(result.stdout, "pulled");

        let executed = runner.executed();
        assert_eq!(executed.len(), 2, "u3 must never be attempted");
        assert!(executed[0].contains(&"https://u1.example/r.git".to_owned()));
        assert!(executed[1].contains(&"https://u2.example/r.git".to_owned()));
    }

    #[test]
    fn immediate_success_makes_exactly_one_attempt() {
        let u = unit(&["https://u1.example/r.git", "https://u2.example/r.git"]);
        let runner = MockRunner::new();
        try_candidates(&runner, Operation::Add, &"lib-a".into(), &u).unwrap();
        assert_eq!(runner.call_count(), 1);
    }

    #[test]
    fn exhaustion_attempts_every_candidate_once_in_order() {
        let u = unit(&[
            "https://u1.example/r.git",
            "https://u2.example/r.git",
            "https://u3.example/r.git",
        ]);
        let runner = MockRunner::with_responses(vec![
            MockRunner::failure(128, "unreachable"),
            MockRunner::failure(128, "unreachable"),
            MockRunner::failure(42, "last failure"),
        ]);

        let err = try_candidates(&runner, Operation::Pull, &"lib-a".into(), &u).unwrap_err();
        match &err {
            OpsError::Exhausted {
                name,
                attempts,
                source,
            } => {
                assert_eq!(name, "lib-a");
                assert_eq!(*attempts, 3);
                assert!(matches!(**source, OpsError::CommandFailed { status: 42, .. }));
            }
            other => panic!("expected Exhausted, got {other:?}"),
        }
        assert_eq!(err.exit_status(), 42, "last observed status propagates");

        let remotes: Vec<String> = runner
            .executed()
            .iter()
            .map(|args| args[4].clone())
            .collect();
        assert_eq!(
            remotes,
            vec![
                "https://u1.example/r.git",
                "https://u2.example/r.git",
                "https://u3.example/r.git",
            ]
        );
    }
}
