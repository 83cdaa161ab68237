/// Running outside any repository reports the problem and exits non-zero.
///
/// Assumes no ancestor of the system temp directory is itself a repository.
use crate::common::command::run_topo_order;
use assert_fs::TempDir;
use predicates::prelude::predicate;

#[test]
fn fail_outside_repository() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    run_topo_order(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Not inside a Git repository"));

    Ok(())
}
