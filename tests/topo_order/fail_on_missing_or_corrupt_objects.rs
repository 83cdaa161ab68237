/// Missing or unreadable objects abort the run before anything is printed.
use crate::common::command::{repository_dir, run_topo_order};
use crate::common::objects::{write_branch, write_commit, write_raw_object};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

const MISSING_OID: &str = "0123456789abcdef0123456789abcdef01234567";

#[rstest]
fn fail_on_missing_parent_object(repository_dir: TempDir) {
    let dir = repository_dir.path();

    let b = write_commit(dir, &[MISSING_OID], "B");
    let c = write_commit(dir, &[&b], "C");
    write_branch(dir, "main", &c);

    run_topo_order(dir)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!(
            "object {MISSING_OID} not found"
        )));
}

#[rstest]
fn fail_on_missing_head_object(repository_dir: TempDir) {
    let dir = repository_dir.path();
    write_branch(dir, "main", MISSING_OID);

    run_topo_order(dir)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not found"));
}

#[rstest]
fn fail_on_corrupt_object(repository_dir: TempDir) {
    let dir = repository_dir.path();

    write_raw_object(dir, MISSING_OID, b"this is not zlib data");
    let c = write_commit(dir, &[MISSING_OID], "C");
    write_branch(dir, "main", &c);

    run_topo_order(dir)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!(
            "object {MISSING_OID} is corrupt"
        )));
}

#[rstest]
fn fail_on_malformed_branch_file(repository_dir: TempDir) {
    let dir = repository_dir.path();
    write_branch(dir, "broken", "not-an-object-id");

    run_topo_order(dir)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to resolve branch broken"));
}
