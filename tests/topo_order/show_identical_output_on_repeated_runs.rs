/// Two runs over an unchanged repository print the same listing.
use crate::common::command::{repository_dir, topo_order_lines};
use crate::common::objects::{write_branch, write_commit};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_identical_output_on_repeated_runs(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();

    let root = write_commit(dir, &[], "root");
    let left = write_commit(dir, &[&root], "left");
    let right = write_commit(dir, &[&root], "right");
    let merge = write_commit(dir, &[&left, &right], "merge");
    let orphan = write_commit(dir, &[], "orphan");
    let topic = write_commit(dir, &[&right], "topic");
    write_branch(dir, "main", &merge);
    write_branch(dir, "orphan", &orphan);
    write_branch(dir, "topic", &topic);

    let first = topo_order_lines(dir)?;
    let second = topo_order_lines(dir)?;

    assert_eq!(first, second);

    Ok(())
}
