/// Branch ref files nested in directories are named with `/` separators.
use crate::common::command::{repository_dir, topo_order_lines};
use crate::common::objects::{write_branch, write_commit};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_nested_branch_names(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();

    let a = write_commit(dir, &[], "A");
    let b = write_commit(dir, &[&a], "B");
    write_branch(dir, "feature/login/form", &b);
    write_branch(dir, "bugfix/issue-123", &b);
    write_branch(dir, "master", &a);

    assert_eq!(
        topo_order_lines(dir)?,
        vec![
            format!("{b} bugfix/issue-123 feature/login/form"),
            format!("{a} master"),
        ]
    );

    Ok(())
}
