use flate2::Compression;
use flate2::write::ZlibEncoder;
use sha1::{Digest, Sha1};
use std::io::Write;
use std::path::Path;

/// Object ID of the empty tree, shared by every generated commit
pub const EMPTY_TREE_OID: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

/// Serialize, hash and store a commit as a loose object
///
/// Returns the commit's object ID, computed the same way git does: SHA-1 of
/// `commit <size>\0<body>`.
pub fn write_commit(repo_dir: &Path, parents: &[&str], message: &str) -> String {
    let mut body = vec![format!("tree {EMPTY_TREE_OID}")];
    for parent in parents {
        body.push(format!("parent {parent}"));
    }
    body.push("author fake_user <fake_email@email.com> 1672574400 +0000".to_string());
    body.push("committer fake_user <fake_email@email.com> 1672574400 +0000".to_string());
    body.push(String::new());
    body.push(message.to_string());
    let body = body.join("\n") + "\n";

    write_object(repo_dir, "commit", body.as_bytes())
}

/// Store raw object content with its `<type> <size>\0` header
pub fn write_object(repo_dir: &Path, object_type: &str, content: &[u8]) -> String {
    let mut raw = format!("{object_type} {}\0", content.len()).into_bytes();
    raw.extend_from_slice(content);

    let oid = format!("{:x}", Sha1::digest(&raw));
    write_raw_object(repo_dir, &oid, &compress(&raw));

    oid
}

/// Store bytes under an object ID without compressing or hashing them
pub fn write_raw_object(repo_dir: &Path, oid: &str, data: &[u8]) {
    let object_path = repo_dir
        .join(".git")
        .join("objects")
        .join(&oid[..2])
        .join(&oid[2..]);

    std::fs::create_dir_all(object_path.parent().expect("object path has a parent"))
        .unwrap_or_else(|e| panic!("Failed to create object directory for {oid}: {e}"));
    std::fs::write(&object_path, data)
        .unwrap_or_else(|e| panic!("Failed to write object {oid}: {e}"));
}

pub fn write_branch(repo_dir: &Path, name: &str, oid: &str) {
    let ref_path = repo_dir.join(".git").join("refs").join("heads").join(name);

    std::fs::create_dir_all(ref_path.parent().expect("ref path has a parent"))
        .unwrap_or_else(|e| panic!("Failed to create ref directory for {name}: {e}"));
    std::fs::write(&ref_path, format!("{oid}\n"))
        .unwrap_or_else(|e| panic!("Failed to write branch {name}: {e}"));
}

fn compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).expect("Failed to compress object");
    encoder.finish().expect("Failed to finish compressing object")
}
