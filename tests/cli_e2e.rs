use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn nook(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("nook").unwrap();
    cmd.env("NOOK_DATA_DIR", data_dir)
        .env("NOOK_USER", "test-user");
    cmd
}

/// Create a document through the binary and return its id from the JSON
/// output.
fn create_doc(data_dir: &Path, title: &str, parent: Option<&str>) -> String {
    let mut cmd = nook(data_dir);
    cmd.arg("--json").arg("create");
    if let Some(parent) = parent {
        cmd.arg("-i").arg(parent);
    }
    cmd.arg(title);

    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "create failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    doc["id"].as_str().unwrap().to_string()
}

#[test]
fn create_and_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    nook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No documents found."));

    nook(temp_dir.path())
        .args(["create", "Meeting", "notes"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Created:"));

    nook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Meeting notes"));
}

#[test]
fn create_without_title_defaults_to_untitled() {
    let temp_dir = tempfile::tempdir().unwrap();

    nook(temp_dir.path()).arg("create").assert().success();

    nook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Untitled"));
}

#[test]
fn archive_cascades_and_restore_brings_the_subtree_back() {
    let temp_dir = tempfile::tempdir().unwrap();

    let root = create_doc(temp_dir.path(), "Projects", None);
    let _child = create_doc(temp_dir.path(), "Roadmap", Some(&root));

    nook(temp_dir.path())
        .args(["archive", &root])
        .assert()
        .success()
        .stdout(predicates::str::contains("Archived:"));

    // Both gone from the live listing, both in the trash
    nook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Projects").not());
    nook(temp_dir.path())
        .arg("trash")
        .assert()
        .success()
        .stdout(predicates::str::contains("Projects"))
        .stdout(predicates::str::contains("Roadmap"));

    nook(temp_dir.path())
        .args(["restore", &root])
        .assert()
        .success();

    nook(temp_dir.path())
        .arg("trash")
        .assert()
        .success()
        .stdout(predicates::str::contains("No documents found."));

    // The child is still nested under the root
    nook(temp_dir.path())
        .args(["list", "--parent", &root])
        .assert()
        .success()
        .stdout(predicates::str::contains("Roadmap"));
}

#[test]
fn purge_leaves_orphans_and_doctor_repairs_them() {
    let temp_dir = tempfile::tempdir().unwrap();

    let parent = create_doc(temp_dir.path(), "Parent", None);
    create_doc(temp_dir.path(), "Child", Some(&parent));

    nook(temp_dir.path())
        .args(["purge", &parent])
        .assert()
        .success()
        .stdout(predicates::str::contains("Purged:"));

    // The child survives but is unreachable from the root listing
    nook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No documents found."));

    nook(temp_dir.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicates::str::contains("missing parent"))
        .stdout(predicates::str::contains("Child"));

    nook(temp_dir.path())
        .args(["doctor", "--fix"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Reparented 1 document(s) to root."));

    nook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Child"));
}

#[test]
fn anonymous_requests_fail_closed() {
    let temp_dir = tempfile::tempdir().unwrap();

    // --anonymous wins over the NOOK_USER env
    nook(temp_dir.path())
        .args(["--anonymous", "create", "Secret"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Not authenticated"));

    nook(temp_dir.path())
        .args(["--anonymous", "list"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Not authenticated"));
}

#[test]
fn published_documents_are_readable_anonymously() {
    let temp_dir = tempfile::tempdir().unwrap();
    let id = create_doc(temp_dir.path(), "Public roadmap", None);

    // Private by default
    nook(temp_dir.path())
        .args(["--anonymous", "view", &id])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Not authenticated"));

    nook(temp_dir.path())
        .args(["publish", &id])
        .assert()
        .success()
        .stdout(predicates::str::contains("Published:"));

    nook(temp_dir.path())
        .args(["--anonymous", "view", &id])
        .assert()
        .success()
        .stdout(predicates::str::contains("Public roadmap"));
}

#[test]
fn other_users_documents_are_off_limits() {
    let temp_dir = tempfile::tempdir().unwrap();
    let id = create_doc(temp_dir.path(), "Mine", None);

    nook(temp_dir.path())
        .env("NOOK_USER", "someone-else")
        .args(["edit", &id, "--title", "Hijacked"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unauthorized"));

    nook(temp_dir.path())
        .env("NOOK_USER", "someone-else")
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Mine").not());
}

#[test]
fn documents_resolve_by_unique_id_prefix() {
    let temp_dir = tempfile::tempdir().unwrap();
    let id = create_doc(temp_dir.path(), "Prefixed", None);

    nook(temp_dir.path())
        .args(["view", &id[..8]])
        .assert()
        .success()
        .stdout(predicates::str::contains("Prefixed"));

    nook(temp_dir.path())
        .args(["view", "zzzz"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid document selector"));
}

#[test]
fn edit_applies_a_partial_update() {
    let temp_dir = tempfile::tempdir().unwrap();
    let id = create_doc(temp_dir.path(), "Draft", None);

    nook(temp_dir.path())
        .args(["edit", &id, "--content", "The body"])
        .assert()
        .success();

    // Title untouched, content set
    nook(temp_dir.path())
        .args(["view", &id])
        .assert()
        .success()
        .stdout(predicates::str::contains("Draft"))
        .stdout(predicates::str::contains("The body"));

    nook(temp_dir.path())
        .args(["edit", &id])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Nothing to update"));
}

#[test]
fn configured_user_is_the_default_identity() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("nook").unwrap();
    cmd.env("NOOK_DATA_DIR", temp_dir.path())
        .env_remove("NOOK_USER")
        .args(["config", "user", "alice"])
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("nook").unwrap();
    cmd.env("NOOK_DATA_DIR", temp_dir.path())
        .env_remove("NOOK_USER")
        .args(["config", "user"])
        .assert()
        .success()
        .stdout(predicates::str::contains("user = alice"));

    let mut cmd = Command::cargo_bin("nook").unwrap();
    cmd.env("NOOK_DATA_DIR", temp_dir.path())
        .env_remove("NOOK_USER")
        .args(["create", "Alice's notes"])
        .assert()
        .success();

    // Visible as alice, invisible as anyone else
    nook(temp_dir.path())
        .env("NOOK_USER", "alice")
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Alice's notes"));
    nook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Alice's notes").not());
}
