use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_schema(dir: &Path, rows: &[&str]) -> PathBuf {
    let mut text =
        String::from(" keyspace_name | table_name | id\n---------------+------------+----\n");
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text.push('\n');
    let path = dir.join("schema.txt");
    fs::write(&path, text).expect("write schema");
    path
}

#[test]
fn in_sync_tree_offers_no_actions() {
    let tmp = tempdir().expect("tempdir");
    let schema = write_schema(tmp.path(), &[" ks1 | cf1 | id1"]);
    let data = tmp.path().join("data");
    fs::create_dir_all(data.join("ks1/cf1-id1")).expect("mkdir");

    assert_cmd::cargo::cargo_bin_cmd!("cfsync")
        .current_dir(tmp.path())
        .arg(&schema)
        .arg(&data)
        .arg("-f")
        .assert()
        .success()
        .stdout(predicates::str::contains("Nothing to do."));

    assert!(data.join("ks1/cf1-id1").is_dir());
}

#[test]
fn declared_entries_absent_on_disk_require_no_action() {
    let tmp = tempdir().expect("tempdir");
    let schema = write_schema(tmp.path(), &[" ks1 | cf1 | id1", " ks2 | cf2 | id2"]);
    let data = tmp.path().join("data");
    fs::create_dir_all(&data).expect("mkdir");

    assert_cmd::cargo::cargo_bin_cmd!("cfsync")
        .current_dir(tmp.path())
        .arg(&schema)
        .arg(&data)
        .arg("-f")
        .assert()
        .success()
        .stdout(predicates::str::contains("Nothing to do."));
}

#[test]
fn malformed_schema_row_aborts_before_any_action() {
    let tmp = tempdir().expect("tempdir");
    let schema = write_schema(tmp.path(), &[" ks1 | cf1"]);
    let data = tmp.path().join("data");
    let orphan = data.join("ks9/cf9-id9");
    fs::create_dir_all(&orphan).expect("mkdir");

    assert_cmd::cargo::cargo_bin_cmd!("cfsync")
        .current_dir(tmp.path())
        .arg(&schema)
        .arg(&data)
        .arg("-f")
        .assert()
        .failure()
        .stderr(predicates::str::contains("malformed schema row"));

    assert!(orphan.is_dir());
}

#[test]
fn dry_run_prints_the_plan_without_touching_anything() {
    let tmp = tempdir().expect("tempdir");
    let schema = write_schema(tmp.path(), &[]);
    let data = tmp.path().join("data");
    let orphan = data.join("ks1/cf1-id1");
    fs::create_dir_all(&orphan).expect("mkdir");
    fs::write(orphan.join("sstable1"), b"data").expect("write");

    assert_cmd::cargo::cargo_bin_cmd!("cfsync")
        .current_dir(tmp.path())
        .arg(&schema)
        .arg(&data)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicates::str::contains("Would REMOVE"));

    assert!(orphan.join("sstable1").is_file());
}

#[test]
fn json_without_force_or_dry_run_is_rejected() {
    let tmp = tempdir().expect("tempdir");
    let schema = write_schema(tmp.path(), &[]);
    let data = tmp.path().join("data");
    fs::create_dir_all(&data).expect("mkdir");

    assert_cmd::cargo::cargo_bin_cmd!("cfsync")
        .current_dir(tmp.path())
        .arg(&schema)
        .arg(&data)
        .arg("--json")
        .assert()
        .failure()
        .stderr(predicates::str::contains("--json"));
}

#[test]
fn duplicate_schema_entries_warn_but_the_run_continues() {
    let tmp = tempdir().expect("tempdir");
    let schema = write_schema(tmp.path(), &[" ks1 | cf1 | id1", " ks1 | cf1 | id2"]);
    let data = tmp.path().join("data");
    fs::create_dir_all(data.join("ks1/cf1-id1")).expect("mkdir");

    assert_cmd::cargo::cargo_bin_cmd!("cfsync")
        .current_dir(tmp.path())
        .arg(&schema)
        .arg(&data)
        .arg("-f")
        .assert()
        .success()
        .stderr(predicates::str::contains("duplicate schema entry for ks1.cf1"))
        .stdout(predicates::str::contains("Nothing to do."));

    // first occurrence won, so the id1 directory stays put
    assert!(data.join("ks1/cf1-id1").is_dir());
}
