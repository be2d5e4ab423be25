use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tempfile::{tempdir, TempDir};

fn solflat() -> Command {
    Command::cargo_bin("solflat").expect("binary built")
}

fn setup_project() -> TempDir {
    let temp = tempdir().expect("tempdir");
    let root = temp.path();
    fs::create_dir_all(root.join("lib")).expect("create lib dir");
    fs::write(
        root.join("lib/safe_math.sol"),
        "pragma solidity ^0.5.0;\n\nlibrary SafeMath {\n    function add(uint256 a, uint256 b) internal pure returns (uint256) {\n        return a + b;\n    }\n}\n",
    )
    .expect("write library");
    fs::write(
        root.join("token.sol"),
        "pragma solidity ^0.5.0;\nimport \"./lib/safe_math.sol\";\n\ncontract Token {\n    uint256 supply;\n}\n",
    )
    .expect("write entry");
    temp
}

#[test]
fn flattens_entry_and_reports_the_output_path() {
    let temp = setup_project();

    solflat()
        .current_dir(temp.path())
        .arg("token.sol")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "done - flattened output written to token_flattened.sol",
        ));

    let written =
        fs::read_to_string(temp.path().join("token_flattened.sol")).expect("output exists");
    assert!(written.starts_with("pragma solidity ^0.5.0;\n\n"));

    let library_at = written.find("library SafeMath {").expect("library present");
    let token_at = written.find("contract Token {").expect("contract present");
    assert!(
        library_at < token_at,
        "dependency block should precede the entry block:\n{written}"
    );
}

#[test]
fn existing_output_file_is_overwritten() {
    let temp = setup_project();
    fs::write(temp.path().join("token_flattened.sol"), "stale").expect("seed stale output");

    solflat()
        .current_dir(temp.path())
        .arg("token.sol")
        .assert()
        .success();

    let written =
        fs::read_to_string(temp.path().join("token_flattened.sol")).expect("output exists");
    assert!(!written.contains("stale"));
    assert!(written.starts_with("pragma solidity ^0.5.0;\n"));
}

#[test]
fn missing_entry_prints_a_friendly_message() {
    let temp = tempdir().expect("tempdir");

    solflat()
        .current_dir(temp.path())
        .arg("nope.sol")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no file exists at nope.sol"));
}

#[test]
fn self_import_never_completes_cleanly() {
    let temp = tempdir().expect("tempdir");
    fs::write(
        temp.path().join("loop.sol"),
        "import \"./loop.sol\";\n\ncontract L {\n}\n",
    )
    .expect("write entry");

    // Cycle detection is deliberately absent, so the walk either runs
    // forever or dies of resource exhaustion; a clean exit is the only
    // wrong outcome. Driven as a child process so a crash cannot take the
    // test binary down with it.
    let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_solflat"))
        .current_dir(temp.path())
        .arg("loop.sol")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn solflat");

    let deadline = Instant::now() + Duration::from_secs(2);
    let exit = loop {
        match child.try_wait().expect("poll child") {
            Some(status) => break Some(status),
            None if Instant::now() >= deadline => break None,
            None => std::thread::sleep(Duration::from_millis(50)),
        }
    };

    match exit {
        Some(status) => assert!(
            !status.success(),
            "cyclic import flattened cleanly: {status}"
        ),
        None => {
            child.kill().expect("kill looping child");
            child.wait().expect("reap child");
        }
    }
}

#[test]
fn missing_dependency_is_reported_like_a_missing_entry() {
    let temp = tempdir().expect("tempdir");
    fs::write(
        temp.path().join("entry.sol"),
        "import \"./gone.sol\";\n\ncontract E {\n}\n",
    )
    .expect("write entry");

    solflat()
        .current_dir(temp.path())
        .arg("entry.sol")
        .assert()
        .failure()
        .stderr(predicate::str::contains("gone.sol"));
}
