use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const PAGES: &str = r#"[
    {
        "menus": [
            {"id": 1, "data": "House", "child_ids": [3]},
            {"id": 2, "data": "Company", "child_ids": [4]},
            {"id": 3, "data": "Kitchen", "parent_id": 1, "child_ids": [5]}
        ],
        "pagination": {"current_page": 1, "per_page": 3, "total": 6}
    },
    {
        "menus": [
            {"id": 4, "data": "Meeting room", "parent_id": 2, "child_ids": [6]},
            {"id": 5, "data": "Sink", "parent_id": 3, "child_ids": [1]},
            {"id": 6, "data": "Chair", "parent_id": 4, "child_ids": []}
        ],
        "pagination": {"current_page": 2, "per_page": 3, "total": 6}
    }
]"#;

const EXPECTED: &str = r#"{"valid_menus":[{"root_id":2,"children":[4,6]}],"invalid_menus":[{"root_id":1,"children":[3,5,1]}]}"#;

fn menucheck() -> Command {
    let mut cmd = Command::cargo_bin("menucheck").unwrap();
    cmd.env_remove("MENUCHECK_URL").env_remove("MENUCHECK_LOG");
    cmd
}

fn pages_file() -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(PAGES.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn check_reads_file() {
    let f = pages_file();
    menucheck()
        .args(["check", "--input"])
        .arg(f.path())
        .assert()
        .success()
        .stdout(format!("{EXPECTED}\n"));
}

#[test]
fn check_reads_stdin() {
    menucheck()
        .arg("check")
        .write_stdin(PAGES)
        .assert()
        .success()
        .stdout(format!("{EXPECTED}\n"));
}

#[test]
fn check_summary() {
    menucheck()
        .args(["check", "--summary"])
        .write_stdin(PAGES)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"root_id":1,"valid_paths":0,"invalid_paths":1}"#,
        ))
        .stdout(predicate::str::contains(
            r#"{"root_id":2,"valid_paths":1,"invalid_paths":0}"#,
        ));
}

#[test]
fn check_pretty() {
    menucheck()
        .args(["check", "--pretty"])
        .write_stdin(PAGES)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid_menus\": ["));
}

#[test]
fn check_per_branch() {
    let page = r#"{"menus":[
        {"id":1,"child_ids":[2]},
        {"id":2,"parent_id":1,"child_ids":[3]},
        {"id":3,"parent_id":2,"child_ids":[2,4]}
    ],"pagination":{"per_page":3,"total":3}}"#;

    menucheck()
        .arg("check")
        .write_stdin(page)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""valid_menus":[]"#));

    menucheck()
        .args(["check", "--per-branch"])
        .write_stdin(page)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""valid_menus":[{"root_id":1,"children":[2,3,4]}]"#,
        ));
}

#[test]
fn check_rejects_bad_json() {
    menucheck()
        .arg("check")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse menu pages"));
}

#[test]
fn check_missing_file() {
    menucheck()
        .args(["check", "--input", "/nonexistent/pages.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn render_dot() {
    menucheck()
        .args(["render", "dot", "--title", "Menus"])
        .write_stdin(PAGES)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph menus {"))
        .stdout(predicate::str::contains("Kitchen"))
        .stdout(predicate::str::contains(
            "\"5\" -> \"1\" [color=\"#d32f2f\", style=dashed, penwidth=2];",
        ));
}

#[test]
fn fetch_requires_url() {
    menucheck()
        .arg("fetch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url"));
}

#[test]
fn fetch_unreachable_endpoint_fails() {
    menucheck()
        .args([
            "fetch",
            "--url",
            "http://127.0.0.1:9/menus.json",
            "--retries",
            "0",
            "--timeout",
            "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch menus"));
}
