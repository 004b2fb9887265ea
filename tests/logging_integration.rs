use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn json_logs_go_to_stderr_and_carry_run_counts() {
    let td = tempdir().expect("tempdir");
    fs::write(td.path().join("a.csv"), b"1").unwrap();
    fs::write(td.path().join("b.csv"), b"2").unwrap();

    let me = assert_cmd::cargo::cargo_bin!("tidy_move");
    let out = Command::new(me)
        .args(["-op", "MoveByExt", "-ext", ".csv", "-dir", "csv", "--json", "--tick-ms", "5"])
        .current_dir(td.path())
        .output()
        .expect("spawn binary");
    assert!(out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    let events: Vec<serde_json::Value> = stderr
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON ({e}): {l}")))
        .collect();

    let done = events
        .iter()
        .find(|ev| ev["fields"]["message"] == "Run complete")
        .unwrap_or_else(|| panic!("no 'Run complete' event in: {stderr}"));
    assert_eq!(done["level"], "INFO");
    assert_eq!(done["fields"]["moved"], 2);
    assert_eq!(done["fields"]["failed"], 0);

    // stdout stays free of log lines
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("Run complete"), "{stdout}");
}

#[test]
fn fatal_errors_are_logged_with_code() {
    let td = tempdir().expect("tempdir");

    let me = assert_cmd::cargo::cargo_bin!("tidy_move");
    let out = Command::new(me)
        .args(["-op", "MoveByName", "-dir", "x", "--json"])
        .current_dir(td.path())
        .output()
        .expect("spawn binary");
    assert!(!out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    let aborted = stderr
        .lines()
        .filter_map(|l| serde_json::from_str::<serde_json::Value>(l).ok())
        .find(|ev| ev["fields"]["message"] == "Run aborted")
        .unwrap_or_else(|| panic!("no 'Run aborted' event in: {stderr}"));
    assert_eq!(aborted["fields"]["kind"], "missing_parameter");
    assert_eq!(aborted["fields"]["code"], 10);
}

#[test]
fn log_file_receives_events() {
    let td = tempdir().expect("tempdir");
    fs::write(td.path().join("notes.md"), b"n").unwrap();
    let log_path = td.path().join("logs").join("tidy.log");

    let me = assert_cmd::cargo::cargo_bin!("tidy_move");
    let out = Command::new(me)
        .args(["-op", "MoveByExt", "-ext", ".md", "-dir", "docs", "--tick-ms", "5", "--log-file"])
        .arg(&log_path)
        .current_dir(td.path())
        .output()
        .expect("spawn binary");
    assert!(out.status.success());
    assert!(td.path().join("docs/notes.md").is_file());

    let contents = fs::read_to_string(&log_path).expect("read log file");
    assert!(
        contents.contains("Run complete"),
        "log file did not contain expected text; contents={}",
        contents
    );
}

#[test]
fn console_logs_have_no_escape_codes_when_piped() {
    let td = tempdir().expect("tempdir");

    let me = assert_cmd::cargo::cargo_bin!("tidy_move");
    let out = Command::new(me)
        .args(["-op", "MoveByName", "-dir", "x"])
        .current_dir(td.path())
        .output()
        .expect("spawn binary");
    assert!(!out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Run aborted"), "{stderr}");
    assert!(!stderr.contains('\u{1b}'), "escape codes in piped stderr: {stderr:?}");
}
