//! `livematch patch apply` integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use livematch::application::catalog;
use livematch::domain::Edit;
use predicates::prelude::*;
use tempfile::TempDir;

const FIXED_LINE_149: &str = "            renderError(\"تعذر تحميل المباريات حاليا\");";

fn livematch(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("livematch");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

/// A stand-in for the unpatched script: `count` numbered lines, no trailing
/// newline.
fn numbered_script(dir: &TempDir, count: usize) -> PathBuf {
    let text = (0..count)
        .map(|i| format!("    line {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let path = dir.path().join("tma-v2.js");
    fs::write(&path, text).unwrap();
    path
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .split('\n')
        .map(str::to_string)
        .collect()
}

#[test]
fn line_plan_rewrites_the_script() {
    let dir = TempDir::new().unwrap();
    let path = numbered_script(&dir, 600);

    livematch(&dir)
        .args(["patch", "apply", "--yes", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed successfully"));

    let plan = catalog::tma_v2_lines();
    let mut assigned = Vec::new();
    let mut splice = None;
    for edit in plan.edits {
        match edit {
            Edit::Line { index, content } => assigned.push((index, content)),
            Edit::Splice { start, end, lines } => splice = Some((start, end, lines)),
            Edit::Anchor { .. } => panic!("positional plan holds an anchor edit"),
        }
    }
    let (start, end, block) = splice.expect("plan ends with a splice");
    let shift = block.len() - (end - start);
    assert_eq!((start, end, shift), (59, 74, 5));

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 600 + shift);

    // Line edits address the unpatched shape; the splice then shifts them.
    for (index, content) in &assigned {
        assert!(*index >= end, "line edit {index} falls inside the spliced range");
        assert_eq!(&lines[index + shift], content, "line {index}");
    }
    assert_eq!(lines[149 + shift], FIXED_LINE_149);
    assert_eq!(&lines[start..start + block.len()], block.as_slice());

    for original in (0..600).filter(|i| !(start..end).contains(i)) {
        if assigned.iter().any(|(index, _)| *index == original) {
            continue;
        }
        let at = if original < start { original } else { original + shift };
        assert_eq!(lines[at], format!("    line {original}"), "line {original}");
    }
}

#[test]
fn single_line_plan_on_five_hundred_lines() {
    let dir = TempDir::new().unwrap();
    let path = numbered_script(&dir, 500);
    let plan = format!(
        "name = \"one\"\ntarget = \"tma-v2.js\"\n\n[[edit]]\nkind = \"line\"\nindex = 149\ncontent = '{FIXED_LINE_149}'\n"
    );
    fs::write(dir.path().join("one.toml"), plan).unwrap();

    livematch(&dir)
        .args(["patch", "apply", "--yes", "--plan-file", "one.toml"])
        .assert()
        .success();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 500);
    assert_eq!(lines[149], FIXED_LINE_149);
    assert_eq!(lines[148], "    line 148");
    assert_eq!(lines[150], "    line 150");
}

#[test]
fn dry_run_leaves_the_file_alone() {
    let dir = TempDir::new().unwrap();
    let path = numbered_script(&dir, 600);
    let before = fs::read_to_string(&path).unwrap();

    livematch(&dir)
        .args(["patch", "apply", "--dry-run", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed successfully").not());

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn short_file_is_rejected_without_writing() {
    let dir = TempDir::new().unwrap();
    let path = numbered_script(&dir, 100);
    let before = fs::read_to_string(&path).unwrap();

    livematch(&dir)
        .args(["patch", "apply", "--yes", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn missing_target_fails() {
    let dir = TempDir::new().unwrap();

    livematch(&dir)
        .args(["patch", "apply", "--yes", "--file", "absent.js"])
        .assert()
        .failure();
}

#[test]
fn declined_confirmation_keeps_the_file() {
    let dir = TempDir::new().unwrap();
    let path = numbered_script(&dir, 600);
    let before = fs::read_to_string(&path).unwrap();

    livematch(&dir)
        .args(["patch", "apply", "--file"])
        .arg(&path)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cancelled"));

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

/// Text carrying the first two anchors of the built-in anchor plan.
fn mojibake_script() -> String {
    let anchors: Vec<String> = catalog::tma_v2_anchors()
        .edits
        .into_iter()
        .filter_map(|edit| match edit {
            Edit::Anchor { find, .. } => Some(find),
            _ => None,
        })
        .take(2)
        .collect();
    format!(
        "const a = {};\nconst b = {};\nconst c = {};\n",
        anchors[0], anchors[1], anchors[0]
    )
}

#[test]
fn anchor_plan_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tma-v2.js");
    let original = mojibake_script();
    fs::write(&path, &original).unwrap();

    livematch(&dir)
        .args(["patch", "apply", "--plan", "tma-v2-anchors", "--yes", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed successfully"));

    let once = fs::read_to_string(&path).unwrap();
    assert_ne!(once, original);
    assert_eq!(once.lines().count(), original.lines().count());

    livematch(&dir)
        .args(["patch", "apply", "--plan", "tma-v2-anchors", "--yes", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to change"));

    assert_eq!(fs::read_to_string(&path).unwrap(), once);
}

#[test]
fn strict_mode_fails_on_missing_anchor() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tma-v2.js");
    fs::write(&path, "nothing to see here\n").unwrap();

    livematch(&dir)
        .args(["patch", "apply", "--plan", "tma-v2-anchors", "--strict", "--yes", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("anchor not found"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "nothing to see here\n");
}

#[test]
fn plan_file_is_applied() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("app.js");
    fs::write(&target, "let title = \"old\";\nlet n = 1;\n").unwrap();
    let plan = dir.path().join("plan.toml");
    fs::write(
        &plan,
        r#"
name = "custom"
target = "app.js"

[[edit]]
kind = "anchor"
find = "\"old\""
replace = "\"new\""

[[edit]]
kind = "line"
index = 1
content = "let n = 2;"
"#,
    )
    .unwrap();

    livematch(&dir)
        .args(["patch", "apply", "--yes", "--plan-file", "plan.toml"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "let title = \"new\";\nlet n = 2;\n"
    );
}

#[test]
fn malformed_plan_file_gets_a_diagnostic() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("plan.toml"),
        "name = \"broken\"\ntarget = \"app.js\"\n\n[[edit]]\nkind = \"rename\"\n",
    )
    .unwrap();

    livematch(&dir)
        .args(["patch", "apply", "--yes", "--plan-file", "plan.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid patch plan"));
}
