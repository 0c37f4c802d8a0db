use assert_cmd::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn init_git_repo(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    git(dir, &["init"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", "Your Name"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

fn commit_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
    git(dir, &["add", "."]);
    git(dir, &["commit", "-m", &format!("add {name}")]);
}

#[test]
fn input_file_renders_svg() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dates.txt");
    fs::write(&input, "2024-05-01\n2024-05-01\n2024-05-02\n").unwrap();
    let output = dir.path().join("charts/heatmap.svg");

    let mut cmd = Command::cargo_bin("commitheat").unwrap();
    cmd.arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--today", "2024-06-01", "--style", "github", "--theme", "dark"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(out).unwrap();

    assert!(stdout.contains("Saved heatmap to"));
    assert!(stdout.contains(&output.display().to_string()));
    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("<title>2024-05-01: 2 commits</title>"));
}

#[test]
fn empty_input_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dates.txt");
    fs::write(&input, "\n").unwrap();
    let output = dir.path().join("heatmap.svg");

    let mut cmd = Command::cargo_bin("commitheat").unwrap();
    cmd.arg("--input").arg(&input).arg("--output").arg(&output);
    let out = cmd.assert().success().get_output().stdout.clone();

    assert!(String::from_utf8(out).unwrap().contains("[!] No commit dates found."));
    assert!(!output.exists());
}

#[test]
fn source_is_required_and_exclusive() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("heatmap.svg");

    Command::cargo_bin("commitheat")
        .unwrap()
        .arg("--output")
        .arg(&output)
        .assert()
        .failure();

    Command::cargo_bin("commitheat")
        .unwrap()
        .args(["--git-dir", ".", "--input", "dates.txt", "--output"])
        .arg(&output)
        .assert()
        .failure();
}

#[test]
fn git_dir_with_sub_repositories_renders_json() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    let one = dir.path().join("one");
    let two = dir.path().join("two");
    init_git_repo(&one);
    init_git_repo(&two);
    commit_file(&one, "src/a.rs", "fn a(){}\n");
    commit_file(&one, "src/b.rs", "fn b(){}\n");
    commit_file(&two, "lib.rs", "pub fn hi(){}\n");
    fs::create_dir_all(dir.path().join("not-a-repo")).unwrap();

    let output = dir.path().join("heatmap.json");
    let mut cmd = Command::cargo_bin("commitheat").unwrap();
    cmd.arg("--git-dir")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .args(["--range", "12"]);
    cmd.assert().success();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(v["total_commits"].as_u64(), Some(3));
}

#[test]
fn git_dir_without_repositories_reports_no_dates() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("plain")).unwrap();
    let output = dir.path().join("heatmap.svg");

    let mut cmd = Command::cargo_bin("commitheat").unwrap();
    cmd.arg("--git-dir").arg(dir.path()).arg("--output").arg(&output);
    let out = cmd.assert().success().get_output().stdout.clone();

    assert!(String::from_utf8(out).unwrap().contains("No commit dates found"));
    assert!(!output.exists());
}

#[test]
fn oversized_range_fails_cleanly() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dates.txt");
    fs::write(&input, "2024-05-01\n").unwrap();
    let output = dir.path().join("heatmap.svg");

    let mut cmd = Command::cargo_bin("commitheat").unwrap();
    cmd.arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--today", "2024-06-01", "--range", "100000000"]);
    let err = cmd.assert().failure().get_output().stderr.clone();

    assert!(String::from_utf8(err).unwrap().contains("out of range"));
    assert!(!output.exists());
}

#[test]
fn help_notes_png_has_no_labels() {
    let out = Command::cargo_bin("commitheat")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(String::from_utf8(out).unwrap().contains("axis labels are drawn in SVG only"));
}
