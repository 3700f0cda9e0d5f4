//! Git repository fixtures.

use std::path::Path;
use std::process::Command;

fn tool_runs(program: &str, arg: &str) -> Option<String> {
    Command::new(program)
        .arg(arg)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).into_owned())
}

/// True when `git` and GNU `tar` are on PATH.
///
/// Tests that build real archives return early otherwise.
pub fn build_tools_available() -> bool {
    let git = tool_runs("git", "--version").is_some();
    let gnu_tar = tool_runs("tar", "--version").is_some_and(|v| v.contains("GNU tar"));
    if !(git && gnu_tar) {
        eprintln!("skipping: git and GNU tar are required");
    }
    git && gnu_tar
}

pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args([
            "-c",
            "user.name=shipit",
            "-c",
            "user.email=shipit@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .output()
        .expect("Failed to run git");
    assert!(
        status.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&status.stderr)
    );
}

/// Create a repository at `dir` on `branch` with `files` committed.
pub fn init_repo(dir: &Path, branch: &str, files: &[(&str, &str)]) {
    std::fs::create_dir_all(dir).unwrap();
    git(dir, &["init", "-q"]);
    git(dir, &["symbolic-ref", "HEAD", &format!("refs/heads/{}", branch)]);
    for (name, content) in files {
        write_file(dir, name, content);
        git(dir, &["add", "-f", name]);
    }
    git(dir, &["commit", "-q", "--allow-empty", "-m", "init"]);
}

pub fn write_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Member names of a gzip tarball, sorted
pub fn archive_members(archive: &Path) -> Vec<String> {
    let output = Command::new("tar")
        .arg("-tzf")
        .arg(archive)
        .output()
        .expect("Failed to run tar");
    assert!(output.status.success(), "tar -tzf failed");
    let mut members: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect();
    members.sort();
    members
}
