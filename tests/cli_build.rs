//! `shipit build` against real git repositories.

mod common;

use common::*;

#[test]
fn build_archives_exactly_the_tracked_files() {
    if !build_tools_available() {
        return;
    }
    let env = TestEnv::new();
    let repo = env.project_path("acme");
    init_repo(&repo, "main", &[("a.txt", "a"), ("b.txt", "b")]);
    write_file(&repo, "untracked.txt", "never shipped");

    let result = env.run_from(&repo, &["build"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("acme-main.tgz"), "{}", result.stdout);
    let artifact = env.artifact_path("acme-main.tgz");
    assert_eq!(archive_members(&artifact), vec!["a.txt", "b.txt"]);
}

#[test]
fn build_accepts_a_path_inside_the_tree() {
    if !build_tools_available() {
        return;
    }
    let env = TestEnv::new();
    let repo = env.project_path("acme");
    init_repo(&repo, "main", &[("src/lib.rs", "// lib"), ("README", "hi")]);

    let result = env.run(&["build", "acme/src"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(
        archive_members(&env.artifact_path("acme-main.tgz")),
        vec!["README", "src/lib.rs"]
    );
}

#[test]
fn build_outside_git_fails_without_artifact() {
    if !build_tools_available() {
        return;
    }
    let env = TestEnv::new();
    let plain = env.project_path("plain");
    std::fs::create_dir(&plain).unwrap();
    write_file(&plain, "a.txt", "a");

    let result = env.run_from(&plain, &["build"]);

    assert!(!result.is_success());
    assert_eq!(result.exit_code, 1);
    assert!(
        result
            .stderr
            .contains("does not appear to have a git repository"),
        "{}",
        result.stderr
    );
    assert!(env.artifact_names().is_empty());
}

#[test]
fn failed_archive_leaves_no_artifact() {
    if !build_tools_available() {
        return;
    }
    let env = TestEnv::new();
    let repo = env.project_path("acme");
    init_repo(&repo, "main", &[("a.txt", "a"), ("b.txt", "b")]);
    // Still listed by `git ls-files`, gone from disk
    std::fs::remove_file(repo.join("b.txt")).unwrap();

    let result = env.run_from(&repo, &["build"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result.stderr.contains("b.txt"), "{}", result.stderr);
    assert!(env.artifact_names().is_empty(), "{:?}", env.artifact_names());
}

#[cfg(unix)]
#[test]
fn build_ships_non_utf8_file_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    if !build_tools_available() {
        return;
    }
    let env = TestEnv::new();
    let repo = env.project_path("acme");
    init_repo(&repo, "main", &[("a.txt", "a")]);
    let name = OsStr::from_bytes(b"caf\xe9.txt");
    if std::fs::write(repo.join(name), "latin-1").is_err() {
        eprintln!("skipping: filesystem rejects non-UTF-8 names");
        return;
    }
    let added = std::process::Command::new("git")
        .arg("-C")
        .arg(&repo)
        .arg("add")
        .arg(name)
        .status()
        .unwrap();
    assert!(added.success());

    let result = env.run_from(&repo, &["build"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let members = archive_members(&env.artifact_path("acme-main.tgz"));
    assert_eq!(members.len(), 2, "{:?}", members);
    assert!(members.iter().any(|m| m.starts_with("caf")), "{:?}", members);
}

#[test]
fn build_of_missing_path_is_not_a_directory() {
    let env = TestEnv::new();

    let result = env.run(&["build", "no/such/dir"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("does not appear to be a directory"),
        "{}",
        result.stderr
    );
    assert!(env.artifact_names().is_empty());
}

#[test]
fn slash_branch_is_flattened_into_file_name() {
    if !build_tools_available() {
        return;
    }
    let env = TestEnv::new();
    let repo = env.project_path("acme");
    init_repo(&repo, "feature/x", &[("a.txt", "a")]);

    let result = env.run_from(&repo, &["build"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.artifact_names(), vec!["acme-feature-x.tgz"]);
}

#[test]
fn vcs_metadata_and_ignored_paths_are_excluded() {
    if !build_tools_available() {
        return;
    }
    let env = TestEnv::new();
    let repo = env.project_path("acme");
    init_repo(
        &repo,
        "main",
        &[
            ("a.txt", "a"),
            (".gitignore", "*.log\n"),
            (".github/ci.yml", "on: push\n"),
            ("debug.log", "force-added but ignored"),
        ],
    );

    let result = env.run_from(&repo, &["build"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(
        archive_members(&env.artifact_path("acme-main.tgz")),
        vec!["a.txt"]
    );
}

#[test]
fn rebuild_overwrites_previous_artifact() {
    if !build_tools_available() {
        return;
    }
    let env = TestEnv::new();
    let repo = env.project_path("acme");
    init_repo(&repo, "main", &[("a.txt", "a")]);
    assert!(env.run_from(&repo, &["build"]).is_success());

    write_file(&repo, "b.txt", "b");
    git(&repo, &["add", "b.txt"]);
    let result = env.run_from(&repo, &["build"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.artifact_names(), vec!["acme-main.tgz"]);
    assert_eq!(
        archive_members(&env.artifact_path("acme-main.tgz")),
        vec!["a.txt", "b.txt"]
    );
}

#[test]
fn build_json_reports_artifact() {
    if !build_tools_available() {
        return;
    }
    let env = TestEnv::new();
    let repo = env.project_path("acme");
    init_repo(&repo, "main", &[("a.txt", "a"), ("b.txt", "b")]);

    let result = env.run_from(&repo, &["--json", "build"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let events = result.json_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "build");
    assert_eq!(events[0]["status"], "success");
    assert_eq!(events[0]["repo"], "acme");
    assert_eq!(events[0]["branch"], "main");
    assert_eq!(events[0]["files"], 2);
}

#[test]
fn build_json_failure_is_an_error_event() {
    let env = TestEnv::new();

    let result = env.run(&["build", "--json", "no/such/dir"]);

    assert_eq!(result.exit_code, 1);
    let events = result.json_events();
    assert_eq!(events[0]["event"], "error");
    assert_eq!(events[0]["command"], "build");
}

#[test]
fn name_template_comes_from_project_config() {
    if !build_tools_available() {
        return;
    }
    let env = TestEnv::new();
    let repo = env.project_path("acme");
    init_repo(&repo, "main", &[("a.txt", "a")]);
    write_file(
        &repo,
        "shipit.toml",
        "[artifact]\nname_template = \"{repo}_{branch}.tar.gz\"\n",
    );

    let result = env.run_from(&repo, &["build"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.artifact_names(), vec!["acme_main.tar.gz"]);
}
