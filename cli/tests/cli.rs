use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

/// Helper to get the relkit binary command
fn relkit_cmd() -> Command {
    Command::cargo_bin("relkit").unwrap()
}

fn create_dist(root: &Path) {
    fs::create_dir_all(root.join("dist/sub")).unwrap();
    fs::write(root.join("dist/a.txt"), "alpha").unwrap();
    fs::write(root.join("dist/sub/b.txt"), "beta").unwrap();
}

fn entry_names(archive: &Path) -> Vec<String> {
    let zip = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
    let mut names: Vec<String> = zip.file_names().map(str::to_string).collect();
    names.sort();
    names
}

mod pack {
    use super::*;

    #[test]
    fn packs_dot_prefixed_source() {
        let temp = TempDir::new().unwrap();
        create_dist(temp.path());

        relkit_cmd()
            .current_dir(temp.path())
            .args(["pack", "./dist"])
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"^/\S*/dist\.zip\n$").unwrap());

        assert_eq!(
            entry_names(&temp.path().join("dist.zip")),
            vec!["dist/a.txt", "dist/sub/b.txt"]
        );
    }

    #[test]
    fn packs_dot_prefixed_source_with_trailing_slash() {
        let temp = TempDir::new().unwrap();
        create_dist(temp.path());

        relkit_cmd()
            .current_dir(temp.path())
            .args(["pack", "./dist/", "-o", "app-1.0.zip"])
            .assert()
            .success();

        assert_eq!(
            entry_names(&temp.path().join("app-1.0.zip")),
            vec!["app-1.0/a.txt", "app-1.0/sub/b.txt"]
        );
    }

    #[test]
    fn stdout_holds_only_the_archive_path() {
        let temp = TempDir::new().unwrap();
        create_dist(temp.path());

        let output = relkit_cmd()
            .current_dir(temp.path())
            .args(["pack", "dist"])
            .output()
            .expect("Failed to execute");

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.lines().count(), 1);
        assert!(Path::new(stdout.trim_end()).is_absolute());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Writing archive"));
    }

    #[test]
    fn missing_source_fails() {
        let temp = TempDir::new().unwrap();

        relkit_cmd()
            .current_dir(temp.path())
            .args(["pack", "./dist"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Path not found: ./dist"));
    }
}

mod notes {
    use super::*;

    const CHANGELOG: &str = "## v.1.1.0\n- Added \"dry run\"\n\n## v.1.0.0\n- First\n";

    #[test]
    fn prints_notes_alone() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("CHANGELOG.md"), CHANGELOG).unwrap();

        relkit_cmd()
            .current_dir(temp.path())
            .args(["notes", "1.1.0"])
            .assert()
            .success()
            .stdout("- Added \\\"dry run\\\"\n");
    }

    #[test]
    fn lists_releases() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("CHANGELOG.md"), CHANGELOG).unwrap();

        relkit_cmd()
            .args(["notes", "--list", "-d"])
            .arg(temp.path())
            .assert()
            .success()
            .stdout("1.1.0\n1.0.0\n");
    }

    #[test]
    fn newest_release_fails() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("CHANGELOG.md"), CHANGELOG).unwrap();

        relkit_cmd()
            .current_dir(temp.path())
            .args(["notes", "1.0.0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Can't extract release notes"));
    }
}

#[cfg(unix)]
mod exec {
    use super::*;

    #[test]
    fn silent_prints_captured_output() {
        relkit_cmd()
            .args(["exec", "echo hi", "--silent"])
            .assert()
            .success()
            .stdout("hi\n");
    }

    #[test]
    fn failure_exits_with_message() {
        relkit_cmd()
            .args(["exec", "false", "-m", "Tests failed", "--silent"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Tests failed"))
            .stderr(predicate::str::contains("Shell failed: false"));
    }

    #[test]
    fn tolerated_failure_succeeds() {
        relkit_cmd()
            .args(["exec", "false", "-m", "lint failed", "--silent", "--tolerate-failure"])
            .assert()
            .success()
            .stdout("lint failed\n")
            .stderr(predicate::str::contains("continuing"));
    }
}
