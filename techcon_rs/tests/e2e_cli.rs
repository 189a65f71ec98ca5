//! End-to-end tests for the `techcon` content CLI.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn techcon() -> Command {
    cargo_bin_cmd!("techcon")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        techcon()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("dump"));
    }

    #[test]
    fn shows_version() {
        techcon()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod check {
    use super::*;

    #[test]
    fn embedded_catalog_passes() {
        techcon()
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("0 error(s), 0 warning(s)"));
    }

    #[test]
    fn broken_catalog_fails_with_locations() {
        techcon()
            .arg("check")
            .arg(fixtures_path().join("broken_catalog.json"))
            .assert()
            .failure()
            .stdout(predicate::str::contains("nav[1]"))
            .stdout(predicate::str::contains("Tickets"))
            .stdout(predicate::str::contains("speakers[0].image_url"));
    }

    #[test]
    fn warnings_pass_unless_strict() {
        let fixture = fixtures_path().join("warning_catalog.json");

        techcon()
            .arg("check")
            .arg(&fixture)
            .assert()
            .success()
            .stdout(predicate::str::contains("warning: faq[0].answer"));

        techcon()
            .args(["check", "--strict"])
            .arg(&fixture)
            .assert()
            .failure();
    }

    #[test]
    fn unreadable_file_reports_error() {
        techcon()
            .args(["check", "does-not-exist.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot load catalog"));
    }

    #[test]
    fn invalid_json_reports_parse_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("catalog.json");
        std::fs::write(&path, "{ \"speakers\": 3 }").expect("write");

        techcon()
            .arg("check")
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse catalog"));
    }
}

mod export {
    use super::*;

    #[test]
    fn dump_then_check_roundtrip() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("catalog.json");

        let output = techcon().arg("dump").output().expect("dump runs");
        assert!(output.status.success());
        std::fs::write(&path, &output.stdout).expect("write dump");

        techcon().arg("check").arg(&path).assert().success();
    }

    #[test]
    fn nav_prints_anchors_in_order() {
        techcon()
            .arg("nav")
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"(?s)About.*#about.*Speakers.*#speakers.*FAQ.*#faq").expect("regex"));
    }

    #[test]
    fn nav_flags_dangling_label() {
        techcon()
            .arg("nav")
            .arg(fixtures_path().join("broken_catalog.json"))
            .assert()
            .failure()
            .stdout(predicate::str::contains("(dangling)"));
    }
}
