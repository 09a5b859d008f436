//! Integration tests for the calendar-pdf command line.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("calendar-pdf").unwrap()
}

/// Fresh scratch directory for one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("calendar-pdf-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

mod output_file {
    use super::*;

    #[test]
    fn writes_letter_pdf_by_default() {
        let dir = scratch_dir("letter");
        cmd()
            .args(["2014", "11"])
            .env("CALENDAR_PDF_DIR", &dir)
            .assert()
            .success()
            .stdout(predicate::str::contains("2014-11-letter.pdf"));

        let bytes = fs::read(dir.join("2014-11-letter.pdf")).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn page_size_is_case_insensitive_and_lowercased_in_name() {
        let dir = scratch_dir("tabloid");
        cmd()
            .args(["2016", "2", "TaBlOiD"])
            .env("CALENDAR_PDF_DIR", &dir)
            .assert()
            .success();

        assert!(dir.join("2016-02-tabloid.pdf").is_file());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn writes_to_current_directory_without_env() {
        let dir = scratch_dir("cwd");
        cmd()
            .args(["2015", "1", "legal"])
            .env_remove("CALENDAR_PDF_DIR")
            .current_dir(&dir)
            .assert()
            .success();

        assert!(dir.join("2015-01-legal.pdf").is_file());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unwritable_directory_is_an_error() {
        let dir = scratch_dir("missing").join("does-not-exist");
        cmd()
            .args(["2014", "11"])
            .env("CALENDAR_PDF_DIR", &dir)
            .assert()
            .failure()
            .stderr(predicate::str::contains("calendar-pdf:"));
    }
}

mod invalid_input {
    use super::*;

    fn assert_usage(args: &[&str]) {
        let dir = scratch_dir(&format!("usage-{}", args.join("_")));
        cmd()
            .args(args)
            .env("CALENDAR_PDF_DIR", &dir)
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0, "{args:?}");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_arguments_print_usage() {
        assert_usage(&[]);
        assert_usage(&["2014"]);
    }

    #[test]
    fn month_out_of_range_prints_usage() {
        assert_usage(&["2014", "13"]);
        assert_usage(&["2014", "0"]);
    }

    #[test]
    fn unknown_page_size_prints_usage() {
        assert_usage(&["2014", "11", "A4"]);
    }

    #[test]
    fn non_numeric_year_prints_usage() {
        assert_usage(&["next", "11"]);
    }
}

mod flags {
    use super::*;

    #[test]
    fn help_prints_usage() {
        cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("YEAR"))
            .stdout(predicate::str::contains("CALENDAR_PDF_DIR"));
    }

    #[test]
    fn version_prints_name_and_version() {
        cmd()
            .arg("-V")
            .assert()
            .success()
            .stdout(predicate::str::starts_with(format!(
                "calendar-pdf {}",
                env!("CARGO_PKG_VERSION")
            )));
    }

    #[test]
    fn test_flag_runs_self_checks() {
        cmd()
            .arg("--test")
            .assert()
            .success()
            .stdout(predicate::str::contains("test november_2014_layout ... ok"))
            .stdout(predicate::str::contains("test result: ok."));
    }
}
