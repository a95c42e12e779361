//! End-to-end tests for the barcus binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A barcus command with its home directory isolated in `home`.
fn barcus(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("barcus").unwrap();
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("BARCUS_OUTPUT")
        .env_remove("BARCUS_LOG");
    cmd
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let home = TempDir::new().unwrap();
        barcus(&home)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("parse"))
            .stdout(predicate::str::contains("repl"));
    }

    #[test]
    fn shows_version() {
        let home = TempDir::new().unwrap();
        barcus(&home)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn lists_keywords_as_json() {
        let home = TempDir::new().unwrap();
        barcus(&home)
            .args(["-o", "json", "keywords"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"count\": 11"))
            .stdout(predicate::str::contains("/from <dd/MM/yyyy HH:mm>"));
    }
}

// ============================================
// Parse Command Tests
// ============================================

mod parse_command {
    use super::*;

    #[test]
    fn parses_deadline() {
        let home = TempDir::new().unwrap();
        barcus(&home)
            .args(["parse", "deadline", "homework", "/by", "22/08/2024", "16:00"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Command: deadline"))
            .stdout(predicate::str::contains("By: 22/08/2024 16:00"));
    }

    #[test]
    fn parses_event_as_json() {
        let home = TempDir::new().unwrap();
        barcus(&home)
            .args(["-o", "json", "parse", "event", "make", "friends"])
            .args(["/from", "22/08/2024", "16:00", "/to", "03/09/2024", "16:00"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"command\": \"add_event\""))
            .stdout(predicate::str::contains("\"description\": \"make friends\""))
            .stdout(predicate::str::contains("\"to\": \"03/09/2024 16:00\""));
    }

    #[test]
    fn unknown_input_succeeds() {
        let home = TempDir::new().unwrap();
        barcus(&home)
            .args(["parse", "huhhh"])
            .assert()
            .success()
            .stdout(predicate::str::contains("don't understand"));
    }

    #[test]
    fn malformed_input_fails_with_message() {
        let home = TempDir::new().unwrap();
        barcus(&home)
            .args(["parse", "tag", "hehe", "haha"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(
                "please have an integer and a single word tag after 'tag'",
            ));
    }

    #[test]
    fn negative_index_is_passed_through() {
        let home = TempDir::new().unwrap();
        barcus(&home)
            .args(["-o", "json", "parse", "delete", "-1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"index\": -1"));
    }
}

// ============================================
// Interactive Session Tests
// ============================================

mod repl_session {
    use super::*;

    #[test]
    fn reads_until_bye() {
        let home = TempDir::new().unwrap();
        barcus(&home)
            .arg("repl")
            .write_stdin("todo homework\nmark\nbye\nlist\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Description: homework"))
            .stdout(predicate::str::contains("error: please have an integer after 'mark'"))
            .stdout(predicate::str::contains("Command: bye"))
            .stdout(predicate::str::contains("Command: list").not());
    }

    #[test]
    fn piped_input_has_no_prompt() {
        let home = TempDir::new().unwrap();
        barcus(&home)
            .arg("repl")
            .write_stdin("list\n")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Command: list"));
    }
}

// ============================================
// Configuration Tests
// ============================================

mod configuration {
    use super::*;

    #[test]
    fn config_default_output_is_used() {
        let home = TempDir::new().unwrap();
        std::fs::create_dir_all(home.path().join(".barcus")).unwrap();
        std::fs::write(
            home.path().join(".barcus/config.yaml"),
            "general:\n  default_output: json\n",
        )
        .unwrap();

        barcus(&home)
            .args(["parse", "find", "book"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"query\": \"book\""));
    }

    #[test]
    fn output_flag_overrides_config() {
        let home = TempDir::new().unwrap();
        std::fs::create_dir_all(home.path().join(".barcus")).unwrap();
        std::fs::write(
            home.path().join(".barcus/config.yaml"),
            "general:\n  default_output: json\n",
        )
        .unwrap();

        barcus(&home)
            .args(["-o", "pretty", "parse", "find", "book"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Query: book"));
    }

    #[test]
    fn invalid_config_is_reported() {
        let home = TempDir::new().unwrap();
        std::fs::create_dir_all(home.path().join(".barcus")).unwrap();
        std::fs::write(home.path().join(".barcus/config.yaml"), "general: 42\n").unwrap();

        barcus(&home)
            .args(["parse", "list"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("could not load configuration"));
    }

    #[test]
    fn config_init_then_show() {
        let home = TempDir::new().unwrap();
        barcus(&home)
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote default config"));

        assert!(home.path().join(".barcus/config.yaml").exists());

        barcus(&home)
            .args(["config", "init"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));

        barcus(&home)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("prompt:"))
            .stdout(predicate::str::contains("show_unknown_hint: true"));
    }
}

// ============================================
// Completions Tests
// ============================================

mod completions {
    use super::*;

    #[test]
    fn generates_bash_completions() {
        let home = TempDir::new().unwrap();
        barcus(&home)
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("barcus"));
    }

    #[test]
    fn rejects_unknown_shell() {
        let home = TempDir::new().unwrap();
        barcus(&home)
            .args(["completions", "tcsh"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown shell"));
    }
}
