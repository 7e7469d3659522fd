//! Smoke tests for the `webaccess-criteria` binary.

use std::path::PathBuf;

use assert_cmd::Command;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn criteria() -> Command {
    let mut cmd = Command::cargo_bin("webaccess-criteria")
        .unwrap_or_else(|error| panic!("binary should be built: {error}"));
    cmd.env_remove("WEBACCESS_LANG")
        .env_remove("WEBACCESS_LOG_LEVEL");
    cmd
}

#[test]
fn values_lists_multi_word_labels() {
    criteria()
        .args(["values", "read only & !checked"])
        .assert()
        .success()
        .stdout("0..9\tread only\n13..20\tchecked\n");
}

#[test]
fn labels_translate_to_ids() {
    criteria()
        .arg("to-ids")
        .arg("--vocabulary")
        .arg(fixture("roles.json"))
        .arg("combo box | editable text")
        .assert()
        .success()
        .stdout("13 | 8\n");
}

#[test]
fn ids_translate_to_labels() {
    criteria()
        .arg("to-labels")
        .arg("--vocabulary")
        .arg(fixture("states.json"))
        .arg("32 & !16")
        .assert()
        .success()
        .stdout("read only & !checked\n");
}

#[test]
fn accepted_states_print_the_stored_form() {
    criteria()
        .args(["check", "--field", "states", "--vocabulary"])
        .arg(fixture("states.json"))
        .arg("&Selected | focused")
        .assert()
        .success()
        .stdout("4 | 2\n");
}

#[test]
fn rejected_expression_exits_with_failure() {
    criteria()
        .args(["check", "--vocabulary"])
        .arg(fixture("roles.json"))
        .arg("widget")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr("Unknown value in the “Role” criterion: widget\n");
}

#[test]
fn messages_follow_the_language_flag() {
    criteria()
        .args(["--lang", "fr", "check", "--vocabulary"])
        .arg(fixture("roles.json"))
        .arg("!!button")
        .assert()
        .failure()
        .stderr("Syntaxe invalide dans le critère « Rôle » : !!button\n");
}

#[test]
fn debug_log_names_the_active_language() {
    let output = criteria()
        .args(["--log-level", "debug", "--lang", "fr", "values", "a"])
        .output()
        .unwrap_or_else(|error| panic!("binary should run: {error}"));
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("selected message languages"), "{stderr}");
    assert!(stderr.contains("active=fr"), "{stderr}");
}

#[test]
fn unsupported_language_warns_and_falls_back() {
    let output = criteria()
        .args(["--lang", "de", "check", "--vocabulary"])
        .arg(fixture("roles.json"))
        .arg("")
        .output()
        .unwrap_or_else(|error| panic!("binary should run: {error}"));
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "(cleared)\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no messages for the requested language"), "{stderr}");
    assert!(stderr.contains("language=de"), "{stderr}");
}

#[test]
fn language_can_come_from_the_environment() {
    criteria()
        .env("WEBACCESS_LANG", "fr")
        .args(["check", "--vocabulary"])
        .arg(fixture("roles.json"))
        .arg("")
        .assert()
        .success()
        .stdout("(effacé)\n");
}

#[test]
fn invalid_log_level_in_the_environment_is_reported() {
    let output = criteria()
        .env("WEBACCESS_LOG_LEVEL", "loud")
        .args(["values", "a"])
        .output()
        .unwrap_or_else(|error| panic!("binary should run: {error}"));
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown log level"), "{stderr}");
}

#[test]
fn missing_vocabulary_is_reported() {
    let dir = tempfile::tempdir().unwrap_or_else(|error| panic!("temp dir: {error}"));
    let output = criteria()
        .arg("to-ids")
        .arg("--vocabulary")
        .arg(dir.path().join("absent.json"))
        .arg("button")
        .output()
        .unwrap_or_else(|error| panic!("binary should run: {error}"));
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read vocabulary"), "{stderr}");
}
