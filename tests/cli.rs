use assert_cmd::Command;
use predicates::prelude::*;

fn mini_scanf() -> Command {
    Command::cargo_bin("mini-scanf").unwrap()
}

#[test]
fn prints_values_and_count() {
    mini_scanf()
        .arg("%c %d %r")
        .write_stdin("a 42 MCMXCIV")
        .assert()
        .success()
        .stdout("'a'\n42\n1994\ncount: 3\n");
}

#[test]
fn stops_at_first_failure() {
    mini_scanf()
        .arg("%c %d %c")
        .write_stdin("a xx b")
        .assert()
        .success()
        .stdout("'a'\ncount: 1\n");
}

#[test]
fn repeat_until_nothing_converts() {
    mini_scanf()
        .args(["--repeat", "%w=%x"])
        .write_stdin("a=1 b=ff\nc=0x10")
        .assert()
        .success()
        .stdout("\"a\"\n1\ncount: 2\n\"b\"\n255\ncount: 2\n\"c\"\n16\ncount: 2\ncount: 0\n");
}

#[test]
fn text_limit_flag() {
    mini_scanf()
        .args(["--text-limit", "3", "%s"])
        .write_stdin("abcdef")
        .assert()
        .success()
        .stdout("count: 0\n");
}

#[test]
fn missing_input_file_fails() {
    mini_scanf()
        .args(["--input", "/nonexistent/mini-scanf-input", "%d"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn max_exponent_flag() {
    mini_scanf()
        .args(["--max-exponent", "2", "%f"])
        .write_stdin("1e3")
        .assert()
        .success()
        .stdout("count: 0\n");

    mini_scanf()
        .args(["--max-exponent", "2", "%f"])
        .write_stdin("1e2")
        .assert()
        .success()
        .stdout("100\ncount: 1\n");
}

#[test]
fn reads_input_file() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "ff 101").unwrap();

    mini_scanf()
        .arg("-i")
        .arg(&path)
        .arg("%x %b")
        .write_stdin("ignored")
        .assert()
        .success()
        .stdout("255\n5\ncount: 2\n");
}

#[test]
fn verbose_logs_halt_reason() {
    mini_scanf()
        .args(["--verbose", "%d %d"])
        .env_remove("RUST_LOG")
        .write_stdin("7 x")
        .assert()
        .success()
        .stdout("7\ncount: 1\n")
        .stderr(predicate::str::contains("scan halted"));

    mini_scanf()
        .arg("%d %d")
        .env_remove("RUST_LOG")
        .write_stdin("7 x")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
