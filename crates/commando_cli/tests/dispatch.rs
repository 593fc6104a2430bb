//! Integration tests: drive the `commando` binary end to end.

use std::process::{Command, Output};

fn commando(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_commando");
    Command::new(bin)
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("COMMANDO_LOG")
        .output()
        .expect("run commando")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn add_prints_sum() {
    let out = commando(&["add", "2", "4"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "6\n");
}

#[test]
fn negative_arguments_are_not_flags() {
    let out = commando(&["a", "-3", "1"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "-2\n");
}

#[test]
fn help_aliases_print_usage() {
    for alias in ["help", "h", "--help"] {
        let out = commando(&[alias]);
        assert!(out.status.success(), "{alias}: {}", stderr(&out));
        let text = stdout(&out);
        assert!(
            text.starts_with("Usage:\nhelp, h, --help\tDisplays usages\n"),
            "{alias}: {text}"
        );
        assert!(text.contains("add, a [int, int]\tAdds two integers\n"));
    }
}

#[test]
fn no_tokens_fails_with_usage() {
    let out = commando(&[]);
    assert!(!out.status.success());
    let err = stderr(&out);
    assert!(err.contains("not enough arguments"), "{err}");
    assert!(err.contains("Usage:"), "{err}");
}

#[test]
fn unknown_command_fails() {
    let out = commando(&["deploy"]);
    assert!(!out.status.success());
    let err = stderr(&out);
    assert!(err.contains("\"deploy\" is not a recognized command"), "{err}");
    // The error is reported once, by the binary, not again by a log line.
    assert_eq!(err.matches("is not a recognized command").count(), 1, "{err}");
    assert!(!err.contains("WARN"), "{err}");
}

#[test]
fn arity_mismatch_shows_command_usage() {
    let out = commando(&["add", "2"]);
    assert!(!out.status.success());
    let err = stderr(&out);
    assert!(err.contains("\"add\" expects 2 arguments but got 1"), "{err}");
    assert!(err.contains("add, a [int, int]"), "{err}");
    assert!(stdout(&out).is_empty());
}

#[test]
fn type_mismatch_names_type_and_value() {
    let out = commando(&["repeat", "hi", "256"]);
    assert!(!out.status.success());
    let err = stderr(&out);
    assert!(err.contains("\"repeat\" expects uint8 but got 256"), "{err}");
}

#[test]
fn repeat_and_flag() {
    let out = commando(&["repeat", "hi", "2"]);
    assert_eq!(stdout(&out), "hi\nhi\n");

    let out = commando(&["flag", "F"]);
    assert_eq!(stdout(&out), "off\n");
}

#[test]
fn json_output_mode() {
    let out = commando(&["-o", "json", "scale", "1.5", "2"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let line: serde_json::Value = serde_json::from_str(stdout(&out).trim()).unwrap();
    assert_eq!(line["level"], "result");
    assert_eq!(line["message"], "scale");
    assert_eq!(line["data"]["value"], 3.0);
}

#[test]
fn json_errors_go_to_stderr() {
    let out = commando(&["-o", "json", "echo"]);
    assert!(!out.status.success());
    let err = stderr(&out);
    let lines: Vec<serde_json::Value> = err
        .lines()
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("{e}: {l:?}")))
        .collect();
    assert_eq!(lines.len(), 2, "{err}");
    assert_eq!(lines[0]["level"], "error");
    assert_eq!(lines[0]["message"], "\"echo\" expects 1 argument but got 0");
    assert_eq!(lines[1]["level"], "usage");
    assert!(stdout(&out).is_empty());
}

#[test]
fn json_help_is_an_envelope() {
    let out = commando(&["-o", "json", "help"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let line: serde_json::Value = serde_json::from_str(stdout(&out).trim()).unwrap();
    assert_eq!(line["level"], "result");
    assert_eq!(line["message"], "help");
    assert!(line["data"]["usage"].as_str().unwrap().starts_with("Usage:\n"));
    assert_eq!(line["data"]["commands"][0]["names"][2], "--help");
    assert_eq!(line["data"]["commands"][1]["params"][0], "int");
}

#[test]
fn verbose_logs_registration() {
    let out = commando(&["-v", "add", "1", "2"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let err = stderr(&out);
    assert!(err.contains("Registering command"), "{err}");
    assert!(err.contains("Dispatching command"), "{err}");
    assert_eq!(stdout(&out), "3\n");
}
