use crate::common::{make_temp_dir, run_with_args, run_with_input, stderr_text, stdout_text, write_valid_config};

#[test]
fn main_exits_successfully_with_valid_config() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());

    let stdout = stdout_text(&output);
    assert!(stdout.contains("C O U R T B O O K"));
    assert!(stdout.contains("AVAILABILITY"));
    assert!(stdout.contains("08:00 - 08:30"));
}

#[test]
fn main_ends_cleanly_on_eof() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "grid\n");
    assert!(output.status.success());
}

#[test]
fn main_fails_when_config_missing() {
    let dir = make_temp_dir("core");
    let output = run_with_input(&dir, "");
    assert!(!output.status.success(), "expected failure when config is missing");
    let stderr = stderr_text(&output);
    assert!(
        stderr.contains("Configuration file"),
        "stderr did not mention missing config: {stderr}"
    );
}

#[test]
fn main_fails_when_opening_hours_are_malformed() {
    let dir = make_temp_dir("core");
    let cfg = r#"{ "opening_hours": { "value": "21:00-05:00", "description": "bad" } }"#;
    std::fs::write(dir.join("facility.json"), cfg).unwrap();

    let output = run_with_input(&dir, "");
    assert!(!output.status.success(), "expected failure on malformed config");
    let stderr = stderr_text(&output).to_lowercase();
    assert!(stderr.contains("invalid json"), "stderr: {stderr}");
    assert!(stderr.contains("earlier than closing"), "stderr: {stderr}");
}

#[test]
fn main_rejects_unknown_arguments() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let output = run_with_args(&dir, &["--verbose"], "");
    assert!(!output.status.success());
    assert!(stderr_text(&output).contains("Unknown argument: --verbose"));
}

#[test]
fn paths_can_be_overridden() {
    let dir = make_temp_dir("core");
    let nested = dir.join("etc");
    std::fs::create_dir_all(&nested).unwrap();
    write_valid_config(&nested);

    let output = run_with_args(
        &dir,
        &["--config", "etc/facility.json", "--reservations", "data/book.json", "--user", "ana"],
        "toggle 1 1\nbook\nexit\n",
    );
    assert!(output.status.success(), "stderr: {}", stderr_text(&output));
    let book = std::fs::read_to_string(dir.join("data").join("book.json")).unwrap();
    assert!(book.contains("\"userId\": \"ana\""));
}

#[test]
fn main_fails_when_opening_hours_are_missing() {
    let dir = make_temp_dir("core");
    let cfg = r#"{ "stadium_id": { "value": "arena", "description": "Stadium" } }"#;
    std::fs::write(dir.join("facility.json"), cfg).unwrap();

    let output = run_with_input(&dir, "");
    assert!(!output.status.success());
    assert!(stderr_text(&output).contains("Missing configuration item: OPENING_HOURS"));
}
