use std::fs;

use crate::common::{make_temp_dir, read_log_contents, run_with_input, stderr_text, stdout_text, write_valid_config};

#[test]
fn config_lists_every_key() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "config\nexit\n");
    let stdout = stdout_text(&output);
    for key in ["STADIUM_ID", "OPENING_HOURS", "PRICE_PER_SLOT", "SLOT_COVERAGE"] {
        assert!(stdout.contains(key), "missing {key}: {stdout}");
    }
}

#[test]
fn set_persists_and_rebuilds_grid() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "set opening_hours 08:00-09:00\ngrid\nexit\n");
    assert!(output.status.success(), "stderr: {}", stderr_text(&output));

    let stdout = stdout_text(&output);
    assert!(stdout.contains("Config updated: OPENING_HOURS: 08:00-10:00 -> 08:00-09:00"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("facility.json")).unwrap()).unwrap();
    assert_eq!(saved["opening_hours"]["value"], "08:00-09:00");
}

#[test]
fn invalid_set_leaves_file_untouched() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let before = fs::read_to_string(dir.join("facility.json")).unwrap();

    let output = run_with_input(&dir, "set opening_hours 21:00-05:00\nset colour blue\nexit\n");
    assert!(output.status.success());
    let stderr = stderr_text(&output);
    assert!(stderr.contains("Command 'set' failed."));
    assert!(stderr.contains("Unknown configuration key 'colour'"));

    assert_eq!(fs::read_to_string(dir.join("facility.json")).unwrap(), before);
}

#[test]
fn file_logging_can_be_disabled() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let _ = run_with_input(&dir, "set file_logging_enabled False\nexit\n");
    let logs = dir.join("logs");
    let _ = fs::remove_dir_all(&logs);

    let _ = run_with_input(&dir, "grid\nexit\n");
    assert!(read_log_contents(&dir).is_none());
}
