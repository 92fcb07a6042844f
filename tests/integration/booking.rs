use crate::common::{
    make_temp_dir, read_book, read_log_contents, run_with_input, stderr_text, stdout_text,
    write_valid_config,
};

#[test]
fn booking_selected_slots_writes_reservation_book() {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "toggle 1 1\ntoggle 2 1\nprice 2\nbook\nexit\n");
    assert!(output.status.success(), "stderr: {}", stderr_text(&output));

    let stdout = stdout_text(&output);
    assert!(stdout.contains("200,000"), "price table missing total: {stdout}");
    assert!(stdout.contains("100,000"), "per person share missing: {stdout}");
    assert!(stdout.contains("booked #1"));
    assert!(stdout.contains("booked #2"));
    assert!(stdout.contains("2 of 2 slot(s) booked."));

    let book = read_book(&dir);
    let reservations = book["reservations"].as_array().unwrap();
    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0]["courtNumber"], 1);
    assert_eq!(reservations[0]["startTime"], "08:00");
    assert_eq!(reservations[1]["startTime"], "08:30");
    assert_eq!(reservations[0]["userId"], "guest");
    assert_eq!(book["nextId"], 3);
}

#[test]
fn booked_slot_is_locked_in_a_later_session() {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let first = run_with_input(&dir, "toggle 1 2\nbook\nexit\n");
    assert!(first.status.success());

    let second = run_with_input(&dir, "toggle 1 2\nbook\nexit\n");
    assert!(second.status.success());
    let stderr = stderr_text(&second);
    assert!(
        stderr.contains("North at 08:00 - 08:30 is already booked."),
        "stderr: {stderr}"
    );
    assert!(stdout_text(&second).contains("Nothing selected to book."));
    assert_eq!(read_book(&dir)["reservations"].as_array().unwrap().len(), 1);
}

#[test]
fn history_merges_back_to_back_slots() {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let _ = run_with_input(&dir, "toggle 1 1\ntoggle 2 1\ntoggle 3 1\nbook\nexit\n");

    let output = run_with_input(&dir, "history\nexit\n");
    let stdout = stdout_text(&output);
    assert!(stdout.contains("BOOKING HISTORY"));
    assert!(stdout.contains("1,2,3"), "ids not grouped: {stdout}");
    assert!(stdout.contains("08:00 - 09:30"));
    assert!(stdout.contains("300,000"));
}

#[test]
fn history_for_other_user_is_empty() {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let _ = run_with_input(&dir, "toggle 1 1\nbook\nexit\n");

    let output = crate::common::run_with_args(&dir, &["--user", "bea"], "history\nexit\n");
    assert!(stdout_text(&output).contains("No reservations found."));
}

#[test]
fn cancel_frees_the_slot() {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let _ = run_with_input(&dir, "toggle 1 1\nbook\nexit\n");

    let output = run_with_input(&dir, "cancel 1\ntoggle 1 1\nbook\nexit\n");
    assert!(output.status.success(), "stderr: {}", stderr_text(&output));
    assert!(stdout_text(&output).contains("booked #2"));

    let book = read_book(&dir);
    let reservations = book["reservations"].as_array().unwrap();
    assert_eq!(reservations[0]["status"], "CANCELLED");
    assert_eq!(reservations[1]["status"], "PENDING");
}

#[test]
fn invalid_toggle_is_reported_and_logged() {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "toggle 99 1\nexit\n");
    assert!(output.status.success());

    let stderr = stderr_text(&output);
    assert!(stderr.contains("Command 'toggle' failed."));
    assert!(stderr.contains("Usage: toggle <slot> <court>"));

    let log = read_log_contents(&dir).expect("log file");
    assert!(log.contains("Command run: toggle 99 1"));
    assert!(log.contains("Command 'toggle' failed."));
}
