use crate::common::{
    make_temp_dir, normalized_lines, read_log_contents, run_with_input, write_config,
    write_sample_tasks, write_valid_config,
};

#[test]
fn select_shows_the_grid_and_day_detail() {
    let dir = make_temp_dir("session");
    write_valid_config(&dir);
    write_sample_tasks(&dir);

    let output = run_with_input(&dir, "select 2024-02-14\nexit\n");
    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);

    assert!(stdout.iter().any(|l| l == "February 2024"));
    assert!(stdout.iter().any(|l| l.starts_with("Mon") && l.ends_with("Sun")));
    assert!(stdout.iter().any(|l| l.contains("[14] 2")));
    assert!(stdout.iter().any(|l| l == "TASKS ON 2024-02-14"));
    assert!(stdout.iter().any(|l| l.starts_with("1") && l.contains("Dinner")));
    assert!(stdout.iter().any(|l| l.starts_with("2") && l.contains("Run")));
}

#[test]
fn navigation_and_view_toggle_change_the_header() {
    let dir = make_temp_dir("session");
    write_valid_config(&dir);
    write_sample_tasks(&dir);

    let output = run_with_input(&dir, "s 2024-01-15\nnext\nview\nexit\n");
    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);

    assert!(stdout.iter().any(|l| l == "January 2024"));
    assert!(stdout.iter().any(|l| l == "February 2024"));
    assert!(stdout.iter().any(|l| l == "Week of 2024-02-12"));
}

#[test]
fn swipe_moves_forward_and_back() {
    let dir = make_temp_dir("session");
    write_valid_config(&dir);
    write_sample_tasks(&dir);

    let output = run_with_input(
        &dir,
        "s 2024-03-10\nswipe 100 100 40 105\nswipe 0 0 80 5\nswipe 0 0 10 0\nexit\n",
    );
    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);

    assert!(stdout.iter().any(|l| l == "April 2024"));
    assert_eq!(stdout.iter().filter(|l| *l == "March 2024").count(), 2);
    assert!(stdout.iter().any(|l| l.starts_with("Gesture ignored")));
}

#[test]
fn sunday_start_reorders_columns() {
    let dir = make_temp_dir("session");
    write_config(&dir, "sun");
    write_sample_tasks(&dir);

    let output = run_with_input(&dir, "s 2024-02-01\nexit\n");
    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l.starts_with("Sun") && l.ends_with("Sat")));
}

#[test]
fn errors_are_reported_and_the_session_continues() {
    let dir = make_temp_dir("session");
    write_valid_config(&dir);
    write_sample_tasks(&dir);

    let output = run_with_input(&dir, "jump\nselect someday\ns 2024-02-14\nexit\n");
    assert!(output.status.success());

    let stderr = normalized_lines(&output.stderr);
    assert!(stderr.iter().any(|l| l.contains("Unknown command: 'jump'")));
    assert!(stderr.iter().any(|l| l.contains("Invalid timestamp 'someday'")));

    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l == "TASKS ON 2024-02-14"));
}

#[test]
fn set_persists_and_config_lists_it() {
    let dir = make_temp_dir("session");
    write_valid_config(&dir);
    write_sample_tasks(&dir);

    let output = run_with_input(&dir, "set default_view week\nconfig\nexit\n");
    assert!(output.status.success());

    let saved = std::fs::read_to_string(dir.join("config.json")).unwrap();
    assert!(saved.contains("\"week\""));
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l == "CONFIG"));
    assert!(stdout.iter().any(|l| l.contains("DEFAULT_VIEW") && l.ends_with("week")));
}

#[test]
fn commands_are_written_to_the_session_log() {
    let dir = make_temp_dir("session");
    write_valid_config(&dir);
    write_sample_tasks(&dir);

    let output = run_with_input(&dir, "s 2024-02-14\nnext\nexit\n");
    assert!(output.status.success());

    let log = read_log_contents(&dir).expect("a session log should exist");
    assert!(log.contains("Command run: s 2024-02-14"));
    assert!(log.contains("Navigation 'next'"));
    assert!(log.contains("Task with id 4 has an invalid date"));
    assert!(log.contains("Session ended (exit word) after 2 command(s)"));
}

#[test]
fn debug_console_level_echoes_unchanged_navigation() {
    let dir = make_temp_dir("session");
    write_valid_config(&dir);
    write_sample_tasks(&dir);

    let quiet = run_with_input(&dir, "swipe 0 0 10 0\nexit\n");
    let stdout = normalized_lines(&quiet.stdout);
    assert!(!stdout.iter().any(|l| l.contains("left the view unchanged")));

    let output = run_with_input(&dir, "set console_log_level debug\nswipe 0 0 10 0\nexit\n");
    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);
    assert!(
        stdout
            .iter()
            .any(|l| l.contains("Navigation 'swipe-none' left the view unchanged"))
    );
}
