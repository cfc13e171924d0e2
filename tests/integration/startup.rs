use std::fs;

use crate::common::{
    make_temp_dir, normalized_lines, run_with_args, run_with_input, write_sample_tasks,
    write_tasks, write_valid_config,
};

#[test]
fn exits_cleanly_on_exit() {
    let dir = make_temp_dir("startup");
    write_valid_config(&dir);
    write_tasks(&dir, "[]");

    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l.contains("T A S K G R I D")));
}

#[test]
fn exits_cleanly_at_end_of_input() {
    let dir = make_temp_dir("startup");
    write_valid_config(&dir);
    write_tasks(&dir, "[]");

    let output = run_with_input(&dir, "");
    assert!(output.status.success());
}

#[test]
fn fails_when_config_missing() {
    let dir = make_temp_dir("startup");
    write_tasks(&dir, "[]");

    let output = run_with_input(&dir, "exit\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration file 'config.json' not found."));
}

#[test]
fn fails_when_task_file_missing() {
    let dir = make_temp_dir("startup");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "exit\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tasks.json"));
}

#[test]
fn fails_on_unknown_argument() {
    let dir = make_temp_dir("startup");
    write_valid_config(&dir);
    write_tasks(&dir, "[]");

    let output = run_with_args(&dir, &["--verbose"], "exit\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown argument: --verbose"));
}

#[test]
fn custom_paths_are_honoured() {
    let dir = make_temp_dir("startup");
    let nested = dir.join("data");
    fs::create_dir_all(&nested).unwrap();
    write_valid_config(&nested);
    write_sample_tasks(&nested);

    let output = run_with_args(
        &dir,
        &[
            "--config",
            "data/config.json",
            "--tasks",
            "data/tasks.json",
            "--logs",
            "session-logs",
        ],
        "exit\n",
    );
    assert!(output.status.success());
    assert!(dir.join("session-logs").is_dir());
}

#[test]
fn bad_task_dates_are_warned_not_fatal() {
    let dir = make_temp_dir("startup");
    write_valid_config(&dir);
    write_sample_tasks(&dir);

    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());
    let stderr = normalized_lines(&output.stderr);
    assert!(
        stderr
            .iter()
            .any(|l| l.contains("Task with id 4 has an invalid date")),
        "stderr was: {stderr:?}"
    );
}
