use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_taskgrid"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "taskgrid-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub fn write_config(dir: &Path, week_start: &str) {
    let cfg = format!(
        r#"{{
      "week_starts_on": {{ "value": "{week_start}", "description": "first column" }},
      "swipe_threshold": {{ "value": 50, "description": "swipe" }},
      "default_view": {{ "value": "month", "description": "view" }},
      "file_logging_enabled": {{ "value": "True", "description": "file logging" }}
    }}"#
    );
    fs::write(dir.join("config.json"), cfg).unwrap();
}

pub fn write_valid_config(dir: &Path) {
    write_config(dir, "mon");
}

pub fn write_tasks(dir: &Path, json: &str) {
    fs::write(dir.join("tasks.json"), json).unwrap();
}

pub fn write_sample_tasks(dir: &Path) {
    write_tasks(
        dir,
        r#"[
      { "id": 1, "date": "2024-02-14T18:00:00", "priority": "high", "title": "Dinner" },
      { "id": 2, "date": "2024-02-14T07:15:00", "title": "Run" },
      { "id": 3, "date": "2024-03-02", "priority": "urgent", "title": "Passport" },
      { "id": 4, "date": "yesterday-ish", "title": "Broken" }
    ]"#,
    );
}

pub fn run_with_input(dir: &Path, input: &str) -> Output {
    run_with_args(dir, &[], input)
}

pub fn run_with_args(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

fn strip_ansi_and_control(s: &str) -> String {
    let mut out = Vec::with_capacity(s.len());
    let mut bytes = s.bytes().peekable();

    while let Some(b) = bytes.next() {
        if b == 0x1B && matches!(bytes.peek(), Some(b'[')) {
            let _ = bytes.next();
            for nb in bytes.by_ref() {
                if nb.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        if b.is_ascii_control() {
            continue;
        }
        out.push(b);
    }

    String::from_utf8_lossy(&out).to_string()
}

pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| {
            let stripped = strip_ansi_and_control(l);
            let trimmed = stripped.trim();
            if let Some(rest) = trimmed.strip_prefix('>') {
                rest.trim().to_string()
            } else {
                trimmed.to_string()
            }
        })
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
