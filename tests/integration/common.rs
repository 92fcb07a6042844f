use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_courtbook"));
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
        "courtbook-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Two courts, 08:00-10:00 in half-hour slots, file logging on.
pub fn write_valid_config(dir: &Path) {
    let cfg = r#"{
      "stadium_id": { "value": "arena", "description": "Stadium" },
      "opening_hours": { "value": "08:00-10:00", "description": "Opening hours" },
      "slot_minutes": { "value": 30, "description": "Slot width" },
      "price_per_slot": { "value": 100000, "description": "Price per slot" },
      "fields": { "value": ["Center", "North"], "description": "Courts" },
      "sport": { "value": "tennis", "description": "Sport" },
      "court_type": { "value": "clay", "description": "Court type" },
      "date_window_days": { "value": 7, "description": "Days" },
      "file_logging_enabled": { "value": "True", "description": "File logging" }
    }"#;
    fs::write(dir.join("facility.json"), cfg).unwrap();
}

pub fn run_with_args(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .current_dir(dir)
        .args(args)
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

pub fn run_with_input(dir: &Path, input: &str) -> Output {
    run_with_args(dir, &[], input)
}

fn strip_ansi(s: &str) -> String {
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
        out.push(b);
    }

    String::from_utf8_lossy(&out).into_owned()
}

pub fn stdout_text(output: &Output) -> String {
    strip_ansi(&String::from_utf8_lossy(&output.stdout))
}

pub fn stderr_text(output: &Output) -> String {
    strip_ansi(&String::from_utf8_lossy(&output.stderr))
}

pub fn read_book(dir: &Path) -> serde_json::Value {
    let text = fs::read_to_string(dir.join("reservations.json")).expect("reservation book");
    serde_json::from_str(&text).expect("reservation book json")
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let mut entries = fs::read_dir(dir.join("logs")).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
