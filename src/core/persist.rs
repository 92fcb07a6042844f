use crate::core::models::Reservation;
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout of the reservation book.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookFile {
    #[serde(default = "first_id")]
    pub next_id: i32,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

fn first_id() -> i32 {
    1
}

pub fn save_book(file: &BookFile, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let contents = serde_json::to_string_pretty(file)?;
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

pub fn load_book(path: &Path) -> Result<BookFile> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
