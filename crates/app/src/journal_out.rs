//! Journal export with atomic file replacement.

use std::fs;
use std::io;
use std::path::Path;

use fastbreak_core::MatchJournal;

pub fn write_atomic(journal: &MatchJournal, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(journal).map_err(io::Error::other)?;

    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}
