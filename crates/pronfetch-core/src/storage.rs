//! Writing audio to the output folder.
//!
//! Bytes go to `<file>.part` first and are renamed onto the final name, so an
//! interrupted write never leaves a truncated MP3 behind under the real name.
//! An existing file at the final path is replaced.

use crate::provider::AudioBytes;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `a.mp3` → `a.mp3.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Creates `dir` (and parents) if missing. Returns true if it had to be created.
pub fn ensure_output_dir(dir: &Path) -> io::Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    Ok(true)
}

/// Writes `audio` to `dir/file_name`, creating `dir` if needed. Returns the final path.
pub fn write_audio(dir: &Path, file_name: &str, audio: &AudioBytes) -> io::Result<PathBuf> {
    ensure_output_dir(dir)?;
    let final_path = dir.join(file_name);
    let tmp = temp_path(&final_path);

    let result = write_then_rename(&tmp, &final_path, audio.as_bytes());
    if result.is_err() && tmp.exists() {
        if let Err(e) = fs::remove_file(&tmp) {
            tracing::warn!("could not remove {}: {}", tmp.display(), e);
        }
    }
    result.map(|()| final_path)
}

fn write_then_rename(tmp: &Path, final_path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(tmp)?;
    file.write_all(data)?;
    file.flush()?;
    drop(file);
    fs::rename(tmp, final_path)
}
