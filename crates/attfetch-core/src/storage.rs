//! Disk I/O: atomic whole-file writes.
//!
//! The downloaded body is held entirely in memory, written to a `.part` temp
//! file, fsynced, then renamed onto the final path. A failed write never
//! leaves a partial file behind.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path
/// (e.g. `report.pdf` -> `report.pdf.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Write `data` to `final_path` atomically via a `.part` temp file.
///
/// The rename only happens after a complete, synced write; on any failure the
/// temp file is removed (best effort) and `final_path` is left untouched.
/// Fails if `final_path`'s parent does not exist or is unwritable.
pub fn write_atomic(final_path: &Path, data: &[u8]) -> io::Result<()> {
    let tmp = temp_path(final_path);
    let result = write_and_rename(&tmp, final_path, data);
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    result
}

fn write_and_rename(tmp: &Path, final_path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(tmp)?;
    file.write_all(data)?;
    file.sync_all()?;
    // Close before rename on some platforms.
    drop(file);
    std::fs::rename(tmp, final_path)
}
