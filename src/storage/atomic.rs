use std::fs::{self, File, OpenOptions, Permissions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{PathContext, WhitespaceError, WhitespaceResult};

/// Whole-file replacement through a sibling temp file and rename.
///
/// Readers of the path see either the old content or the new content,
/// never a truncated file. Symlinked paths are resolved first so the
/// link itself is left in place.
pub struct AtomicFile {
    path: PathBuf,
    temp_path: PathBuf,
}

impl AtomicFile {
    pub fn new<P: AsRef<Path>>(path: P) -> WhitespaceResult<Self> {
        let path = path.as_ref();
        let path = if fs::symlink_metadata(path).at(path)?.file_type().is_symlink() {
            fs::canonicalize(path).at(path)?
        } else {
            path.to_path_buf()
        };
        let temp_path = Self::temp_path(&path)?;

        Ok(Self { path, temp_path })
    }

    /// Generate a temporary file path next to the target
    fn temp_path(path: &Path) -> WhitespaceResult<PathBuf> {
        let file_name = path.file_name().ok_or_else(|| WhitespaceError::InvalidTarget {
            path: path.to_path_buf(),
        })?;

        let temp_name = format!(
            ".{}.tmp.{}",
            file_name.to_string_lossy(),
            std::process::id()
        );

        Ok(path.with_file_name(temp_name))
    }

    pub fn read(&self) -> WhitespaceResult<Vec<u8>> {
        let mut file = File::open(&self.path).at(&self.path)?;

        let mut content = Vec::new();
        file.read_to_end(&mut content).at(&self.path)?;

        Ok(content)
    }

    /// Current permissions of the target
    pub fn permissions(&self) -> WhitespaceResult<Permissions> {
        Ok(fs::metadata(&self.path).at(&self.path)?.permissions())
    }

    /// Atomically replace the target's content, applying `permissions`
    pub fn write(&self, content: &[u8], permissions: Permissions) -> WhitespaceResult<()> {
        let result = self.write_temp(content, permissions).and_then(|()| {
            fs::rename(&self.temp_path, &self.path).at(&self.path)
        });

        if result.is_err() && self.temp_path.exists() {
            // Best effort: the original error is the one worth reporting
            let _ = fs::remove_file(&self.temp_path);
        }

        result
    }

    fn write_temp(&self, content: &[u8], permissions: Permissions) -> WhitespaceResult<()> {
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.temp_path)
            .at(&self.temp_path)?;

        temp_file.write_all(content).at(&self.temp_path)?;
        temp_file.sync_all().at(&self.temp_path)?;
        drop(temp_file);

        fs::set_permissions(&self.temp_path, permissions).at(&self.temp_path)
    }
}
