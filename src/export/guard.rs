//! Output file that removes itself unless the write completes.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct OutputGuard {
    path: PathBuf,
    file: Option<File>,
    committed: bool,
}

impl OutputGuard {
    /// Create (or truncate) `path`. Parent directories are created.
    pub fn create(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Some(file),
            committed: false,
        })
    }

    pub fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        match self.file.as_mut() {
            Some(f) => f.write_all(bytes),
            None => Err(io::Error::other("output already committed")),
        }
    }

    /// Flush and keep the file.
    pub fn commit(mut self) -> io::Result<PathBuf> {
        if let Some(mut f) = self.file.take() {
            f.flush()?;
            f.sync_all()?;
        }
        self.committed = true;
        Ok(self.path.clone())
    }
}

impl Drop for OutputGuard {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        // close before removing (Windows refuses to delete open files)
        self.file.take();
        let _ = fs::remove_file(&self.path);
    }
}
