use super::{check_version, snapshot_of, BookStore, Snapshot};
use crate::book::AddressBook;
use crate::error::{RolodexError, Result};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// JSON snapshot stored in a single file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RolodexError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("contacts");
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }

    fn write_snapshot(&self, tmp: &Path, book: &AddressBook) -> Result<()> {
        let file = File::create(tmp).map_err(RolodexError::Io)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &snapshot_of(book))
            .map_err(RolodexError::Serialization)?;
        writer.flush().map_err(RolodexError::Io)?;
        Ok(())
    }
}

/// Best-effort removal of a leftover temp file after a failed save.
fn discard(tmp: &Path) {
    if let Err(e) = fs::remove_file(tmp) {
        if e.kind() != ErrorKind::NotFound {
            warn!("could not remove temp snapshot {}: {}", tmp.display(), e);
        }
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            debug!("no snapshot at {}, starting empty", self.path.display());
            return Ok(AddressBook::new());
        }

        let content = fs::read_to_string(&self.path).map_err(RolodexError::Io)?;
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        let book = check_version(snapshot)?;

        debug!(
            "loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        let created = !self.path.exists();
        self.ensure_parent()?;

        // Write beside the target then rename; the previous snapshot
        // stays intact if anything fails.
        let tmp = self.tmp_path();
        if let Err(e) = self.write_snapshot(&tmp, book) {
            discard(&tmp);
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            discard(&tmp);
            return Err(RolodexError::Io(e));
        }

        if created {
            info!("created contact snapshot at {}", self.path.display());
        }
        debug!("saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}
