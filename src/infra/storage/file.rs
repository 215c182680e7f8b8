use std::{fs, io::ErrorKind};

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use super::{KeyValueStore, StorageError, validate_key};

/// Session-scoped store on the local filesystem.
///
/// Every session owns one directory below `root` and every key is one file in it, so two
/// sessions never see each other's values. Ending the session deletes the directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    session_dir: Utf8PathBuf,
}

impl FileSessionStore {
    pub fn new(root: impl AsRef<Utf8Path>, session: &str) -> Result<Self, StorageError> {
        validate_key(session)?;
        Ok(Self {
            session_dir: root.as_ref().join(session),
        })
    }

    pub fn session_dir(&self) -> &Utf8Path {
        &self.session_dir
    }

    /// Drops everything stored in this session. Ending a session that never stored anything
    /// is not an error.
    pub fn end_session(&mut self) -> Result<(), StorageError> {
        match fs::remove_dir_all(&self.session_dir) {
            Ok(()) => {
                info!("FileSessionStore: ended session {}", self.session_dir);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                path: self.session_dir.clone(),
                source,
            }),
        }
    }

    fn path_for(&self, key: &str) -> Result<Utf8PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.session_dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.session_dir).map_err(|source| StorageError::Io {
            path: self.session_dir.clone(),
            source,
        })?;

        // Readers must never observe a half-written value.
        let tmp_path = self.session_dir.join(format!(".{key}.tmp"));
        fs::write(&tmp_path, value).map_err(|source| StorageError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("FileSessionStore: wrote {} bytes to {path}", value.len());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}
