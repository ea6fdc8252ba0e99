//! File-backed key-value store rooted in a capability directory.
//!
//! Each key is stored as one UTF-8 file named after the key. Writes go to a
//! hidden temporary sibling first and are then renamed over the target, so
//! a failed write never truncates the previous value.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::storage::ports::{KeyValueError, KeyValueResult, KeyValueStore};

/// Key-value store persisting each key as a file inside one directory.
#[derive(Debug)]
pub struct FileKeyValueStore {
    dir: Dir,
}

impl FileKeyValueStore {
    /// Opens (creating if needed) the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError::Io`] if the directory cannot be created or
    /// opened.
    pub fn open(path: &Utf8Path) -> KeyValueResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(KeyValueError::io)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(KeyValueError::io)?;
        Ok(Self { dir })
    }

    /// Wraps an already-open directory capability.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

/// Rejects keys that would escape the directory or collide with temp files.
fn validate_key(key: &str) -> KeyValueResult<()> {
    let is_valid = !key.is_empty()
        && !key.starts_with('.')
        && !key.contains(['/', '\\'])
        && !key.chars().any(char::is_control);
    if is_valid {
        Ok(())
    } else {
        Err(KeyValueError::InvalidKey(key.to_owned()))
    }
}

fn temp_name(key: &str) -> String {
    format!(".{key}.tmp")
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        validate_key(key)?;
        match self.dir.read_to_string(key) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueError::io(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        validate_key(key)?;
        let temp = temp_name(key);
        self.dir.write(&temp, value).map_err(KeyValueError::io)?;
        self.dir
            .rename(&temp, &self.dir, key)
            .map_err(KeyValueError::io)
    }

    fn remove(&self, key: &str) -> KeyValueResult<()> {
        validate_key(key)?;
        match self.dir.remove_file(key) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(KeyValueError::io(err)),
        }
    }
}
