//! JSON file backed store: a single object mapping keys to strings,
//! rewritten in full on every write (temp file + rename, so the previous
//! file stays intact if a write fails halfway).

use super::KeyValueStore;
use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file is an empty store. A file that is not a valid
    /// key/value object is also treated as empty; it is first moved aside
    /// to `<file>.corrupt` so its content can still be recovered by hand.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    let aside = sibling_path(&path, "corrupt");
                    tracing::warn!(
                        path = %path.display(),
                        saved_as = %aside.display(),
                        error = %e,
                        "store file is corrupt, starting empty"
                    );
                    if let Err(e) = fs::rename(&path, &aside) {
                        tracing::warn!(error = %e, "could not move the corrupt store aside");
                    }
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(AppError::Io(e)),
        };

        Ok(Self { path, entries })
    }

    fn flush(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        let tmp = sibling_path(&self.path, "tmp");

        write_atomic(&tmp, &json)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|e| {
                AppError::Store(format!("cannot write {}: {}", self.path.display(), e))
            })?;

        tracing::trace!(path = %self.path.display(), "store flushed");
        Ok(())
    }
}

/// `store.json` → `store.json.<suffix>`
fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, suffix),
        None => suffix.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        assert!(store.get("k").is_none());
        store.set("k", "v").unwrap();
        store.set("gone", "x").unwrap();
        store.remove("gone").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k").as_deref(), Some("v"));
        assert!(reopened.get("gone").is_none());
    }

    #[test]
    fn corrupt_file_opens_empty_and_is_kept_aside() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let truncated = r#"{"history": "[{\"date\":\"01/03/2024\",\"bal"#;
        fs::write(&path, truncated).unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert!(store.get("history").is_none());
        store.set("today_date_key", "05/03/2024").unwrap();

        let aside = dir.path().join("store.json.corrupt");
        assert_eq!(fs::read_to_string(aside).unwrap(), truncated);
    }

    #[test]
    fn failed_write_leaves_previous_file_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store
            .set("history", r#"[{"date":"01/03/2024","balance":15}]"#)
            .unwrap();

        // the temp file cannot be created: a directory sits in its place
        fs::create_dir(dir.path().join("store.json.tmp")).unwrap();
        assert!(store.set("today_date_key", "05/03/2024").is_err());

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("history").as_deref(),
            Some(r#"[{"date":"01/03/2024","balance":15}]"#)
        );
        assert!(reopened.get("today_date_key").is_none());
    }
}
