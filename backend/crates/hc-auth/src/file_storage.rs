use crate::{AuthError, Result as AuthErrorResult, SessionStorage};

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::{debug, warn};

/// Session storage backed by a JSON object on disk.
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so readers see either the old or the new contents, never a mix.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open storage at `path`, reading existing contents if the file exists.
    ///
    /// A file that does not hold a JSON object of strings opens as empty and
    /// is overwritten by the next write.
    #[track_caller]
    pub fn open(path: impl Into<PathBuf>) -> AuthErrorResult<Self> {
        let path = path.into();

        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(
                        "Discarding unreadable session storage {}: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(io_error(&path, e)),
        };

        debug!("Opened session storage {} ({} keys)", path.display(), entries.len());

        Ok(Self { path, entries })
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> AuthErrorResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| AuthError::StorageFormat {
            path: self.path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let tmp_path = self.path.with_extension("tmp");
        std::fs::write(&tmp_path, json).map_err(|e| io_error(&tmp_path, e))?;
        restrict_permissions(&tmp_path)?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| io_error(&self.path, e))?;

        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.clone()
    }

    fn replace_all(&mut self, entries: BTreeMap<String, String>) -> AuthErrorResult<()> {
        self.write(&entries)?;
        self.entries = entries;
        Ok(())
    }

    fn clear(&mut self) -> AuthErrorResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(io_error(&self.path, e)),
        }
        self.entries.clear();
        Ok(())
    }
}

#[track_caller]
fn io_error(path: &Path, source: std::io::Error) -> AuthError {
    AuthError::StorageIo {
        path: path.to_path_buf(),
        source,
        location: ErrorLocation::from(Location::caller()),
    }
}

/// The file holds a bearer token; keep it owner-only.
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> AuthErrorResult<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| io_error(path, e))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> AuthErrorResult<()> {
    Ok(())
}
