//! Key/value configuration sources
//!
//! The loaders only need typed lookups by `(section, key)`, so they work
//! against the [`ConfigSource`] trait. `glib::KeyFile` is the store used at
//! runtime; a missing file is just an empty store.

use std::path::{Path, PathBuf};

use glib::{KeyFile, KeyFileFlags};
use tracing::{debug, warn};

use crate::constants::CONFIG_RELATIVE_PATH;

/// Typed read access to a sectioned key/value store.
///
/// Every lookup returns `None` when the key is absent or its value does not
/// convert to the requested type.
pub trait ConfigSource {
    fn has_section(&self, section: &str) -> bool;
    fn has_key(&self, section: &str, key: &str) -> bool;
    fn string(&self, section: &str, key: &str) -> Option<String>;
    fn double(&self, section: &str, key: &str) -> Option<f64>;
    fn integer(&self, section: &str, key: &str) -> Option<i64>;
    fn boolean(&self, section: &str, key: &str) -> Option<bool>;
}

impl ConfigSource for KeyFile {
    fn has_section(&self, section: &str) -> bool {
        self.has_group(section)
    }

    fn has_key(&self, section: &str, key: &str) -> bool {
        KeyFile::has_key(self, section, key).unwrap_or(false)
    }

    fn string(&self, section: &str, key: &str) -> Option<String> {
        KeyFile::string(self, section, key).ok().map(|s| s.to_string())
    }

    fn double(&self, section: &str, key: &str) -> Option<f64> {
        KeyFile::double(self, section, key).ok()
    }

    fn integer(&self, section: &str, key: &str) -> Option<i64> {
        KeyFile::int64(self, section, key).ok()
    }

    fn boolean(&self, section: &str, key: &str) -> Option<bool> {
        KeyFile::boolean(self, section, key).ok()
    }
}

/// Default config location: `~/.config/lwt/lwt.conf`.
pub fn config_path() -> PathBuf {
    glib::home_dir().join(CONFIG_RELATIVE_PATH)
}

/// Load a key file from disk.
///
/// Never fails: a missing file is silent, an unreadable or malformed one is
/// reported and both yield an empty store.
pub fn load_key_file(path: &Path) -> KeyFile {
    let kf = KeyFile::new();
    if let Err(e) = kf.load_from_file(path, KeyFileFlags::NONE) {
        if e.matches(glib::FileError::Noent) {
            debug!("No config file at {}; using defaults", path.display());
        } else {
            warn!("Ignoring config file {}: {}", path.display(), e);
        }
        return KeyFile::new();
    }
    debug!("Loaded config file {}", path.display());
    kf
}

/// Parse a key file from an in-memory string, empty on parse errors.
pub fn key_file_from_str(data: &str) -> KeyFile {
    let kf = KeyFile::new();
    if let Err(e) = kf.load_from_data(data, KeyFileFlags::NONE) {
        warn!("Ignoring malformed config data: {}", e);
        return KeyFile::new();
    }
    kf
}
