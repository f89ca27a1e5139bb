use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use assistant_logging::{assistant_error, assistant_info, assistant_warn};
use assistant_page::{write_atomic, BoundsStore};
use serde::{Deserialize, Serialize};

/// On-disk shape of the bounds store: a map holding exactly the two
/// literal storage keys.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct StoreFile {
    entries: BTreeMap<String, String>,
}

/// File-backed bounds store, serialized as RON and replaced atomically on
/// every write. Unreadable or unparseable content degrades to "nothing
/// saved".
pub(crate) struct FileBoundsStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileBoundsStore {
    pub(crate) fn open(path: PathBuf) -> Self {
        let entries = load_entries(&path);
        Self { path, entries }
    }

    fn flush(&self) {
        let file = StoreFile {
            entries: self.entries.clone(),
        };
        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&file, pretty) {
            Ok(text) => text,
            Err(err) => {
                assistant_error!("Failed to serialize bounds store: {}", err);
                return;
            }
        };
        if let Err(err) = write_atomic(&self.path, &content) {
            assistant_error!("Failed to write bounds store to {:?}: {}", self.path, err);
        }
    }
}

impl BoundsStore for FileBoundsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }
}

fn load_entries(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return BTreeMap::new();
        }
        Err(err) => {
            assistant_warn!("Failed to read bounds store from {:?}: {}", path, err);
            return BTreeMap::new();
        }
    };

    let file: StoreFile = match ron::from_str(&content) {
        Ok(file) => file,
        Err(err) => {
            assistant_warn!("Failed to parse bounds store from {:?}: {}", path, err);
            return BTreeMap::new();
        }
    };

    assistant_info!("Loaded saved bounds from {:?}", path);
    file.entries
}
