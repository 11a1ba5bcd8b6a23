// cleanclip/src/utils/rule_store.rs
//! JSON file implementation of `RuleStore`.
//!
//! Rules live in `<config dir>/patterns.json`, where the config dir is
//! `--config-dir`, `CLEANCLIP_CONFIG_DIR`, or `~/.cleanclip`. Readers and
//! writers coordinate through `patterns.json.lock` in the same directory:
//! reads hold it shared, saves hold it exclusively while a temp file is
//! written and renamed over the rules file.
//!
//! Only a missing file or an undecodable document falls back to the
//! defaults. Any other read failure is returned and the file is left alone.

use anyhow::{anyhow, Result};
use cleanclip_core::{encode_stored_rules, load_or_seed, CleanclipError, RuleSet, RuleStore};
use log::{debug, info};
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = ".cleanclip";
pub const RULES_FILE_NAME: &str = "patterns.json";
const TMP_SUFFIX: &str = ".tmp";
const LOCK_SUFFIX: &str = ".lock";

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at `dir`; the directory is created on first save.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(RULES_FILE_NAME),
        }
    }

    /// Resolves the store location from an explicit directory or the home directory.
    pub fn from_config_dir(config_dir: Option<&Path>) -> Result<Self> {
        let dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::home_dir()
                .map(|home| home.join(CONFIG_DIR_NAME))
                .ok_or_else(|| anyhow!("Could not determine the home directory; pass --config-dir"))?,
        };
        Ok(Self::new(dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the rules file.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_file_name(format!("{RULES_FILE_NAME}{LOCK_SUFFIX}"))
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_file_name(format!("{RULES_FILE_NAME}{TMP_SUFFIX}"))
    }

    fn open_lock(&self) -> io::Result<File> {
        OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())
    }

    /// Raw stored document, or `None` if no rules file exists yet.
    fn read_document(&self) -> io::Result<Option<String>> {
        if !self.dir().is_dir() {
            debug!("No config directory at {}", self.dir().display());
            return Ok(None);
        }

        // A read-only config dir cannot hold the lock file; read unlocked then.
        let lock = match self.open_lock() {
            Ok(lock) => {
                fs2::FileExt::lock_shared(&lock)?;
                Some(lock)
            }
            Err(e) => {
                debug!("Reading {} without a lock: {}", self.path.display(), e);
                None
            }
        };

        let result = read_if_present(&self.path);
        if let Some(lock) = &lock {
            fs2::FileExt::unlock(lock)?;
        }
        result
    }
}

fn read_if_present(path: &Path) -> io::Result<Option<String>> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No rules file at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e),
    };
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    Ok(Some(text))
}

impl RuleStore for JsonFileStore {
    fn load_rule_set(&self) -> Result<RuleSet, CleanclipError> {
        let document = self.read_document()?;
        load_or_seed(document.as_deref(), |defaults| {
            info!("Seeding default rules into {}", self.path.display());
            self.save_rule_set(defaults)
        })
    }

    fn save_rule_set(&self, rules: &RuleSet) -> Result<(), CleanclipError> {
        let encoded = encode_stored_rules(rules)?;
        fs::create_dir_all(self.dir())?;

        let lock = self.open_lock()?;
        fs2::FileExt::lock_exclusive(&lock)?;
        let result = self.replace_document(&encoded);
        fs2::FileExt::unlock(&lock)?;
        result?;

        info!("Saved {} rules to {}", rules.len(), self.path.display());
        Ok(())
    }
}

impl JsonFileStore {
    fn replace_document(&self, encoded: &str) -> io::Result<()> {
        let tmp_path = self.tmp_path();
        {
            let mut tmp = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp_path)?;
            tmp.write_all(encoded.as_bytes())?;
            tmp.flush()?;
        }
        fs::rename(&tmp_path, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleanclip_core::{decode_stored_rules, Rule};
    use tempfile::tempdir;

    #[test_log::test]
    fn missing_file_is_seeded_and_directory_created() {
        let root = tempdir().unwrap();
        let store = JsonFileStore::new(root.path().join("nested").join("cfg"));

        let rules = store.load_rule_set().unwrap();
        assert_eq!(rules, RuleSet::load_default_rules().unwrap());

        let written = fs::read_to_string(store.path()).unwrap();
        assert_eq!(decode_stored_rules(&written), Some(rules));
    }

    #[test_log::test]
    fn corrupt_file_is_replaced_with_defaults() {
        let root = tempdir().unwrap();
        let store = JsonFileStore::new(root.path());
        fs::write(store.path(), "{ oops").unwrap();

        let rules = store.load_rule_set().unwrap();
        assert_eq!(rules, RuleSet::load_default_rules().unwrap());
        assert!(fs::read_to_string(store.path()).unwrap().starts_with('['));
    }

    #[test]
    fn save_then_load_returns_same_rules() {
        let root = tempdir().unwrap();
        let store = JsonFileStore::new(root.path());
        let rules = RuleSet::new(vec![
            Rule::new(r"\bACME-\d+\b", "ACME-####").unwrap(),
            Rule::new("internal", "[INTERNAL]").unwrap(),
        ])
        .unwrap();

        store.save_rule_set(&rules).unwrap();
        assert_eq!(store.load_rule_set().unwrap(), rules);
        assert!(!root.path().join(format!("{RULES_FILE_NAME}{TMP_SUFFIX}")).exists());
    }

    #[cfg(unix)]
    #[test_log::test]
    fn unreadable_rules_file_is_an_error_and_left_alone() {
        let root = tempdir().unwrap();
        let store = JsonFileStore::new(root.path());
        // A directory in place of the rules file opens but cannot be read.
        fs::create_dir(store.path()).unwrap();
        fs::write(store.path().join("keep.txt"), "user data").unwrap();

        let err = store.load_rule_set().unwrap_err();
        assert!(matches!(err, CleanclipError::Io(_)), "unexpected error: {err}");
        assert!(store.path().is_dir());
        assert_eq!(fs::read_to_string(store.path().join("keep.txt")).unwrap(), "user data");
        assert!(!root.path().join(format!("{RULES_FILE_NAME}{TMP_SUFFIX}")).exists());
    }

    #[test]
    fn save_leaves_lock_file_and_no_temp_file() {
        let root = tempdir().unwrap();
        let store = JsonFileStore::new(root.path());
        store.save_rule_set(&RuleSet::load_default_rules().unwrap()).unwrap();

        assert!(store.lock_path().exists());
        assert!(!store.tmp_path().exists());
        assert_eq!(store.load_rule_set().unwrap(), RuleSet::load_default_rules().unwrap());
    }

    #[test]
    fn explicit_config_dir_wins() {
        let root = tempdir().unwrap();
        let store = JsonFileStore::from_config_dir(Some(root.path())).unwrap();
        assert_eq!(store.path(), root.path().join(RULES_FILE_NAME).as_path());
    }
}
