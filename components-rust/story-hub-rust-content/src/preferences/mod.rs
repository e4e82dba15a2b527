//! The only state that survives a restart: whether onboarding finished and
//! which theme is selected.

use crate::common::snapshot;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ONBOARDING_COMPLETED_KEY: &str = "isOnboardingCompleted";
pub const SELECTED_THEME_KEY: &str = "selectedTheme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppTheme {
    Light,
    #[default]
    Dark,
    System,
}

impl AppTheme {
    pub fn all() -> [AppTheme; 3] {
        [AppTheme::Light, AppTheme::Dark, AppTheme::System]
    }

    /// Raw label, also the persisted value.
    pub fn label(&self) -> &'static str {
        match self {
            AppTheme::Light => "Светлая",
            AppTheme::Dark => "Темная",
            AppTheme::System => "Системная",
        }
    }

    pub fn from_label(label: &str) -> Option<AppTheme> {
        AppTheme::all().into_iter().find(|t| t.label() == label)
    }

    /// `System` follows the platform appearance.
    pub fn is_dark(&self, system_is_dark: bool) -> bool {
        match self {
            AppTheme::Light => false,
            AppTheme::Dark => true,
            AppTheme::System => system_is_dark,
        }
    }
}

impl Display for AppTheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Platform key/value storage.
pub trait PreferenceStorage {
    fn get_bool(&self, key: &str) -> Option<bool>;

    fn get_string(&self, key: &str) -> Option<String>;

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), String>;

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), String>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: BTreeMap<String, Value>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(Value::as_bool)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).and_then(Value::as_str).map(str::to_string)
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), String> {
        self.values.insert(key.to_string(), Value::Bool(value));
        Ok(())
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
        Ok(())
    }
}

/// Preferences kept in a single file, rewritten on every change.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    values: MemoryStorage,
}

impl JsonFileStorage {
    /// Opens the file if it exists, otherwise starts empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let bytes = std::fs::read(&path).map_err(|err| err.to_string())?;
            snapshot::deserialize(&bytes)?
        } else {
            BTreeMap::new()
        };

        log::debug!("open preferences - path: {}, keys: {}", path.display(), values.len());

        Ok(JsonFileStorage {
            path,
            values: MemoryStorage { values },
        })
    }

    /// Applies `change` to a copy, writes the copy, and only then keeps it.
    /// The file is replaced through a sibling temp file and a rename.
    fn update(
        &mut self,
        change: impl FnOnce(&mut MemoryStorage) -> Result<(), String>,
    ) -> Result<(), String> {
        let mut values = self.values.clone();
        change(&mut values)?;

        let bytes = snapshot::serialize(&values.values)?;
        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        std::fs::write(&tmp_path, bytes).map_err(|err| err.to_string())?;
        if let Err(err) = std::fs::rename(&tmp_path, &self.path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(err.to_string());
        }

        self.values = values;
        Ok(())
    }
}

impl PreferenceStorage for JsonFileStorage {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get_bool(key)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get_string(key)
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), String> {
        self.update(|values| values.set_bool(key, value))
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.update(|values| values.set_string(key, value))
    }
}

pub struct Preferences<S> {
    storage: S,
}

impl<S: PreferenceStorage> Preferences<S> {
    pub fn new(storage: S) -> Self {
        Preferences { storage }
    }

    pub fn is_onboarding_completed(&self) -> bool {
        self.storage
            .get_bool(ONBOARDING_COMPLETED_KEY)
            .unwrap_or(false)
    }

    pub fn complete_onboarding(&mut self) -> Result<(), String> {
        log::info!("complete onboarding");
        self.storage.set_bool(ONBOARDING_COMPLETED_KEY, true)
    }

    pub fn reset_onboarding(&mut self) -> Result<(), String> {
        log::info!("reset onboarding");
        self.storage.set_bool(ONBOARDING_COMPLETED_KEY, false)
    }

    /// Selected theme; a missing or unknown value reads as `Dark`.
    pub fn theme(&self) -> AppTheme {
        self.storage
            .get_string(SELECTED_THEME_KEY)
            .and_then(|label| AppTheme::from_label(&label))
            .unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: AppTheme) -> Result<(), String> {
        log::info!("set theme - theme: {theme}");
        self.storage.set_string(SELECTED_THEME_KEY, theme.label())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
