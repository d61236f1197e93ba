//! Persisted user preferences
//!
//! The only preference the site keeps is the theme. It lives in a small JSON
//! file under the platform config directory and survives restarts; everything
//! else in the app is session state.

use crate::ui::theme::ThemeMode;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to read preferences: {0}")]
    Io(#[from] std::io::Error),
    #[error("preferences file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Store for user preferences, abstracted so tests can observe writes
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// The persisted theme, if one was ever saved
    fn theme(&self) -> Option<ThemeMode>;

    /// Persist the theme choice
    fn set_theme(&mut self, mode: ThemeMode) -> Result<(), PrefsError>;
}

/// On-disk preference contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PrefsFile {
    theme: Option<ThemeMode>,
}

/// File-backed preference store
#[derive(Debug, Default)]
pub struct FilePrefs {
    contents: PrefsFile,
}

impl FilePrefs {
    fn prefs_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "folio", "folio-tui")
            .map(|dirs| dirs.config_dir().join("prefs.json"))
    }

    /// Load preferences from disk, defaulting when no file exists
    pub fn load() -> Result<Self, PrefsError> {
        if let Some(path) = Self::prefs_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let contents: PrefsFile = serde_json::from_str(&content)?;
                return Ok(Self { contents });
            }
        }
        Ok(Self::default())
    }

    fn save(&self) -> Result<(), PrefsError> {
        if let Some(path) = Self::prefs_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(&self.contents)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}

impl PreferenceStore for FilePrefs {
    fn theme(&self) -> Option<ThemeMode> {
        self.contents.theme
    }

    fn set_theme(&mut self, mode: ThemeMode) -> Result<(), PrefsError> {
        self.contents.theme = Some(mode);
        self.save()
    }
}
