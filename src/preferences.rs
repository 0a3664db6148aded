use rocket::form::FromFormField;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::i18n::Language;
use crate::store::Storage;

/// Storage key of the persisted snapshot.
pub const STORAGE_KEY: &str = "portfolio-storage";

/// Version written into every snapshot envelope. Anything else loads as defaults.
pub const SNAPSHOT_VERSION: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, FromFormField)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    #[field(value = "light")]
    Light,
    #[field(value = "dark")]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The visitor-facing display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preference {
    pub theme: Theme,
    pub language: Language,
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    state: Preference,
    version: u32,
}

/// The persisted envelope as a JSON value.
pub fn snapshot_value(pref: &Preference) -> serde_json::Value {
    serde_json::json!({ "state": pref, "version": SNAPSHOT_VERSION })
}

/// Serialize a preference into the persisted envelope.
pub fn encode_snapshot(pref: &Preference) -> String {
    snapshot_value(pref).to_string()
}

/// Parse a persisted envelope. Missing fields in `state` take their defaults.
pub fn decode_snapshot(raw: &str) -> Result<Preference, String> {
    let snapshot: Snapshot = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(format!(
            "snapshot version {} (expected {})",
            snapshot.version, SNAPSHOT_VERSION
        ));
    }
    Ok(snapshot.state)
}

/// Shared preference state. Every mutation is written through to storage
/// before the lock is released, so readers and the persisted copy never disagree.
pub struct PreferenceStore {
    current: RwLock<Preference>,
    storage: Arc<dyn Storage>,
}

impl PreferenceStore {
    /// Rehydrate from storage, falling back to defaults when nothing usable is stored.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let current = match storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => decode_snapshot(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring stored preferences ({}), using defaults", e);
                Preference::default()
            }),
            Ok(None) => Preference::default(),
            Err(e) => {
                log::warn!("Failed to read stored preferences ({}), using defaults", e);
                Preference::default()
            }
        };
        log::info!(
            "Preferences loaded: theme={} language={}",
            current.theme,
            current.language
        );
        PreferenceStore {
            current: RwLock::new(current),
            storage,
        }
    }

    pub fn get(&self) -> Preference {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_theme(&self, theme: Theme) {
        self.update(|p| p.theme = theme);
    }

    pub fn set_language(&self, language: Language) {
        self.update(|p| p.language = language);
    }

    /// Flip light/dark and return the new theme.
    pub fn toggle_theme(&self) -> Theme {
        self.update(|p| p.theme = p.theme.toggled()).theme
    }

    fn update(&self, apply: impl FnOnce(&mut Preference)) -> Preference {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut current);
        let snapshot = *current;
        if let Err(e) = self.storage.set_item(STORAGE_KEY, &encode_snapshot(&snapshot)) {
            log::warn!("Failed to persist preferences: {}", e);
        }
        snapshot
    }
}
