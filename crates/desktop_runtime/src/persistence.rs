//! Layout persistence: the versioned state document, legacy migration, and the theme key.
//!
//! The state document is rewritten in full after every layout or preference change. Loading
//! never fails: unreadable documents are logged and the desktop boots with defaults.

use std::collections::HashMap;

use leptos::logging;
use platform_host::{PrefsStore, Theme, WallpaperId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{
    geometry::clamp_rect,
    model::{
        AppId, BootSnapshot, DesktopState, Preferences, Viewport, WindowId, WindowRecord,
        WindowRect, LEGACY_STORAGE_KEY, STATE_SCHEMA_VERSION, STATE_STORAGE_KEY,
        THEME_STORAGE_KEY,
    },
};

/// Largest stored id suffix adopted as-is; larger suffixes are reassigned on restore.
const MAX_RESTORED_WINDOW_SEQ: u64 = u32::MAX as u64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure while writing layout or theme state.
pub enum PersistenceError {
    /// The state document could not be serialized.
    #[error("encode desktop state: {0}")]
    Encode(String),
    /// The preference store rejected the write.
    #[error("storage write for `{key}` failed: {detail}")]
    Storage {
        /// Storage key being written.
        key: &'static str,
        /// Store error detail.
        detail: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedWindow<'a> {
    id: &'a str,
    app_id: AppId,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    z: u32,
    minimized: bool,
}

#[derive(Debug, Serialize)]
struct PersistedState<'a> {
    version: u32,
    windows: Vec<PersistedWindow<'a>>,
    preferences: &'a Preferences,
}

/// A stored window entry. Numbers are read as floats since older writers were not strict
/// about integers.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredWindow {
    id: String,
    app_id: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    z: f64,
    #[serde(default)]
    minimized: bool,
}

/// Serializes windows and preferences as the current-version state document.
///
/// # Errors
///
/// Returns [`PersistenceError::Encode`] when serialization fails.
pub fn encode_state(state: &DesktopState) -> Result<String, PersistenceError> {
    let document = PersistedState {
        version: STATE_SCHEMA_VERSION,
        windows: state
            .windows
            .iter()
            .map(|window| PersistedWindow {
                id: window.id.as_str(),
                app_id: window.app_id,
                x: window.rect.x,
                y: window.rect.y,
                width: window.rect.w,
                height: window.rect.h,
                z: window.z_index,
                minimized: window.minimized,
            })
            .collect(),
        preferences: &state.preferences,
    };
    serde_json::to_string(&document).map_err(|err| PersistenceError::Encode(err.to_string()))
}

/// Writes the state document under [`STATE_STORAGE_KEY`].
///
/// # Errors
///
/// Returns an error when encoding or the store write fails.
pub fn persist_state(store: &dyn PrefsStore, state: &DesktopState) -> Result<(), PersistenceError> {
    let raw = encode_state(state)?;
    store
        .save_pref(STATE_STORAGE_KEY, &raw)
        .map_err(|detail| PersistenceError::Storage {
            key: STATE_STORAGE_KEY,
            detail,
        })
}

/// Writes the standalone theme key as a bare `light`/`dark` string.
///
/// # Errors
///
/// Returns [`PersistenceError::Storage`] when the store write fails.
pub fn persist_theme(store: &dyn PrefsStore, theme: Theme) -> Result<(), PersistenceError> {
    store
        .save_pref(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|detail| PersistenceError::Storage {
            key: THEME_STORAGE_KEY,
            detail,
        })
}

/// Rebuilds window records from stored entries.
///
/// Entries that do not parse or name an unknown app are dropped. When an app appears more than
/// once the entry with the highest stored z wins. Survivors are clamped to `viewport`, ordered
/// by stored z, and renumbered `1..=N`. Returns the records and the id counter to resume from.
pub fn restore_windows(entries: &[Value], viewport: Viewport) -> (Vec<WindowRecord>, u64) {
    let mut by_app: HashMap<AppId, (f64, WindowRecord)> = HashMap::new();
    let mut order: Vec<AppId> = Vec::new();

    for entry in entries {
        let stored = match serde_json::from_value::<StoredWindow>(entry.clone()) {
            Ok(stored) => stored,
            Err(err) => {
                logging::warn!("skipping stored window: {err}");
                continue;
            }
        };
        let Some(app_id) = AppId::parse(&stored.app_id) else {
            continue;
        };
        let record = WindowRecord {
            id: WindowId(stored.id),
            app_id,
            rect: clamp_rect(
                WindowRect {
                    x: stored.x.round() as i32,
                    y: stored.y.round() as i32,
                    w: stored.width.round() as i32,
                    h: stored.height.round() as i32,
                },
                viewport,
            ),
            z_index: 0,
            minimized: stored.minimized,
        };
        let replace = by_app
            .get(&app_id)
            .map_or(true, |(kept_z, _)| stored.z > *kept_z);
        if !by_app.contains_key(&app_id) {
            order.push(app_id);
        }
        if replace {
            by_app.insert(app_id, (stored.z, record));
        }
    }

    let mut ranked: Vec<(f64, WindowRecord)> = order
        .into_iter()
        .filter_map(|app_id| by_app.remove(&app_id))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut windows: Vec<WindowRecord> = ranked.into_iter().map(|(_, record)| record).collect();
    let mut counter = windows
        .iter()
        .filter_map(|window| window.id.counter_suffix())
        .filter(|suffix| *suffix <= MAX_RESTORED_WINDOW_SEQ)
        .max()
        .unwrap_or(0)
        .max(windows.len() as u64);

    let mut seen_ids: Vec<WindowId> = Vec::with_capacity(windows.len());
    for (index, window) in windows.iter_mut().enumerate() {
        window.z_index = index as u32 + 1;
        let oversized = window
            .id
            .counter_suffix()
            .is_some_and(|suffix| suffix > MAX_RESTORED_WINDOW_SEQ);
        if oversized || window.id.as_str().is_empty() || seen_ids.contains(&window.id) {
            counter += 1;
            window.id = WindowId::for_app(window.app_id, counter);
        }
        seen_ids.push(window.id.clone());
    }

    (windows, counter)
}

fn preferences_from(value: Option<&Value>) -> Preferences {
    let wallpaper = value
        .and_then(|prefs| prefs.get("wallpaper"))
        .and_then(Value::as_str)
        .and_then(WallpaperId::parse)
        .unwrap_or_default();
    Preferences {
        wallpaper,
        theme: theme_from_preferences(value),
    }
}

fn theme_from_preferences(value: Option<&Value>) -> Option<Theme> {
    value
        .and_then(|prefs| prefs.get("theme"))
        .and_then(Value::as_str)
        .and_then(Theme::parse)
}

fn stored_theme_key(store: &dyn PrefsStore) -> Option<Theme> {
    match store.load_pref(THEME_STORAGE_KEY) {
        Ok(raw) => raw.and_then(|raw| Theme::parse(raw.trim().trim_matches('"'))),
        Err(err) => {
            logging::warn!("theme load failed: {err}");
            None
        }
    }
}

fn load_raw(store: &dyn PrefsStore, key: &str) -> Option<String> {
    match store.load_pref(key) {
        Ok(raw) => raw,
        Err(err) => {
            logging::warn!("reading `{key}` failed: {err}");
            None
        }
    }
}

fn delete_key(store: &dyn PrefsStore, key: &str) {
    if let Err(err) = store.delete_pref(key) {
        logging::warn!("deleting `{key}` failed: {err}");
    }
}

/// Loads the boot snapshot: current document first, then the legacy windows-only key.
///
/// * A current document with a matching version restores windows and preferences.
/// * A version mismatch deletes the current key and falls back to the legacy key, which is
///   deleted once it has been read successfully.
/// * Missing or malformed documents yield an empty desktop with default preferences.
///
/// The theme comes from the stored preferences when present, else from the standalone theme
/// key, else dark.
pub fn load_boot_snapshot(store: &dyn PrefsStore, viewport: Viewport) -> BootSnapshot {
    let mut restored: Option<(Vec<WindowRecord>, u64, Preferences)> = None;

    if let Some(raw) = load_raw(store, STATE_STORAGE_KEY) {
        match serde_json::from_str::<Value>(&raw) {
            Ok(document) => {
                // Integral floats such as `2.0` count as the same version.
                let version = document.get("version").and_then(Value::as_f64);
                if version == Some(f64::from(STATE_SCHEMA_VERSION)) {
                    let entries = windows_of(&document);
                    let (windows, counter) = restore_windows(entries, viewport);
                    let preferences = preferences_from(document.get("preferences"));
                    restored = Some((windows, counter, preferences));
                } else {
                    logging::log!(
                        "discarding desktop state with version {version:?}; expected {STATE_SCHEMA_VERSION}"
                    );
                    delete_key(store, STATE_STORAGE_KEY);
                    restored = Some(migrate_legacy(store, viewport).unwrap_or_default());
                }
            }
            Err(err) => {
                logging::error!("failed to restore desktop state: {err}");
                restored = Some((Vec::new(), 0, Preferences::default()));
            }
        }
    }

    let (windows, window_counter, mut preferences) = match restored {
        Some(restored) => restored,
        None => migrate_legacy(store, viewport).unwrap_or_default(),
    };

    let theme = preferences
        .theme
        .or_else(|| stored_theme_key(store))
        .unwrap_or_default();
    preferences.theme = Some(theme);

    BootSnapshot {
        z_top: windows.len() as u32,
        windows,
        preferences,
        theme,
        window_counter,
    }
}

fn windows_of(document: &Value) -> &[Value] {
    document
        .get("windows")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn migrate_legacy(
    store: &dyn PrefsStore,
    viewport: Viewport,
) -> Option<(Vec<WindowRecord>, u64, Preferences)> {
    let raw = load_raw(store, LEGACY_STORAGE_KEY)?;
    match serde_json::from_str::<Value>(&raw) {
        Ok(document) => {
            let (windows, counter) = restore_windows(windows_of(&document), viewport);
            delete_key(store, LEGACY_STORAGE_KEY);
            Some((windows, counter, Preferences::default()))
        }
        Err(err) => {
            logging::error!("failed to migrate legacy desktop windows: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1440, 900);

    fn window(id: &str, app_id: AppId, z_index: u32) -> WindowRecord {
        WindowRecord {
            id: WindowId(id.to_string()),
            app_id,
            rect: WindowRect {
                x: 100,
                y: 120,
                w: 500,
                h: 320,
            },
            z_index,
            minimized: false,
        }
    }

    #[test]
    fn encoded_document_uses_camel_case_fields() {
        let state = DesktopState {
            windows: vec![window("papers-1", AppId::Papers, 1)],
            preferences: Preferences {
                wallpaper: WallpaperId::Cyberwave,
                theme: Some(Theme::Light),
            },
            ..DesktopState::default()
        };
        let encoded: Value = serde_json::from_str(&encode_state(&state).expect("encode"))
            .expect("valid json");
        assert_eq!(
            encoded,
            json!({
                "version": 2,
                "windows": [{
                    "id": "papers-1",
                    "appId": "papers",
                    "x": 100,
                    "y": 120,
                    "width": 500,
                    "height": 320,
                    "z": 1,
                    "minimized": false
                }],
                "preferences": { "wallpaper": "cyberwave", "theme": "light" }
            })
        );
    }

    #[test]
    fn persisted_state_round_trips() {
        let store = MemoryPrefsStore::default();
        let state = DesktopState {
            windows: vec![
                window("about-1", AppId::About, 3),
                window("links-4", AppId::Links, 5),
            ],
            preferences: Preferences {
                wallpaper: WallpaperId::Matrix,
                theme: Some(Theme::Dark),
            },
            ..DesktopState::default()
        };
        persist_state(&store, &state).expect("persist");

        let snapshot = load_boot_snapshot(&store, VIEWPORT);
        assert_eq!(snapshot.preferences, state.preferences);
        assert_eq!(snapshot.windows.len(), 2);
        assert_eq!(snapshot.windows[0].id.as_str(), "about-1");
        assert_eq!(snapshot.windows[0].rect, state.windows[0].rect);
        assert_eq!(
            snapshot.windows.iter().map(|w| w.z_index).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(snapshot.z_top, 2);
        assert_eq!(snapshot.window_counter, 4);
    }

    #[test]
    fn restore_drops_unknown_apps_rounds_numbers_and_keeps_highest_duplicate() {
        let entries = vec![
            json!({"id": "terminal-1", "appId": "terminal", "x": 0, "y": 0, "width": 400, "height": 300, "z": 9, "minimized": false}),
            json!({"id": "about-2", "appId": "about", "x": 40.6, "y": 50.2, "width": 480.4, "height": 300.5, "z": 7.5, "minimized": true}),
            json!({"id": "about-3", "appId": "about", "x": 10, "y": 10, "width": 400, "height": 300, "z": 2, "minimized": false}),
            json!({"id": "links-5", "appId": "links", "x": 10, "y": 10, "width": 400, "height": 300, "z": 3}),
            json!({"appId": "projects"}),
        ];

        let (windows, counter) = restore_windows(&entries, VIEWPORT);

        assert_eq!(
            windows
                .iter()
                .map(|w| (w.id.as_str(), w.z_index))
                .collect::<Vec<_>>(),
            vec![("links-5", 1), ("about-2", 2)]
        );
        assert_eq!(
            windows[1].rect,
            WindowRect {
                x: 41,
                y: 50,
                w: 480,
                h: 301
            }
        );
        assert!(windows[1].minimized);
        assert!(!windows[0].minimized);
        assert_eq!(counter, 5);
    }

    #[test]
    fn restore_reclamps_against_the_current_viewport() {
        let entries = vec![json!({
            "id": "papers-1", "appId": "papers",
            "x": 2000, "y": 2000, "width": 5000, "height": 100, "z": 1, "minimized": false
        })];
        let (windows, _) = restore_windows(&entries, Viewport::new(800, 600));
        assert_eq!(
            windows[0].rect,
            WindowRect {
                x: 800 - 768 - 16,
                y: 552 - 220 - 16,
                w: 768,
                h: 220
            }
        );
    }

    #[test]
    fn oversized_id_suffixes_are_reassigned_instead_of_adopted() {
        let entries = vec![
            json!({"id": "about-18446744073709551615", "appId": "about", "x": 10, "y": 10, "width": 540, "height": 360, "z": 1, "minimized": false}),
            json!({"id": "papers-4", "appId": "papers", "x": 20, "y": 20, "width": 760, "height": 520, "z": 2, "minimized": false}),
        ];

        let (windows, counter) = restore_windows(&entries, VIEWPORT);

        assert_eq!(counter, 5);
        let ids: Vec<&str> = windows.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["about-5", "papers-4"]);
    }

    #[test]
    fn integral_float_version_is_accepted() {
        let store = MemoryPrefsStore::with_entries([(
            STATE_STORAGE_KEY,
            r#"{"version":2.0,"windows":[{"id":"links-1","appId":"links","x":40,"y":40,"width":720,"height":500,"z":1,"minimized":false}],"preferences":{"wallpaper":"cyberwave"}}"#,
        )]);

        let snapshot = load_boot_snapshot(&store, VIEWPORT);

        assert_eq!(snapshot.windows.len(), 1);
        assert_eq!(snapshot.preferences.wallpaper, WallpaperId::Cyberwave);
        assert!(store.contains_key(STATE_STORAGE_KEY));
    }

    #[test]
    fn version_mismatch_discards_state_and_tries_legacy() {
        let store = MemoryPrefsStore::with_entries([
            (
                STATE_STORAGE_KEY,
                r#"{"version":1,"windows":[{"id":"about-1","appId":"about","x":1,"y":1,"width":400,"height":300,"z":1,"minimized":false}],"preferences":{"wallpaper":"matrix","theme":"dark"}}"#,
            ),
            (THEME_STORAGE_KEY, "light"),
        ]);

        let snapshot = load_boot_snapshot(&store, VIEWPORT);

        assert!(snapshot.windows.is_empty());
        assert_eq!(snapshot.preferences.wallpaper, WallpaperId::Aurora);
        assert_eq!(snapshot.theme, Theme::Light);
        assert!(!store.contains_key(STATE_STORAGE_KEY));
    }

    #[test]
    fn legacy_windows_are_migrated_renumbered_and_deleted() {
        let store = MemoryPrefsStore::with_entries([(
            LEGACY_STORAGE_KEY,
            r#"{"windows":[
                {"id":"papers-2","appId":"papers","x":120,"y":112,"width":760,"height":520,"z":8,"minimized":false},
                {"id":"about-1","appId":"about","x":96,"y":96,"width":540,"height":360,"z":5,"minimized":false}
            ]}"#,
        )]);

        let snapshot = load_boot_snapshot(&store, VIEWPORT);

        assert_eq!(
            snapshot
                .windows
                .iter()
                .map(|w| (w.app_id, w.z_index))
                .collect::<Vec<_>>(),
            vec![(AppId::About, 1), (AppId::Papers, 2)]
        );
        assert!(!store.contains_key(LEGACY_STORAGE_KEY));
    }

    #[test]
    fn malformed_documents_fall_back_to_defaults() {
        let store = MemoryPrefsStore::with_entries([
            (STATE_STORAGE_KEY, "{not json"),
            (LEGACY_STORAGE_KEY, "also not json"),
        ]);

        let snapshot = load_boot_snapshot(&store, VIEWPORT);

        assert!(snapshot.windows.is_empty());
        assert_eq!(snapshot.preferences.wallpaper, WallpaperId::Aurora);
        assert_eq!(snapshot.theme, Theme::Dark);
        assert!(store.contains_key(LEGACY_STORAGE_KEY));
    }

    #[test]
    fn theme_prefers_document_then_theme_key() {
        let store = MemoryPrefsStore::with_entries([(THEME_STORAGE_KEY, "light")]);
        assert_eq!(load_boot_snapshot(&store, VIEWPORT).theme, Theme::Light);

        let store = MemoryPrefsStore::with_entries([
            (THEME_STORAGE_KEY, "light"),
            (
                STATE_STORAGE_KEY,
                r#"{"version":2,"windows":[],"preferences":{"wallpaper":"aurora","theme":"dark"}}"#,
            ),
        ]);
        let snapshot = load_boot_snapshot(&store, VIEWPORT);
        assert_eq!(snapshot.theme, Theme::Dark);
        assert_eq!(snapshot.preferences.theme, Some(Theme::Dark));
    }

    #[test]
    fn unknown_wallpaper_falls_back_to_default() {
        let store = MemoryPrefsStore::with_entries([(
            STATE_STORAGE_KEY,
            r#"{"version":2,"windows":[],"preferences":{"wallpaper":"sunset"}}"#,
        )]);
        assert_eq!(
            load_boot_snapshot(&store, VIEWPORT).preferences.wallpaper,
            WallpaperId::Aurora
        );
    }

    #[test]
    fn theme_key_is_written_as_a_bare_string() {
        let store = MemoryPrefsStore::default();
        persist_theme(&store, Theme::Light).expect("persist theme");
        assert_eq!(
            store.load_pref(THEME_STORAGE_KEY).expect("load"),
            Some("light".to_string())
        );
    }
}
