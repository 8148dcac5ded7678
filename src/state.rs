use crate::backend::autostart::Autostart;
use crate::backend::locale::{self, DEFAULT_LOCALE};
use crate::backend::pages::PageLoader;
use crate::config::{AppPaths, Preferences, PreferencesStore};
use crate::model::{Page, SystemInfo};

/// Everything the window and its handlers need, built once at startup.
pub struct AppState {
    pub paths: AppPaths,
    pub prefs: Preferences,
    pub info: SystemInfo,
    pub locales: Vec<String>,
    store: PreferencesStore,
    autostart: Autostart,
    pages: PageLoader,
    system_locale: Option<String>,
}

impl AppState {
    pub fn init(paths: AppPaths) -> Self {
        Self::with_system_locale(paths, locale::system_locale())
    }

    pub fn with_system_locale(paths: AppPaths, system_locale: Option<String>) -> Self {
        let store = PreferencesStore::new(paths.preferences.clone());
        let autostart = Autostart::new(paths.autostart_link.clone(), paths.desktop_entry.clone());
        let prefs = store
            .load()
            .unwrap_or_else(|| Preferences::fallback(autostart.exists()));

        let mut state = Self {
            locales: locale::available_locales(&paths.catalogs, DEFAULT_LOCALE),
            info: SystemInfo::detect_from(&paths.release_file, &paths.live_markers),
            pages: PageLoader::new(paths.pages.clone(), DEFAULT_LOCALE),
            paths,
            prefs,
            store,
            autostart,
            system_locale,
        };

        let stored = state.prefs.locale.clone();
        state.apply_locale(stored.as_deref(), true);
        state
    }

    pub fn locale(&self) -> &str {
        self.prefs.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    /// Switch the UI language. Returns whether the effective locale changed.
    pub fn set_locale(&mut self, requested: &str) -> bool {
        let previous = self.locale().to_string();
        self.apply_locale(Some(requested), false);
        previous != self.locale()
    }

    fn apply_locale(&mut self, requested: Option<&str>, startup: bool) {
        let resolved = locale::resolve(
            requested,
            self.system_locale.as_deref(),
            &self.locales,
            DEFAULT_LOCALE,
        );
        log::info!("UI locale: {}", resolved);

        // A fresh process already shows source strings for the default locale.
        if !(startup && resolved == DEFAULT_LOCALE) {
            if let Err(e) = locale::activate(&resolved, DEFAULT_LOCALE, &self.paths.catalogs) {
                log::warn!("{}", e);
            }
        }

        self.prefs.locale = Some(resolved);
        self.store.save(&self.prefs);
    }

    pub fn set_autostart(&mut self, enabled: bool) {
        if let Err(e) = self.autostart.apply(enabled) {
            log::warn!("{}", e);
        }
        self.prefs.autostart = enabled;
        self.store.save(&self.prefs);
    }

    pub fn read_page(&self, page: Page) -> Option<String> {
        self.pages.read(self.locale(), page.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn paths(root: &Path) -> AppPaths {
        let data = root.join("data");
        fs::create_dir_all(data.join("pages/en_US")).unwrap();
        fs::create_dir_all(data.join("locale/fr/LC_MESSAGES")).unwrap();
        fs::write(data.join("pages/en_US/readme"), "readme").unwrap();
        fs::write(data.join("manjaro-hello.desktop"), "[Desktop Entry]\n").unwrap();

        let mut paths = AppPaths::with_dirs(&root.join("config"), &data);
        paths.release_file = root.join("lsb-release");
        paths.live_markers = vec![root.join("bootmnt")];
        paths
    }

    #[test]
    fn first_start_defaults_and_persists_locale() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::with_system_locale(paths(dir.path()), Some("pt_BR".into()));

        assert_eq!(state.locale(), DEFAULT_LOCALE);
        assert!(!state.prefs.autostart);
        let saved = PreferencesStore::new(state.paths.preferences.clone()).load();
        assert_eq!(
            saved,
            Some(Preferences {
                autostart: false,
                locale: Some(DEFAULT_LOCALE.into()),
            })
        );
    }

    #[test]
    fn default_autostart_follows_existing_link() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());
        Autostart::new(paths.autostart_link.clone(), paths.desktop_entry.clone())
            .apply(true)
            .unwrap();

        let state = AppState::with_system_locale(paths, None);
        assert!(state.prefs.autostart);
    }

    #[test]
    fn unsupported_stored_locale_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());
        PreferencesStore::new(paths.preferences.clone()).save(&Preferences {
            autostart: false,
            locale: Some("xx_XX".into()),
        });

        let state = AppState::with_system_locale(paths, None);
        assert_eq!(state.locale(), DEFAULT_LOCALE);
        assert_eq!(state.locales, vec!["en_US".to_string(), "fr".to_string()]);
    }

    #[test]
    fn autostart_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::with_system_locale(paths(dir.path()), None);

        state.set_autostart(true);
        assert!(fs::symlink_metadata(&state.paths.autostart_link).is_ok());
        let saved = PreferencesStore::new(state.paths.preferences.clone()).load().unwrap();
        assert!(saved.autostart);

        state.set_autostart(false);
        assert!(fs::symlink_metadata(&state.paths.autostart_link).is_err());
        assert!(!state.prefs.autostart);
    }

    #[test]
    fn autostart_flag_updates_even_when_link_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = paths(dir.path());
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        paths.autostart_link = blocker.join("manjaro-hello.desktop");

        let mut state = AppState::with_system_locale(paths, None);
        state.set_autostart(true);
        assert!(state.prefs.autostart);
    }

    #[test]
    fn pages_follow_current_locale_with_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::with_system_locale(paths(dir.path()), None);
        assert_eq!(state.read_page(Page::Readme).as_deref(), Some("readme"));
        assert_eq!(state.read_page(Page::Involved), None);
    }

    fn saved_locale(state: &AppState) -> Option<String> {
        PreferencesStore::new(state.paths.preferences.clone())
            .load()
            .and_then(|prefs| prefs.locale)
    }

    #[test]
    fn switching_to_bundled_locale_and_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::with_system_locale(paths(dir.path()), None);

        assert!(state.set_locale("fr"));
        assert_eq!(state.locale(), "fr");
        assert_eq!(saved_locale(&state).as_deref(), Some("fr"));
        let raw = fs::read_to_string(&state.paths.preferences).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["locale"], serde_json::Value::from("fr"));

        assert!(!state.set_locale("fr"));

        assert!(state.set_locale(DEFAULT_LOCALE));
        assert_eq!(state.locale(), DEFAULT_LOCALE);
        assert_eq!(saved_locale(&state).as_deref(), Some(DEFAULT_LOCALE));
    }

    #[test]
    fn stored_bundled_locale_is_kept_at_startup() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());
        PreferencesStore::new(paths.preferences.clone()).save(&Preferences {
            autostart: false,
            locale: Some("fr".into()),
        });

        let state = AppState::with_system_locale(paths, Some("de_DE".into()));
        assert_eq!(state.locale(), "fr");
        assert_eq!(saved_locale(&state).as_deref(), Some("fr"));
    }

    #[test]
    fn system_locale_used_when_nothing_stored() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::with_system_locale(paths(dir.path()), Some("fr".into()));
        assert_eq!(state.locale(), "fr");

        let dir = tempfile::tempdir().unwrap();
        let state = AppState::with_system_locale(paths(dir.path()), Some("fr_CA".into()));
        assert_eq!(state.locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn switching_to_unknown_locale_keeps_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::with_system_locale(paths(dir.path()), None);
        assert!(!state.set_locale("xx"));
        assert_eq!(state.locale(), DEFAULT_LOCALE);
    }
}
