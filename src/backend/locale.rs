use std::fs;
use std::path::Path;

use gettextrs::{bind_textdomain_codeset, bindtextdomain, setlocale, textdomain, LocaleCategory};

use crate::APP_NAME;

/// Locale whose strings are the untranslated source text.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Locale codes with a bundled catalog directory, plus the default locale.
pub fn available_locales(catalog_dir: &Path, default: &str) -> Vec<String> {
    let mut locales: Vec<String> = match fs::read_dir(catalog_dir) {
        Ok(rd) => rd
            .flatten()
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect(),
        Err(e) => {
            log::warn!("Cannot list translations in {}: {}", catalog_dir.display(), e);
            Vec::new()
        }
    };

    if !locales.iter().any(|l| l == default) {
        locales.push(default.to_string());
    }
    locales.sort();
    locales
}

/// The OS locale in gettext form (`de_DE`), if one is reported.
pub fn system_locale() -> Option<String> {
    sys_locale::get_locale().and_then(|raw| normalize(&raw))
}

pub fn normalize(raw: &str) -> Option<String> {
    let code = raw.split(['.', '@']).next().unwrap_or("").replace('-', "_");
    match code.as_str() {
        "" | "C" | "POSIX" => None,
        _ => Some(code),
    }
}

/// Pick the effective locale: stored choice, then system locale, then the default.
pub fn resolve(
    stored: Option<&str>,
    system: Option<&str>,
    candidates: &[String],
    default: &str,
) -> String {
    let is_candidate = |code: &str| candidates.iter().any(|c| c == code);

    if let Some(stored) = stored.filter(|s| is_candidate(s)) {
        return stored.to_string();
    }

    if let Some(system) = system.filter(|s| is_candidate(s)) {
        return system.to_string();
    }

    default.to_string()
}

/// Switch gettext to `locale`. The default locale needs no catalog, so on a
/// fresh process nothing is bound for it.
pub fn activate(locale: &str, default: &str, catalog_dir: &Path) -> Result<(), String> {
    // LANGUAGE wins over LC_MESSAGES in gettext's catalog lookup. The first
    // call happens before the GTK application starts any threads. Later
    // switches run on the UI thread, the only thread that calls gettext.
    std::env::set_var("LANGUAGE", locale);

    if locale == default {
        setlocale(LocaleCategory::LcMessages, "");
        return Ok(());
    }

    let with_codeset = format!("{}.UTF-8", locale);
    if setlocale(LocaleCategory::LcMessages, with_codeset.as_str()).is_none() {
        setlocale(LocaleCategory::LcMessages, "");
    }

    bindtextdomain(APP_NAME, catalog_dir)
        .map_err(|e| format!("Failed to bind {}: {}", catalog_dir.display(), e))?;
    bind_textdomain_codeset(APP_NAME, "UTF-8")
        .map_err(|e| format!("Failed to set codeset: {}", e))?;
    textdomain(APP_NAME).map_err(|e| format!("Failed to select text domain: {}", e))?;

    log::info!("Translations for {} loaded from {}", locale, catalog_dir.display());
    Ok(())
}

/// Display name for a locale code in the language picker.
pub fn language_name(code: &str) -> String {
    let name = match code {
        "en_US" => "English (US)",
        "en_GB" => "English (UK)",
        "de" | "de_DE" => "Deutsch",
        "fr" | "fr_FR" => "Français",
        "es" | "es_ES" => "Español",
        "it" | "it_IT" => "Italiano",
        "pt_BR" => "Português (Brasil)",
        "pt" | "pt_PT" => "Português",
        "nl" | "nl_NL" => "Nederlands",
        "pl" | "pl_PL" => "Polski",
        "ru" | "ru_RU" => "Русский",
        "tr" | "tr_TR" => "Türkçe",
        "zh_CN" => "中文 (简体)",
        "zh_TW" => "中文 (繁體)",
        "ja" | "ja_JP" => "日本語",
        _ => return code.to_string(),
    };
    name.to_string()
}
