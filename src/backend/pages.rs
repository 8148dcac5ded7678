use std::fs;
use std::path::PathBuf;

pub struct PageLoader {
    root: PathBuf,
    default_locale: String,
}

impl PageLoader {
    pub fn new(root: PathBuf, default_locale: &str) -> Self {
        Self {
            root,
            default_locale: default_locale.to_string(),
        }
    }

    /// Read `pages/<locale>/<name>`, or the default-locale copy if the
    /// localized one is missing. Always hits the disk.
    pub fn read(&self, locale: &str, name: &str) -> Option<String> {
        let mut path = self.root.join(locale).join(name);
        if !path.is_file() {
            log::debug!("No {} page for {}, using {}", name, locale, self.default_locale);
            path = self.root.join(&self.default_locale).join(name);
        }

        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                log::warn!("Cannot read page {}: {}", path.display(), e);
                None
            }
        }
    }
}
