use std::fs;
use std::path::PathBuf;

/// Autostart entry expressed as a symlink to the application's desktop file.
pub struct Autostart {
    link: PathBuf,
    target: PathBuf,
}

impl Autostart {
    pub fn new(link: PathBuf, target: PathBuf) -> Self {
        Self { link, target }
    }

    /// True if anything sits at the link path, dangling symlinks included.
    pub fn exists(&self) -> bool {
        fs::symlink_metadata(&self.link).is_ok()
    }

    /// Bring the link in line with `enabled`. Returns whether the filesystem changed.
    pub fn apply(&self, enabled: bool) -> Result<bool, String> {
        match (enabled, self.exists()) {
            (true, false) => {
                if let Some(dir) = self.link.parent() {
                    fs::create_dir_all(dir)
                        .map_err(|e| format!("Cannot create {}: {}", dir.display(), e))?;
                }
                std::os::unix::fs::symlink(&self.target, &self.link).map_err(|e| {
                    format!(
                        "Cannot link {} -> {}: {}",
                        self.link.display(),
                        self.target.display(),
                        e
                    )
                })?;
                log::info!("Autostart enabled ({})", self.link.display());
                Ok(true)
            }
            (false, true) => {
                fs::remove_file(&self.link)
                    .map_err(|e| format!("Cannot remove {}: {}", self.link.display(), e))?;
                log::info!("Autostart disabled ({})", self.link.display());
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (tempfile::TempDir, Autostart) {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("manjaro-hello.desktop");
        fs::write(&target, "[Desktop Entry]\nName=Hello\n").unwrap();
        let link = dir.path().join("config/autostart/manjaro-hello.desktop");
        (dir, Autostart::new(link, target))
    }

    #[test]
    fn enable_creates_one_link() {
        let (_dir, autostart) = setup();
        assert!(!autostart.exists());

        assert_eq!(autostart.apply(true), Ok(true));
        assert!(autostart.exists());
        let meta = fs::symlink_metadata(autostart.link.as_path()).unwrap();
        assert!(meta.file_type().is_symlink());
        assert_eq!(fs::read_link(autostart.link.as_path()).unwrap(), autostart.target);

        assert_eq!(autostart.apply(true), Ok(false));
        let entries = fs::read_dir(autostart.link.as_path().parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn disable_removes_link_once() {
        let (_dir, autostart) = setup();
        autostart.apply(true).unwrap();

        assert_eq!(autostart.apply(false), Ok(true));
        assert!(!autostart.exists());
        assert_eq!(autostart.apply(false), Ok(false));
    }

    #[test]
    fn dangling_link_counts_as_present() {
        let (_dir, autostart) = setup();
        autostart.apply(true).unwrap();
        fs::remove_file(&autostart.target).unwrap();

        assert!(autostart.exists());
        assert_eq!(autostart.apply(true), Ok(false));
        assert_eq!(autostart.apply(false), Ok(true));
    }

    #[test]
    fn unwritable_location_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("autostart");
        fs::write(&blocker, "a file, not a dir").unwrap();
        let autostart = Autostart::new(blocker.join("x.desktop"), dir.path().join("x.desktop"));

        assert!(autostart.apply(true).is_err());
        assert!(!autostart.exists());
    }
}
