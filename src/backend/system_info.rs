use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{Arch, SystemInfo};

/// Parse an lsb-release style file into a key → value map.
/// An unreadable file yields an empty map.
pub fn parse_release_file(path: &Path) -> HashMap<String, String> {
    match fs::read_to_string(path) {
        Ok(content) => parse_release(&content),
        Err(e) => {
            log::warn!("Cannot read {}: {}", path.display(), e);
            HashMap::new()
        }
    }
}

pub fn parse_release(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for line in content.lines() {
        let line = line.trim_end();
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.strip_prefix("DISTRIB_").unwrap_or(key);
        let value = match value.strip_prefix('"') {
            Some(rest) if value.ends_with('"') => rest.strip_suffix('"').unwrap_or(rest),
            _ => value,
        };

        if !value.is_empty() {
            map.insert(key.to_string(), value.to_string());
        }
    }

    map
}

impl SystemInfo {
    pub fn detect_from(release_file: &Path, live_markers: &[PathBuf]) -> Self {
        let mut lsb = parse_release_file(release_file);

        let info = SystemInfo {
            codename: lsb.remove("CODENAME"),
            release: lsb.remove("RELEASE"),
            arch: Arch::current(),
            live: live_markers.iter().any(|marker| marker.exists()),
        };
        log::info!(
            "System: {} (live session: {})",
            info.subtitle(),
            info.live
        );
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_and_quotes() {
        let map = parse_release("DISTRIB_CODENAME=\"Xfce\"\n");
        assert_eq!(map.get("CODENAME").map(String::as_str), Some("Xfce"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn drops_empty_values() {
        let map = parse_release("DISTRIB_ID=\"\"\nDISTRIB_RELEASE=\nDISTRIB_CODENAME=Juhraya\n");
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("ID"));
        assert!(!map.contains_key("RELEASE"));
    }

    #[test]
    fn keeps_unprefixed_keys_and_skips_junk() {
        let map = parse_release("\n# comment\nNAME=Manjaro Linux\n  \nDISTRIB_RELEASE=21.0  \n");
        assert_eq!(map.get("NAME").map(String::as_str), Some("Manjaro Linux"));
        assert_eq!(map.get("RELEASE").map(String::as_str), Some("21.0"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn splits_on_first_equals_only() {
        let map = parse_release("DISTRIB_DESCRIPTION=\"a=b\"\n");
        assert_eq!(map.get("DESCRIPTION").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn lone_quote_counts_as_empty() {
        let map = parse_release("DISTRIB_ID=\"\nDISTRIB_NOTE=\"open\n");
        assert!(!map.contains_key("ID"));
        assert_eq!(map.get("NOTE").map(String::as_str), Some("\"open"));
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(parse_release_file(&dir.path().join("lsb-release")).is_empty());
    }

    #[test]
    fn detect_reads_release_and_markers() {
        let dir = tempfile::tempdir().unwrap();
        let release = dir.path().join("lsb-release");
        fs::write(&release, "DISTRIB_CODENAME=\"Juhraya\"\nDISTRIB_RELEASE=\"21.0\"\n").unwrap();
        let marker = dir.path().join("bootmnt");

        let info = SystemInfo::detect_from(&release, &[dir.path().join("absent"), marker.clone()]);
        assert_eq!(info.codename.as_deref(), Some("Juhraya"));
        assert_eq!(info.release.as_deref(), Some("21.0"));
        assert!(!info.live);

        fs::create_dir(&marker).unwrap();
        let info = SystemInfo::detect_from(&release, &[marker]);
        assert!(info.live);
        assert_eq!(info.subtitle(), format!("Juhraya 21.0 {}", Arch::current()));
    }

    #[test]
    fn subtitle_without_release_is_arch_only() {
        let dir = tempfile::tempdir().unwrap();
        let info = SystemInfo::detect_from(&dir.path().join("none"), &[]);
        assert_eq!(info.codename, None);
        assert_eq!(info.subtitle(), Arch::current().to_string());
    }
}
