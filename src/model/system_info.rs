use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Bits64,
    Bits32,
}

impl Arch {
    pub fn current() -> Self {
        if cfg!(target_pointer_width = "64") {
            Arch::Bits64
        } else {
            Arch::Bits32
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arch::Bits64 => write!(f, "64-bits"),
            Arch::Bits32 => write!(f, "32-bits"),
        }
    }
}

/// Facts about the running system, gathered once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemInfo {
    pub codename: Option<String>,
    pub release: Option<String>,
    pub arch: Arch,
    /// Booted from installation media rather than an installed system.
    pub live: bool,
}

impl SystemInfo {
    pub fn subtitle(&self) -> String {
        match (&self.codename, &self.release) {
            (Some(codename), Some(release)) => format!("{} {} {}", codename, release, self.arch),
            _ => self.arch.to_string(),
        }
    }
}
