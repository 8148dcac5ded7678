use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

/// Terminal emulators tried when `$TERMINAL` is unset, with the flag that
/// introduces the command to run.
const KNOWN_TERMINALS: [(&str, Option<&str>); 5] = [
    ("xdg-terminal-exec", None),
    ("gnome-terminal", Some("--")),
    ("konsole", Some("-e")),
    ("xfce4-terminal", Some("-x")),
    ("xterm", Some("-e")),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installer {
    Gui,
    Cli,
}

impl Installer {
    pub const ALL: [Installer; 2] = [Installer::Gui, Installer::Cli];

    pub fn binary(self) -> &'static str {
        match self {
            Installer::Gui => "/usr/bin/calamares",
            Installer::Cli => "/usr/bin/cli-installer",
        }
    }

    pub fn is_installed(self) -> bool {
        Path::new(self.binary()).is_file()
    }

    pub fn available() -> Vec<Installer> {
        Self::ALL.into_iter().filter(|i| i.is_installed()).collect()
    }

    /// Full command line, program first. The CLI installer needs a terminal
    /// to talk to, so it is wrapped in `terminal`.
    pub fn command(self, terminal: Option<Vec<String>>) -> Result<Vec<String>, String> {
        match self {
            Installer::Gui => Ok(argv(&["sudo", "-E", "calamares"])),
            Installer::Cli => {
                let mut command = terminal
                    .ok_or_else(|| "No terminal emulator found for cli-installer".to_string())?;
                command.extend(argv(&["sudo", "cli-installer"]));
                Ok(command)
            }
        }
    }

    /// Start the installer in its own session so the window keeps running.
    pub fn launch(self) -> Result<(), String> {
        let terminal = match self {
            Installer::Gui => None,
            Installer::Cli => terminal_prefix(
                std::env::var("TERMINAL").ok(),
                |name| which::which(name).is_ok(),
            ),
        };
        let command = self.command(terminal)?;
        spawn_detached(&command)?;
        log::info!("Launched installer: {}", command.join(" "));
        Ok(())
    }
}

/// Command prefix that opens a terminal running whatever follows it.
pub fn terminal_prefix(
    from_env: Option<String>,
    is_on_path: impl Fn(&str) -> bool,
) -> Option<Vec<String>> {
    if let Some(terminal) = from_env.filter(|t| !t.trim().is_empty()) {
        return Some(vec![terminal, "-e".to_string()]);
    }

    KNOWN_TERMINALS
        .iter()
        .find(|&&(name, _)| is_on_path(name))
        .map(|&(name, flag)| {
            let mut prefix = vec![name.to_string()];
            prefix.extend(flag.map(str::to_string));
            prefix
        })
}

/// Spawn `command` detached from this process (via setsid) and reap it on a
/// background thread once it exits.
fn spawn_detached(command: &[String]) -> Result<thread::JoinHandle<Option<ExitStatus>>, String> {
    use std::os::unix::process::CommandExt;

    let (program, args) = command
        .split_first()
        .ok_or_else(|| "Empty command".to_string())?;

    let mut child = unsafe {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .pre_exec(|| {
                libc::setsid();
                Ok(())
            })
            .spawn()
            .map_err(|e| format!("Failed to start {}: {}", command.join(" "), e))?
    };

    let label = program.clone();
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => {
            log::info!("{} exited with {}", label, status);
            Some(status)
        }
        Err(e) => {
            log::warn!("Failed to wait for {}: {}", label, e);
            None
        }
    }))
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}
