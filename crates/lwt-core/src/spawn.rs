//! Shell command line construction

use crate::settings::{Settings, SpawnTimeout};

/// The child process to start inside the terminal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnCommand {
    pub argv: Vec<String>,
    pub timeout: SpawnTimeout,
}

impl SpawnCommand {
    /// Build the shell command from our own process arguments.
    ///
    /// Argument zero is replaced by the configured shell; everything after
    /// it is handed to the shell untouched, so `lwt -c htop` runs
    /// `$SHELL -c htop`.
    pub fn from_args<I>(settings: &Settings, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let argv = std::iter::once(settings.shell.clone())
            .chain(args.into_iter().skip(1))
            .collect();
        Self {
            argv,
            timeout: settings.spawn_timeout,
        }
    }

    pub fn program(&self) -> &str {
        self.argv.first().map_or("", String::as_str)
    }

    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }

    pub fn argv_refs(&self) -> Vec<&str> {
        self.argv.iter().map(String::as_str).collect()
    }

    /// Timeout in milliseconds as the terminal widget expects it, -1 for none
    pub fn timeout_ms(&self) -> i32 {
        self.timeout.as_millis_i32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(a: &[&str]) -> Vec<String> {
        a.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn replaces_program_name_with_shell() {
        let settings = Settings::with_shell("/bin/zsh");
        let cmd = SpawnCommand::from_args(&settings, args(&["lwt"]));
        assert_eq!(cmd.argv, vec!["/bin/zsh"]);
        assert_eq!(cmd.program(), "/bin/zsh");
        assert!(cmd.args().is_empty());
        assert_eq!(cmd.timeout_ms(), -1);
    }

    #[test]
    fn forwards_remaining_arguments() {
        let mut settings = Settings::with_shell("/bin/bash");
        settings.spawn_timeout = SpawnTimeout::Millis(3000);
        let cmd = SpawnCommand::from_args(&settings, args(&["/usr/bin/lwt", "-c", "htop"]));
        assert_eq!(cmd.argv_refs(), vec!["/bin/bash", "-c", "htop"]);
        assert_eq!(cmd.args(), &["-c".to_string(), "htop".to_string()]);
        assert_eq!(cmd.timeout_ms(), 3000);
    }

    #[test]
    fn empty_argument_list_still_runs_shell() {
        let settings = Settings::with_shell("/bin/sh");
        let cmd = SpawnCommand::from_args(&settings, Vec::new());
        assert_eq!(cmd.argv_refs(), vec!["/bin/sh"]);
    }
}
