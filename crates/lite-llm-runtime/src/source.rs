//! Host access abstraction.
//!
//! Every command the probes run and every pseudo-file they read goes
//! through [`HostSource`], so parsing can be tested against captured
//! output instead of the machine the tests happen to run on.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, Stdio};

/// Captured result of running a command to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit status was success.
    pub success: bool,
    pub stdout: String,
}

impl CommandOutput {
    /// Successful run with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
        }
    }

    /// Run that exited with a failure status.
    pub fn failed() -> Self {
        Self::default()
    }
}

/// Read-only view of the host: command execution plus filesystem reads.
pub trait HostSource: Send + Sync {
    /// Run `program` with `args` and wait for it to exit.
    ///
    /// An `Err` means the program could not be started at all.
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Whether `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// File names (not full paths) of the entries in a directory, in
    /// whatever order the host returns them.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// [`HostSource`] backed by the real machine.
///
/// Filesystem paths can be re-rooted under a directory, which lets tests
/// lay out a fake `/proc` and `/sys` in a temp dir. Commands always run
/// on the real host.
#[derive(Debug, Clone, Default)]
pub struct LocalSource {
    root: Option<PathBuf>,
}

impl LocalSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve absolute filesystem paths under `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) => {
                let relative: PathBuf = path
                    .components()
                    .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
                    .collect();
                root.join(relative)
            }
            None => path.to_path_buf(),
        }
    }
}

impl HostSource for LocalSource {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.resolve(path))
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.resolve(path))? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooted_paths_resolve_under_root() {
        let source = LocalSource::with_root("/tmp/host");
        assert_eq!(
            source.resolve(Path::new("/proc/meminfo")),
            PathBuf::from("/tmp/host/proc/meminfo")
        );
        assert_eq!(
            LocalSource::new().resolve(Path::new("/proc/meminfo")),
            PathBuf::from("/proc/meminfo")
        );
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let result = LocalSource::new().run("definitely_not_a_real_command_12345", &[]);
        assert!(result.is_err());
    }
}
