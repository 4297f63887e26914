//! In-memory [`HostSource`] for tests.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::source::{CommandOutput, HostSource};

/// [`HostSource`] answering from canned command output and file contents.
///
/// Commands are keyed by their full command line (`"lspci -v"`). Anything
/// not registered behaves as missing: commands fail to start, files and
/// directories are `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct FakeSource {
    commands: HashMap<String, CommandOutput>,
    files: HashMap<PathBuf, String>,
    dirs: HashMap<PathBuf, Vec<String>>,
    executables: HashSet<PathBuf>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_command(mut self, command_line: &str, output: CommandOutput) -> Self {
        self.commands.insert(command_line.to_string(), output);
        self
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>, entries: &[&str]) -> Self {
        self.dirs
            .insert(path.into(), entries.iter().map(ToString::to_string).collect());
        self
    }

    /// Install a binary at `path` that exits with the given status when
    /// run without arguments.
    #[must_use]
    pub fn with_executable(mut self, path: &str, succeeds: bool) -> Self {
        self.executables.insert(PathBuf::from(path));
        let output = if succeeds {
            CommandOutput::ok("")
        } else {
            CommandOutput::failed()
        };
        self.with_command(path, output)
    }

    fn not_found(what: impl std::fmt::Display) -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, format!("{what} not found"))
    }
}

impl HostSource for FakeSource {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let command_line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.commands
            .get(&command_line)
            .cloned()
            .ok_or_else(|| Self::not_found(program))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path.display()))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.dirs.contains_key(path) || self.executables.contains(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path.display()))
    }
}
