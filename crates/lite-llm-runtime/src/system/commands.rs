//! Command execution helpers for the hardware probe.

use crate::error::{ProbeError, ProbeResult};
use crate::source::HostSource;

fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a command and return its stdout, failing on a non-success exit.
pub fn output_of(source: &dyn HostSource, program: &str, args: &[&str]) -> ProbeResult<String> {
    let output = source
        .run(program, args)
        .map_err(|source| ProbeError::Spawn {
            command: command_line(program, args),
            source,
        })?;

    if !output.success {
        return Err(ProbeError::CommandFailed {
            command: command_line(program, args),
        });
    }
    Ok(output.stdout)
}

/// Whether a command starts and exits successfully.
pub fn succeeds(source: &dyn HostSource, program: &str, args: &[&str]) -> bool {
    match output_of(source, program, args) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!(error = %e, "Command check failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::CommandOutput;
    use crate::testing::FakeSource;

    #[test]
    fn test_output_of_distinguishes_failures() {
        let source = FakeSource::new()
            .with_command("uname -r", CommandOutput::ok("6.8.0-45-generic\n"))
            .with_command("docker --version", CommandOutput::failed());

        assert_eq!(
            output_of(&source, "uname", &["-r"]).unwrap(),
            "6.8.0-45-generic\n"
        );
        assert!(matches!(
            output_of(&source, "docker", &["--version"]),
            Err(ProbeError::CommandFailed { .. })
        ));
        assert!(matches!(
            output_of(&source, "lspci", &["-v"]),
            Err(ProbeError::Spawn { .. })
        ));
        assert!(!succeeds(&source, "docker", &["--version"]));
    }
}
