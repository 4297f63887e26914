//! Status command handler.

use std::io::Write;

use anyhow::{Context, Result};
use lite_llm_core::{StatusConfig, StatusReport, WatchConfig};
use tracing::info;

use crate::bootstrap::CliContext;
use crate::presentation::StatusText;

/// ANSI clear screen and cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Arguments for the status command.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusArgs {
    pub watch: WatchConfig,
    pub json: bool,
}

impl StatusArgs {
    pub fn from_flags(watch: bool, interval_secs: u64, json: bool) -> Self {
        let watch = if watch {
            WatchConfig::every(interval_secs)
        } else {
            WatchConfig::default()
        };
        Self { watch, json }
    }
}

/// Execute the status command.
///
/// In watch mode the full cycle reruns every interval until the context's
/// cancellation token fires (Ctrl-C).
pub async fn execute(ctx: &CliContext, args: StatusArgs) -> Result<()> {
    let service = ctx.status_service(StatusConfig::default());

    if !args.watch.enabled {
        let report = service.collect().await;
        return print_report(&report, args.json);
    }

    info!(
        interval_secs = args.watch.interval.as_secs(),
        "Watching status, press Ctrl+C to stop"
    );

    loop {
        let report = tokio::select! {
            biased;
            () = ctx.cancel.cancelled() => break,
            report = service.collect() => report,
        };

        if !args.json {
            print!("{CLEAR_SCREEN}");
        }
        print_report(&report, args.json)?;

        tokio::select! {
            biased;
            () = ctx.cancel.cancelled() => break,
            () = tokio::time::sleep(args.watch.interval) => {}
        }
    }

    Ok(())
}

fn print_report(report: &StatusReport, json: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, report)
            .context("failed to serialize status report")?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", StatusText(report))?;
    }
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_args_from_flags() {
        let once = StatusArgs::from_flags(false, 10, true);
        assert!(!once.watch.enabled);
        assert!(once.json);

        let watching = StatusArgs::from_flags(true, 0, false);
        assert!(watching.watch.enabled);
        assert_eq!(watching.watch.interval, Duration::from_secs(1));
    }
}
