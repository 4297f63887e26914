//! CPU busy ratio from `/proc/stat`.

use crate::error::{MetricsError, MetricsResult};

const AGGREGATE_MARKER: &str = "cpu";
const MIN_FIELDS: usize = 8;
/// Position of the idle counter, counting the marker as field 0.
const IDLE_FIELD: usize = 4;

/// Busy percent since boot from the aggregate `cpu` line.
///
/// Uses the counters of a single read, so the result is the cumulative
/// ratio since boot rather than the current load.
pub fn busy_percent(stat: &str) -> MetricsResult<f64> {
    let line = stat.lines().next().unwrap_or_default();
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < MIN_FIELDS || fields[0] != AGGREGATE_MARKER {
        return Err(MetricsError::MalformedStat(line.to_string()));
    }

    let mut total: u64 = 0;
    let mut idle: u64 = 0;
    for (index, field) in fields.iter().enumerate().skip(1) {
        let value: u64 = field.parse().map_err(|_| MetricsError::Parse {
            what: "cpu stat line",
            value: (*field).to_string(),
        })?;
        total = total.saturating_add(value);
        if index == IDLE_FIELD {
            idle = value;
        }
    }

    if total == 0 {
        return Ok(0.0);
    }
    Ok((total - idle) as f64 / total as f64 * 100.0)
}
