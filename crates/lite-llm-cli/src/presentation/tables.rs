//! Table formatting utilities for CLI output.

use lite_llm_core::ModelRecord;

/// Truncates a string to a maximum length, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use lite_llm_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Model size in GiB with one decimal, e.g. `"4.1 GB"`.
pub fn format_size_gb(model: &ModelRecord) -> String {
    format!("{:.1} GB", model.size_gb())
}

/// Print installed models as a table.
pub fn print_model_table(models: &[ModelRecord]) {
    println!("{:<40} {:>9}  Modified", "Name", "Size");
    print_separator(72);
    for model in models {
        println!(
            "{:<40} {:>9}  {}",
            truncate_string(&model.name, 40),
            format_size_gb(model),
            model.modified_at.format("%Y-%m-%d %H:%M")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(size_bytes: u64) -> ModelRecord {
        ModelRecord {
            name: "llama3.1:8b".to_string(),
            size_bytes,
            modified_at: chrono::DateTime::default(),
        }
    }

    #[test]
    fn test_size_has_one_decimal() {
        assert_eq!(format_size_gb(&record(4_400_000_000)), "4.1 GB");
        assert_eq!(format_size_gb(&record(0)), "0.0 GB");
        assert_eq!(format_size_gb(&record(1_073_741_824)), "1.0 GB");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_string("gemma2:2b", 20), "gemma2:2b");
        assert_eq!(truncate_string("ééééééé", 5), "éé...");
    }
}
