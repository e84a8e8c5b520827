const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

/// Human-readable size in 1024-based units with one decimal digit.
///
/// Stops at the first unit whose magnitude is below 1024; anything larger
/// than that in GB is reported in TB, however big.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1} TB")
}
