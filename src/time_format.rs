/// Formats a duration in seconds as a stopwatch reading
///
/// Examples:
/// - 0 seconds: "00:00:00"
/// - 5400 seconds: "01:30:00"
/// - 100 hours: "100:00:00"
pub fn format_duration_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Formats a duration in seconds as hours and minutes, dropping seconds
///
/// Examples:
/// - 15300 seconds: "04:15"
/// - 59 seconds: "00:00"
pub fn format_clock(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    format!("{:02}:{:02}", hours, minutes)
}

/// Rounds an hour amount to one decimal place, halves rounding up
pub fn round_to_tenth(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}
