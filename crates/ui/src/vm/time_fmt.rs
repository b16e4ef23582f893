use chrono::Duration;

/// Formats a duration as `m:ss`, clamping negatives to zero.
#[must_use]
pub fn format_elapsed(value: Duration) -> String {
    let seconds = value.num_seconds().max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
