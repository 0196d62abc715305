//! The fixed `HH:MM:SS` lexical duration format used on the wire.

use chrono::Duration;

/// A duration string that does not match `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDuration(pub String);

impl std::fmt::Display for InvalidDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid duration '{}', expected HH:MM:SS", self.0)
    }
}

impl std::error::Error for InvalidDuration {}

/// Parse `HH:MM:SS` (hours 00-99, minutes and seconds 00-59).
pub fn parse_duration(input: &str) -> Result<Duration, InvalidDuration> {
    let invalid = || InvalidDuration(input.to_string());

    let mut fields = [0i64; 3];
    let parts: Vec<&str> = input.split(':').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }
    for (i, part) in parts.iter().enumerate() {
        if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        fields[i] = part.parse().map_err(|_| invalid())?;
    }
    let [hours, minutes, seconds] = fields;
    if minutes > 59 || seconds > 59 {
        return Err(invalid());
    }
    Ok(Duration::seconds(hours * 3600 + minutes * 60 + seconds))
}

/// Format a duration as `HH:MM:SS`. Negative durations render as zero.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
