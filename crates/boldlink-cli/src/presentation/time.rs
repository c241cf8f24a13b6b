use chrono::{DateTime, Utc};

/// Render a timestamp as a coarse "time ago" label.
pub fn format_relative_time(timestamp: &DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(*timestamp);
    let seconds = elapsed.num_seconds();

    if seconds < 0 {
        return "just now".to_string();
    }

    if seconds < 60 {
        format!("{}s ago", seconds)
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{}h ago", seconds / 3600)
    } else {
        format!("{}d ago", seconds / 86400)
    }
}
