use chrono::{DateTime, Local, NaiveTime, Timelike, Utc};

/// Escape HTML to prevent XSS
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a message timestamp as local 12-hour clock time, e.g. `3:07 PM`
pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    format_clock(timestamp.with_timezone(&Local).time())
}

pub fn format_clock(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    format!("{}:{:02} {}", hour, time.minute(), if is_pm { "PM" } else { "AM" })
}
