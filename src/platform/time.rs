//! Wall-clock display for the dashboard header
//!
//! Repainted once a second; has no effect on team data.

/// Format a time of day as `HH:MM:SS`
pub fn format_clock(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Current local time (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn clock_string() -> String {
    let now = js_sys::Date::new_0();
    format_clock(now.get_hours(), now.get_minutes(), now.get_seconds())
}

/// Current UTC time (native has no timezone database)
#[cfg(not(target_arch = "wasm32"))]
pub fn clock_string() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let of_day = (secs % 86_400) as u32;
    format_clock(of_day / 3600, of_day % 3600 / 60, of_day % 60)
}
