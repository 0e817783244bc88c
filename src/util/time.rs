//! Countdown and duration formatting

/// Format seconds as a `m:ss` countdown
///
/// # Examples
/// ```
/// use mhapa::util::time::format_clock;
///
/// assert_eq!(format_clock(0), "0:00");
/// assert_eq!(format_clock(75), "1:15");
/// assert_eq!(format_clock(300), "5:00");
/// ```
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Format a number of minutes as hours and minutes
///
/// # Examples
/// ```
/// use mhapa::util::time::format_minutes;
///
/// assert_eq!(format_minutes(45), "45m");
/// assert_eq!(format_minutes(240), "4h");
/// assert_eq!(format_minutes(95), "1h 35m");
/// ```
pub fn format_minutes(minutes: u32) -> String {
    let (hours, rest) = (minutes / 60, minutes % 60);
    match (hours, rest) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}
