use std::fmt::Write;

/// Format seconds as fixed-width HH:MM:SS with cumulative hours.
pub fn format_hms(total_secs: i64) -> String {
    let secs = total_secs.max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Countdown text: `HH:MM:SS`, prefixed with whole days once a day or more remains.
pub fn format_countdown(total_secs: i64) -> String {
    let secs = total_secs.max(0);
    let days = secs / 86_400;
    let mut out = String::with_capacity(12);
    if days > 0 {
        let _ = write!(out, "{days}d ");
    }
    out.push_str(&format_hms(secs % 86_400));
    out
}
