//! Text rendering of durations and timestamps.

/// Format milliseconds as "MM:SS.HH" (hundredths).
///
/// Minutes are not wrapped into hours, so an hour and a half reads "90:00.00"
/// and anything past 99 minutes simply gains digits.
pub fn format_elapsed(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let hundredths = (ms % 1000) / 10;
    format!("{:02}:{:02}.{:02}", minutes, seconds, hundredths)
}

/// Parse "MM:SS.HH" back to milliseconds. Seconds above 59 or fields of the
/// wrong width are rejected.
pub fn parse_elapsed(s: &str) -> Option<u64> {
    let (minutes, rest) = s.split_once(':')?;
    let (seconds, hundredths) = rest.split_once('.')?;
    if minutes.len() < 2 || seconds.len() != 2 || hundredths.len() != 2 {
        return None;
    }
    let all_digits = |f: &str| f.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(minutes) || !all_digits(seconds) || !all_digits(hundredths) {
        return None;
    }
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;
    let hundredths: u64 = hundredths.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    minutes
        .checked_mul(60_000)?
        .checked_add(seconds * 1000 + hundredths * 10)
}

/// Format a Unix-epoch millisecond timestamp as the UTC time of day "HH:MM:SS".
pub fn format_time_of_day(epoch_ms: u64) -> String {
    let secs_of_day = (epoch_ms / 1000) % 86_400;
    let h = secs_of_day / 3600;
    let m = (secs_of_day % 3600) / 60;
    let s = secs_of_day % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}
