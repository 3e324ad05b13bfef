/// Formats a duration given in seconds as a zero-padded `HH:MM:SS` timestamp.
///
/// Sub-second precision is discarded rather than rounded, so a track that is
/// 179.9 seconds long is reported as `00:02:59`. Hours are not wrapped at 24.
/// Negative or non-finite inputs are treated as zero.
///
/// # Examples
///
/// ```
/// use tunedex::foundation::utils::format_duration;
///
/// assert_eq!(format_duration(179.4), "00:02:59");
/// assert_eq!(format_duration(3661.0), "01:01:01");
/// ```
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
