//! Small formatting helpers shared by the commands and the scheduler.

use std::path::Path;
use std::time::Duration;

/// Replace the home directory prefix with `~` so paths can be logged without
/// exposing the user name.
pub fn private_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        return format!("~/{}", stripped.display());
    }
    path.display().to_string()
}

/// Compact human-readable duration, e.g. `2h15m`, `4m`, `10s`.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        if minutes > 0 {
            format!("{hours}h{minutes}m")
        } else {
            format!("{hours}h")
        }
    } else if minutes > 0 {
        if seconds > 0 {
            format!("{minutes}m{seconds}s")
        } else {
            format!("{minutes}m")
        }
    } else {
        format!("{seconds}s")
    }
}

/// Format a coordinate pair the way it appears in logs and status output.
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    let lat_dir = if latitude >= 0.0 { 'N' } else { 'S' };
    let lon_dir = if longitude >= 0.0 { 'E' } else { 'W' };
    format!(
        "{:.4}°{lat_dir}, {:.4}°{lon_dir}",
        latitude.abs(),
        longitude.abs()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(8)), "8s");
        assert_eq!(format_duration(Duration::from_secs(130)), "2m10s");
        assert_eq!(format_duration(Duration::from_secs(300)), "5m");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h");
        assert_eq!(format_duration(Duration::from_secs(8100)), "2h15m");
    }

    #[test]
    fn test_format_coordinates_hemispheres() {
        assert_eq!(format_coordinates(41.0082, 28.9784), "41.0082°N, 28.9784°E");
        assert_eq!(
            format_coordinates(-33.8688, -70.6693),
            "33.8688°S, 70.6693°W"
        );
    }

    #[test]
    fn test_private_path_outside_home_is_unchanged() {
        let path = PathBuf::from("/etc/duskswitch/duskswitch.toml");
        assert_eq!(private_path(&path), "/etc/duskswitch/duskswitch.toml");
    }
}
