//! Status Tool
//!
//! Runtime status information about the hydration service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// How to use the settings tools, for AI assistants
pub const SETTINGS_INSTRUCTIONS: &str = r#"
# Hydration Settings Instructions

The service keeps one profile: unit, activity level, height and weight.
Every edit recomputes the daily hydration goal and BMI and saves the profile.

## Units

| Unit     | Height | Weight | Hydration goal |
|----------|--------|--------|----------------|
| metric   | cm     | kg     | ml             |
| imperial | inches | lbs    | fl oz          |

Always enter height and weight in the CURRENT unit (see `get_settings`).
Switching units with `set_unit` converts the values already entered, based
on what was last typed, so switching back restores the exact original.

## Activity levels

`sedentary`, `active` or `athlete`. Higher tiers add to the goal:
+500 ml / +17 fl oz for active, +900 ml / +30 fl oz for athlete.

## Validation

- `set_unit` and `set_activity` take the exact lowercase value.
- `set_height` and `set_weight` take a non-negative number as text, or "" to clear.
- Invalid input returns `accepted: false` and keeps the previous value.

## One-off calculations

`calculate_hydration` and `calculate_bmi` compute from the given values
without touching the stored profile.
"#;

/// Status information
#[derive(Debug, Serialize)]
pub struct HydrationStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub database_path: String,
    pub database_size_bytes: Option<u64>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub as_of: String,
}

/// Status tracker for runtime information
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
        }
    }

    pub fn get_status(&self) -> HydrationStatus {
        let build_info = BuildInfo::current();

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        HydrationStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            as_of: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_missing_database() {
        let tracker = StatusTracker::new(PathBuf::from("/nonexistent/hydration.db"));
        let status = tracker.get_status();
        assert_eq!(status.database_size_bytes, None);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.version, crate::build_info::VERSION);
    }
}
