//! Pantry Status Tool
//!
//! Provides runtime status information about the pantry service.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::availability::ExpiryThresholds;
use crate::build_info::BuildInfo;
use crate::config::Config;

/// Usage instructions for AI assistants
pub const AVAILABILITY_INSTRUCTIONS: &str = r#"
# Pantry Availability Instructions

This server checks recipes against a snapshot of the household pantry.
It keeps no data of its own: pass the current pantry and recipe every time.

## Data Shapes

**Stock entry** (one pantry record):
```json
{"name": "Flour", "amount": "500", "unit": "g", "expiryDate": "2026-05-01"}
```
- `amount` may be a number or a string; unreadable amounts count as 0
- `expiryDate` is YYYY-MM-DD; leave it out for items that never expire

**Required ingredient** (one recipe line), either a bare name or a record:
```json
"Salt"
{"name": "Sugar", "amount": "200", "unit": "g"}
```
- A bare name means 1 pcs
- A record without amount/unit also defaults to 1 pcs

## Units

| Axis   | Units (case-insensitive)        | Base |
|--------|---------------------------------|------|
| mass   | g, kg, lb, oz                   | g    |
| volume | ml, l, cup, tbsp, tsp           | ml   |
| count  | anything else (pcs, pack, can)  | pcs  |

Quantities only add up within the same axis. 2 pcs of Milk never covers
1 l of Milk. Record stock in the same kind of unit the recipes use.

## Matching

- A pantry entry counts toward an ingredient when its name contains the
  ingredient name, ignoring case: "Whole Milk" counts for "Milk".
- This is deliberately loose: "milk chocolate" also counts for "Milk".
- Entries dated before today are ignored. Entries dated today still count.
- All matching entries are summed: 500 g + 1 kg of Flour covers 1.5 kg.

## Workflow

1. `can_make_recipe` or `check_recipes` for a quick ready/missing badge
2. `assess_recipe` to see available vs required per ingredient
3. `missing_to_shopping_list` to turn the missing ingredients into
   shopping-list records (category and `completed: false` filled in)
4. `purchased_to_pantry` once items are bought: each becomes a pantry
   entry dated today, with category "Other" when none was set
5. `pantry_expiry_report` to see what should be used up first
"#;

/// Runtime status of the pantry service
#[derive(Debug, Clone, Serialize)]
pub struct PantryStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Effective configuration
    pub today: String,
    pub today_overridden: bool,
    pub expiry_thresholds: ExpiryThresholds,
    pub shopping_category: String,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub checks_served: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    checks_served: AtomicU64,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            checks_served: AtomicU64::new(0),
        }
    }

    /// Count one availability check
    pub fn record_check(&self) {
        self.checks_served.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current status
    pub fn get_status(&self, config: &Config) -> PantryStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        PantryStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            today: config.today().format("%Y-%m-%d").to_string(),
            today_overridden: config.today_override.is_some(),
            expiry_thresholds: config.thresholds,
            shopping_category: config.shopping_category.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            checks_served: self.checks_served.load(Ordering::Relaxed),
        }
    }
}
