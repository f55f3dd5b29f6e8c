//! Run configuration: holidays, SLA windows, and status colours.
//!
//! Loaded once from an optional JSON file; every field falls back to its
//! default.
//!
//! ```json
//! {
//!   "holidays": ["2025-01-26", "2025-08-15", "2025-10-02", "2025-12-25"],
//!   "sla": { "reinitiated_days": 8, "received_days": 15 },
//!   "palette": { "on_time": "C6EFCE", "exceeded": "FFC7CE", "pending": "FFEB9C" }
//! }
//! ```

use crate::error::Result;
use crate::style::{parse_hex_color, Palette};
use serde::Deserialize;
use std::path::Path;
use tat_engine::{SlaPolicy, TatEngine, TatStatus};
use tat_time::{HolidaySet, WorkingCalendar, DEFAULT_PUBLIC_HOLIDAYS};
use tat_core::utilities::data_formatters::format_iso;
use tracing::info;

/// Raw configuration as read from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Holiday dates, any format `Date` parses.
    pub holidays: Vec<String>,
    /// SLA windows in working days.
    pub sla: SlaConfig,
    /// Status fill colours as `RRGGBB`.
    pub palette: PaletteConfig,
}

/// SLA section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlaConfig {
    /// Working days after reinitiation.
    pub reinitiated_days: u32,
    /// Working days after receipt.
    pub received_days: u32,
}

/// Palette section; unset colours keep the classic palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    /// Fill for "Within TAT".
    pub on_time: Option<String>,
    /// Fill for "Exceeded".
    pub exceeded: Option<String>,
    /// Fill for "Pending".
    pub pending: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            holidays: DEFAULT_PUBLIC_HOLIDAYS
                .iter()
                .map(|&(y, m, d)| format_iso(y, m, d))
                .collect(),
            sla: SlaConfig::default(),
            palette: PaletteConfig::default(),
        }
    }
}

impl Default for SlaConfig {
    fn default() -> Self {
        Self {
            reinitiated_days: SlaPolicy::DEFAULT_REINITIATED_DAYS,
            received_days: SlaPolicy::DEFAULT_RECEIVED_DAYS,
        }
    }
}

impl ReportConfig {
    /// Parse configuration JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        info!(
            path = %path.as_ref().display(),
            holidays = config.holidays.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// The holiday set.  Any unparseable entry is an error.
    pub fn holiday_set(&self) -> Result<HolidaySet> {
        Ok(HolidaySet::parse(&self.holidays)?)
    }

    /// The SLA policy.  Zero-day windows are rejected.
    pub fn sla_policy(&self) -> Result<SlaPolicy> {
        Ok(SlaPolicy::new(self.sla.reinitiated_days, self.sla.received_days)?)
    }

    /// The classic palette with any configured overrides.
    pub fn palette(&self) -> Result<Palette> {
        let mut palette = Palette::classic();
        for (status, color) in [
            (TatStatus::OnTime, &self.palette.on_time),
            (TatStatus::Exceeded, &self.palette.exceeded),
            (TatStatus::Pending, &self.palette.pending),
        ] {
            if let Some(color) = color {
                palette = palette.with_status_fill(status, parse_hex_color(color)?);
            }
        }
        Ok(palette)
    }

    /// A calendar observing the configured holidays.
    pub fn calendar(&self) -> Result<WorkingCalendar> {
        Ok(WorkingCalendar::new(self.holiday_set()?))
    }

    /// An engine built from the configured calendar and SLA policy.
    pub fn engine(&self) -> Result<TatEngine> {
        Ok(TatEngine::new(self.calendar()?).with_policy(self.sla_policy()?))
    }
}
