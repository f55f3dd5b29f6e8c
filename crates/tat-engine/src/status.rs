//! Compliance status and late penalty.

use tat_core::errors::Error;

/// Turnaround compliance of one case.
///
/// The labels returned by [`label`](TatStatus::label) are part of the report
/// format: spreadsheet styling keys on the exact text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TatStatus {
    /// Not yet dispatched, or no due date could be computed.
    #[cfg_attr(feature = "serde", serde(rename = "Pending"))]
    Pending,
    /// Dispatched on or before the due date.
    #[cfg_attr(feature = "serde", serde(rename = "Within TAT"))]
    OnTime,
    /// Dispatched after the due date.
    #[cfg_attr(feature = "serde", serde(rename = "Exceeded"))]
    Exceeded,
}

impl TatStatus {
    /// Every status, in report order.
    pub const ALL: [TatStatus; 3] = [TatStatus::Pending, TatStatus::OnTime, TatStatus::Exceeded];

    /// The report label: `"Pending"`, `"Within TAT"` or `"Exceeded"`.
    pub fn label(&self) -> &'static str {
        match self {
            TatStatus::Pending => "Pending",
            TatStatus::OnTime => "Within TAT",
            TatStatus::Exceeded => "Exceeded",
        }
    }
}

impl std::fmt::Display for TatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TatStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TatStatus::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown TAT status {s:?}")))
    }
}

/// Calendar days by which a dispatch overran its due date.
///
/// Serializes as its report text, e.g. `"3 days Deduction"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Penalty {
    days: u32,
}

impl Penalty {
    /// A penalty of `days` calendar days.  Callers only build one for a
    /// positive overrun.
    pub fn new(days: u32) -> Self {
        Self { days }
    }

    /// Overrun in calendar days.
    pub fn days(&self) -> u32 {
        self.days
    }
}

/// Renders as `"{days} days Deduction"`.
impl std::fmt::Display for Penalty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} days Deduction", self.days)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Penalty {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
