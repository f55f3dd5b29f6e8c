//! `HolidaySet` — an immutable set of non-working dates.

use crate::date::Date;
use std::collections::BTreeSet;
use tat_core::errors::{Error, Result};

/// Public holidays observed when no holiday list is configured.
pub const DEFAULT_PUBLIC_HOLIDAYS: [(u16, u8, u8); 4] = [
    (2025, 1, 26),
    (2025, 8, 15),
    (2025, 10, 2),
    (2025, 12, 25),
];

/// A fixed set of holiday dates.
///
/// Built once and never changed; a different holiday list means a new set
/// (and a new calendar).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeSet<Date>,
}

impl HolidaySet {
    /// Create a holiday set from any collection of dates.  Duplicates are
    /// collapsed.
    pub fn new(dates: impl IntoIterator<Item = Date>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// The set of [`DEFAULT_PUBLIC_HOLIDAYS`].
    pub fn default_public_holidays() -> Self {
        Self::new(
            DEFAULT_PUBLIC_HOLIDAYS
                .iter()
                .map(|&(y, m, d)| Date::from_ymd(y, m, d).expect("default holidays are valid dates")),
        )
    }

    /// Parse a holiday list from date strings.
    ///
    /// Every entry must parse; the first bad one is reported.
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let dates = entries
            .iter()
            .map(|s| {
                s.as_ref()
                    .parse::<Date>()
                    .map_err(|e| Error::InvalidArgument(format!("holiday {:?}: {e}", s.as_ref())))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(dates))
    }

    /// Return `true` if `date` is a holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.dates.contains(&date)
    }

    /// Number of distinct holidays.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate the holidays in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.dates.iter().copied()
    }
}

impl FromIterator<Date> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        Self::new(iter)
    }
}
