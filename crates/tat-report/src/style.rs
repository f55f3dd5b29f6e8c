//! Report styling as data.
//!
//! Each output row maps to a [`StyleToken`] by the exact text of its
//! `Remarks` cell, and a [`Palette`] maps tokens to colours.  Swapping the
//! palette restyles the report without touching the writer.

use crate::error::{ReportError, Result};
use tat_engine::TatStatus;

/// Visual treatment of one row's status cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleToken {
    /// Fill for a known status label.
    Status(TatStatus),
    /// Zebra fill for an even sheet row with no status fill.
    AlternateRow,
    /// No fill.
    Plain,
}

impl StyleToken {
    /// Pick the token for a row given its `Remarks` text and its 1-based
    /// sheet row number (the header is row 1).
    pub fn for_row(remarks: &str, sheet_row: u32) -> Self {
        match remarks.parse::<TatStatus>() {
            Ok(status) => StyleToken::Status(status),
            Err(_) if sheet_row % 2 == 0 => StyleToken::AlternateRow,
            Err(_) => StyleToken::Plain,
        }
    }
}

/// Colours used by the XLSX writer, as `0xRRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Header row background.
    pub header_fill: u32,
    /// Header row text.
    pub header_font: u32,
    /// Zebra fill.
    pub alternate_fill: u32,
    status_fills: [(TatStatus, u32); 3],
}

impl Palette {
    /// Blue header, green/red/yellow status fills.
    pub fn classic() -> Self {
        Self {
            header_fill: 0x4F81BD,
            header_font: 0xFFFFFF,
            alternate_fill: 0xF2F2F2,
            status_fills: [
                (TatStatus::OnTime, 0xC6EFCE),
                (TatStatus::Exceeded, 0xFFC7CE),
                (TatStatus::Pending, 0xFFEB9C),
            ],
        }
    }

    /// Fill colour for `status`.
    pub fn status_fill(&self, status: TatStatus) -> u32 {
        self.status_fills
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, c)| *c)
            .expect("palette covers every status")
    }

    /// Replace the fill colour for `status`.
    pub fn with_status_fill(mut self, status: TatStatus, color: u32) -> Self {
        for entry in &mut self.status_fills {
            if entry.0 == status {
                entry.1 = color;
            }
        }
        self
    }

    /// Fill colour for a token, `None` for [`StyleToken::Plain`].
    pub fn fill(&self, token: StyleToken) -> Option<u32> {
        match token {
            StyleToken::Status(status) => Some(self.status_fill(status)),
            StyleToken::AlternateRow => Some(self.alternate_fill),
            StyleToken::Plain => None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

/// Parse `RRGGBB` or `#RRGGBB` into `0xRRGGBB`.
pub fn parse_hex_color(s: &str) -> Result<u32> {
    let trimmed = s.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ReportError::Config(format!(
            "colour {s:?} is not six hex digits"
        )));
    }
    u32::from_str_radix(hex, 16)
        .map_err(|_| ReportError::Config(format!("colour {s:?} is not valid hex")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_key_on_exact_labels() {
        assert_eq!(
            StyleToken::for_row("Within TAT", 3),
            StyleToken::Status(TatStatus::OnTime)
        );
        assert_eq!(
            StyleToken::for_row("Exceeded", 2),
            StyleToken::Status(TatStatus::Exceeded)
        );
        assert_eq!(StyleToken::for_row("within tat", 2), StyleToken::AlternateRow);
        assert_eq!(StyleToken::for_row("", 3), StyleToken::Plain);
    }

    #[test]
    fn classic_palette_colours() {
        let p = Palette::classic();
        assert_eq!(p.status_fill(TatStatus::OnTime), 0xC6EFCE);
        assert_eq!(p.status_fill(TatStatus::Exceeded), 0xFFC7CE);
        assert_eq!(p.status_fill(TatStatus::Pending), 0xFFEB9C);
        assert_eq!(p.fill(StyleToken::AlternateRow), Some(0xF2F2F2));
        assert_eq!(p.fill(StyleToken::Plain), None);
    }

    #[test]
    fn override_one_status() {
        let p = Palette::classic().with_status_fill(TatStatus::Pending, 0xDDDDDD);
        assert_eq!(p.status_fill(TatStatus::Pending), 0xDDDDDD);
        assert_eq!(p.status_fill(TatStatus::OnTime), 0xC6EFCE);
    }

    #[test]
    fn hex_colours() {
        assert_eq!(parse_hex_color("C6EFCE").unwrap(), 0xC6EFCE);
        assert_eq!(parse_hex_color("#ffeb9c").unwrap(), 0xFFEB9C);
        assert!(parse_hex_color("FFF").is_err());
        assert!(parse_hex_color("GGGGGG").is_err());
    }

    #[test]
    fn hex_colours_need_exactly_six_digits() {
        assert_eq!(parse_hex_color(" #C6EFCE ").unwrap(), 0xC6EFCE);
        assert_eq!(parse_hex_color("c6efce").unwrap(), 0xC6EFCE);
        for bad in ["+FFFFF", "##C6EFCE", "C6EFC", "-00000", "#", ""] {
            assert!(
                matches!(parse_hex_color(bad), Err(ReportError::Config(_))),
                "{bad:?} accepted"
            );
        }
    }
}
