//! Band range selection: `"<start>-<end>"`, 1-indexed and inclusive.
//!
//! The text field is parsed and validated only when a render is requested,
//! so parsing and validation are separate steps with separate errors.

use std::fmt;
use std::num::IntErrorKind;
use std::ops::RangeInclusive;

use crate::error::{Result, ViewerError};

/// Two integers parsed from the band range text, not yet checked against a raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestedBands {
    pub start: i64,
    pub end: i64,
}

impl RequestedBands {
    /// Parse exactly two integer tokens separated by a single `-`.
    pub fn parse(input: &str) -> Result<Self> {
        let parse_err = |reason: &str| ViewerError::BandRangeParse {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let tokens: Vec<&str> = input.split('-').map(str::trim).collect();
        if tokens.len() != 2 {
            return Err(parse_err("expected <start>-<end>"));
        }
        if tokens.iter().any(|t| t.is_empty()) {
            return Err(parse_err("missing band number"));
        }

        let start = parse_band_number(tokens[0])
            .ok_or_else(|| parse_err(&format!("'{}' is not an integer", tokens[0])))?;
        let end = parse_band_number(tokens[1])
            .ok_or_else(|| parse_err(&format!("'{}' is not an integer", tokens[1])))?;

        Ok(Self { start, end })
    }

    /// Check against the open raster's band count. Never clamps.
    pub fn validate(self, band_count: usize) -> Result<BandRange> {
        let in_bounds = self.start >= 1
            && self.start <= self.end
            && usize::try_from(self.end).is_ok_and(|end| end <= band_count);

        if !in_bounds {
            return Err(ViewerError::BandRangeValidation {
                start: self.start,
                end: self.end,
                band_count,
            });
        }

        Ok(BandRange {
            start: self.start as usize,
            end: self.end as usize,
        })
    }
}

/// Parse one band number. Integers too large for `i64` saturate so they fail
/// validation as out of range instead of failing to parse.
fn parse_band_number(token: &str) -> Option<i64> {
    match token.parse::<i64>() {
        Ok(v) => Some(v),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(i64::MAX),
        Err(_) => None,
    }
}

/// A validated inclusive band range, `1 <= start <= end <= band_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandRange {
    start: usize,
    end: usize,
}

impl BandRange {
    /// Parse the band range text and validate it in one step.
    pub fn from_text(input: &str, band_count: usize) -> Result<Self> {
        RequestedBands::parse(input)?.validate(band_count)
    }

    /// Range covering every band of a raster. `band_count` must be non-zero.
    pub fn full(band_count: usize) -> Self {
        Self {
            start: 1,
            end: band_count.max(1),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of bands in the range.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// 1-based band indices, in order.
    pub fn bands(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl fmt::Display for BandRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
