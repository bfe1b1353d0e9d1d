//! Timeline presentation.
//!
//! # Responsibility
//! - Turn a `Timeline` into display lines for one `SummaryStyle`.
//! - Stay a pure function of its inputs: no I/O, no mutation, no terminal probing.
//!
//! # Invariants
//! - Rendering never fails, including for empty timelines.
//! - Rendering the same timeline twice with the same arguments yields identical lines.

pub mod boxed;
pub mod simple;

use crate::model::timeline::Timeline;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Closed set of summary layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStyle {
    /// Header plus one line per record.
    Simple,
    /// Bordered box with a centered header.
    #[default]
    Boxed,
}

impl SummaryStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Boxed => "boxed",
        }
    }
}

impl Display for SummaryStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown style name passed to `SummaryStyle::from_str`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStyleError(String);

impl Display for ParseStyleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported summary style `{}`; expected simple|boxed",
            self.0
        )
    }
}

impl Error for ParseStyleError {}

impl FromStr for SummaryStyle {
    type Err = ParseStyleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "boxed" => Ok(Self::Boxed),
            other => Err(ParseStyleError(other.to_string())),
        }
    }
}

/// Renders `timeline` in `style`.
///
/// `max_width` is the total display width in columns. Only the boxed style
/// uses it; `None` means no clamp.
pub fn render(timeline: &Timeline, style: SummaryStyle, max_width: Option<usize>) -> Vec<String> {
    match style {
        SummaryStyle::Simple => simple::render_simple(timeline),
        SummaryStyle::Boxed => boxed::render_boxed(timeline, max_width),
    }
}
