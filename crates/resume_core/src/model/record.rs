//! Employment record domain model.
//!
//! # Responsibility
//! - Define the immutable value for one employment period.
//! - Reject malformed input before any value exists.
//!
//! # Invariants
//! - `organization` and `role` are stored trimmed and never empty.
//! - Stored text contains no control characters; each one becomes a space.
//! - `start <= end`; a zero-length period (`start == end`) is valid.
//! - Fields are private; a `Record` cannot change after construction.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Ordered period unit supplied by the caller, typically a calendar year.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type Year = i32;

/// Validation failures for records and timeline owners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Organization is blank after trim.
    EmptyOrganization,
    /// Role is blank after trim.
    EmptyRole,
    /// Timeline owner name is blank after trim.
    EmptyOwner,
    /// Start period comes after end period.
    InvertedRange { start: Year, end: Year },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyOrganization => write!(f, "organization is required"),
            Self::EmptyRole => write!(f, "role is required"),
            Self::EmptyOwner => write!(f, "owner name is required"),
            Self::InvertedRange { start, end } => {
                write!(f, "start ({start}) cannot be greater than end ({end})")
            }
        }
    }
}

impl Error for ValidationError {}

/// Closed `start–end` interval used in messages and overlap checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodRange {
    pub start: Year,
    pub end: Year,
}

impl PeriodRange {
    /// Returns whether two ranges share more than one boundary point.
    ///
    /// Touching ranges (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &PeriodRange) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }

    /// Number of periods covered, `end - start`.
    pub fn length(&self) -> i64 {
        i64::from(self.end) - i64::from(self.start)
    }
}

impl Display for PeriodRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}–{}", self.start, self.end)
    }
}

/// One validated employment period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    organization: String,
    role: String,
    start: Year,
    end: Year,
}

impl Record {
    /// Creates a record from caller-supplied values.
    ///
    /// Text fields are normalized with `normalize_text` before storage.
    ///
    /// # Errors
    /// - `EmptyOrganization` / `EmptyRole` when the text is blank.
    /// - `InvertedRange` when `start > end`.
    pub fn new(
        organization: impl AsRef<str>,
        role: impl AsRef<str>,
        start: Year,
        end: Year,
    ) -> Result<Self, ValidationError> {
        let organization = normalize_text(organization.as_ref());
        if organization.is_empty() {
            return Err(ValidationError::EmptyOrganization);
        }
        let role = normalize_text(role.as_ref());
        if role.is_empty() {
            return Err(ValidationError::EmptyRole);
        }
        if start > end {
            return Err(ValidationError::InvertedRange { start, end });
        }

        Ok(Self {
            organization,
            role,
            start,
            end,
        })
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn start(&self) -> Year {
        self.start
    }

    pub fn end(&self) -> Year {
        self.end
    }

    pub fn range(&self) -> PeriodRange {
        PeriodRange {
            start: self.start,
            end: self.end,
        }
    }

    /// Returns whether this record's period conflicts with `other`'s.
    pub fn overlaps(&self, other: &Record) -> bool {
        self.range().overlaps(&other.range())
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {} ({})", self.role, self.organization, self.range())
    }
}

/// Replaces control characters (`\n`, `\r`, `\t`, ...) with spaces, then trims.
///
/// Rendered rows must stay on one physical line.
pub(crate) fn normalize_text(value: &str) -> String {
    value.replace(char::is_control, " ").trim().to_string()
}

/// Unvalidated wire shape; converted through `Record::new`.
#[derive(Deserialize)]
struct RawRecord {
    organization: String,
    role: String,
    start: Year,
    end: Year,
}

impl TryFrom<RawRecord> for Record {
    type Error = ValidationError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        Record::new(raw.organization, raw.role, raw.start, raw.end)
    }
}
