//! Employment timeline aggregate.
//!
//! # Responsibility
//! - Hold one owner's records in start order.
//! - Enforce the no-overlap rule on every insert.
//!
//! # Invariants
//! - No two records overlap; touching at a boundary is allowed.
//! - Records are sorted ascending by `start`; equal starts keep insertion order.
//! - A failed `add_record` leaves the timeline unchanged.
//! - Callers only ever see records through shared borrows.

use crate::model::record::{normalize_text, PeriodRange, Record, ValidationError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected insert: the candidate period conflicts with an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapError {
    /// Period of the record that was being added.
    pub candidate: PeriodRange,
    /// Period of the first existing record it collides with.
    pub existing: PeriodRange,
}

impl Display for OverlapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "the period {} overlaps with {}",
            self.candidate, self.existing
        )
    }
}

impl Error for OverlapError {}

/// Ordered, overlap-free collection of records for one owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeline")]
pub struct Timeline {
    owner: String,
    records: Vec<Record>,
}

impl Timeline {
    /// Creates an empty timeline for `owner`, normalized like record text.
    ///
    /// # Errors
    /// - `EmptyOwner` when the name is blank.
    pub fn new(owner: impl AsRef<str>) -> Result<Self, ValidationError> {
        let owner = normalize_text(owner.as_ref());
        if owner.is_empty() {
            return Err(ValidationError::EmptyOwner);
        }
        Ok(Self {
            owner,
            records: Vec::new(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Adds one record after checking it against every existing record.
    ///
    /// # Errors
    /// - `OverlapError` naming the first conflicting record in start order.
    pub fn add_record(&mut self, record: Record) -> Result<&Record, OverlapError> {
        if let Some(existing) = self.records.iter().find(|r| r.overlaps(&record)) {
            let err = OverlapError {
                candidate: record.range(),
                existing: existing.range(),
            };
            warn!(
                "event=record_add module=timeline status=rejected reason=overlap candidate={} existing={}",
                err.candidate, err.existing
            );
            return Err(err);
        }

        // Insert after every record with the same start to keep insertion order on ties.
        let index = self
            .records
            .partition_point(|existing| existing.start() <= record.start());
        debug!(
            "event=record_add module=timeline status=ok start={} end={} index={} count={}",
            record.start(),
            record.end(),
            index,
            self.records.len() + 1
        );
        self.records.insert(index, record);
        Ok(&self.records[index])
    }

    /// Read-only view of the records in start order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest start to latest end, or `None` when empty.
    pub fn span(&self) -> Option<PeriodRange> {
        let start = self.records.first()?.start();
        let end = self.records.iter().map(Record::end).max()?;
        Some(PeriodRange { start, end })
    }

    /// Sum of `end - start` over all records.
    ///
    /// Records never overlap, so this never counts a period twice.
    pub fn total_years(&self) -> i64 {
        self.records.iter().map(|r| r.range().length()).sum()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Errors raised while rebuilding a timeline from serialized data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineDataError {
    Validation(ValidationError),
    Overlap(OverlapError),
}

impl Display for TimelineDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Overlap(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TimelineDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Overlap(err) => Some(err),
        }
    }
}

/// Unvalidated wire shape; replayed through `Timeline::add_record`.
#[derive(Deserialize)]
struct RawTimeline {
    owner: String,
    #[serde(default)]
    records: Vec<Record>,
}

impl TryFrom<RawTimeline> for Timeline {
    type Error = TimelineDataError;

    fn try_from(raw: RawTimeline) -> Result<Self, Self::Error> {
        let mut timeline = Timeline::new(raw.owner).map_err(TimelineDataError::Validation)?;
        for record in raw.records {
            timeline
                .add_record(record)
                .map_err(TimelineDataError::Overlap)?;
        }
        Ok(timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::Timeline;
    use crate::model::record::{PeriodRange, Record};

    fn record(org: &str, start: i32, end: i32) -> Record {
        Record::new(org, "Engineer", start, end).unwrap()
    }

    #[test]
    fn equal_starts_keep_insertion_order() {
        let mut timeline = Timeline::new("Jamie").unwrap();
        timeline.add_record(record("Later", 2022, 2024)).unwrap();
        timeline.add_record(record("PointA", 2020, 2020)).unwrap();
        timeline.add_record(record("PointB", 2020, 2020)).unwrap();
        timeline.add_record(record("Span", 2020, 2022)).unwrap();

        let orgs: Vec<&str> = timeline.iter().map(Record::organization).collect();
        assert_eq!(orgs, vec!["PointA", "PointB", "Span", "Later"]);
    }

    #[test]
    fn add_record_returns_stored_record() {
        let mut timeline = Timeline::new("Jamie").unwrap();
        let stored = timeline.add_record(record("Acme", 2018, 2019)).unwrap();
        assert_eq!(stored.organization(), "Acme");
    }

    #[test]
    fn span_and_total_years_cover_all_records() {
        let mut timeline = Timeline::new("Jamie").unwrap();
        assert_eq!(timeline.span(), None);
        assert_eq!(timeline.total_years(), 0);

        timeline.add_record(record("B", 2015, 2018)).unwrap();
        timeline.add_record(record("A", 2010, 2012)).unwrap();

        assert_eq!(
            timeline.span(),
            Some(PeriodRange {
                start: 2010,
                end: 2018
            })
        );
        assert_eq!(timeline.total_years(), 5);
    }
}
