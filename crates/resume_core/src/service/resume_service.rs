//! Resume use-case service.
//!
//! # Responsibility
//! - Provide a single entry point that builds records from primitive input.
//! - Route every insert through `Timeline::add_record`.
//! - Emit metadata-only log events for each outcome.
//!
//! # Invariants
//! - Service APIs never bypass record validation or overlap checks.
//! - A failed call leaves the owned timeline unchanged.

use crate::model::record::{Record, ValidationError, Year};
use crate::model::timeline::{OverlapError, Timeline};
use crate::render::{render, SummaryStyle};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ResumeResult<T> = Result<T, ResumeError>;

/// Service error covering every recoverable core failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeError {
    /// Constructor input was malformed.
    Validation(ValidationError),
    /// New record conflicts with an existing one.
    Overlap(OverlapError),
}

impl Display for ResumeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Overlap(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ResumeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Overlap(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ResumeError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<OverlapError> for ResumeError {
    fn from(value: OverlapError) -> Self {
        Self::Overlap(value)
    }
}

/// Use-case facade owning one timeline.
pub struct ResumeService {
    timeline: Timeline,
}

impl ResumeService {
    /// Starts a resume for `owner`.
    pub fn new(owner: impl AsRef<str>) -> ResumeResult<Self> {
        let timeline = Timeline::new(owner).inspect_err(|err| {
            warn!("event=resume_create module=service status=rejected reason={err}");
        })?;
        info!("event=resume_create module=service status=ok");
        Ok(Self { timeline })
    }

    /// Wraps an existing timeline, e.g. one loaded by the caller.
    pub fn from_timeline(timeline: Timeline) -> Self {
        Self { timeline }
    }

    /// Validates and adds one job.
    ///
    /// # Contract
    /// - Returns the stored record on success.
    /// - Returns `Validation` before checking overlap.
    pub fn add_job(
        &mut self,
        organization: &str,
        role: &str,
        start: Year,
        end: Year,
    ) -> ResumeResult<&Record> {
        let record = Record::new(organization, role, start, end).inspect_err(|err| {
            warn!(
                "event=job_add module=service status=rejected reason=validation detail={err}"
            );
        })?;
        let stored = self.timeline.add_record(record)?;
        info!(
            "event=job_add module=service status=ok start={} end={}",
            stored.start(),
            stored.end()
        );
        Ok(stored)
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Renders the current timeline.
    pub fn render(&self, style: SummaryStyle, max_width: Option<usize>) -> Vec<String> {
        render(&self.timeline, style, max_width)
    }

    pub fn into_timeline(self) -> Timeline {
        self.timeline
    }
}
