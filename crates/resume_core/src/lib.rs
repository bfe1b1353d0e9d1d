//! Core domain logic for the resume builder.
//! This crate is the single source of truth for employment-history invariants.
//! It never reads input or writes output; callers pass validated primitives in
//! and receive records, errors, or display lines back.

pub mod logging;
pub mod model;
pub mod render;
pub mod service;

pub use logging::{
    default_log_level, init_logging, logging_status, LogConfig, LoggingError,
};
pub use model::record::{PeriodRange, Record, ValidationError, Year};
pub use model::timeline::{OverlapError, Timeline, TimelineDataError};
pub use render::{render, ParseStyleError, SummaryStyle};
pub use service::resume_service::{ResumeError, ResumeResult, ResumeService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
