//! Employment history domain model.
//!
//! # Responsibility
//! - Define the validated record value and the timeline aggregate.
//! - Keep every business invariant inside constructors and `add_record`.
//!
//! # Invariants
//! - Invalid records and overlapping timelines are unrepresentable.
//! - Nothing in this module performs I/O.

pub mod record;
pub mod timeline;
