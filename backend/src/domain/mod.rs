//! # Domain Module
//!
//! Contains the calendar business rules for the school dashboard.
//!
//! ## Module Organization
//!
//! - **calendar**: Month grid generation, event binding and focus-date navigation
//! - **dates**: Date arithmetic (month lengths, Monday-first offsets, event date parsing)
//! - **week_start**: Column header labels rotated to the configured first weekday
//! - **errors**: Domain error types
//!
//! ## Business Rules
//!
//! - Every month grid has exactly 42 cells (6 weeks × 7 days)
//! - Weekday arithmetic is always Monday-first; the week-start setting only
//!   changes header labels
//! - Events attach only to days of the focal month, grouped by calendar date
//! - Event dates that cannot be parsed are skipped, never fatal
//! - Month indexes are zero-based and out-of-range values roll the year, as long
//!   as the rolled year stays representable

pub mod calendar;
pub mod dates;
pub mod errors;
pub mod week_start;

pub use calendar::*;
pub use errors::*;
pub use week_start::*;
