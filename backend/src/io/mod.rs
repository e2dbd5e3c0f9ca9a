//! # IO Module
//!
//! Interface layer between the dashboard UI and the calendar domain.
//!
//! Translates HTTP requests into domain calls and domain results into JSON
//! responses. Handlers hold no business rules of their own.
//!
//! ## Supported Operations
//!
//! - **GET/POST /api/calendar/month**: Month grid, optionally with events bound
//! - **GET /api/calendar/week-labels**: Column header labels
//! - **GET /api/calendar/current-date**: Today's date as seen by the backend
//! - **/api/calendar/focus-date**: Focus-date read, set and navigation
//! - **POST /api/logs**: Frontend log forwarding

pub mod rest;

pub use rest::*;
