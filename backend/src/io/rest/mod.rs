//! # REST API Interface Layer
//!
//! HTTP endpoints for the calendar service. Handles JSON
//! serialization, query extraction, request logging, and translation of
//! domain errors into HTTP status codes.

pub mod calendar_apis;
pub mod logging_apis;
