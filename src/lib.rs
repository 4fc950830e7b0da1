//! # Wasabi Usage
//!
//! A small reporter for the Wasabi storage utilization API.
//!
//! ## Overview
//!
//! One authenticated request is made against the stats endpoint, the latest
//! utilization record is read from the response, and a one-line JSON summary
//! is produced:
//! - Active storage (padded + metadata bytes) in TiB
//! - Deleted storage in TiB
//! - Billable object count
//!
//! ## Features
//!
//! - `colors` (default): Enables colored debug output via owo-colors

/// Command-line argument parsing and credential resolution
pub mod cli;

/// Display formatting for JSON output and debug information
pub mod display;

/// Error taxonomy for a report run
pub mod error;

/// Data models for credentials, utilization records and the summary
pub mod models;

/// Requests against the Wasabi stats API
pub mod stats_api;

/// Unit conversion and number formatting
pub mod utils;

pub use error::ReportError;
