//! Domain core for the movie dashboard.
//!
//! Holds the normalized data model, the per-field cleaning parsers, display
//! formatting helpers, the error taxonomy and the CLI settings layer shared
//! by the data pipeline and the binary.

pub mod error;
pub mod field_parsers;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{DashboardError, Result};
