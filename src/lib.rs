//! # TempoRS
//!
//! A small ordered time series container. A [`TimeSeries`] pairs a sequence
//! of time points with a positionally aligned sequence of values and
//! provides element access, single-value mutation, elementwise arithmetic
//! between time-aligned series, piecewise-linear interpolation, and
//! iteration over times, values, or (time, value) pairs.
//!
//! ## Example
//!
//! ```
//! use tempors::TimeSeries;
//!
//! let t = TimeSeries::new(vec![1.0, 2.0, 3.0], Some(vec![0.0, 5.0, 10.0])).unwrap();
//! let at_one = t.interpolate(&[1.0]).unwrap();
//! assert_eq!(at_one.len(), 1);
//! ```

// Computation module for deferred evaluation
pub mod compute;

// Error types for the whole crate
pub mod error;

// Time index and slice specifier
pub mod index;

// The time series container itself
pub mod series;

// Re-export core types
pub use compute::lazy::Deferred;
pub use error::{Error, Result};
pub use index::{Slice, TimeIndex};
pub use series::TimeSeries;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
