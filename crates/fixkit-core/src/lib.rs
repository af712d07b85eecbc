//! Numeric and ordering utilities for fixed-capacity buffers.
//!
//! Every operation works in place on a caller-owned slice and keeps no state
//! between calls. The crate provides:
//!
//! - **Statistics**: minimum, maximum, mean and range in one pass
//! - **Shift-insert**: push a value into either end of a full buffer, evicting the opposite end
//! - **Sorting**: small-buffer ascending bubble sort
//! - **Temperature conversion**: Celsius/Fahrenheit with result clamping
//! - **Rolling history**: a fixed-depth measurement buffer built on the shift operations
//! - **Tracing**: an injected [`Tracer`] capability and the [`Toolkit`] facade that uses it
//!
//! # Modules
//!
//! - [`numeric`]: The [`Numeric`] bound shared by all buffer operations
//! - [`stats`]: [`ArrayStats`] over a non-empty buffer
//! - [`shift`]: Shift-and-insert at the start or end of a buffer
//! - [`sort`]: In-place ascending sort
//! - [`temperature`]: Unit conversion and clamping
//! - [`history`]: [`History`], a FILO buffer of fixed depth
//! - [`trace`]: Tracer implementations and the [`Toolkit`] facade
//!
//! # Examples
//!
//! ## Computing statistics
//!
//! ```
//! use fixkit_core::stats::ArrayStats;
//!
//! let stats = ArrayStats::new(&[3, 1, 4, 1, 5]).unwrap();
//! assert_eq!(stats.min, 1);
//! assert_eq!(stats.max, 5);
//! assert_eq!(stats.mean, 2.8);
//! assert_eq!(stats.range, 4);
//! ```
//!
//! ## Sorting
//!
//! ```
//! use fixkit_core::sort::sort_ascending;
//!
//! let mut values = [5, 3, 4, 1, 2];
//! sort_ascending(&mut values);
//! assert_eq!(values, [1, 2, 3, 4, 5]);
//! ```
//!
//! ## Keeping a rolling measurement history
//!
//! ```
//! use fixkit_core::shift::shift_insert_back;
//!
//! let mut readings = [20.5_f32, 20.7, 21.0];
//! let oldest = shift_insert_back(&mut readings, 21.2).unwrap();
//! assert_eq!(oldest, 20.5);
//! assert_eq!(readings, [20.7, 21.0, 21.2]);
//! ```
//!
//! ## Converting temperatures
//!
//! ```
//! use fixkit_core::temperature::celsius_to_fahrenheit;
//!
//! assert_eq!(celsius_to_fahrenheit(100.0_f32, -40.0, 250.0), 212.0);
//! assert_eq!(celsius_to_fahrenheit(1000.0_f32, 0.0, 100.0), 100.0);
//! ```

pub use self::{
    history::History,
    numeric::Numeric,
    shift::{EmptyBufferError, shift_insert_back, shift_insert_front},
    sort::sort_ascending,
    stats::{ArrayStats, StatsError},
    temperature::{TemperatureUnit, celsius_to_fahrenheit, clamp_to_range, fahrenheit_to_celsius},
    trace::{NoTrace, Toolkit, Tracer, TracingTracer, WriteTracer},
};

pub mod history;
pub mod numeric;
pub mod shift;
pub mod sort;
pub mod stats;
pub mod temperature;
pub mod trace;

/// Version of this library, for callers that gate on a minimum release.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
