//! Type J (iron/constantan) thermocouple conversions per ITS-90.
//!
//! [`TypeJ`] converts a thermocouple voltage to the temperature at its tip
//! and a reference junction temperature to its equivalent voltage, which
//! is how cold-junction compensation is applied. [`ThermocoupleReader`]
//! takes the voltage from an `embedded-hal` ADC channel behind an
//! amplifier.
//!
//! Out of range inputs are reported as [`RangeError`] by the `try_*`
//! methods, and as the [`RANGE_ERROR`] sentinel by the others.
//!
//! # Examples
//!
//! ```
//! use thermocouple_j::{is_range_error, TypeJ};
//!
//! let tc = TypeJ::new();
//!
//! assert!((tc.temperature_c(5.269) - 100.0).abs() < 0.1);
//! assert!((tc.voltage_from_celsius(100.0) - 5.269).abs() < 0.001);
//! assert!(is_range_error(tc.temperature_c(80.0)));
//! ```

#![cfg_attr(not(test), no_std)]

mod error;
mod polynomial;
mod reader;
pub mod tables;
mod type_j;
mod units;

pub use error::{is_range_error, RangeError, RANGE_ERROR};
pub use reader::{Config, ReadError, ThermocoupleReader};
pub use type_j::TypeJ;
pub use units::{c_to_f, f_to_c};
