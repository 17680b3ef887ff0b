//! Range errors and the legacy sentinel value.

use crate::tables::{C_MAX, C_MIN, MV_MAX, MV_MIN};
use core::fmt;

/// Value returned by the sentinel API when an input falls outside the
/// calibrated range.
///
/// It lies outside every attainable temperature and voltage, so it must be
/// compared exactly (see [`is_range_error`]) rather than range checked.
pub const RANGE_ERROR: f64 = 32768.0;

/// Returns `true` if `value` is exactly [`RANGE_ERROR`].
///
/// ```
/// use thermocouple_j::{is_range_error, TypeJ};
///
/// let tc = TypeJ::new();
/// assert!(is_range_error(tc.temperature_c(100.0)));
/// assert!(!is_range_error(tc.temperature_c(5.269)));
/// ```
pub fn is_range_error(value: f64) -> bool {
    value == RANGE_ERROR
}

/// An input outside the calibrated envelope. Carries the rejected input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeError {
    /// Thermocouple voltage outside `[MV_MIN, MV_MAX]`
    Millivolts(f32),
    /// Temperature outside `[C_MIN, C_MAX]`
    Celsius(f32),
    /// Temperature outside the Fahrenheit equivalent of `[C_MIN, C_MAX]`
    Fahrenheit(f32),
}

impl RangeError {
    /// The sentinel the legacy API reports in place of this error.
    pub fn sentinel(&self) -> f64 {
        RANGE_ERROR
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millivolts(mv) => {
                write!(f, "{mv} mV is outside the range [{MV_MIN}, {MV_MAX}] mV")
            }
            Self::Celsius(c) => {
                write!(f, "{c} °C is outside the range [{C_MIN}, {C_MAX}] °C")
            }
            Self::Fahrenheit(t) => write!(f, "{t} °F is outside the calibrated range"),
        }
    }
}
