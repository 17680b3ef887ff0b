//! Celsius/Fahrenheit conversions. No range checks are applied.

/// Converts degrees Celsius to degrees Fahrenheit.
///
/// ```
/// assert_eq!(thermocouple_j::c_to_f(100.0), 212.0);
/// ```
pub fn c_to_f(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Converts degrees Fahrenheit to degrees Celsius.
///
/// ```
/// assert_eq!(thermocouple_j::f_to_c(212.0), 100.0);
/// ```
pub fn f_to_c(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}
