use crate::error::RangeError;
use crate::polynomial;
use crate::tables::{C_MAX, C_MIN, DIRECT, INVERSE, MV_MAX, MV_MIN};
use crate::units::{c_to_f, f_to_c};

/// Type J thermocouple converter.
///
/// Conversions come in two flavours:
///
/// - `try_*` methods return a [`Result`] and stop at the first input that
///   is out of range.
/// - The remaining methods return a plain `f64` and report out of range
///   inputs as [`RANGE_ERROR`](crate::RANGE_ERROR), for code that expects the sentinel.
///   Composed conversions feed the sentinel forward like any other value
///   (see [`temperature_c_compensated`](TypeJ::temperature_c_compensated)
///   and [`temperature_f_compensated`](TypeJ::temperature_f_compensated)).
///
/// # Examples
///
/// ```
/// use thermocouple_j::TypeJ;
///
/// let tc = TypeJ::new();
///
/// // 4.250 mV across the thermocouple with the cold junction at 20 °C
/// let tip = tc.try_temperature_c_compensated(4.250, 20.0).unwrap();
/// assert!((tip - 100.0).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeJ {
    f_min: f64,
    f_max: f64,
}

impl TypeJ {
    /// Returns a converter with its Fahrenheit bounds derived from
    /// `[C_MIN, C_MAX]`.
    pub fn new() -> Self {
        Self {
            f_min: c_to_f(f64::from(C_MIN)),
            f_max: c_to_f(f64::from(C_MAX)),
        }
    }

    /// Returns `true` if `mv` is within `[MV_MIN, MV_MAX]`.
    pub fn in_range_millivolts(&self, mv: f32) -> bool {
        (MV_MIN..=MV_MAX).contains(&mv)
    }

    /// Returns `true` if `celsius` is within `[C_MIN, C_MAX]`.
    pub fn in_range_celsius(&self, celsius: f32) -> bool {
        (C_MIN..=C_MAX).contains(&celsius)
    }

    /// Returns `true` if `fahrenheit` is within the Fahrenheit equivalent
    /// of `[C_MIN, C_MAX]`.
    pub fn in_range_fahrenheit(&self, fahrenheit: f32) -> bool {
        (self.f_min..=self.f_max).contains(&f64::from(fahrenheit))
    }

    /// Absolute temperature (°C) of the measuring junction for a reading
    /// of `mv`, assuming the reference junction sits at 0 °C.
    ///
    /// Segments are scanned in order and the last one containing `mv` is
    /// used, so a reading on a shared bound (0.000 mV, 42.919 mV) is
    /// evaluated with the higher segment.
    pub fn try_temperature_c(&self, mv: f32) -> Result<f64, RangeError> {
        let segment = self.inverse_segment(mv).ok_or(RangeError::Millivolts(mv))?;

        Ok(polynomial::evaluate(&INVERSE[segment].coefficients, f64::from(mv)))
    }

    /// Temperature (°C) of the measuring junction for a reading of `mv`
    /// with the reference junction at `ambient_c`.
    pub fn try_temperature_c_compensated(
        &self,
        mv: f32,
        ambient_c: f32,
    ) -> Result<f64, RangeError> {
        let cold_junction = self.try_voltage_from_celsius(ambient_c)?;
        self.try_temperature_c(mv + cold_junction as f32)
    }

    /// Fahrenheit version of [`try_temperature_c`](TypeJ::try_temperature_c).
    pub fn try_temperature_f(&self, mv: f32) -> Result<f64, RangeError> {
        self.try_temperature_c(mv).map(c_to_f)
    }

    /// Fahrenheit version of
    /// [`try_temperature_c_compensated`](TypeJ::try_temperature_c_compensated),
    /// with `ambient_f` range checked in Fahrenheit.
    pub fn try_temperature_f_compensated(
        &self,
        mv: f32,
        ambient_f: f32,
    ) -> Result<f64, RangeError> {
        let cold_junction = self.try_voltage_from_fahrenheit(ambient_f)?;
        self.try_temperature_c(mv + cold_junction as f32).map(c_to_f)
    }

    /// Thermoelectric voltage (mV) produced at `celsius` against a 0 °C
    /// reference. Used for cold-junction compensation.
    ///
    /// The first segment containing `celsius` is used, so 760 °C is
    /// evaluated with the lower segment.
    pub fn try_voltage_from_celsius(&self, celsius: f32) -> Result<f64, RangeError> {
        let segment = self.direct_segment(celsius).ok_or(RangeError::Celsius(celsius))?;

        Ok(polynomial::evaluate(&DIRECT[segment].coefficients, f64::from(celsius)))
    }

    /// Like [`try_voltage_from_celsius`](TypeJ::try_voltage_from_celsius),
    /// with the range checked in Fahrenheit.
    pub fn try_voltage_from_fahrenheit(&self, fahrenheit: f32) -> Result<f64, RangeError> {
        if !self.in_range_fahrenheit(fahrenheit) {
            return Err(RangeError::Fahrenheit(fahrenheit));
        }

        self.try_voltage_from_celsius(f_to_c(f64::from(fahrenheit)) as f32)
    }

    /// [`try_temperature_c`](TypeJ::try_temperature_c), or [`RANGE_ERROR`](crate::RANGE_ERROR).
    pub fn temperature_c(&self, mv: f32) -> f64 {
        self.try_temperature_c(mv).unwrap_or_else(|e| e.sentinel())
    }

    /// Compensated temperature (°C), or [`RANGE_ERROR`](crate::RANGE_ERROR).
    ///
    /// An out of range `ambient_c` is not reported directly: its sentinel
    /// is added to `mv` as a voltage, which pushes the sum out of range.
    pub fn temperature_c_compensated(&self, mv: f32, ambient_c: f32) -> f64 {
        let cold_junction = self.voltage_from_celsius(ambient_c);
        self.temperature_c(mv + cold_junction as f32)
    }

    /// [`try_temperature_f`](TypeJ::try_temperature_f), or [`RANGE_ERROR`](crate::RANGE_ERROR)
    /// unconverted.
    pub fn temperature_f(&self, mv: f32) -> f64 {
        match self.try_temperature_c(mv) {
            Ok(celsius) => c_to_f(celsius),
            Err(e) => e.sentinel(),
        }
    }

    /// Compensated temperature (°F).
    ///
    /// Unlike [`temperature_f`](TypeJ::temperature_f) the result is always
    /// converted to Fahrenheit, so an out of range input yields
    /// `c_to_f(RANGE_ERROR)` rather than [`RANGE_ERROR`](crate::RANGE_ERROR).
    pub fn temperature_f_compensated(&self, mv: f32, ambient_f: f32) -> f64 {
        let ambient_c = f_to_c(f64::from(ambient_f)) as f32;
        c_to_f(self.temperature_c_compensated(mv, ambient_c))
    }

    /// [`try_voltage_from_celsius`](TypeJ::try_voltage_from_celsius), or
    /// [`RANGE_ERROR`](crate::RANGE_ERROR).
    pub fn voltage_from_celsius(&self, celsius: f32) -> f64 {
        self.try_voltage_from_celsius(celsius).unwrap_or_else(|e| e.sentinel())
    }

    /// [`try_voltage_from_fahrenheit`](TypeJ::try_voltage_from_fahrenheit),
    /// or [`RANGE_ERROR`](crate::RANGE_ERROR).
    pub fn voltage_from_fahrenheit(&self, fahrenheit: f32) -> f64 {
        self.try_voltage_from_fahrenheit(fahrenheit).unwrap_or_else(|e| e.sentinel())
    }

    fn inverse_segment(&self, mv: f32) -> Option<usize> {
        if !self.in_range_millivolts(mv) {
            return None;
        }

        // Later segments win on a shared bound.
        INVERSE.iter().rposition(|segment| segment.contains(mv))
    }

    fn direct_segment(&self, celsius: f32) -> Option<usize> {
        if !self.in_range_celsius(celsius) {
            return None;
        }

        let celsius = f64::from(celsius);
        DIRECT.iter().position(|segment| segment.contains(celsius))
    }
}

impl Default for TypeJ {
    fn default() -> Self {
        Self::new()
    }
}
