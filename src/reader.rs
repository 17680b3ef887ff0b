use crate::error::RangeError;
use crate::type_j::TypeJ;
use core::fmt;
use embedded_hal::adc::{Channel, OneShot};

/// Configuration for a `ThermocoupleReader`.
///
/// - `max_voltage`: The voltage at the ADC pin corresponding to the largest value possible for the ADC (mV)
/// - `precision`: The precision of the ADC in bits (eg. for 12-bit precision, use `12`)
/// - `gain`: The gain of the amplifier between the thermocouple and the ADC pin
///
/// # Examples
///
/// ```
/// use thermocouple_j::Config;
///
/// let config = Config {
///     max_voltage: 3300, // 3.3 V
///     precision: 12,     // 12 bits of precision
///     gain: 50.0,        // 1 mV at the thermocouple reads as 50 mV at the pin
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub max_voltage: u32,
    pub precision: u32,
    pub gain: f32,
}

impl Config {
    fn millivolts_per_count(&self) -> f32 {
        let max_adc_value = 2u32.pow(self.precision);
        self.max_voltage as f32 / max_adc_value as f32 / self.gain
    }
}

/// Error from one of the `read_*` methods of a `ThermocoupleReader`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError<E> {
    /// The ADC failed to produce a sample
    Adc(E),
    /// The sample, or the ambient temperature, is outside the calibrated range
    Range(RangeError),
}

impl<E> From<RangeError> for ReadError<E> {
    fn from(error: RangeError) -> Self {
        Self::Range(error)
    }
}

impl<E: fmt::Debug> fmt::Display for ReadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adc(error) => write!(f, "adc read failed: {error:?}"),
            Self::Range(error) => write!(f, "{error}"),
        }
    }
}

type Error<Adc, ADC, Word, Pin> = nb::Error<ReadError<<Adc as OneShot<ADC, Word, Pin>>::Error>>;

/// Reads a Type J thermocouple through an amplifier connected to an ADC
/// channel.
#[derive(Debug)]
pub struct ThermocoupleReader<Pin> {
    pin: Pin,
    millivolts_per_count: f32,
    converter: TypeJ,
}

impl<Pin> ThermocoupleReader<Pin> {
    /// Returns a reader for `pin` using the provided `config`.
    ///
    /// `config.gain` must be positive and `config.precision` must be
    /// between 1 and 31 or this function will panic when running in debug
    /// mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use thermocouple_j::{Config, ThermocoupleReader};
    /// # use embedded_hal_mock::adc::MockChan0;
    /// #
    /// # let pin = MockChan0 {};
    ///
    /// let config = Config {
    ///     max_voltage: 3300,
    ///     precision: 12,
    ///     gain: 50.0,
    /// };
    ///
    /// let reader = ThermocoupleReader::new(pin, config);
    /// ```
    pub fn new(pin: Pin, config: Config) -> Self {
        debug_assert!(config.gain > 0.0, "The gain must be positive");
        debug_assert!(
            (1..=31).contains(&config.precision),
            "The precision must be between 1 and 31 bits"
        );

        Self {
            pin,
            millivolts_per_count: config.millivolts_per_count(),
            converter: TypeJ::new(),
        }
    }

    /// Destroys the reader and returns the `Pin`.
    pub fn free(self) -> Pin {
        self.pin
    }

    /// Returns the converter used to interpret readings.
    pub fn converter(&self) -> &TypeJ {
        &self.converter
    }

    /// Returns the voltage across the thermocouple (mV), with the gain of
    /// the amplifier removed.
    pub fn read_millivolts<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
    ) -> nb::Result<f32, <Adc as OneShot<ADC, Word, Pin>>::Error>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let counts: u32 = adc.read(&mut self.pin)?.into();
        let mv = counts as f32 * self.millivolts_per_count;

        #[cfg(feature = "defmt")]
        defmt::trace!("thermocouple: {=u32} counts, {=f32} mV", counts, mv);

        Ok(mv)
    }

    /// Returns the temperature at the tip of the thermocouple (°C),
    /// assuming the reference junction sits at 0 °C.
    ///
    /// # Examples
    ///
    /// ```
    /// use thermocouple_j::{Config, ThermocoupleReader};
    /// # use embedded_hal_mock::adc::{Mock, MockChan0, Transaction};
    /// #
    /// # let expectations: [Transaction<u16>; 1] = [Transaction::read(0, 527)];
    /// # let mut adc = Mock::new(&expectations);
    /// # let pin = MockChan0 {};
    ///
    /// let config = Config {
    ///     max_voltage: 4096,
    ///     precision: 12,
    ///     gain: 100.0,
    /// };
    ///
    /// let mut reader = ThermocoupleReader::new(pin, config);
    ///
    /// // 527 counts is 5.27 mV at the thermocouple, about 100 °C
    /// let celsius = reader.read_celsius(&mut adc).unwrap();
    /// assert!((celsius - 100.0).abs() < 0.1);
    /// ```
    pub fn read_celsius<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<f64, Error<Adc, ADC, Word, Pin>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let mv = self.read_millivolts(adc).map_err(|e| e.map(ReadError::Adc))?;

        self.converter
            .try_temperature_c(mv)
            .map_err(|e| nb::Error::Other(e.into()))
    }

    /// Returns the temperature at the tip of the thermocouple (°C) with
    /// the reference junction at `ambient_c`.
    pub fn read_celsius_compensated<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
        ambient_c: f32,
    ) -> Result<f64, Error<Adc, ADC, Word, Pin>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let mv = self.read_millivolts(adc).map_err(|e| e.map(ReadError::Adc))?;

        self.converter
            .try_temperature_c_compensated(mv, ambient_c)
            .map_err(|e| nb::Error::Other(e.into()))
    }

    /// Fahrenheit version of [`read_celsius`](ThermocoupleReader::read_celsius).
    pub fn read_fahrenheit<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<f64, Error<Adc, ADC, Word, Pin>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let mv = self.read_millivolts(adc).map_err(|e| e.map(ReadError::Adc))?;

        self.converter
            .try_temperature_f(mv)
            .map_err(|e| nb::Error::Other(e.into()))
    }

    /// Fahrenheit version of
    /// [`read_celsius_compensated`](ThermocoupleReader::read_celsius_compensated).
    pub fn read_fahrenheit_compensated<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
        ambient_f: f32,
    ) -> Result<f64, Error<Adc, ADC, Word, Pin>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let mv = self.read_millivolts(adc).map_err(|e| e.map(ReadError::Adc))?;

        self.converter
            .try_temperature_f_compensated(mv, ambient_f)
            .map_err(|e| nb::Error::Other(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::{
        adc::{Mock, MockChan0, Transaction},
        common::Generic,
        MockError,
    };
    use std::io::ErrorKind;

    // 0.01 mV per count at the thermocouple
    fn config() -> Config {
        Config {
            max_voltage: 4096,
            precision: 12,
            gain: 100.0,
        }
    }

    fn reader(config: Config) -> ThermocoupleReader<MockChan0> {
        let pin = MockChan0 {};
        ThermocoupleReader::new(pin, config)
    }

    fn adc(expectations: &[Transaction<u16>]) -> Generic<Transaction<u16>> {
        Mock::new(expectations)
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    #[test]
    #[should_panic]
    fn panics_if_gain_not_positive() {
        reader(Config {
            gain: 0.0,
            ..config()
        });
    }

    #[test]
    #[should_panic]
    fn panics_if_precision_too_large() {
        reader(Config {
            precision: 32,
            ..config()
        });
    }

    #[test]
    fn millivolts_per_count() {
        assert_eq!(config().millivolts_per_count(), 0.01);

        let unity = Config {
            max_voltage: 1000,
            precision: 10,
            gain: 1.0,
        };
        assert_eq!(unity.millivolts_per_count(), 1000.0 / 1024.0);
    }

    #[test]
    fn read_millivolts() {
        let mut adc = adc(&[Transaction::read(0, 527)]);
        let mv = reader(config()).read_millivolts(&mut adc).unwrap();

        assert!((mv - 5.27).abs() < 1e-4);
    }

    #[test]
    fn read_celsius() {
        let mut adc = adc(&[Transaction::read(0, 527)]);
        let celsius = reader(config()).read_celsius(&mut adc).unwrap();

        assert_close(celsius, 100.0, 0.1);
    }

    #[test]
    fn read_celsius_at_ice_point() {
        let mut adc = adc(&[Transaction::read(0, 0)]);

        assert_eq!(reader(config()).read_celsius(&mut adc).ok(), Some(0.0));
    }

    #[test]
    fn read_celsius_compensated() {
        let mut adc = adc(&[Transaction::read(0, 425)]);
        let celsius = reader(config())
            .read_celsius_compensated(&mut adc, 20.0)
            .unwrap();

        assert_close(celsius, 100.0, 0.1);
    }

    #[test]
    fn read_fahrenheit() {
        let mut adc = adc(&[Transaction::read(0, 527)]);
        let fahrenheit = reader(config()).read_fahrenheit(&mut adc).unwrap();

        assert_close(fahrenheit, 212.0, 0.2);
    }

    #[test]
    fn read_fahrenheit_compensated() {
        let mut adc = adc(&[Transaction::read(0, 425)]);
        let fahrenheit = reader(config())
            .read_fahrenheit_compensated(&mut adc, 68.0)
            .unwrap();

        assert_close(fahrenheit, 212.0, 0.2);
    }

    #[test]
    fn outside_range() {
        let mut adc = adc(&[Transaction::read(0, 7000)]);
        let result = reader(config()).read_celsius(&mut adc);

        assert!(matches!(
            result,
            Err(nb::Error::Other(ReadError::Range(RangeError::Millivolts(_))))
        ));
    }

    #[test]
    fn ambient_outside_range() {
        let mut adc = adc(&[Transaction::read(0, 425)]);
        let result = reader(config()).read_celsius_compensated(&mut adc, 1500.0);

        assert!(matches!(
            result,
            Err(nb::Error::Other(ReadError::Range(RangeError::Celsius(_))))
        ));
    }

    #[test]
    fn error() {
        let mut adc =
            adc(&[Transaction::read(0, 0).with_error(MockError::Io(ErrorKind::InvalidData))]);
        let result = reader(config()).read_celsius(&mut adc);

        assert!(matches!(
            result,
            Err(nb::Error::Other(ReadError::Adc(MockError::Io(
                ErrorKind::InvalidData
            ))))
        ));
    }

    // Generic callers only need the same bounds as the reader itself.
    fn read_both<Pin, Adc, ADC>(
        reader: &mut ThermocoupleReader<Pin>,
        adc: &mut Adc,
    ) -> (f64, f64)
    where
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, u16, Pin>,
        Adc::Error: fmt::Debug,
    {
        let celsius = reader.read_celsius(adc).unwrap();
        let fahrenheit = reader.read_fahrenheit(adc).unwrap();

        (celsius, fahrenheit)
    }

    #[test]
    fn read_from_generic_caller() {
        let mut adc = adc(&[Transaction::read(0, 527), Transaction::read(0, 527)]);
        let (celsius, fahrenheit) = read_both(&mut reader(config()), &mut adc);

        assert_close(celsius, 100.0, 0.1);
        assert_eq!(fahrenheit, crate::c_to_f(celsius));
    }

    #[test]
    fn free() {
        let reader = reader(config());

        assert_eq!(reader.converter(), &TypeJ::new());
        let _pin: MockChan0 = reader.free();
    }
}
