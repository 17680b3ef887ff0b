//! ITS-90 reference tables for Type J (iron/constantan) thermocouples.
//!
//! Coefficients are stored one array per subrange, lowest order first.

/// Number of coefficients in every power series.
pub const COEFFICIENTS: usize = 9;

/// Lowest thermocouple voltage accepted by the inverse lookup (mV).
pub const MV_MIN: f32 = -8.095;
/// Highest thermocouple voltage accepted by the inverse lookup (mV).
pub const MV_MAX: f32 = 69.553;

/// Lowest temperature accepted by the direct lookup (°C).
pub const C_MIN: f32 = -210.0;
/// Highest temperature accepted by the direct lookup (°C).
pub const C_MAX: f32 = 1200.0;

/// A closed interval `[lower, upper]` with the power series valid over it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T> {
    pub lower: T,
    pub upper: T,
    pub coefficients: [f64; COEFFICIENTS],
}

impl<T: PartialOrd> Segment<T> {
    /// Both bounds are inclusive.
    pub fn contains(&self, value: T) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Voltage (mV) to temperature (°C).
///
/// Adjacent segments share a bound; see
/// [`TypeJ::try_temperature_c`](crate::TypeJ::try_temperature_c) for how
/// a reading on a shared bound is assigned.
pub const INVERSE: [Segment<f32>; 3] = [
    Segment {
        lower: -8.095,
        upper: 0.000,
        coefficients: [
            0.0000000E+00,
            1.9528268E+01,
            -1.2286185E+00,
            -1.0752178E+00,
            -5.9086933E-01,
            -1.7256713E-01,
            -2.8131513E-02,
            -2.3963370E-03,
            -8.3823321E-05,
        ],
    },
    Segment {
        lower: 0.000,
        upper: 42.919,
        coefficients: [
            0.000000E+00,
            1.978425E+01,
            -2.001204E-01,
            1.036969E-02,
            -2.549687E-04,
            3.585153E-06,
            -5.344285E-08,
            5.099890E-10,
            0.000000E+00,
        ],
    },
    Segment {
        lower: 42.919,
        upper: 69.553,
        coefficients: [
            -3.11358187E+03,
            3.00543684E+02,
            -9.94773230E+00,
            1.70276630E-01,
            -1.43033468E-03,
            4.73886084E-06,
            0.00000000E+00,
            0.00000000E+00,
            0.00000000E+00,
        ],
    },
];

/// Temperature (°C) to voltage (mV).
pub const DIRECT: [Segment<f64>; 2] = [
    Segment {
        lower: -210.0,
        upper: 760.0,
        coefficients: [
            0.000000000000E+00,
            0.503811878150E-01,
            0.304758369300E-04,
            -0.856810657200E-07,
            0.132281952950E-09,
            -0.170529583370E-12,
            0.209480906970E-15,
            -0.125383953360E-18,
            0.156317256970E-22,
        ],
    },
    Segment {
        lower: 760.0,
        upper: 1200.0,
        coefficients: [
            0.296456256810E+03,
            -0.149761277860E+01,
            0.317871039240E-02,
            -0.318476867010E-05,
            0.157208190040E-08,
            -0.306913690560E-12,
            0.000000000000E+00,
            0.000000000000E+00,
            0.000000000000E+00,
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_segments_are_contiguous() {
        assert_eq!(INVERSE[0].lower, MV_MIN);
        assert_eq!(INVERSE[INVERSE.len() - 1].upper, MV_MAX);

        for w in INVERSE.windows(2) {
            assert_eq!(w[0].upper, w[1].lower);
        }
    }

    #[test]
    fn direct_segments_are_contiguous() {
        assert_eq!(DIRECT[0].lower, f64::from(C_MIN));
        assert_eq!(DIRECT[DIRECT.len() - 1].upper, f64::from(C_MAX));

        for w in DIRECT.windows(2) {
            assert_eq!(w[0].upper, w[1].lower);
        }
    }

    #[test]
    fn contains_is_inclusive() {
        let segment = INVERSE[1];

        assert!(segment.contains(0.0));
        assert!(segment.contains(42.919));
        assert!(!segment.contains(-0.001));
        assert!(!segment.contains(42.92));
        assert!(!segment.contains(f32::NAN));
    }
}
