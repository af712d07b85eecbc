use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Temperature scale of a reading.
///
/// Parses case-insensitively from its variant name, so it can be taken
/// directly from configuration or command-line arguments.
///
/// # Examples
///
/// ```
/// use fixkit_core::temperature::TemperatureUnit;
///
/// let unit: TemperatureUnit = "fahrenheit".parse().unwrap();
/// assert_eq!(unit, TemperatureUnit::Fahrenheit);
/// assert_eq!(TemperatureUnit::default(), TemperatureUnit::Celsius);
/// ```
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    #[display("celsius")]
    Celsius,
    #[display("fahrenheit")]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Converts `value` from `self` to `to`, clamping the result to `[low, high]`.
    ///
    /// A same-unit conversion only clamps.
    #[must_use]
    pub fn convert<T>(self, to: TemperatureUnit, value: T, low: T, high: T) -> T
    where
        T: Float,
    {
        match (self, to) {
            (Self::Celsius, Self::Fahrenheit) => celsius_to_fahrenheit(value, low, high),
            (Self::Fahrenheit, Self::Celsius) => fahrenheit_to_celsius(value, low, high),
            (Self::Celsius, Self::Celsius) | (Self::Fahrenheit, Self::Fahrenheit) => {
                clamp_to_range(value, low, high)
            }
        }
    }
}

fn constant<T>(value: f64) -> T
where
    T: Float,
{
    T::from(value).unwrap_or_else(T::nan)
}

/// Restricts `value` to `[low, high]`.
///
/// The low bound is checked first: with `low > high`, a value below `low`
/// yields `low` and any other value above `high` yields `high`. NaN passes
/// through unchanged.
///
/// # Examples
///
/// ```
/// # use fixkit_core::temperature::clamp_to_range;
/// assert_eq!(clamp_to_range(5.0_f32, 0.0, 10.0), 5.0);
/// assert_eq!(clamp_to_range(-1.0_f32, 0.0, 10.0), 0.0);
/// assert_eq!(clamp_to_range(11.0_f32, 0.0, 10.0), 10.0);
/// ```
#[must_use]
pub fn clamp_to_range<T>(value: T, low: T, high: T) -> T
where
    T: Float,
{
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// Converts Celsius to Fahrenheit (`t * 1.8 + 32`), clamped to `[low, high]`.
#[must_use]
pub fn celsius_to_fahrenheit<T>(celsius: T, low: T, high: T) -> T
where
    T: Float,
{
    let fahrenheit = celsius * constant(1.8) + constant(32.0);
    clamp_to_range(fahrenheit, low, high)
}

/// Converts Fahrenheit to Celsius (`(t - 32) / 1.8`), clamped to `[low, high]`.
#[must_use]
pub fn fahrenheit_to_celsius<T>(fahrenheit: T, low: T, high: T) -> T
where
    T: Float,
{
    let celsius = (fahrenheit - constant(32.0)) / constant(1.8);
    clamp_to_range(celsius, low, high)
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;

    const WIDE: f64 = 1e9;

    #[test]
    fn test_fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0_f64, -WIDE, WIDE), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0_f64, -WIDE, WIDE), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0_f64, -WIDE, WIDE), -40.0);
        assert_eq!(fahrenheit_to_celsius(32.0_f64, -WIDE, WIDE), 0.0);
        assert_eq!(fahrenheit_to_celsius(212.0_f64, -WIDE, WIDE), 100.0);
        assert_eq!(fahrenheit_to_celsius(-40.0_f64, -WIDE, WIDE), -40.0);
    }

    #[test]
    fn test_result_is_clamped() {
        assert_eq!(celsius_to_fahrenheit(1000.0_f32, 0.0, 100.0), 100.0);
        assert_eq!(celsius_to_fahrenheit(-1000.0_f32, 0.0, 100.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(1000.0_f32, -10.0, 60.0), 60.0);
        assert_eq!(fahrenheit_to_celsius(-1000.0_f32, -10.0, 60.0), -10.0);
    }

    #[test]
    fn test_clamp_bounds_are_inclusive() {
        assert_eq!(clamp_to_range(0.0_f32, 0.0, 100.0), 0.0);
        assert_eq!(clamp_to_range(100.0_f32, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_inverted_range_checks_low_first() {
        // low = 10, high = 0
        assert_eq!(clamp_to_range(-5.0_f64, 10.0, 0.0), 10.0);
        assert_eq!(clamp_to_range(5.0_f64, 10.0, 0.0), 10.0);
        assert_eq!(clamp_to_range(15.0_f64, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_nan_passes_through() {
        assert!(clamp_to_range(f32::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let mut rng = Pcg32::seed_from_u64(1234);
        for _ in 0..500 {
            let celsius = rng.random_range(-1e6..1e6);
            let fahrenheit = celsius_to_fahrenheit(celsius, -WIDE, WIDE);
            let back = fahrenheit_to_celsius(fahrenheit, -WIDE, WIDE);
            assert!(
                (back - celsius).abs() <= 1e-9 * celsius.abs().max(1.0),
                "{celsius} -> {fahrenheit} -> {back}"
            );
        }
    }

    mod unit {
        use super::*;

        #[test]
        fn test_parse_and_display() {
            assert_eq!(
                "Celsius".parse::<TemperatureUnit>().unwrap(),
                TemperatureUnit::Celsius
            );
            assert_eq!(
                "fahrenheit".parse::<TemperatureUnit>().unwrap(),
                TemperatureUnit::Fahrenheit
            );
            assert!("kelvin".parse::<TemperatureUnit>().is_err());
            assert_eq!(TemperatureUnit::Fahrenheit.to_string(), "fahrenheit");
        }

        #[test]
        fn test_serde_uses_lowercase_names() {
            let json = serde_json::to_string(&TemperatureUnit::Celsius).unwrap();
            assert_eq!(json, "\"celsius\"");
            let unit: TemperatureUnit = serde_json::from_str("\"fahrenheit\"").unwrap();
            assert_eq!(unit, TemperatureUnit::Fahrenheit);
        }

        #[test]
        fn test_convert_dispatches_by_units() {
            let c = TemperatureUnit::Celsius;
            let f = TemperatureUnit::Fahrenheit;
            assert_eq!(c.convert(f, 100.0_f64, -WIDE, WIDE), 212.0);
            assert_eq!(f.convert(c, 212.0_f64, -WIDE, WIDE), 100.0);
            assert_eq!(c.convert(c, 150.0_f64, 0.0, 100.0), 100.0);
            assert_eq!(f.convert(f, 50.0_f64, 0.0, 100.0), 50.0);
        }
    }
}
