//! Extensions to [`uom`] for temperature-excess arithmetic.
//!
//! Fin solutions are written in terms of the excess temperature
//! `θ = T − T_ambient`, which is a [`TemperatureInterval`], not an absolute
//! [`ThermodynamicTemperature`]. Subtracting two absolute temperatures in
//! [`uom`] yields another absolute temperature
//! ([#380](https://github.com/iliekturtles/uom/issues/380)), so the
//! conversions are made explicit here.
//!
//! ```
//! use twine_fin::support::units::{TemperatureDifference, TemperatureOffset};
//! use uom::si::{
//!     f64::ThermodynamicTemperature,
//!     temperature_interval::kelvin as delta_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let base = ThermodynamicTemperature::new::<degree_celsius>(100.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//!
//! let theta_b = base.minus(ambient);
//! assert!((theta_b.get::<delta_kelvin>() - 75.0).abs() < 1e-9);
//!
//! let midway = ambient.plus(theta_b * 0.5);
//! assert!((midway.get::<degree_celsius>() - 62.5).abs() < 1e-9);
//! ```

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Computes the interval between two absolute temperatures.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

/// Shifts an absolute temperature by an interval.
pub trait TemperatureOffset {
    /// Returns `self + delta` as an absolute temperature.
    #[must_use]
    fn plus(self, delta: TemperatureInterval) -> Self;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

impl TemperatureOffset for ThermodynamicTemperature {
    fn plus(self, delta: TemperatureInterval) -> Self {
        ThermodynamicTemperature::new::<abs_kelvin>(
            self.get::<abs_kelvin>() + delta.get::<delta_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    };

    #[test]
    fn excess_over_ambient() {
        let base = ThermodynamicTemperature::new::<degree_celsius>(100.0);
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);

        assert_relative_eq!(base.minus(ambient).get::<delta_celsius>(), 75.0, epsilon = 1e-9);
        assert_relative_eq!(ambient.minus(base).get::<delta_celsius>(), -75.0, epsilon = 1e-9);

        // 25 °C and 77 °F are the same temperature.
        let in_f = ThermodynamicTemperature::new::<degree_fahrenheit>(77.0);
        assert_relative_eq!(in_f.minus(ambient).get::<delta_celsius>(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn offset_roundtrips_difference() {
        let base = ThermodynamicTemperature::new::<degree_celsius>(100.0);
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);

        let restored = ambient.plus(base.minus(ambient));
        assert_relative_eq!(restored.get::<degree_celsius>(), 100.0, epsilon = 1e-9);
    }
}
