//! Synthetic "experimental" readings.
//!
//! A reading perturbs the exact temperature by a relative error drawn from a
//! random source seeded with the probe position. The same position always
//! yields the same reading, the way a repeatable instrument would.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;
use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::meter,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{ConstraintError, StrictlyPositive, UnitInterval};

use super::{ConfigError, DomainError, Parameter};

/// Noise settings for synthetic readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementConfig {
    max_relative_error: f64,
    seed_scale: f64,
}

impl MeasurementConfig {
    /// Largest relative error applied to a reading (±3 %).
    pub const DEFAULT_MAX_RELATIVE_ERROR: f64 = 0.03;

    /// Seeds are `floor(x · scale)` with `x` in metres, so positions within
    /// 0.1 mm of each other share a reading.
    pub const DEFAULT_SEED_SCALE: f64 = 10_000.0;

    /// Creates a validated noise configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMeasurement`] if `max_relative_error` is
    /// outside `[0, 1]` (including `NaN` and infinities), or if `seed_scale`
    /// is not strictly positive and finite.
    pub fn new(max_relative_error: f64, seed_scale: f64) -> Result<Self, ConfigError> {
        let max_relative_error = UnitInterval::new(max_relative_error)
            .map_err(|source| ConfigError::InvalidMeasurement {
                parameter: Parameter::MaxRelativeError,
                source,
            })?
            .into_inner();
        let seed_scale = StrictlyPositive::new(seed_scale)
            .and_then(|scale| {
                if scale.as_ref().is_finite() {
                    Ok(scale.into_inner())
                } else {
                    Err(ConstraintError::NotFinite)
                }
            })
            .map_err(|source| ConfigError::InvalidMeasurement {
                parameter: Parameter::SeedScale,
                source,
            })?;

        Ok(Self {
            max_relative_error,
            seed_scale,
        })
    }

    #[must_use]
    pub fn max_relative_error(&self) -> f64 {
        self.max_relative_error
    }

    #[must_use]
    pub fn seed_scale(&self) -> f64 {
        self.seed_scale
    }
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self {
            max_relative_error: Self::DEFAULT_MAX_RELATIVE_ERROR,
            seed_scale: Self::DEFAULT_SEED_SCALE,
        }
    }
}

/// An exact temperature and its simulated reading.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub exact: ThermodynamicTemperature,
    pub simulated: ThermodynamicTemperature,

    /// Relative error applied to the Celsius value, `simulated / exact − 1`.
    pub relative_error: f64,

    /// Seed derived from the probe position.
    pub seed: u64,
}

/// Produces a repeatable noisy reading of `exact` taken at `position`.
///
/// The relative error is applied to the temperature in degrees Celsius, the
/// unit the lab displays readings in.
///
/// # Errors
///
/// Returns [`DomainError::NonFinite`] if `exact` or the scaled position is
/// not finite.
pub fn simulate_measurement(
    exact: ThermodynamicTemperature,
    position: Length,
    config: &MeasurementConfig,
) -> Result<Measurement, DomainError> {
    let exact_c = exact.get::<degree_celsius>();
    if !exact_c.is_finite() {
        return Err(DomainError::NonFinite {
            quantity: "exact temperature",
        });
    }

    let seed = seed_for(position, config.seed_scale)?;
    let max = config.max_relative_error;
    let relative_error = StdRng::seed_from_u64(seed).random_range(-max..=max);

    debug!(seed, relative_error, "synthetic reading drawn");

    Ok(Measurement {
        exact,
        simulated: ThermodynamicTemperature::new::<degree_celsius>(
            exact_c * (1.0 + relative_error),
        ),
        relative_error,
        seed,
    })
}

/// Truncates the scaled position to an integer seed.
///
/// Negative positions wrap into the upper half of the `u64` range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seed_for(position: Length, scale: f64) -> Result<u64, DomainError> {
    let scaled = (position.get::<meter>() * scale).floor();
    if !scaled.is_finite() {
        return Err(DomainError::NonFinite {
            quantity: Parameter::ProbePosition.name(),
        });
    }
    Ok(scaled as i64 as u64)
}
