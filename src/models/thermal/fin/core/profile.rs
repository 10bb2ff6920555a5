use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::meter,
    thermodynamic_temperature::kelvin,
};

use super::ConfigError;

/// Sampling resolution for a [`TemperatureProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileConfig {
    samples: usize,
}

impl ProfileConfig {
    /// Sample count used when none is given.
    pub const DEFAULT_SAMPLES: usize = 300;

    /// Creates a config producing `samples` evenly spaced points.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooFewSamples`] if `samples < 2`, since both the
    /// base and the tip must be sampled.
    pub fn new(samples: usize) -> Result<Self, ConfigError> {
        if samples < 2 {
            return Err(ConfigError::TooFewSamples { samples });
        }
        Ok(Self { samples })
    }

    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Positions of every sample, from the base (`0`) to the tip (`length`).
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn positions(self, length: Length) -> impl Iterator<Item = Length> {
        let last = (self.samples - 1) as f64;
        (0..self.samples).map(move |i| {
            if i == self.samples - 1 {
                length
            } else {
                length * (i as f64 / last)
            }
        })
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            samples: Self::DEFAULT_SAMPLES,
        }
    }
}

/// One point of a [`TemperatureProfile`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileSample {
    pub position: Length,
    pub temperature: ThermodynamicTemperature,
}

/// Temperatures sampled along a fin, ordered from base to tip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureProfile {
    samples: Vec<ProfileSample>,
}

impl TemperatureProfile {
    pub(super) fn from_samples(samples: Vec<ProfileSample>) -> Self {
        Self { samples }
    }

    #[must_use]
    pub fn samples(&self) -> &[ProfileSample] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProfileSample> {
        self.samples.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Linearly interpolates the temperature at `position`.
    ///
    /// Positions before the first sample or past the last one take the
    /// nearest end value. Returns `None` for an empty profile or a `NaN`
    /// position.
    #[must_use]
    pub fn interpolate(&self, position: Length) -> Option<ThermodynamicTemperature> {
        let x = position.get::<meter>();
        if x.is_nan() {
            return None;
        }

        let first = self.samples.first()?;
        let last = self.samples.last()?;
        if x <= first.position.get::<meter>() {
            return Some(first.temperature);
        }
        if x >= last.position.get::<meter>() {
            return Some(last.temperature);
        }

        // At least one sample lies at or below `x` and one above it.
        let upper = self.samples.partition_point(|s| s.position.get::<meter>() <= x);
        let (lo, hi) = (&self.samples[upper - 1], &self.samples[upper]);

        let (x0, x1) = (lo.position.get::<meter>(), hi.position.get::<meter>());
        let (t0, t1) = (lo.temperature.get::<kelvin>(), hi.temperature.get::<kelvin>());
        let t = t0 + (t1 - t0) * (x - x0) / (x1 - x0);

        Some(ThermodynamicTemperature::new::<kelvin>(t))
    }
}

impl<'a> IntoIterator for &'a TemperatureProfile {
    type Item = &'a ProfileSample;
    type IntoIter = std::slice::Iter<'a, ProfileSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
