//! Steady-state fin conduction lab.
//!
//! This module provides the [`FinExperiment`] model, which evaluates a fin's
//! temperature profile, probes it at one position, and returns both the exact
//! temperature and a synthetic "measured" reading of it.
//!
//! The computation lives in the internal `core` module; [`FinExperiment`] is
//! a thin [`twine_core::Model`] adapter over it. [`compute_fin_result`] runs
//! the model with its default configuration.
//!
//! # Example
//!
//! ```
//! use twine_fin::models::thermal::fin::{
//!     BoundaryConditions, FinGeometry, Material, ProbePosition, compute_fin_result,
//! };
//! use uom::si::thermodynamic_temperature::degree_celsius;
//!
//! let geometry = FinGeometry::default();
//! let material: Material = "copper".parse().unwrap();
//! let probe = ProbePosition::from_millimeters(40.0);
//!
//! let result =
//!     compute_fin_result(&geometry, material, &BoundaryConditions::default(), probe).unwrap();
//!
//! assert_eq!(result.profile.len(), 300);
//! let exact = result.exact_temperature.get::<degree_celsius>();
//! let measured = result.simulated_temperature.get::<degree_celsius>();
//! assert!(exact > 25.0 && exact < 100.0);
//! assert!((measured - exact).abs() <= 0.03 * exact + 1e-9);
//! ```

mod core;

pub use self::core::{
    BoundaryConditions, ConfigError, DomainError, FinError, FinGeometry, FinModel, Material,
    Measurement, MeasurementConfig, Parameter, ProfileConfig, ProfileSample, Shape,
    TemperatureProfile, TipCondition, simulate_measurement,
};

use std::ops::Deref;

use twine_core::Model;
use uom::{
    ConstZero,
    si::{
        f64::{Length, ThermodynamicTemperature},
        length::millimeter,
    },
};

/// Where along the fin the temperature is probed, measured from the base.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbePosition(Length);

impl ProbePosition {
    #[must_use]
    pub fn new(position: Length) -> Self {
        Self(position)
    }

    /// Creates a position from a distance in millimetres.
    #[must_use]
    pub fn from_millimeters(position: f64) -> Self {
        Self(Length::new::<millimeter>(position))
    }

    /// Creates a position limited to the extent of `geometry`.
    ///
    /// A `NaN` position stays `NaN` and is rejected when evaluated.
    #[must_use]
    pub fn clamped(position: Length, geometry: &FinGeometry) -> Self {
        if position < Length::ZERO {
            Self(Length::ZERO)
        } else if position > geometry.length() {
            Self(geometry.length())
        } else {
            Self(position)
        }
    }
}

impl Deref for ProbePosition {
    type Target = Length;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Everything the lab user selects for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinInput {
    pub geometry: FinGeometry,
    pub material: Material,
    pub boundary: BoundaryConditions,
    pub probe_position: ProbePosition,
}

/// The lab's starting point: a 100 mm aluminium bar probed at 40 mm.
impl Default for FinInput {
    fn default() -> Self {
        Self {
            geometry: FinGeometry::default(),
            material: Material::default(),
            boundary: BoundaryConditions::default(),
            probe_position: ProbePosition::from_millimeters(40.0),
        }
    }
}

/// Output of one [`FinExperiment`] evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinResult {
    /// Temperature along the whole fin, base to tip.
    pub profile: TemperatureProfile,

    /// Closed-form temperature at the probe position.
    pub exact_temperature: ThermodynamicTemperature,

    /// Synthetic reading of the exact temperature.
    pub simulated_temperature: ThermodynamicTemperature,

    /// Relative error applied to produce the reading.
    pub relative_error: f64,

    /// Characteristic parameter `m` of the fin, in 1/m.
    pub characteristic_parameter: f64,
}

/// Settings shared by every evaluation of a [`FinExperiment`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExperimentConfig {
    pub profile: ProfileConfig,
    pub measurement: MeasurementConfig,
}

/// Fin lab model: exact profile, exact probe value and a synthetic reading.
///
/// Each call is independent and deterministic, so one experiment can be
/// shared freely between callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinExperiment {
    config: ExperimentConfig,
}

impl FinExperiment {
    #[must_use]
    pub fn new(config: ExperimentConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }
}

impl Model for FinExperiment {
    type Input = FinInput;
    type Output = FinResult;
    type Error = FinError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let model = FinModel::new(&input.geometry, input.material, &input.boundary)?;
        let profile = model.profile(self.config.profile)?;

        let position = *input.probe_position;
        let exact = model.temperature_at(position)?;
        let reading = simulate_measurement(exact, position, &self.config.measurement)?;

        Ok(FinResult {
            profile,
            exact_temperature: reading.exact,
            simulated_temperature: reading.simulated,
            relative_error: reading.relative_error,
            characteristic_parameter: model.characteristic_parameter(),
        })
    }
}

/// Evaluates a fin with the default [`ExperimentConfig`].
///
/// # Errors
///
/// Returns a [`FinError`] if the parameters are invalid or the probe position
/// lies outside the fin.
pub fn compute_fin_result(
    geometry: &FinGeometry,
    material: Material,
    boundary: &BoundaryConditions,
    probe_position: ProbePosition,
) -> Result<FinResult, FinError> {
    FinExperiment::default().call(&FinInput {
        geometry: *geometry,
        material,
        boundary: *boundary,
        probe_position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin, length::meter,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn probe_at_base_reads_base_temperature() {
        let input = FinInput {
            probe_position: ProbePosition::new(Length::ZERO),
            ..FinInput::default()
        };
        let result = FinExperiment::default().call(&input).unwrap();

        assert_relative_eq!(result.exact_temperature.get::<degree_celsius>(), 100.0, epsilon = 1e-9);
        assert_eq!(result.profile.samples()[0].temperature, result.exact_temperature);
    }

    #[test]
    fn exact_value_sits_on_the_profile() {
        let result = FinExperiment::default().call(&FinInput::default()).unwrap();

        let interpolated = result
            .profile
            .interpolate(*FinInput::default().probe_position)
            .unwrap();
        assert_relative_eq!(
            interpolated.get::<degree_celsius>(),
            result.exact_temperature.get::<degree_celsius>(),
            epsilon = 1e-3
        );
    }

    #[test]
    fn repeated_calls_agree() {
        let experiment = FinExperiment::default();
        let input = FinInput::default();
        assert_eq!(experiment.call(&input), experiment.call(&input));
    }

    #[test]
    fn respects_profile_resolution() {
        let experiment = FinExperiment::new(ExperimentConfig {
            profile: ProfileConfig::new(25).unwrap(),
            ..ExperimentConfig::default()
        });
        let result = experiment.call(&FinInput::default()).unwrap();
        assert_eq!(result.profile.len(), 25);
    }

    #[test]
    fn errors_are_surfaced_not_rendered() {
        let input = FinInput {
            boundary: BoundaryConditions {
                convection_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0),
                ..BoundaryConditions::default()
            },
            ..FinInput::default()
        };
        assert!(matches!(
            FinExperiment::default().call(&input),
            Err(FinError::Domain(DomainError::InvalidParameter {
                parameter: Parameter::ConvectionCoefficient,
                ..
            }))
        ));

        let input = FinInput {
            probe_position: ProbePosition::from_millimeters(150.0),
            ..FinInput::default()
        };
        assert!(matches!(
            FinExperiment::default().call(&input),
            Err(FinError::Domain(DomainError::PositionOutOfRange { .. }))
        ));
    }

    #[test]
    fn clamps_to_the_fin() {
        let geometry = FinGeometry::default();
        let at = |m: f64| ProbePosition::clamped(Length::new::<meter>(m), &geometry);

        assert_eq!(*at(-0.01), Length::ZERO);
        assert_eq!(*at(0.25), geometry.length());
        assert_eq!(*at(0.04), Length::new::<meter>(0.04));
    }
}
