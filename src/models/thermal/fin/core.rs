//! Closed-form steady-state fin conduction.
//!
//! A [`FinModel`] is built once from a geometry, a material and boundary
//! conditions. Construction validates every input and reduces the shape to
//! its characteristic parameter `m`. Evaluation is then a direct closed-form
//! expression in `m`, the fin length and the position.

mod boundary;
mod error;
mod geometry;
mod material;
mod measurement;
mod profile;
mod tip;

pub use boundary::BoundaryConditions;
pub use error::{ConfigError, DomainError, FinError, Parameter};
pub use geometry::{FinGeometry, Shape};
pub use material::Material;
pub use measurement::{Measurement, MeasurementConfig, simulate_measurement};
pub use profile::{ProfileConfig, ProfileSample, TemperatureProfile};
pub use tip::TipCondition;

use std::f64::consts::PI;

use tracing::{debug, warn};
use uom::si::{
    f64::{
        Area, HeatTransfer, Length, Ratio, TemperatureInterval, ThermalConductivity,
        ThermodynamicTemperature,
    },
    area::square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::{TemperatureDifference, TemperatureOffset},
};

/// Relative distance past the tip still evaluated as the tip itself.
const TIP_SNAP_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Steady-state temperature model of a single fin.
///
/// The excess temperature `θ(x) = T(x) − T_ambient` follows
/// `θ(x) = θ_b · f(m, L, x)`, where `f` depends on the [`TipCondition`] of the
/// shape and the characteristic parameter `m` depends on its cross-section:
///
/// | Shape       | `m²`                                                    |
/// |-------------|---------------------------------------------------------|
/// | Rectangular | `h·P / (k·S)` with `P = 4e`, `S = e²`                   |
/// | Cylindrical | `4h / (k·r)`                                            |
/// | Conical     | `h·P / (k·S)` with `P = 2π·r̄`, `S = π·r̄²`, `r̄ = (r_b + r_t)/2` |
///
/// # Example
///
/// ```
/// use twine_fin::models::thermal::fin::{BoundaryConditions, FinGeometry, FinModel, Material};
/// use uom::si::{f64::Length, length::meter, thermodynamic_temperature::degree_celsius};
///
/// let model = FinModel::new(
///     &FinGeometry::default(),
///     Material::Aluminum,
///     &BoundaryConditions::default(),
/// )
/// .unwrap();
///
/// let base = model.temperature_at(Length::new::<meter>(0.0)).unwrap();
/// assert!((base.get::<degree_celsius>() - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FinModel {
    shape: Shape,
    length: Constrained<Length, StrictlyPositive>,
    m: f64,
    m_l: f64,
    ambient: ThermodynamicTemperature,
    base_excess: TemperatureInterval,
}

impl FinModel {
    /// Validates the inputs and reduces them to a solvable model.
    ///
    /// Tip and base radii of a cone are not ordered against each other, and
    /// no dimension is checked against the fin length.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidParameter`] if a dimension, the
    /// conductivity or the convection coefficient is not strictly positive,
    /// and [`DomainError::NonFinite`] if a temperature, `m` or `m·L` is not
    /// finite.
    pub fn new(
        geometry: &FinGeometry,
        material: Material,
        boundary: &BoundaryConditions,
    ) -> Result<Self, DomainError> {
        let length = positive(Parameter::Length, geometry.length())?;
        let k = positive(Parameter::Conductivity, material.thermal_conductivity())?;
        let h = positive(Parameter::ConvectionCoefficient, boundary.convection_coefficient)?;

        let base = finite(Parameter::BaseTemperature, boundary.base_temperature)?;
        let ambient = finite(Parameter::AmbientTemperature, boundary.ambient_temperature)?;

        let m_squared = match *geometry {
            FinGeometry::Rectangular { thickness, .. } => {
                let e = positive(Parameter::Thickness, thickness)?.into_inner();
                perimeter_over_area(h.into_inner(), k.into_inner(), e * 4.0, e * e)
            }
            FinGeometry::Cylindrical { radius, .. } => {
                let r = positive(Parameter::Radius, radius)?.into_inner();
                4.0 * h.as_ref().get::<watt_per_square_meter_kelvin>()
                    / (k.as_ref().get::<watt_per_meter_kelvin>() * r.get::<meter>())
            }
            FinGeometry::Conical {
                base_radius,
                tip_radius,
                ..
            } => {
                let r_base = positive(Parameter::BaseRadius, base_radius)?;
                let r_tip = positive(Parameter::TipRadius, tip_radius)?;
                if tip_radius > base_radius {
                    warn!(
                        base_radius_m = base_radius.get::<meter>(),
                        tip_radius_m = tip_radius.get::<meter>(),
                        "conical fin widens toward its tip"
                    );
                }
                let r_mean = (r_base + r_tip).into_inner() * 0.5;
                perimeter_over_area(
                    h.into_inner(),
                    k.into_inner(),
                    r_mean * (2.0 * PI),
                    r_mean * r_mean * PI,
                )
            }
        };

        let m = m_squared.sqrt();
        if !m.is_finite() {
            return Err(DomainError::NonFinite {
                quantity: "characteristic parameter m",
            });
        }
        let m_l = m * length.as_ref().get::<meter>();
        if !m_l.is_finite() {
            return Err(DomainError::NonFinite { quantity: "m·L" });
        }

        let shape = geometry.shape();
        debug!(%shape, %material, m, m_l, "fin model built");

        Ok(Self {
            shape,
            length,
            m,
            m_l,
            ambient,
            base_excess: base.minus(ambient),
        })
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn length(&self) -> Length {
        *self.length.as_ref()
    }

    /// Characteristic parameter `m`, in 1/m.
    #[must_use]
    pub fn characteristic_parameter(&self) -> f64 {
        self.m
    }

    /// Dimensionless fin length `m·L`.
    #[must_use]
    pub fn dimensionless_length(&self) -> f64 {
        self.m_l
    }

    /// Evaluates the temperature at `position`, measured from the base.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::PositionOutOfRange`] if `position` is not within
    /// `[0, length]` (including `NaN`). Positions a few ulps past the tip are
    /// evaluated at the tip. Returns [`DomainError::NonFinite`] if the
    /// result is not finite.
    pub fn temperature_at(&self, position: Length) -> Result<ThermodynamicTemperature, DomainError> {
        let length = self.length();
        let l = length.get::<meter>();
        let x = match position.get::<meter>() {
            // Positions built in other units can land a few ulps past the tip.
            x if x > l && x <= l * (1.0 + TIP_SNAP_TOLERANCE) => l,
            x => x,
        };
        if !(0.0..=l).contains(&x) {
            return Err(DomainError::PositionOutOfRange { position, length });
        }

        let excess = self.shape.tip().excess_ratio(self.m_l, self.m * x);
        let temperature = self.ambient.plus(self.base_excess * excess);
        if !temperature.get::<kelvin>().is_finite() {
            return Err(DomainError::NonFinite {
                quantity: "fin temperature",
            });
        }
        Ok(temperature)
    }

    /// Samples the temperature at evenly spaced positions from base to tip.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if any sample cannot be evaluated.
    pub fn profile(&self, config: ProfileConfig) -> Result<TemperatureProfile, DomainError> {
        config
            .positions(self.length())
            .map(|position| {
                self.temperature_at(position)
                    .map(|temperature| ProfileSample {
                        position,
                        temperature,
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(TemperatureProfile::from_samples)
    }
}

fn positive<T>(parameter: Parameter, value: T) -> Result<Constrained<T, StrictlyPositive>, DomainError>
where
    T: PartialOrd + num_traits::Zero,
{
    StrictlyPositive::new(value).map_err(DomainError::invalid(parameter))
}

fn finite(
    parameter: Parameter,
    value: ThermodynamicTemperature,
) -> Result<ThermodynamicTemperature, DomainError> {
    if value.get::<kelvin>().is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite {
            quantity: parameter.name(),
        })
    }
}

/// Returns `m² = h·P / (k·S)` in 1/m².
fn perimeter_over_area(
    h: HeatTransfer,
    k: ThermalConductivity,
    perimeter: Length,
    area: Area,
) -> f64 {
    let hp_over_k: Ratio = h * perimeter / k;
    hp_over_k.get::<ratio>() / area.get::<square_meter>()
}
