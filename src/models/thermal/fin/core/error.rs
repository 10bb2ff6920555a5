use std::fmt;

use thiserror::Error;
use uom::si::f64::Length;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while evaluating a fin experiment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinError {
    /// The request named something this crate does not model.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The parameters are physically invalid or produced a degenerate result.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Unsupported selections or settings.
///
/// These are rejected before any computation starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown material `{0}`, expected one of: aluminum, copper, steel")]
    UnknownMaterial(String),

    #[error("unknown fin shape `{0}`, expected one of: rectangular, cylindrical, conical")]
    UnknownShape(String),

    #[error("a temperature profile needs at least 2 samples, got {samples}")]
    TooFewSamples { samples: usize },

    #[error("invalid measurement setting: {parameter}")]
    InvalidMeasurement {
        parameter: Parameter,
        #[source]
        source: ConstraintError,
    },
}

/// Physically invalid parameters or non-finite intermediate results.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// An input parameter violates its sign constraint.
    #[error("invalid {parameter}")]
    InvalidParameter {
        parameter: Parameter,
        #[source]
        source: ConstraintError,
    },

    /// An input or intermediate value is infinite or NaN.
    #[error("{quantity} is not finite")]
    NonFinite { quantity: &'static str },

    /// The requested position does not lie on the fin.
    #[error("position {position:?} is outside the fin (length {length:?})")]
    PositionOutOfRange { position: Length, length: Length },
}

impl DomainError {
    pub(super) fn invalid(parameter: Parameter) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { parameter, source }
    }
}

/// Names the user-facing input a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Length,
    Thickness,
    Radius,
    BaseRadius,
    TipRadius,
    Conductivity,
    ConvectionCoefficient,
    BaseTemperature,
    AmbientTemperature,
    ProbePosition,
    MaxRelativeError,
    SeedScale,
}

impl Parameter {
    /// Human-readable name, suitable for a validation message.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Parameter::Length => "fin length",
            Parameter::Thickness => "thickness",
            Parameter::Radius => "radius",
            Parameter::BaseRadius => "base radius",
            Parameter::TipRadius => "tip radius",
            Parameter::Conductivity => "thermal conductivity",
            Parameter::ConvectionCoefficient => "convection coefficient",
            Parameter::BaseTemperature => "base temperature",
            Parameter::AmbientTemperature => "ambient temperature",
            Parameter::ProbePosition => "probe position",
            Parameter::MaxRelativeError => "maximum relative error",
            Parameter::SeedScale => "seed scale",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
