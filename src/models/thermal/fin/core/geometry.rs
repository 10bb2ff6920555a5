use std::{fmt, str::FromStr};

use uom::si::{f64::Length, length::meter};

use super::{ConfigError, TipCondition};

/// Cross-section family of a fin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shape {
    Rectangular,
    Cylindrical,
    Conical,
}

impl Shape {
    /// Every selectable shape, in display order.
    pub const ALL: [Shape; 3] = [Shape::Rectangular, Shape::Cylindrical, Shape::Conical];

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Shape::Rectangular => "rectangular",
            Shape::Cylindrical => "cylindrical",
            Shape::Conical => "conical",
        }
    }

    /// Boundary condition assumed at the free end of this shape.
    #[must_use]
    pub fn tip(self) -> TipCondition {
        match self {
            Shape::Rectangular | Shape::Conical => TipCondition::Adiabatic,
            Shape::Cylindrical => TipCondition::Convective,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangular" => Ok(Shape::Rectangular),
            "cylindrical" => Ok(Shape::Cylindrical),
            "conical" => Ok(Shape::Conical),
            _ => Err(ConfigError::UnknownShape(s.to_owned())),
        }
    }
}

/// Fin dimensions, tagged by cross-section.
///
/// Values are not validated here; [`FinModel::new`](super::FinModel::new)
/// checks that every dimension is strictly positive.
///
/// A conical fin is expected to taper (`tip_radius <= base_radius`), but a
/// flared cone is accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "shape", rename_all = "lowercase"))]
pub enum FinGeometry {
    /// Square bar of side `thickness`.
    Rectangular { length: Length, thickness: Length },

    /// Pin fin of constant `radius`.
    Cylindrical { length: Length, radius: Length },

    /// Tapered pin fin, modeled with its mean radius.
    Conical {
        length: Length,
        base_radius: Length,
        tip_radius: Length,
    },
}

impl FinGeometry {
    /// The lab's starting dimensions for the given shape.
    ///
    /// All shapes are 100 mm long. The bar is 5 mm thick, the pin has a 5 mm
    /// radius, and the cone tapers from 5 mm to 1 mm.
    #[must_use]
    pub fn lab_default(shape: Shape) -> Self {
        let length = Length::new::<meter>(0.1);
        let five_mm = Length::new::<meter>(0.005);
        match shape {
            Shape::Rectangular => FinGeometry::Rectangular {
                length,
                thickness: five_mm,
            },
            Shape::Cylindrical => FinGeometry::Cylindrical {
                length,
                radius: five_mm,
            },
            Shape::Conical => FinGeometry::Conical {
                length,
                base_radius: five_mm,
                tip_radius: Length::new::<meter>(0.001),
            },
        }
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            FinGeometry::Rectangular { .. } => Shape::Rectangular,
            FinGeometry::Cylindrical { .. } => Shape::Cylindrical,
            FinGeometry::Conical { .. } => Shape::Conical,
        }
    }

    /// Distance from the base to the tip.
    #[must_use]
    pub fn length(&self) -> Length {
        match *self {
            FinGeometry::Rectangular { length, .. }
            | FinGeometry::Cylindrical { length, .. }
            | FinGeometry::Conical { length, .. } => length,
        }
    }
}

impl Default for FinGeometry {
    fn default() -> Self {
        Self::lab_default(Shape::Rectangular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::millimeter;

    #[test]
    fn lab_defaults_match_their_shape() {
        for shape in Shape::ALL {
            let geometry = FinGeometry::lab_default(shape);
            assert_eq!(geometry.shape(), shape);
            assert_relative_eq!(geometry.length().get::<millimeter>(), 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn parse_shapes() {
        assert_eq!("Conical".parse::<Shape>(), Ok(Shape::Conical));
        assert_eq!(
            "triangular".parse::<Shape>(),
            Err(ConfigError::UnknownShape("triangular".into()))
        );
    }

    #[test]
    fn only_the_pin_has_a_convective_tip() {
        assert_eq!(Shape::Rectangular.tip(), TipCondition::Adiabatic);
        assert_eq!(Shape::Cylindrical.tip(), TipCondition::Convective);
        assert_eq!(Shape::Conical.tip(), TipCondition::Adiabatic);
    }
}
