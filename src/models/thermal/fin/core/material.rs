use std::{fmt, str::FromStr};

use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};

use super::ConfigError;

/// Fin materials available in the lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Material {
    #[default]
    Aluminum,
    Copper,
    Steel,
}

impl Material {
    /// Every selectable material, in display order.
    pub const ALL: [Material; 3] = [Material::Aluminum, Material::Copper, Material::Steel];

    /// Thermal conductivity, W/(m·K).
    #[must_use]
    pub fn thermal_conductivity(self) -> ThermalConductivity {
        let k = match self {
            Material::Aluminum => 205.0,
            Material::Copper => 385.0,
            Material::Steel => 50.0,
        };
        ThermalConductivity::new::<watt_per_meter_kelvin>(k)
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Material::Aluminum => "aluminum",
            Material::Copper => "copper",
            Material::Steel => "steel",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a material name, ignoring case.
///
/// `"aluminium"` is accepted as an alias for [`Material::Aluminum`].
impl FromStr for Material {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aluminum" | "aluminium" => Ok(Material::Aluminum),
            "copper" => Ok(Material::Copper),
            "steel" => Ok(Material::Steel),
            _ => Err(ConfigError::UnknownMaterial(s.to_owned())),
        }
    }
}
