use uom::si::{
    f64::{HeatTransfer, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

/// Thermal conditions imposed on the fin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryConditions {
    /// Temperature held at the root of the fin (`x = 0`).
    pub base_temperature: ThermodynamicTemperature,

    /// Temperature of the surrounding fluid.
    pub ambient_temperature: ThermodynamicTemperature,

    /// Surface convection coefficient `h`.
    pub convection_coefficient: HeatTransfer,
}

/// 100 °C base, 25 °C air, `h` = 50 W/(m²·K).
impl Default for BoundaryConditions {
    fn default() -> Self {
        Self {
            base_temperature: ThermodynamicTemperature::new::<degree_celsius>(100.0),
            ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
            convection_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(50.0),
        }
    }
}
