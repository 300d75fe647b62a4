//! # GraphQL Input Types

use async_graphql::InputObject;
use uav_domain::UavInput;

/// UAV configuration to evaluate
///
/// `systemType` is free text so that an unsupported value is reported as a
/// validation error rather than a query parse error.
#[derive(Debug, Clone, InputObject)]
pub struct UavConfigurationInput {
    /// Air density, kg/m³ (0.5 - 2.0)
    pub air_density: f64,
    /// Cruise speed, m/s (0 - 200)
    pub cruise_speed: f64,
    /// Wing area, m² (0 - 50)
    pub wing_area: f64,
    /// Drag coefficient Cd (0.01 - 2.0)
    pub drag_coefficient: f64,
    /// Propeller pitch, inches (1 - 50)
    pub prop_pitch: f64,
    /// Propeller speed, rpm (100 - 20000)
    pub rpm: f64,
    /// `electric` or `ice`
    pub system_type: String,
    /// Battery capacity, Wh (electric only)
    pub battery_capacity: Option<f64>,
    /// Electric system efficiency (electric only)
    pub system_efficiency: Option<f64>,
    /// Fuel mass, kg (ICE only)
    pub fuel_mass: Option<f64>,
    /// Propeller efficiency (ICE only)
    pub prop_efficiency: Option<f64>,
    /// Rated engine power, kW (ICE only)
    pub engine_power_kw: Option<f64>,
    /// Brake-specific fuel consumption, g/kWh (ICE only)
    pub bsfc: Option<f64>,
}

impl From<UavConfigurationInput> for UavInput {
    fn from(i: UavConfigurationInput) -> Self {
        Self {
            air_density: i.air_density,
            cruise_speed: i.cruise_speed,
            wing_area: i.wing_area,
            drag_coefficient: i.drag_coefficient,
            prop_pitch: i.prop_pitch,
            rpm: i.rpm,
            system_type: i.system_type,
            battery_capacity: i.battery_capacity,
            system_efficiency: i.system_efficiency,
            fuel_mass: i.fuel_mass,
            prop_efficiency: i.prop_efficiency,
            engine_power_kw: i.engine_power_kw,
            bsfc: i.bsfc,
        }
    }
}
