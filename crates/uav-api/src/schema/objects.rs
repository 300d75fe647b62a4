//! # GraphQL Object Types

use async_graphql::SimpleObject;

use super::enums::SystemType;
use uav_domain as domain;

/// Cruise performance estimate
#[derive(Debug, Clone, SimpleObject)]
pub struct UavPerformance {
    /// Propulsion system the endurance figure refers to
    pub system_type: SystemType,
    /// Thrust required for level cruise, N
    pub required_thrust: f64,
    /// Power required for level cruise, W
    pub required_power: f64,
    /// Theoretical propeller airspeed, m/s
    pub prop_theoretical_speed: f64,
    /// Electric endurance, hours
    pub flight_time_electric: Option<f64>,
    /// ICE endurance, hours
    pub flight_time_ice: Option<f64>,
    pub thrust_explained: String,
    pub power_explained: String,
    pub prop_speed_explained: String,
    pub flight_time_explained: String,
}

impl From<domain::UavResult> for UavPerformance {
    fn from(r: domain::UavResult) -> Self {
        Self {
            system_type: r.system_type().into(),
            required_thrust: r.required_thrust,
            required_power: r.required_power,
            prop_theoretical_speed: r.prop_theoretical_speed,
            flight_time_electric: r.flight_time_electric,
            flight_time_ice: r.flight_time_ice,
            thrust_explained: r.thrust_explained,
            power_explained: r.power_explained,
            prop_speed_explained: r.prop_speed_explained,
            flight_time_explained: r.flight_time_explained,
        }
    }
}
