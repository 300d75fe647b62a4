//! # Configure Service
//!
//! Runs the full pipeline for one configuration: schema, validators,
//! calculations, then narrative explanations. Stateless and synchronous;
//! safe to call from any number of request handlers at once.

use crate::calculations;
use crate::validators::{validate_main_fields, validate_propulsion};
use crate::{ConfigureError, Propulsion, UavConfiguration, UavInput, UavResult};

/// Evaluate a raw JSON configuration.
pub fn configure(raw: serde_json::Value) -> Result<UavResult, ConfigureError> {
    let input = UavInput::from_value(raw)?;
    configure_input(&input)
}

/// Evaluate an already deserialized configuration.
///
/// Schema bounds are checked first, then the main fields, then the
/// propulsion group. The first failure aborts before any calculation runs.
pub fn configure_input(input: &UavInput) -> Result<UavResult, ConfigureError> {
    input.check_schema()?;
    validate_main_fields(input)?;
    let propulsion = validate_propulsion(input)?;

    let config = UavConfiguration::new(input, propulsion);
    Ok(evaluate(&config))
}

/// Compute performance figures for a validated configuration.
#[must_use]
pub fn evaluate(config: &UavConfiguration) -> UavResult {
    let thrust = calculations::required_thrust(
        config.air_density,
        config.cruise_speed,
        config.wing_area,
        config.drag_coefficient,
    );
    let power = calculations::required_power(thrust, config.cruise_speed);
    let prop_speed = calculations::propeller_theoretical_speed(config.prop_pitch, config.rpm);

    let (flight_time_electric, flight_time_ice, flight_time_explained) = match config.propulsion {
        Propulsion::Electric(electric) => {
            let hours = calculations::flight_time_electric(
                electric.battery_capacity,
                electric.system_efficiency,
                power,
            );
            let explained = format!(
                "{hours:.2} h, from battery {:.2} Wh, efficiency {:.2}, power {power:.2} W",
                electric.battery_capacity, electric.system_efficiency,
            );
            (Some(hours), None, explained)
        }
        Propulsion::Ice(ice) => {
            let hours = calculations::flight_time_ice(
                ice.fuel_mass,
                ice.prop_efficiency,
                ice.engine_power_kw,
                ice.bsfc,
            );
            let explained = format!(
                "{hours:.2} h, from fuel {:.2} kg, BSFC {:.2} g/kWh, engine power {:.2} kW",
                ice.fuel_mass, ice.bsfc, ice.engine_power_kw,
            );
            (None, Some(hours), explained)
        }
    };

    tracing::debug!(
        system_type = %config.propulsion.system_type(),
        thrust_n = thrust,
        power_w = power,
        prop_speed_mps = prop_speed,
        flight_time_h = flight_time_electric.or(flight_time_ice),
        "Evaluated UAV configuration"
    );

    UavResult {
        required_thrust: thrust,
        required_power: power,
        prop_theoretical_speed: prop_speed,
        flight_time_electric,
        flight_time_ice,
        thrust_explained: format!("{thrust:.2} N, via T = 0.5·ρ·V²·S·Cd"),
        power_explained: format!("{power:.2} W, via P = T·V"),
        prop_speed_explained: format!(
            "{prop_speed:.2} m/s, from pitch {:.2}\" and rpm {:.2}",
            config.prop_pitch, config.rpm
        ),
        flight_time_explained,
    }
}
