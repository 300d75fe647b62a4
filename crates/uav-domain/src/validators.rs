//! Domain rules applied after the schema bounds.
//!
//! The main-field ranges deliberately overlap the schema bounds; they are
//! the second of two fail-fast stages and report [`ValidationError`]
//! rather than [`crate::SchemaError`].

use crate::{
    ElectricPropulsion, IcePropulsion, Interval, Propulsion, SystemType, UavInput,
    ValidationError,
};

pub const CRUISE_SPEED: Interval = Interval::open_closed(0.0, 200.0);
pub const WING_AREA: Interval = Interval::open_closed(0.0, 50.0);
pub const DRAG_COEFFICIENT: Interval = Interval::closed(0.01, 2.0);
pub const AIR_DENSITY: Interval = Interval::open(0.5, 2.0);
pub const POSITIVE: Interval = Interval::greater_than(0.0);
pub const EFFICIENCY: Interval = Interval::closed(0.1, 1.0);

/// Check the aerodynamic and propeller fields.
pub fn validate_main_fields(input: &UavInput) -> Result<(), ValidationError> {
    require("cruise_speed", input.cruise_speed, CRUISE_SPEED)?;
    require("wing_area", input.wing_area, WING_AREA)?;
    require("drag_coefficient", input.drag_coefficient, DRAG_COEFFICIENT)?;
    require("air_density", input.air_density, AIR_DENSITY)?;
    require("prop_pitch", input.prop_pitch, POSITIVE)?;
    require("rpm", input.rpm, POSITIVE)
}

/// Check the field group selected by `system_type` and build the matching
/// [`Propulsion`]. Fields of the other group are ignored.
pub fn validate_propulsion(input: &UavInput) -> Result<Propulsion, ValidationError> {
    let system_type: SystemType = input.system_type.parse()?;
    let required = |field: &'static str, value: Option<f64>, constraint: Interval| {
        require_present(system_type, field, value, constraint)
    };

    let propulsion = match system_type {
        SystemType::Electric => Propulsion::Electric(ElectricPropulsion {
            battery_capacity: required("battery_capacity", input.battery_capacity, POSITIVE)?,
            system_efficiency: required("system_efficiency", input.system_efficiency, EFFICIENCY)?,
        }),
        SystemType::Ice => Propulsion::Ice(IcePropulsion {
            fuel_mass: required("fuel_mass", input.fuel_mass, POSITIVE)?,
            prop_efficiency: required("prop_efficiency", input.prop_efficiency, EFFICIENCY)?,
            engine_power_kw: required("engine_power_kw", input.engine_power_kw, POSITIVE)?,
            bsfc: required("bsfc", input.bsfc, POSITIVE)?,
        }),
    };
    Ok(propulsion)
}

fn require(field: &'static str, value: f64, constraint: Interval) -> Result<(), ValidationError> {
    if constraint.contains(value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            constraint,
            value,
        })
    }
}

fn require_present(
    system_type: SystemType,
    field: &'static str,
    value: Option<f64>,
    constraint: Interval,
) -> Result<f64, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField {
        field,
        system_type,
        constraint,
    })?;
    require(field, value, constraint)?;
    Ok(value)
}
