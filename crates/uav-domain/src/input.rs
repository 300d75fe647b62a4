//! Raw configuration record and its schema-level bounds.
//!
//! [`UavInput`] mirrors the wire format one-to-one: flat, with the
//! propulsion fields optional and `system_type` kept as free text so that
//! an unknown value reaches the validators instead of failing here.

use serde::{Deserialize, Serialize};

use crate::{Interval, SchemaError};

/// Declared field ranges. Every bound is exclusive.
pub mod bounds {
    use crate::Interval;

    pub const AIR_DENSITY: Interval = Interval::open(0.5, 2.0);
    pub const CRUISE_SPEED: Interval = Interval::open(0.0, 200.0);
    pub const WING_AREA: Interval = Interval::open(0.0, 50.0);
    pub const DRAG_COEFFICIENT: Interval = Interval::open(0.01, 2.0);
    pub const PROP_PITCH: Interval = Interval::open(1.0, 50.0);
    pub const RPM: Interval = Interval::open(100.0, 20_000.0);

    pub const BATTERY_CAPACITY: Interval = Interval::open(0.0, 50_000.0);
    pub const SYSTEM_EFFICIENCY: Interval = Interval::open(0.1, 1.0);

    pub const FUEL_MASS: Interval = Interval::open(0.0, 100.0);
    pub const PROP_EFFICIENCY: Interval = Interval::open(0.1, 1.0);
    pub const ENGINE_POWER_KW: Interval = Interval::open(0.1, 500.0);
    pub const BSFC: Interval = Interval::open(50.0, 500.0);
}

/// UAV configuration as received from a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UavInput {
    /// kg/m³ (1.225 at sea level)
    pub air_density: f64,
    /// m/s
    pub cruise_speed: f64,
    /// m²
    pub wing_area: f64,
    pub drag_coefficient: f64,

    /// inches
    pub prop_pitch: f64,
    pub rpm: f64,

    /// `electric` or `ice`
    pub system_type: String,

    // Electric
    pub battery_capacity: Option<f64>,
    pub system_efficiency: Option<f64>,

    // ICE
    pub fuel_mass: Option<f64>,
    pub prop_efficiency: Option<f64>,
    pub engine_power_kw: Option<f64>,
    pub bsfc: Option<f64>,
}

impl UavInput {
    /// Deserialize from an already parsed JSON document.
    ///
    /// Only a JSON object is accepted; serde would otherwise also take a
    /// positional array of values.
    pub fn from_value(raw: serde_json::Value) -> Result<Self, SchemaError> {
        match raw {
            serde_json::Value::Object(_) => Ok(serde_json::from_value(raw)?),
            _ => Err(SchemaError::Malformed("expected a JSON object".to_string())),
        }
    }

    /// Deserialize from JSON bytes
    pub fn from_slice(raw: &[u8]) -> Result<Self, SchemaError> {
        Self::from_value(serde_json::from_slice(raw)?)
    }

    /// Check every present field against its declared range.
    ///
    /// Fields are checked in declaration order and the first violation is
    /// returned. Optional fields are checked only when present, whichever
    /// propulsion system they belong to.
    pub fn check_schema(&self) -> Result<(), SchemaError> {
        check("air_density", self.air_density, bounds::AIR_DENSITY)?;
        check("cruise_speed", self.cruise_speed, bounds::CRUISE_SPEED)?;
        check("wing_area", self.wing_area, bounds::WING_AREA)?;
        check("drag_coefficient", self.drag_coefficient, bounds::DRAG_COEFFICIENT)?;
        check("prop_pitch", self.prop_pitch, bounds::PROP_PITCH)?;
        check("rpm", self.rpm, bounds::RPM)?;

        check_optional("battery_capacity", self.battery_capacity, bounds::BATTERY_CAPACITY)?;
        check_optional("system_efficiency", self.system_efficiency, bounds::SYSTEM_EFFICIENCY)?;

        check_optional("fuel_mass", self.fuel_mass, bounds::FUEL_MASS)?;
        check_optional("prop_efficiency", self.prop_efficiency, bounds::PROP_EFFICIENCY)?;
        check_optional("engine_power_kw", self.engine_power_kw, bounds::ENGINE_POWER_KW)?;
        check_optional("bsfc", self.bsfc, bounds::BSFC)
    }
}

fn check(field: &'static str, value: f64, bounds: Interval) -> Result<(), SchemaError> {
    if bounds.contains(value) {
        Ok(())
    } else {
        Err(SchemaError::OutOfBounds {
            field,
            value,
            bounds,
        })
    }
}

fn check_optional(
    field: &'static str,
    value: Option<f64>,
    bounds: Interval,
) -> Result<(), SchemaError> {
    value.map_or(Ok(()), |v| check(field, v, bounds))
}
