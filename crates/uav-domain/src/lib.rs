//! # UAV Configurator - Domain Model
//!
//! Core domain types for estimating the cruise performance of a fixed-wing
//! UAV: the configuration record, the propulsion variants, the computed
//! result, and the error taxonomy shared by every adapter (HTTP, GraphQL,
//! CLI).
//!
//! ## Pipeline
//!
//! ```text
//! raw JSON ──► UavInput ──► schema bounds ──► validators ──► UavConfiguration ──► UavResult
//!              (input)      SchemaError       ValidationError  (typed)            (service)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod calculations;
pub mod input;
pub mod service;
pub mod validators;

pub use input::UavInput;
pub use service::{configure, configure_input, evaluate};

// =============================================================================
// VALUE OBJECTS
// =============================================================================

/// One end of an [`Interval`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Open(f64),
    Closed(f64),
    Unbounded,
}

/// Numeric range used for schema bounds and validator constraints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lower: Bound,
    pub upper: Bound,
}

impl Interval {
    /// `(lower, upper)`
    #[must_use]
    pub const fn open(lower: f64, upper: f64) -> Self {
        Self {
            lower: Bound::Open(lower),
            upper: Bound::Open(upper),
        }
    }

    /// `[lower, upper]`
    #[must_use]
    pub const fn closed(lower: f64, upper: f64) -> Self {
        Self {
            lower: Bound::Closed(lower),
            upper: Bound::Closed(upper),
        }
    }

    /// `(lower, upper]`
    #[must_use]
    pub const fn open_closed(lower: f64, upper: f64) -> Self {
        Self {
            lower: Bound::Open(lower),
            upper: Bound::Closed(upper),
        }
    }

    /// `(lower, ∞)`
    #[must_use]
    pub const fn greater_than(lower: f64) -> Self {
        Self {
            lower: Bound::Open(lower),
            upper: Bound::Unbounded,
        }
    }

    /// Whether `value` lies inside the interval. NaN is never contained.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let above = match self.lower {
            Bound::Open(l) => value > l,
            Bound::Closed(l) => value >= l,
            Bound::Unbounded => !value.is_nan(),
        };
        let below = match self.upper {
            Bound::Open(u) => value < u,
            Bound::Closed(u) => value <= u,
            Bound::Unbounded => !value.is_nan(),
        };
        above && below
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            Bound::Open(l) => write!(f, "({l}, ")?,
            Bound::Closed(l) => write!(f, "[{l}, ")?,
            Bound::Unbounded => write!(f, "(-∞, ")?,
        }
        match self.upper {
            Bound::Open(u) => write!(f, "{u})"),
            Bound::Closed(u) => write!(f, "{u}]"),
            Bound::Unbounded => write!(f, "∞)"),
        }
    }
}

// =============================================================================
// ENUMS
// =============================================================================

/// Propulsion system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemType {
    Electric,
    Ice, // Internal combustion engine
}

impl SystemType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Electric => "electric",
            Self::Ice => "ice",
        }
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SystemType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electric" => Ok(Self::Electric),
            "ice" => Ok(Self::Ice),
            other => Err(ValidationError::UnknownSystemType(other.to_string())),
        }
    }
}

// =============================================================================
// ENTITY TYPES
// =============================================================================

/// Battery-electric propulsion parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricPropulsion {
    /// Usable pack energy, Wh
    pub battery_capacity: f64,
    /// Battery-to-shaft efficiency (0.1 - 1.0)
    pub system_efficiency: f64,
}

/// Internal combustion engine propulsion parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IcePropulsion {
    /// Fuel on board, kg
    pub fuel_mass: f64,
    /// Propeller efficiency (0.1 - 1.0)
    pub prop_efficiency: f64,
    /// Rated engine power, kW
    pub engine_power_kw: f64,
    /// Brake-specific fuel consumption, g/kWh
    pub bsfc: f64,
}

/// Propulsion system, one payload shape per [`SystemType`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Propulsion {
    Electric(ElectricPropulsion),
    Ice(IcePropulsion),
}

impl Propulsion {
    #[must_use]
    pub const fn system_type(&self) -> SystemType {
        match self {
            Self::Electric(_) => SystemType::Electric,
            Self::Ice(_) => SystemType::Ice,
        }
    }
}

/// Validated UAV configuration. Built only from a [`UavInput`] that passed
/// both the schema bounds and the validators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UavConfiguration {
    // Aerodynamics
    pub air_density: f64,
    pub cruise_speed: f64,
    pub wing_area: f64,
    pub drag_coefficient: f64,

    // Propeller
    pub prop_pitch: f64,
    pub rpm: f64,

    pub propulsion: Propulsion,
}

impl UavConfiguration {
    /// Combine checked aerodynamic fields with an already validated propulsion.
    #[must_use]
    pub fn new(input: &UavInput, propulsion: Propulsion) -> Self {
        Self {
            air_density: input.air_density,
            cruise_speed: input.cruise_speed,
            wing_area: input.wing_area,
            drag_coefficient: input.drag_coefficient,
            prop_pitch: input.prop_pitch,
            rpm: input.rpm,
            propulsion,
        }
    }
}

/// Computed cruise performance with narrative explanations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UavResult {
    /// N
    pub required_thrust: f64,
    /// W
    pub required_power: f64,
    /// m/s
    pub prop_theoretical_speed: f64,

    // Exactly one is populated, matching the propulsion system
    pub flight_time_electric: Option<f64>,
    pub flight_time_ice: Option<f64>,

    pub thrust_explained: String,
    pub power_explained: String,
    pub prop_speed_explained: String,
    pub flight_time_explained: String,
}

impl UavResult {
    /// Endurance in hours for whichever propulsion system was evaluated
    #[must_use]
    pub fn flight_time(&self) -> Option<f64> {
        self.flight_time_electric.or(self.flight_time_ice)
    }

    #[must_use]
    pub const fn system_type(&self) -> SystemType {
        if self.flight_time_ice.is_some() {
            SystemType::Ice
        } else {
            SystemType::Electric
        }
    }
}

/// Client-facing error payload: `{"error": <kind>, "message": <text>}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Input failed basic shape, type or range constraints
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("Malformed configuration: {0}")]
    Malformed(String),

    #[error("{field} = {value} is outside the allowed range {bounds}")]
    OutOfBounds {
        field: &'static str,
        value: f64,
        bounds: Interval,
    },
}

impl SchemaError {
    pub const KIND: &'static str = "SchemaError";

    /// Offending field, when known
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Malformed(_) => None,
            Self::OutOfBounds { field, .. } => Some(field),
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Input is well-typed but violates a domain rule
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must lie in {constraint}, got {value}")]
    OutOfRange {
        field: &'static str,
        constraint: Interval,
        value: f64,
    },

    #[error("{field} is required for {system_type} propulsion and must lie in {constraint}")]
    MissingField {
        field: &'static str,
        system_type: SystemType,
        constraint: Interval,
    },

    #[error("Unknown system type '{0}', expected 'electric' or 'ice'")]
    UnknownSystemType(String),
}

impl ValidationError {
    pub const KIND: &'static str = "ValidationError";

    pub fn field(&self) -> &'static str {
        match self {
            Self::OutOfRange { field, .. } | Self::MissingField { field, .. } => field,
            Self::UnknownSystemType(_) => "system_type",
        }
    }
}

/// Any failure of the configure pipeline
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigureError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ConfigureError {
    /// Error kind as reported to clients
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Schema(_) => SchemaError::KIND,
            Self::Validation(_) => ValidationError::KIND,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody::new(self.kind(), self.to_string())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::UavInput;

    /// Scenario 1: small electric airframe
    pub fn electric_input() -> UavInput {
        UavInput {
            air_density: 1.225,
            cruise_speed: 25.0,
            wing_area: 0.8,
            drag_coefficient: 0.32,
            prop_pitch: 12.0,
            rpm: 8000.0,
            system_type: "electric".to_string(),
            battery_capacity: Some(16000.0),
            system_efficiency: Some(0.85),
            fuel_mass: None,
            prop_efficiency: None,
            engine_power_kw: None,
            bsfc: None,
        }
    }

    /// Scenario 2: same airframe on a small piston engine
    pub fn ice_input() -> UavInput {
        UavInput {
            system_type: "ice".to_string(),
            battery_capacity: None,
            system_efficiency: None,
            fuel_mass: Some(2.0),
            prop_efficiency: Some(0.7),
            engine_power_kw: Some(5.0),
            bsfc: Some(250.0),
            ..electric_input()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains() {
        let speed = Interval::open_closed(0.0, 200.0);
        assert!(!speed.contains(0.0));
        assert!(speed.contains(200.0));
        assert!(!speed.contains(200.1));
        assert!(!speed.contains(f64::NAN));

        let cd = Interval::closed(0.01, 2.0);
        assert!(cd.contains(0.01));
        assert!(cd.contains(2.0));

        let positive = Interval::greater_than(0.0);
        assert!(positive.contains(1e9));
        assert!(!positive.contains(0.0));
        assert!(!positive.contains(f64::NAN));
    }

    #[test]
    fn test_interval_display() {
        assert_eq!(Interval::open(0.5, 2.0).to_string(), "(0.5, 2)");
        assert_eq!(Interval::closed(0.1, 1.0).to_string(), "[0.1, 1]");
        assert_eq!(Interval::open_closed(0.0, 50.0).to_string(), "(0, 50]");
        assert_eq!(Interval::greater_than(0.0).to_string(), "(0, ∞)");
    }

    #[test]
    fn test_system_type_parse() {
        assert_eq!("electric".parse::<SystemType>(), Ok(SystemType::Electric));
        assert_eq!("ice".parse::<SystemType>(), Ok(SystemType::Ice));
        assert_eq!(
            "vtol".parse::<SystemType>(),
            Err(ValidationError::UnknownSystemType("vtol".to_string()))
        );
        // Matching is exact
        assert!("ICE".parse::<SystemType>().is_err());
    }

    #[test]
    fn test_system_type_in_const_context() {
        const ICE: Propulsion = Propulsion::Ice(IcePropulsion {
            fuel_mass: 2.0,
            prop_efficiency: 0.7,
            engine_power_kw: 5.0,
            bsfc: 250.0,
        });
        const KIND: SystemType = ICE.system_type();
        const LABEL: &str = KIND.as_str();

        assert_eq!(LABEL, "ice");
        assert_eq!(SystemType::Electric.to_string(), "electric");
    }

    #[test]
    fn test_error_kinds() {
        let err = ConfigureError::from(ValidationError::UnknownSystemType("vtol".into()));
        assert_eq!(err.kind(), "ValidationError");
        let body = err.to_body();
        assert_eq!(body.error, "ValidationError");
        assert!(body.message.contains("vtol"));

        let err = ConfigureError::from(SchemaError::OutOfBounds {
            field: "rpm",
            value: 50.0,
            bounds: Interval::open(100.0, 20000.0),
        });
        assert_eq!(err.kind(), "SchemaError");
        assert_eq!(
            err.to_string(),
            "rpm = 50 is outside the allowed range (100, 20000)"
        );
    }

    #[test]
    fn test_result_flight_time() {
        let result = UavResult {
            required_thrust: 1.0,
            required_power: 1.0,
            prop_theoretical_speed: 1.0,
            flight_time_electric: None,
            flight_time_ice: Some(1.6),
            thrust_explained: String::new(),
            power_explained: String::new(),
            prop_speed_explained: String::new(),
            flight_time_explained: String::new(),
        };
        assert_eq!(result.flight_time(), Some(1.6));
        assert_eq!(result.system_type(), SystemType::Ice);
    }
}
