//! Closed-form cruise performance formulas.
//!
//! All functions are pure and total: degenerate denominators yield `0.0`
//! instead of an error.

/// Empirical propeller slip factor
pub const PROP_SLIP_FACTOR: f64 = 0.8;

/// Scales pitch (in) × rpm to miles per hour
pub const INCHES_PER_MILE: f64 = 63_360.0;

pub const MPS_PER_MPH: f64 = 0.44704;

const GRAMS_PER_KG: f64 = 1000.0;

/// Thrust needed to balance drag in steady level cruise, N.
///
/// `T = D = 0.5 · ρ · V² · S · Cd`
#[must_use]
pub fn required_thrust(
    air_density: f64,
    cruise_speed: f64,
    wing_area: f64,
    drag_coefficient: f64,
) -> f64 {
    0.5 * air_density * cruise_speed.powi(2) * wing_area * drag_coefficient
}

/// Power needed to hold cruise speed, W. `P = T · V`
#[must_use]
pub fn required_power(thrust: f64, cruise_speed: f64) -> f64 {
    thrust * cruise_speed
}

/// Theoretical airspeed produced by the propeller, m/s.
///
/// `v_mph = pitch · rpm · 0.8 / 63360`, then converted to m/s.
#[must_use]
pub fn propeller_theoretical_speed(prop_pitch_in: f64, rpm: f64) -> f64 {
    let v_mph = prop_pitch_in * rpm * PROP_SLIP_FACTOR / INCHES_PER_MILE;
    v_mph * MPS_PER_MPH
}

/// Electric endurance in hours: `t = (E · η) / P`.
///
/// Returns `0.0` when the power draw is not positive.
#[must_use]
pub fn flight_time_electric(
    battery_capacity_wh: f64,
    efficiency: f64,
    power_required_w: f64,
) -> f64 {
    if power_required_w <= 0.0 {
        return 0.0;
    }
    let available_energy_wh = battery_capacity_wh * efficiency;
    available_energy_wh / power_required_w
}

/// ICE endurance in hours: fuel mass over BSFC-derived fuel flow.
///
/// `_prop_efficiency` is accepted for interface symmetry but does not enter
/// the formula. Returns `0.0` if fuel, power or BSFC is not positive.
#[must_use]
pub fn flight_time_ice(
    fuel_mass_kg: f64,
    _prop_efficiency: f64,
    engine_power_kw: f64,
    bsfc_g_per_kwh: f64,
) -> f64 {
    if fuel_mass_kg <= 0.0 || engine_power_kw <= 0.0 || bsfc_g_per_kwh <= 0.0 {
        return 0.0;
    }

    let bsfc_kg_per_kwh = bsfc_g_per_kwh / GRAMS_PER_KG;
    let fuel_flow_kg_per_h = bsfc_kg_per_kwh * engine_power_kw;
    if fuel_flow_kg_per_h <= 0.0 {
        return 0.0;
    }

    fuel_mass_kg / fuel_flow_kg_per_h
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;

    const SAMPLES: usize = 200;

    #[test]
    fn test_required_thrust() {
        let thrust = required_thrust(1.225, 25.0, 0.8, 0.32);
        assert!((thrust - 98.0).abs() < 1e-9);
        assert!(required_thrust(1.225, 20.0, 0.7, 0.05) > 0.0);
    }

    #[test]
    fn test_required_thrust_positive() {
        for _ in 0..SAMPLES {
            let rho: f64 = (0.51..1.99).fake();
            let v: f64 = (0.1..199.0).fake();
            let s: f64 = (0.01..49.0).fake();
            let cd: f64 = (0.011..1.99).fake();
            assert!(required_thrust(rho, v, s, cd) > 0.0);
        }
    }

    #[test]
    fn test_required_power_is_exact_product() {
        assert_eq!(required_power(15.0, 20.0), 300.0);
        for _ in 0..SAMPLES {
            let t: f64 = (0.0..5000.0).fake();
            let v: f64 = (0.0..200.0).fake();
            assert_eq!(required_power(t, v), t * v);
        }
    }

    #[test]
    fn test_propeller_speed() {
        let speed = propeller_theoretical_speed(12.0, 8000.0);
        let expected = 12.0 * 8000.0 * 0.8 / 63360.0 * 0.44704;
        assert!((speed - expected).abs() < 1e-12);
        assert!((speed - 0.541_87).abs() < 1e-4);
        assert!(propeller_theoretical_speed(10.0, 3000.0) > 0.0);
    }

    #[test]
    fn test_propeller_speed_monotonic() {
        for _ in 0..SAMPLES {
            let pitch: f64 = (1.0..49.0).fake();
            let rpm: f64 = (100.0..19_000.0).fake();
            let base = propeller_theoretical_speed(pitch, rpm);
            assert!(base > 0.0);
            assert!(propeller_theoretical_speed(pitch + 0.5, rpm) > base);
            assert!(propeller_theoretical_speed(pitch, rpm + 10.0) > base);
        }
    }

    #[test]
    fn test_flight_time_electric() {
        let t = flight_time_electric(16000.0, 0.85, 2450.0);
        assert!((t - 5.551_020_408).abs() < 1e-6);
        assert!(flight_time_electric(500.0, 0.9, 200.0) > 0.0);
    }

    #[test]
    fn test_flight_time_electric_non_positive_power() {
        assert_eq!(flight_time_electric(16000.0, 0.85, 0.0), 0.0);
        assert_eq!(flight_time_electric(16000.0, 0.85, -10.0), 0.0);
    }

    #[test]
    fn test_flight_time_electric_properties() {
        for _ in 0..SAMPLES {
            let e: f64 = (1.0..49_000.0).fake();
            let eta: f64 = (0.1..0.99).fake();
            let p: f64 = (1.0..100_000.0).fake();
            let t = flight_time_electric(e, eta, p);
            assert_eq!(t, (e * eta) / p);
            assert!(flight_time_electric(e + 1.0, eta, p) > t);
            assert!(flight_time_electric(e, eta + 0.01, p) > t);
            assert!(flight_time_electric(e, eta, p + 1.0) < t);
        }
    }

    #[test]
    fn test_flight_time_ice() {
        let t = flight_time_ice(2.0, 0.7, 5.0, 250.0);
        assert!((t - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_flight_time_ice_degenerate_inputs() {
        assert_eq!(flight_time_ice(0.0, 0.7, 5.0, 250.0), 0.0);
        assert_eq!(flight_time_ice(2.0, 0.7, 0.0, 250.0), 0.0);
        assert_eq!(flight_time_ice(2.0, 0.7, 5.0, -1.0), 0.0);
    }

    #[test]
    fn test_flight_time_ice_ignores_prop_efficiency() {
        for _ in 0..SAMPLES {
            let fuel: f64 = (0.01..99.0).fake();
            let kw: f64 = (0.2..499.0).fake();
            let bsfc: f64 = (51.0..499.0).fake();
            let t = flight_time_ice(fuel, 0.3, kw, bsfc);
            assert_eq!(t, fuel / ((bsfc / 1000.0) * kw));
            assert_eq!(t, flight_time_ice(fuel, 0.9, kw, bsfc));
        }
    }
}
