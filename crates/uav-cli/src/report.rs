//! Plain-text rendering of a [`UavResult`].

use uav_domain::{SystemType, UavResult};

/// Render the headline figures followed by the explanations.
pub fn render(result: &UavResult) -> String {
    let mut lines = vec![
        format!("Required thrust:        {:.2} N", result.required_thrust),
        format!("Required power:         {:.2} W", result.required_power),
        format!("Propeller speed:        {:.2} m/s", result.prop_theoretical_speed),
    ];

    let label = match result.system_type() {
        SystemType::Electric => "Flight time (electric):",
        SystemType::Ice => "Flight time (ICE):     ",
    };
    if let Some(hours) = result.flight_time() {
        lines.push(format!("{label} {hours:.2} h"));
    }

    lines.push(String::new());
    lines.extend(
        [
            &result.thrust_explained,
            &result.power_explained,
            &result.prop_speed_explained,
            &result.flight_time_explained,
        ]
        .iter()
        .map(|text| format!("  - {text}")),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_electric() {
        let result = uav_domain::configure(json!({
            "air_density": 1.225,
            "cruise_speed": 25,
            "wing_area": 0.8,
            "drag_coefficient": 0.32,
            "prop_pitch": 12,
            "rpm": 8000,
            "system_type": "electric",
            "battery_capacity": 16000,
            "system_efficiency": 0.85
        }))
        .unwrap();

        let report = render(&result);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Required thrust:        98.00 N");
        assert_eq!(lines[1], "Required power:         2450.00 W");
        assert_eq!(lines[2], "Propeller speed:        0.54 m/s");
        assert_eq!(lines[3], "Flight time (electric): 5.55 h");
        assert_eq!(lines[4], "");
        assert_eq!(lines.len(), 9);
        assert!(lines[8].starts_with("  - 5.55 h, from battery"));
    }

    #[test]
    fn test_render_ice() {
        let result = UavResult {
            required_thrust: 98.0,
            required_power: 2450.0,
            prop_theoretical_speed: 0.54,
            flight_time_electric: None,
            flight_time_ice: Some(1.6),
            thrust_explained: "t".into(),
            power_explained: "p".into(),
            prop_speed_explained: "s".into(),
            flight_time_explained: "f".into(),
        };

        let report = render(&result);
        assert!(report.contains("Flight time (ICE):      1.60 h"));
        assert!(report.ends_with("  - f\n"));
    }
}
