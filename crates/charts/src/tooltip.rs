//! Text shown by the river-height tooltip and point labels.

pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const SHORT_DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Unit appended to river heights.
pub const HEIGHT_UNIT: &str = "m";

/// Full weekday name for the hovered point, Monday first.
pub fn title(data_index: usize) -> Option<&'static str> {
    DAY_NAMES.get(data_index).copied()
}

/// `1.2` -> `"1.2m"`, `2.0` -> `"2m"`.
pub fn height_label(value: f64) -> String {
    format!("{}{HEIGHT_UNIT}", js_number(value))
}

/// Formats like JavaScript's `Number#toString`: shortest round-trip digits,
/// exponent form outside `1e-6 <= |v| < 1e21`, no negative zero.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_follow_the_week() {
        assert_eq!(title(0), Some("Monday"));
        assert_eq!(title(6), Some("Sunday"));
        assert_eq!(title(7), None);
    }

    #[test]
    fn labels_drop_trailing_zero() {
        assert_eq!(height_label(1.2), "1.2m");
        assert_eq!(height_label(3.0), "3m");
    }

    #[test]
    fn extreme_values_follow_js_number_text() {
        assert_eq!(height_label(1e21), "1e+21m");
        assert_eq!(height_label(-0.0), "0m");
        assert_eq!(js_number(1.5e-7), "1.5e-7");
        assert_eq!(js_number(0.000001), "0.000001");
        assert_eq!(js_number(123456789.5), "123456789.5");
        assert_eq!(js_number(f64::NAN), "NaN");
        assert_eq!(js_number(f64::NEG_INFINITY), "-Infinity");
    }
}
