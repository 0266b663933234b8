// Display formatting shared by the renderer and the readouts.

/// Integral values print without a decimal point, as the browser shows them.
/// Only matches the browser for magnitudes between 1e-6 and 1e21, which
/// covers coordinates and frame rates; outside that the browser switches to
/// exponent notation and this does not.
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        // folds -0 into 0
        return "0".to_string();
    }
    format!("{v}")
}

pub fn format_pair(x: f64, y: f64) -> String {
    format!("({}, {})", format_number(x), format_number(y))
}

/// Two decimals, ties rounded away from zero like `Number.toFixed`.
pub fn format_last_update(secs: f64) -> String {
    let hundredths = secs * 100.0;
    if hundredths.is_finite() && hundredths.abs() < 1e15 {
        format!("{:.2}s ago", hundredths.round() / 100.0)
    } else {
        format!("{secs:.2}s ago")
    }
}
