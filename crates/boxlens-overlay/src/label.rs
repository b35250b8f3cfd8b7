//! Number formatting for overlay labels.

/// Formats a measurement the way JavaScript prints numbers.
///
/// Whole values have no trailing `.0` and `-0` prints as `0`. Magnitudes of
/// `1e21` and above or below `1e-6` use exponent form (`1e+21`, `1.5e-7`).
pub fn px(v: f32) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let mag = v.abs();
    if mag >= 1e21 || mag < 1e-6 {
        let s = format!("{v:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    format!("{v}")
}
