//! Canonical text form of float values.

/// Format a float the way the language prints it.
///
/// Integral values keep a trailing `.0` (`2.0`), magnitudes outside
/// `[1e-4, 1e16)` switch to exponent form with a signed two-digit exponent
/// (`1e+20`, `1.5e-07`). The same text is used by the tree printer and by
/// `print` so both agree on how a literal looks.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = value.abs();
    if value == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let text = format!("{value}");
        if text.contains('.') {
            text
        } else {
            format!("{text}.0")
        }
    } else {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => text,
        }
    }
}
