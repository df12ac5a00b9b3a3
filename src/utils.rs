//! Number rendering used by diagnostic messages and CRS descriptions.
//!
//! The output of these functions is part of the message text, so they reproduce a specific
//! printf-style behaviour rather than Rust's default float formatting.

/// Significant digits used by [format_g].
const G_PRECISION: i32 = 6;

/// Decimal digits beyond which [lidar_double_scaled] falls back to [lidar_double].
const MAX_SCALED_DIGITS: usize = 8;

/// Renders a value with fifteen decimals and trims the trailing zeros.
///
/// If every decimal is zero the decimal point is dropped as well.
///
/// # Examples
///
/// ```
/// use las_validate::utils::lidar_double;
/// assert_eq!("1.5", lidar_double(1.5));
/// assert_eq!("2", lidar_double(2.0));
/// assert_eq!("-0.25", lidar_double(-0.25));
/// ```
pub fn lidar_double(value: f64) -> String {
    let mut s = format!("{:.15}", value);
    trim_fraction(&mut s);
    s
}

/// Renders a value with as many decimals as the scale factor resolves.
///
/// A scale of 0.01 gives two decimals, 0.25 gives one, 1 or more gives an integer (truncated).
/// Scales that need more than eight decimals, and scales that are not strictly positive, use
/// [lidar_double].
///
/// # Examples
///
/// ```
/// use las_validate::utils::lidar_double_scaled;
/// assert_eq!("12.35", lidar_double_scaled(12.345678, 0.01));
/// assert_eq!("12", lidar_double_scaled(12.9, 1.0));
/// assert_eq!("12.5", lidar_double_scaled(12.5, 1e-10));
/// ```
pub fn lidar_double_scaled(value: f64, scale: f64) -> String {
    if !(scale > 0.0) || !scale.is_finite() {
        return lidar_double(value);
    }
    let mut scale = scale;
    let mut decimal_digits = 0;
    while scale < 1.0 && decimal_digits <= MAX_SCALED_DIGITS {
        scale *= 10.0;
        decimal_digits += 1;
    }
    match decimal_digits {
        0 => (value as i32).to_string(),
        1..=MAX_SCALED_DIGITS => format!("{:.*}", decimal_digits, value),
        _ => lidar_double(value),
    }
}

/// Renders a value the way C's `%g` does: six significant digits, trailing zeros removed,
/// scientific notation for very small or very large magnitudes.
///
/// # Examples
///
/// ```
/// use las_validate::utils::format_g;
/// assert_eq!("0.01", format_g(0.01));
/// assert_eq!("6.37814e+06", format_g(6378137.0));
/// assert_eq!("1e-07", format_g(0.0000001));
/// assert_eq!("-93", format_g(-93.0));
/// ```
pub fn format_g(value: f64) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    let scientific = format!("{:.*e}", (G_PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    if exponent < -4 || exponent >= G_PRECISION {
        let mut mantissa = mantissa.to_string();
        trim_fraction(&mut mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let mut fixed = format!("{:.*}", (G_PRECISION - 1 - exponent) as usize, value);
        trim_fraction(&mut fixed);
        fixed
    }
}

fn trim_fraction(s: &mut String) {
    if s.contains('.') {
        while s.ends_with('0') {
            let _ = s.pop();
        }
        if s.ends_with('.') {
            let _ = s.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lidar_double_trims() {
        assert_eq!("0.1", lidar_double(0.1));
        assert_eq!("100", lidar_double(100.0));
        assert_eq!("637.25", lidar_double(637.25));
        assert_eq!("-3", lidar_double(-3.0));
    }

    #[test]
    fn lidar_double_scaled_digits() {
        assert_eq!("1.000", lidar_double_scaled(1.0, 0.001));
        assert_eq!("1.3", lidar_double_scaled(1.26, 0.25));
        assert_eq!("-4", lidar_double_scaled(-4.7, 1.0));
        assert_eq!("0.00000100", lidar_double_scaled(0.000001, 0.00000001));
        assert_eq!("3.5", lidar_double_scaled(3.5, 0.0));
        assert_eq!("3.5", lidar_double_scaled(3.5, -0.01));
    }

    #[test]
    fn format_g_fixed_range() {
        assert_eq!("0.005", format_g(0.005));
        assert_eq!("0.0001", format_g(0.0001));
        assert_eq!("604800", format_g(604800.0));
        assert_eq!("298.257", format_g(298.257223563));
        assert_eq!("39.3333", format_g(39.33333333));
        assert_eq!("0.9996", format_g(0.9996));
    }

    #[test]
    fn format_g_scientific_range() {
        assert_eq!("1e+06", format_g(1000000.0));
        assert_eq!("1.2e+07", format_g(12000000.0));
        assert_eq!("2.5e-06", format_g(0.0000025));
        assert_eq!("-5e+06", format_g(-5000000.0));
    }

    #[test]
    fn format_g_specials() {
        assert_eq!("0", format_g(0.0));
        assert_eq!("inf", format_g(f64::INFINITY));
        assert_eq!("-inf", format_g(f64::NEG_INFINITY));
    }
}
