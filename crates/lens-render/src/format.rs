//! printf-style `%g` formatting for titles and file names.

use lens_types::config::LensConfig;

/// Format `value` like C's `%.{precision}g`.
///
/// Fixed notation when the decimal exponent lies in [-4, precision),
/// scientific otherwise; trailing zeros are removed in both.
pub fn format_g(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let p = precision.max(1);
    // Rounding to p significant digits decides the exponent.
    let sci = format!("{:.*e}", p - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= p as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value))
    }
}

/// Plot title, e.g. `m1 = 0.9, d = 1.1`.
pub fn plot_title(lens: &LensConfig) -> String {
    format!(
        "m1 = {}, d = {}",
        format_g(lens.mass_fraction_1, 6),
        format_g(lens.separation, 3)
    )
}

/// Output file stem, e.g. `m1_0.9_d_1.1`.
pub fn file_stem(lens: &LensConfig) -> String {
    format!(
        "m1_{}_d_{}",
        format_g(lens.mass_fraction_1, 6),
        format_g(lens.separation, 3)
    )
}

fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}
