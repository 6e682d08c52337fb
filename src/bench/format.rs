use std::time::Duration;

/// Significant digits shown for sub-minute spans.
const PRECISION: usize = 3;

const UNITS: [(&str, f64); 4] = [("s", 1.0), ("ms", 1e3), ("µs", 1e6), ("ns", 1e9)];

const LONG_PARTS: [(&str, f64); 4] = [("d", 86_400.0), ("h", 3_600.0), ("min", 60.0), ("s", 1.0)];

/// Human-readable time span, e.g. `1.23 µs`, `412 ms`, `2min 5s`.
///
/// Below a minute the unit is the largest one that keeps the scaled value
/// at or above 1, falling back to nanoseconds, and the value is shown with
/// three significant digits.
pub fn format_time(seconds: f64) -> String {
    if seconds >= 60.0 {
        return format_long(seconds);
    }

    let (unit, scale) = UNITS
        .iter()
        .copied()
        .find(|&(_, scale)| seconds >= 1.0 / scale)
        .unwrap_or(UNITS[UNITS.len() - 1]);
    format!("{} {unit}", format_significant(seconds * scale, PRECISION))
}

pub fn format_duration(duration: Duration) -> String {
    format_time(duration.as_secs_f64())
}

/// Timing summary as printed by `calc-pi`:
/// `100 loops, best of 5: 1.23 ms per loop`.
pub fn loops_line(number: u32, repeat: u32, best_secs: f64) -> String {
    format!(
        "{number} loops, best of {repeat}: {} per loop",
        format_time(best_secs)
    )
}

fn format_long(seconds: f64) -> String {
    let mut parts = Vec::new();
    let mut leftover = seconds;
    for (suffix, length) in LONG_PARTS {
        let value = (leftover / length).trunc();
        if value > 0.0 {
            leftover %= length;
            parts.push(format!("{value}{suffix}"));
        }
        if leftover < 1.0 {
            break;
        }
    }
    parts.join(" ")
}

/// `printf("%.*g")`: `digits` significant digits, trailing zeros dropped,
/// scientific notation for very large or small magnitudes.
fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let digits = digits.max(1);

    // Exponent after rounding to the requested digits.
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
