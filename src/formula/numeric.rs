/// Parses the longest numeric prefix of `text`, NaN when there is none.
///
/// Leading whitespace and a sign are accepted, as is `Infinity`. Anything after
/// the digits, fraction and exponent is ignored, so `"3abc"` reads as 3.
pub fn parse_numeric(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    let negative = match bytes.first() {
        Some(b'+') => {
            end = 1;
            false
        }
        Some(b'-') => {
            end = 1;
            true
        }
        _ => false,
    };

    if trimmed[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        let frac_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        digits += end - frac_start;
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && matches!(bytes[cursor], b'+' | b'-') {
            cursor += 1;
        }
        let exp_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exp_start {
            end = cursor;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Renders a result the way it is shown to the user.
///
/// Magnitudes in `[1e-6, 1e21)` print as plain shortest round-trip decimals,
/// everything else in exponent form with a signed exponent (`1e+21`, `1e-7`).
pub fn format_number(value: f64) -> String {
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
        return format!("{}", value);
    }

    let exponential = format!("{:e}", value);
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exponential,
    }
}
