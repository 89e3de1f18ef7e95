use crate::eval::Evaluation;

/// Render `outcome` the way the terminal shows it.
///
/// When an error is latched it wins over the numeric value. Otherwise the
/// value prints in `base`: 16, 8 and 2 truncate the value to an unsigned
/// 32-bit integer first (out-of-range values wrap), anything else renders
/// the full floating-point value at up to 16 significant digits.
///
/// # Examples
///
/// ```
/// use reckon::{evaluate, render, Context};
///
/// let mut context = Context::new();
/// let outcome = evaluate("200 + 55", &mut context);
/// assert_eq!(render(&outcome, 10), "  255");
/// assert_eq!(render(&outcome, 16), "  0xff");
/// ```
#[must_use]
pub fn render(outcome: &Evaluation, base: u32) -> String {
    if let Some(error) = &outcome.error {
        return format!("Error: {}", error);
    }
    match base {
        16 => format!("  0x{:x}", truncate(outcome.value)),
        8 => format!("  0{:o}", truncate(outcome.value)),
        2 => format!("  {:032b}", truncate(outcome.value)),
        _ => format!("  {}", significant(outcome.value, 16)),
    }
}

/// Truncate to the unsigned 32-bit range, wrapping values outside it
fn truncate(value: f64) -> u32 {
    value as i64 as u32
}

/// Format `value` with up to `digits` significant digits, trimming
/// trailing zeros and switching to scientific notation outside the fixed
/// range, like `printf("%.16g")` does.
fn significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if exponent < -4 || exponent >= digits as i32 {
        format!("{}e{:+03}", trim_zeros(mantissa), exponent)
    } else {
        let precision = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", precision, value)).to_string()
    }
}

fn trim_zeros(formatted: &str) -> &str {
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::error::{Error, ErrorKind};
    use crate::eval::Evaluation;
    use test_case::test_case;

    fn outcome(value: f64) -> Evaluation {
        Evaluation { value, error: None }
    }

    #[test_case(255.0, 16 => "  0xff" ; "hexadecimal")]
    #[test_case(8.0, 8 => "  010" ; "octal")]
    #[test_case(0.0, 8 => "  00" ; "octal zero")]
    #[test_case(5.0, 2 => "  00000000000000000000000000000101" ; "binary pads to 32 digits")]
    #[test_case(255.9, 16 => "  0xff" ; "fraction is dropped, not rounded")]
    #[test_case(-1.0, 16 => "  0xffffffff" ; "negative values wrap")]
    #[test_case(5e9, 16 => "  0x2a05f200" ; "values past 32 bits wrap")]
    #[test_case(14.0, 10 => "  14" ; "decimal integer")]
    #[test_case(2.5, 10 => "  2.5" ; "decimal fraction")]
    #[test_case(-42.0, 10 => "  -42" ; "negative decimal")]
    #[test_case(0.1 + 0.2, 10 => "  0.3" ; "sixteen significant digits hide the representation noise")]
    #[test_case(1e20, 10 => "  1e+20" ; "large values go scientific")]
    #[test_case(2.5e-5, 10 => "  2.5e-05" ; "small values go scientific")]
    #[test_case(std::f64::consts::PI, 10 => "  3.141592653589793" ; "pi at full precision")]
    #[test_case(f64::NAN, 10 => "  nan" ; "not a number")]
    #[test_case(f64::INFINITY, 10 => "  inf" ; "infinity")]
    fn value(value: f64, base: u32) -> String {
        render(&outcome(value), base)
    }

    #[test]
    fn errors_win_over_the_value() {
        let failed = Evaluation {
            value: 42.0,
            error: Some(Error::new(ErrorKind::MissingCloseParen, "sqrt")),
        };
        assert_eq!(render(&failed, 10), "Error: missing ')' near 'sqrt'");
        assert_eq!(render(&failed, 16), "Error: missing ')' near 'sqrt'");
    }
}
