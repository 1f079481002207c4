use super::Error;
use crate::mach::{AngleUnit, Complex, Quote, Radix, Val};

type Result<T> = std::result::Result<T, Error>;

/// Parse a field that is not an operator or variable reference.
///
/// Tried in order: quoted or braced string, integer with a radix
/// suffix, boolean, then real, polar, or complex number.
pub fn literal(field: &str) -> Result<Val> {
    if let Some(quote) = field.chars().next().and_then(Quote::from_open) {
        return quoted(field, quote);
    }
    number(field)
}

/// Parse a field as a number or boolean, never as a string.
pub fn number(field: &str) -> Result<Val> {
    if let Some(val) = based_integer(field)? {
        return Ok(val);
    }
    match field {
        "true" => return Ok(Val::Bool(true)),
        "false" => return Ok(Val::Bool(false)),
        _ => {}
    }
    complex(field)
}

fn quoted(field: &str, quote: Quote) -> Result<Val> {
    if field.chars().count() < 2 || !field.ends_with(quote.close()) {
        return Err(error!(Syntax; "MISMATCHED QUOTE"));
    }
    let inner = &field[1..field.len() - 1];
    Ok(Val::String(inner.to_string(), quote))
}

fn based_integer(field: &str) -> Result<Option<Val>> {
    if field.chars().count() < 2 {
        return Ok(None);
    }
    let radix = match field.chars().last().and_then(Radix::from_suffix) {
        Some(radix) => radix,
        None => return Ok(None),
    };
    let digits = &field[..field.len() - 1];
    match i64::from_str_radix(digits, radix.base()) {
        Ok(n) => Ok(Some(Val::Integer(n, radix))),
        Err(e) => Err(error!(Syntax; &e.to_string())),
    }
}

fn complex(field: &str) -> Result<Val> {
    if let Ok(n) = field.parse::<f64>() {
        return Ok(Val::real(n));
    }
    if let Some(val) = polar(field)? {
        return Ok(val);
    }
    let body = match field.strip_suffix('i') {
        Some(body) => body,
        None => return Err(error!(Syntax; "NOT A NUMBER")),
    };
    let mut split = None;
    let mut prev = None;
    for (index, ch) in body.char_indices() {
        let exponent = prev == Some('e') || prev == Some('E');
        if index > 0 && (ch == '+' || ch == '-') && !exponent {
            split = Some(index);
        }
        prev = Some(ch);
    }
    let (re, im) = match split {
        Some(index) => body.split_at(index),
        None => ("", body),
    };
    let re = match re {
        "" => 0.0,
        s => parse_f64(s)?,
    };
    let im = match im {
        "" | "+" => 1.0,
        "-" => -1.0,
        s => parse_f64(s)?,
    };
    Ok(Val::Complex(Complex::new(re, im), None))
}

/// `<magnitude>@<angle>` with an `r`, `deg`, or `grad` unit, as numbers
/// tagged for polar display are shown.
fn polar(field: &str) -> Result<Option<Val>> {
    let (magnitude, angle) = match field.split_once('@') {
        Some((magnitude, angle)) if !magnitude.is_empty() => (magnitude, angle),
        _ => return Ok(None),
    };
    let (angle, unit) = if let Some(angle) = angle.strip_suffix("deg") {
        (angle, AngleUnit::Degrees)
    } else if let Some(angle) = angle.strip_suffix("grad") {
        (angle, AngleUnit::Gradians)
    } else if let Some(angle) = angle.strip_suffix('r') {
        (angle, AngleUnit::Radians)
    } else {
        return Err(error!(Syntax; "MISSING ANGLE UNIT"));
    };
    let magnitude = parse_f64(magnitude)?;
    let radians = unit.to_radians(parse_f64(angle)?);
    let c = if radians == 0.0 {
        Complex::new(magnitude, 0.0)
    } else {
        Complex::from_polar(magnitude, radians)
    };
    Ok(Some(Val::Complex(c, Some(unit))))
}

fn parse_f64(s: &str) -> Result<f64> {
    s.parse::<f64>()
        .map_err(|_| error!(Syntax; "NOT A NUMBER"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn c(re: f64, im: f64) -> Val {
        Val::Complex(Complex::new(re, im), None)
    }

    #[test]
    fn test_imaginary_forms() {
        assert_eq!(literal("i").unwrap(), c(0.0, 1.0));
        assert_eq!(literal("-i").unwrap(), c(0.0, -1.0));
        assert_eq!(literal("2.5i").unwrap(), c(0.0, 2.5));
        assert_eq!(literal("3+4i").unwrap(), c(3.0, 4.0));
        assert_eq!(literal("3-i").unwrap(), c(3.0, -1.0));
        assert_eq!(literal("-1e-3+2e+2i").unwrap(), c(-0.001, 200.0));
    }

    #[test]
    fn test_polar_forms() {
        assert_eq!(
            literal("3@0deg").unwrap(),
            Val::Complex(Complex::new(3.0, 0.0), Some(AngleUnit::Degrees))
        );
        match literal("2@90deg").unwrap() {
            Val::Complex(c, Some(AngleUnit::Degrees)) => {
                assert!(c.approx_eq(&Complex::new(0.0, 2.0)))
            }
            other => panic!("{:?}", other),
        }
        match literal("1@-100grad").unwrap() {
            Val::Complex(c, Some(AngleUnit::Gradians)) => {
                assert!(c.approx_eq(&Complex::new(0.0, -1.0)))
            }
            other => panic!("{:?}", other),
        }
        assert_eq!(
            literal("1.5@0r").unwrap(),
            Val::Complex(Complex::new(1.5, 0.0), Some(AngleUnit::Radians))
        );
        assert_eq!(literal("3@45").unwrap_err().code(), ErrorCode::Syntax);
        assert_eq!(literal("x@45deg").unwrap_err().code(), ErrorCode::Syntax);
    }

    #[test]
    fn test_based() {
        assert_eq!(literal("ffx").unwrap(), Val::Integer(255, Radix::Hex));
        assert_eq!(literal("-101b").unwrap(), Val::Integer(-5, Radix::Binary));
        assert_eq!(literal("17o").unwrap(), Val::Integer(15, Radix::Octal));
        let e = literal("12b").unwrap_err();
        assert_eq!(e.code(), ErrorCode::Syntax);
        assert_eq!(e.detail(), "invalid digit found in string");
    }

    #[test]
    fn test_quotes() {
        assert_eq!(
            literal("{a {b}}").unwrap(),
            Val::String("a {b}".to_string(), Quote::Brace)
        );
        assert_eq!(literal("'").unwrap_err().code(), ErrorCode::Syntax);
        assert_eq!(literal("'abc\"").unwrap_err().code(), ErrorCode::Syntax);
        assert_eq!(
            literal("''").unwrap(),
            Val::String(String::new(), Quote::Single)
        );
    }

    #[test]
    fn test_words_are_not_numbers() {
        assert_eq!(literal("pi").unwrap_err().code(), ErrorCode::Syntax);
        assert_eq!(literal("foo").unwrap_err().code(), ErrorCode::Syntax);
        assert_eq!(literal("true").unwrap(), Val::Bool(true));
    }
}
