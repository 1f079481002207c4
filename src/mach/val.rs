use super::Complex;

/// ## Tagged value
///
/// The payload of a [`Frame`](super::Frame). The tag never changes;
/// operators build new values.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Empty,
    String(String, Quote),
    Complex(Complex, Option<AngleUnit>),
    Bool(bool),
    Integer(i64, Radix),
}

impl Val {
    pub fn real(n: f64) -> Val {
        Val::Complex(Complex::new(n, 0.0), None)
    }
}

/// Display base of an integer. Arithmetic ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Decimal,
    Hex,
    Octal,
    Binary,
}

impl Radix {
    pub fn from_suffix(ch: char) -> Option<Radix> {
        match ch {
            'd' => Some(Radix::Decimal),
            'x' => Some(Radix::Hex),
            'o' => Some(Radix::Octal),
            'b' => Some(Radix::Binary),
            _ => None,
        }
    }

    pub fn suffix(self) -> char {
        match self {
            Radix::Decimal => 'd',
            Radix::Hex => 'x',
            Radix::Octal => 'o',
            Radix::Binary => 'b',
        }
    }

    pub fn base(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hex => 16,
            Radix::Octal => 8,
            Radix::Binary => 2,
        }
    }

    pub fn format(self, n: i64) -> String {
        let sign = if n < 0 { "-" } else { "" };
        let n = n.unsigned_abs();
        let digits = match self {
            Radix::Decimal => format!("{}", n),
            Radix::Hex => format!("{:x}", n),
            Radix::Octal => format!("{:o}", n),
            Radix::Binary => format!("{:b}", n),
        };
        format!("{}{}{}", sign, digits, self.suffix())
    }
}

/// How a string was written, used when writing it back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    Single,
    Double,
    Brace,
}

impl Quote {
    pub fn from_open(ch: char) -> Option<Quote> {
        match ch {
            '\'' => Some(Quote::Single),
            '"' => Some(Quote::Double),
            '{' => Some(Quote::Brace),
            _ => None,
        }
    }

    pub fn open(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
            Quote::Brace => '{',
        }
    }

    pub fn close(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
            Quote::Brace => '}',
        }
    }

    pub fn wrap(self, s: &str) -> String {
        format!("{}{}{}", self.open(), s, self.close())
    }
}

/// Angle unit of a number shown in polar form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Radians,
    Degrees,
    Gradians,
}

impl AngleUnit {
    pub fn from_radians(self, rad: f64) -> f64 {
        match self {
            AngleUnit::Radians => rad,
            AngleUnit::Degrees => rad.to_degrees(),
            AngleUnit::Gradians => rad * 200.0 / std::f64::consts::PI,
        }
    }

    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle.to_radians(),
            AngleUnit::Gradians => angle * std::f64::consts::PI / 200.0,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            AngleUnit::Radians => "r",
            AngleUnit::Degrees => "deg",
            AngleUnit::Gradians => "grad",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_format() {
        assert_eq!(Radix::Decimal.format(5), "5d");
        assert_eq!(Radix::Hex.format(15), "fx");
        assert_eq!(Radix::Octal.format(8), "10o");
        assert_eq!(Radix::Binary.format(2), "10b");
        assert_eq!(Radix::Hex.format(-255), "-ffx");
        assert_eq!(Radix::Hex.format(i64::MIN), "-8000000000000000x");
    }

    #[test]
    fn test_gradians() {
        let g = AngleUnit::Gradians;
        assert!((g.from_radians(std::f64::consts::PI) - 200.0).abs() < 1e-9);
        assert!((g.to_radians(100.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }
}
