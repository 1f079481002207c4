use super::{Complex, Radix, Val};

/// A numeric frame value with its display tags stripped to what
/// arithmetic needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64, Radix),
    Complex(Complex),
}

impl Number {
    pub fn from_val(val: &Val) -> Option<Number> {
        match val {
            Val::Integer(n, radix) => Some(Number::Integer(*n, *radix)),
            Val::Complex(c, _) => Some(Number::Complex(*c)),
            _ => None,
        }
    }

    pub fn to_complex(self) -> Complex {
        match self {
            Number::Integer(n, _) => Complex::new(n as f64, 0.0),
            Number::Complex(c) => c,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(..))
    }

    /// Bring two operands to a common type. Any complex operand makes
    /// both complex; two integers stay integers. Order is preserved.
    pub fn promote(lhs: Number, rhs: Number) -> (Number, Number) {
        if lhs.is_integer() && rhs.is_integer() {
            (lhs, rhs)
        } else {
            (
                Number::Complex(lhs.to_complex()),
                Number::Complex(rhs.to_complex()),
            )
        }
    }
}

impl From<Number> for Val {
    fn from(n: Number) -> Val {
        match n {
            Number::Integer(n, radix) => Val::Integer(n, radix),
            Number::Complex(c) => Val::Complex(c, None),
        }
    }
}
