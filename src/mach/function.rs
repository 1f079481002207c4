use super::{AngleUnit, Complex, Frame, Number, Radix, Val};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Single operand math and conversion functions

pub struct Function {}

impl Function {
    pub fn abs(val: &Frame) -> Result<Frame> {
        match number(val)? {
            Number::Integer(n, radix) => match n.checked_abs() {
                Some(n) => keep_note(Val::Integer(n, radix), val),
                None => Err(error!(IllegalValue; "OVERFLOW")),
            },
            Number::Complex(c) => keep_note(Val::real(c.abs()), val),
        }
    }

    pub fn inv(val: &Frame) -> Result<Frame> {
        complex(val, |c| {
            Complex::new(1.0, 0.0)
                .checked_div(c)
                .ok_or_else(|| error!(DivideByZero))
        })
    }

    pub fn sq(val: &Frame) -> Result<Frame> {
        match number(val)? {
            Number::Integer(n, radix) => match n.checked_mul(n) {
                Some(n) => keep_note(Val::Integer(n, radix), val),
                None => Err(error!(IllegalValue; "OVERFLOW")),
            },
            Number::Complex(c) => keep_note(Val::Complex(c * c, None), val),
        }
    }

    pub fn sqrt(val: &Frame) -> Result<Frame> {
        complex(val, |c| Ok(c.sqrt()))
    }

    pub fn exp(val: &Frame) -> Result<Frame> {
        complex(val, |c| Ok(c.exp()))
    }

    pub fn ln(val: &Frame) -> Result<Frame> {
        complex(val, |c| {
            if c.is_zero() {
                Err(error!(IllegalValue; "LOG OF ZERO"))
            } else {
                Ok(c.ln())
            }
        })
    }

    pub fn log(val: &Frame) -> Result<Frame> {
        complex(val, |c| {
            if c.is_zero() {
                Err(error!(IllegalValue; "LOG OF ZERO"))
            } else {
                let l = c.ln();
                let ln10 = std::f64::consts::LN_10;
                Ok(Complex::new(l.re / ln10, l.im / ln10))
            }
        })
    }

    pub fn floor(val: &Frame) -> Result<Frame> {
        rounding(val, f64::floor)
    }

    pub fn ceil(val: &Frame) -> Result<Frame> {
        rounding(val, f64::ceil)
    }

    pub fn round(val: &Frame) -> Result<Frame> {
        rounding(val, f64::round)
    }

    pub fn sin(val: &Frame) -> Result<Frame> {
        real(val, f64::sin)
    }

    pub fn cos(val: &Frame) -> Result<Frame> {
        real(val, f64::cos)
    }

    pub fn tan(val: &Frame) -> Result<Frame> {
        real(val, f64::tan)
    }

    pub fn asin(val: &Frame) -> Result<Frame> {
        real(val, f64::asin)
    }

    pub fn acos(val: &Frame) -> Result<Frame> {
        real(val, f64::acos)
    }

    pub fn atan(val: &Frame) -> Result<Frame> {
        real(val, f64::atan)
    }

    pub fn re(val: &Frame) -> Result<Frame> {
        let c = number(val)?.to_complex();
        keep_note(Val::real(c.re), val)
    }

    pub fn im(val: &Frame) -> Result<Frame> {
        let c = number(val)?.to_complex();
        keep_note(Val::real(c.im), val)
    }

    pub fn conj(val: &Frame) -> Result<Frame> {
        match number(val)? {
            Number::Integer(..) => Ok(val.clone()),
            Number::Complex(c) => keep_note(Val::Complex(c.conj(), polar(val)), val),
        }
    }

    /// Angle of the number in radians.
    pub fn arg(val: &Frame) -> Result<Frame> {
        let c = number(val)?.to_complex();
        Ok(Frame::real(c.arg()))
    }

    /// Build a complex number from real and imaginary parts.
    pub fn cplx(re: &Frame, im: &Frame) -> Result<Frame> {
        let re = number(re)?.to_complex();
        let im = number(im)?.to_complex();
        if !re.is_real() || !im.is_real() {
            return Err(error!(ComplexNumberNotSupported));
        }
        Ok(Frame::complex(Complex::new(re.re, im.re)))
    }

    /// Tag a number for polar display, or clear the tag with `None`.
    pub fn angle(val: &Frame, unit: Option<AngleUnit>) -> Result<Frame> {
        let c = number(val)?.to_complex();
        keep_note(Val::Complex(c, unit), val)
    }

    /// Convert an integral number to an integer shown in `radix`.
    pub fn radix(val: &Frame, radix: Radix) -> Result<Frame> {
        match number(val)? {
            Number::Integer(n, _) => keep_note(Val::Integer(n, radix), val),
            Number::Complex(c) => {
                let in_range = c.re >= i64::MIN as f64 && c.re < i64::MAX as f64;
                if !c.is_real() {
                    Err(error!(ComplexNumberNotSupported))
                } else if c.re.fract() != 0.0 || !in_range {
                    Err(error!(IllegalValue; "NOT AN INTEGER"))
                } else {
                    keep_note(Val::Integer(c.re as i64, radix), val)
                }
            }
        }
    }

    pub fn float(val: &Frame) -> Result<Frame> {
        let c = number(val)?.to_complex();
        keep_note(Val::Complex(c, None), val)
    }
}

fn number(val: &Frame) -> Result<Number> {
    val.number().ok_or_else(|| error!(ExpectedANumber))
}

fn polar(val: &Frame) -> Option<AngleUnit> {
    match val.val() {
        Val::Complex(_, unit) => *unit,
        _ => None,
    }
}

fn keep_note(result: Val, val: &Frame) -> Result<Frame> {
    Ok(Frame::new(result).with_note(val.note().unwrap_or("")))
}

fn complex<F>(val: &Frame, f: F) -> Result<Frame>
where
    F: FnOnce(Complex) -> Result<Complex>,
{
    let c = f(number(val)?.to_complex())?;
    keep_note(Val::Complex(c, None), val)
}

fn real(val: &Frame, f: fn(f64) -> f64) -> Result<Frame> {
    let c = number(val)?.to_complex();
    if !c.is_real() {
        return Err(error!(ComplexNumberNotSupported));
    }
    keep_note(Val::real(f(c.re)), val)
}

fn rounding(val: &Frame, f: fn(f64) -> f64) -> Result<Frame> {
    match number(val)? {
        Number::Integer(..) => Ok(val.clone()),
        Number::Complex(_) => real(val, f),
    }
}
