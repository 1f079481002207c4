use super::{Complex, Frame, Number, Val};
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Binary operations on frames
///
/// Operands are borrowed so a failed operation consumes nothing.
/// Integer results take the radix of the left operand, and the result
/// keeps the first annotation found on either operand.

pub struct Operation {}

impl Operation {
    pub fn add(lhs: &Frame, rhs: &Frame) -> Result<Frame> {
        match (lhs.val(), rhs.val()) {
            (Val::String(l, quote), _) => Ok(Operation::noted(
                Val::String(format!("{}{}", l, rhs.text()), *quote),
                lhs,
                rhs,
            )),
            (_, Val::String(r, quote)) => Ok(Operation::noted(
                Val::String(format!("{}{}", lhs.text(), r), *quote),
                lhs,
                rhs,
            )),
            (Val::Bool(_), _) | (_, Val::Bool(_)) => {
                Err(error!(IllegalValue; "CANNOT ADD A BOOLEAN TO A NUMBER"))
            }
            _ => Operation::arithmetic(
                lhs,
                rhs,
                |l, r| l.checked_add(r).ok_or_else(overflow),
                |l, r| Ok(l + r),
            ),
        }
    }

    pub fn subtract(lhs: &Frame, rhs: &Frame) -> Result<Frame> {
        Operation::arithmetic(
            lhs,
            rhs,
            |l, r| l.checked_sub(r).ok_or_else(overflow),
            |l, r| Ok(l - r),
        )
    }

    pub fn multiply(lhs: &Frame, rhs: &Frame) -> Result<Frame> {
        Operation::arithmetic(
            lhs,
            rhs,
            |l, r| l.checked_mul(r).ok_or_else(overflow),
            |l, r| Ok(l * r),
        )
    }

    pub fn divide(lhs: &Frame, rhs: &Frame) -> Result<Frame> {
        Operation::arithmetic(
            lhs,
            rhs,
            |l, r| {
                if r == 0 {
                    Err(error!(DivideByZero))
                } else {
                    l.checked_div(r).ok_or_else(overflow)
                }
            },
            |l, r| l.checked_div(r).ok_or_else(|| error!(DivideByZero)),
        )
    }

    pub fn modulo(lhs: &Frame, rhs: &Frame) -> Result<Frame> {
        Operation::arithmetic(
            lhs,
            rhs,
            |l, r| {
                if r == 0 {
                    Err(error!(DivideByZero))
                } else {
                    l.checked_rem(r).ok_or_else(overflow)
                }
            },
            |l, r| {
                if !l.is_real() || !r.is_real() {
                    Err(error!(ComplexNumberNotSupported))
                } else if r.re == 0.0 {
                    Err(error!(DivideByZero))
                } else {
                    Ok(Complex::new(l.re % r.re, 0.0))
                }
            },
        )
    }

    pub fn power(lhs: &Frame, rhs: &Frame) -> Result<Frame> {
        Operation::arithmetic(
            lhs,
            rhs,
            |l, r| match u32::try_from(r) {
                Ok(r) => l.checked_pow(r).ok_or_else(overflow),
                Err(_) if r < 0 => Err(error!(IllegalValue; "NEGATIVE INTEGER EXPONENT")),
                Err(_) => Err(overflow()),
            },
            |l, r| {
                if l.is_zero() && r.re < 0.0 {
                    Err(error!(DivideByZero))
                } else {
                    Ok(l.pow(r))
                }
            },
        )
    }

    pub fn bit_and(lhs: &Frame, rhs: &Frame) -> Result<Frame> {
        Operation::bitwise(lhs, rhs, |l, r| Ok(l & r))
    }

    pub fn bit_or(lhs: &Frame, rhs: &Frame) -> Result<Frame> {
        Operation::bitwise(lhs, rhs, |l, r| Ok(l | r))
    }

    pub fn shift_left(lhs: &Frame, rhs: &Frame) -> Result<Frame> {
        Operation::bitwise(lhs, rhs, |l, r| {
            let r = u32::try_from(r).map_err(|_| error!(IllegalValue; "BAD SHIFT"))?;
            l.checked_shl(r).ok_or_else(|| error!(IllegalValue; "BAD SHIFT"))
        })
    }

    pub fn shift_right(lhs: &Frame, rhs: &Frame) -> Result<Frame> {
        Operation::bitwise(lhs, rhs, |l, r| {
            let r = u32::try_from(r).map_err(|_| error!(IllegalValue; "BAD SHIFT"))?;
            l.checked_shr(r).ok_or_else(|| error!(IllegalValue; "BAD SHIFT"))
        })
    }

    pub fn negate(val: &Frame) -> Result<Frame> {
        let neg = match val.number() {
            Some(Number::Integer(n, radix)) => {
                Val::Integer(n.checked_neg().ok_or_else(overflow)?, radix)
            }
            Some(Number::Complex(c)) => Val::Complex(-c, None),
            None => return Err(error!(ExpectedANumber)),
        };
        Ok(Frame::new(neg).with_note(val.note().unwrap_or("")))
    }

    fn arithmetic<I, C>(lhs: &Frame, rhs: &Frame, int: I, cplx: C) -> Result<Frame>
    where
        I: FnOnce(i64, i64) -> Result<i64>,
        C: FnOnce(Complex, Complex) -> Result<Complex>,
    {
        let val = match Operation::numbers(lhs, rhs)? {
            (Number::Integer(l, radix), Number::Integer(r, _)) => Val::Integer(int(l, r)?, radix),
            (l, r) => Val::Complex(cplx(l.to_complex(), r.to_complex())?, None),
        };
        Ok(Operation::noted(val, lhs, rhs))
    }

    fn bitwise<I>(lhs: &Frame, rhs: &Frame, int: I) -> Result<Frame>
    where
        I: FnOnce(i64, i64) -> Result<i64>,
    {
        match (lhs.val(), rhs.val()) {
            (Val::Integer(l, radix), Val::Integer(r, _)) => {
                Ok(Operation::noted(Val::Integer(int(*l, *r)?, *radix), lhs, rhs))
            }
            _ => Err(error!(ExpectedANumber; "INTEGER REQUIRED")),
        }
    }

    fn numbers(lhs: &Frame, rhs: &Frame) -> Result<(Number, Number)> {
        match (lhs.number(), rhs.number()) {
            (Some(l), Some(r)) => Ok(Number::promote(l, r)),
            _ => Err(error!(ExpectedANumber)),
        }
    }

    fn noted(val: Val, lhs: &Frame, rhs: &Frame) -> Frame {
        let note = lhs.note().or_else(|| rhs.note()).unwrap_or("");
        Frame::new(val).with_note(note)
    }
}

fn overflow() -> Error {
    error!(IllegalValue; "OVERFLOW")
}
