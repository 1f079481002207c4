use super::AngleUnit;
use std::ops;

/// Absolute tolerance used when comparing floating point values.
pub const TOLERANCE: f64 = 1e-9;

/// Rectangular complex number. Real values have a zero imaginary part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    pub const fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    pub fn from_polar(magnitude: f64, radians: f64) -> Complex {
        Complex::new(magnitude * radians.cos(), magnitude * radians.sin())
    }

    pub fn is_real(&self) -> bool {
        self.im == 0.0
    }

    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    pub fn abs(&self) -> f64 {
        self.re.hypot(self.im)
    }

    pub fn arg(&self) -> f64 {
        self.im.atan2(self.re)
    }

    pub fn conj(&self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    pub fn checked_div(self, rhs: Complex) -> Option<Complex> {
        if rhs.is_zero() {
            return None;
        }
        if rhs.is_real() && self.is_real() {
            return Some(Complex::new(self.re / rhs.re, 0.0));
        }
        let d = rhs.re * rhs.re + rhs.im * rhs.im;
        Some(Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / d,
            (self.im * rhs.re - self.re * rhs.im) / d,
        ))
    }

    pub fn exp(self) -> Complex {
        Complex::from_polar(self.re.exp(), self.im)
    }

    pub fn ln(self) -> Complex {
        Complex::new(self.abs().ln(), self.arg())
    }

    pub fn sqrt(self) -> Complex {
        if self.is_real() {
            if self.re >= 0.0 {
                return Complex::new(self.re.sqrt(), 0.0);
            }
            return Complex::new(0.0, (-self.re).sqrt());
        }
        Complex::from_polar(self.abs().sqrt(), self.arg() / 2.0)
    }

    pub fn pow(self, exp: Complex) -> Complex {
        if exp.is_zero() {
            return Complex::new(1.0, 0.0);
        }
        if self.is_zero() {
            return Complex::ZERO;
        }
        if self.is_real() && exp.is_real() && (self.re > 0.0 || exp.re.fract() == 0.0) {
            return Complex::new(self.re.powf(exp.re), 0.0);
        }
        (exp * self.ln()).exp()
    }

    pub fn approx_eq(&self, other: &Complex) -> bool {
        (self.re - other.re).abs() < TOLERANCE && (self.im - other.im).abs() < TOLERANCE
    }

    /// Compare by real part, then imaginary part, within [`TOLERANCE`].
    pub fn approx_lt(&self, other: &Complex) -> bool {
        if (self.re - other.re).abs() >= TOLERANCE {
            self.re < other.re
        } else {
            (self.im - other.im).abs() >= TOLERANCE && self.im < other.im
        }
    }

    pub fn format(&self, angle: Option<AngleUnit>) -> String {
        if let Some(unit) = angle {
            return format!(
                "{}@{}{}",
                real(self.abs()),
                real(unit.from_radians(self.arg())),
                unit.suffix()
            );
        }
        if self.im == 0.0 {
            return real(self.re);
        }
        let im = if self.im.abs() == 1.0 {
            String::new()
        } else {
            real(self.im.abs())
        };
        let sign = if self.im < 0.0 { "-" } else { "+" };
        if self.re == 0.0 {
            if self.im < 0.0 {
                format!("-{}i", im)
            } else {
                format!("{}i", im)
            }
        } else {
            format!("{}{}{}i", real(self.re), sign, im)
        }
    }
}

fn real(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        format!("{}", n)
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format(None))
    }
}

impl ops::Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl ops::Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl ops::Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        if self.is_real() && rhs.is_real() {
            return Complex::new(self.re * rhs.re, 0.0);
        }
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl ops::Neg for Complex {
    type Output = Complex;
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(Complex::new(5.0, 0.0).to_string(), "5");
        assert_eq!(Complex::new(-0.0, 0.0).to_string(), "0");
        assert_eq!(Complex::new(0.0, 1.0).to_string(), "i");
        assert_eq!(Complex::new(0.0, -1.0).to_string(), "-i");
        assert_eq!(Complex::new(0.0, 2.5).to_string(), "2.5i");
        assert_eq!(Complex::new(1.0, -2.0).to_string(), "1-2i");
        assert_eq!(Complex::new(1.5, 1.0).to_string(), "1.5+i");
    }

    #[test]
    fn test_polar_format() {
        let c = Complex::new(3.0, 0.0);
        assert_eq!(c.format(Some(AngleUnit::Degrees)), "3@0deg");
    }

    #[test]
    fn test_sqrt_negative() {
        let c = Complex::new(-4.0, 0.0).sqrt();
        assert!(c.approx_eq(&Complex::new(0.0, 2.0)));
    }

    #[test]
    fn test_division() {
        let q = Complex::new(1.0, 1.0).checked_div(Complex::new(0.0, 1.0));
        assert!(q.unwrap().approx_eq(&Complex::new(1.0, -1.0)));
        assert!(Complex::new(1.0, 0.0).checked_div(Complex::ZERO).is_none());
    }
}
