use std::{fmt, ops};

use num::complex::Complex64;

use crate::error::{ArithmeticError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
  value: Complex64,
}

impl Complex {
  pub fn new(real: f64, imag: f64) -> Self {
    Complex {
      value: Complex64::new(real, imag),
    }
  }

  pub fn real(&self) -> f64 {
    self.value.re
  }
  pub fn imag(&self) -> f64 {
    self.value.im
  }

  /// Divides by `other`, rationalising with its conjugate.
  ///
  /// Fails only when `other` has a squared magnitude of exactly `0.0`.
  pub fn checked_div(&self, other: &Complex) -> Result<Complex> {
    let (a, b) = (self.real(), self.imag());
    let (c, d) = (other.real(), other.imag());
    let denom = c * c + d * d;
    if denom == 0.0 {
      return Err(ArithmeticError::InvalidArgument(
        "Division by zero.".to_string(),
      ));
    }
    Ok(Complex::new((a * c + b * d) / denom, (b * c - a * d) / denom))
  }
}

impl From<Complex64> for Complex {
  fn from(value: Complex64) -> Self {
    Complex { value }
  }
}

impl ops::Add for Complex {
  type Output = Complex;

  fn add(self, rhs: Self) -> Self::Output {
    (self.value + rhs.value).into()
  }
}

impl ops::Sub for Complex {
  type Output = Complex;

  fn sub(self, rhs: Self) -> Self::Output {
    (self.value - rhs.value).into()
  }
}

impl ops::Mul for Complex {
  type Output = Complex;

  fn mul(self, rhs: Self) -> Self::Output {
    (self.value * rhs.value).into()
  }
}

impl fmt::Display for Complex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let separator = if self.imag() >= 0.0 { "+" } else { "-" };
    write!(f, "{} {} {}i", self.real(), separator, self.imag().abs())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn arithmetic() {
    let (a, b) = (Complex::new(3.0, 4.0), Complex::new(1.0, -2.0));
    assert_eq!(a + b, Complex::new(4.0, 2.0));
    assert_eq!(a - b, Complex::new(2.0, 6.0));
    assert_eq!(a * b, Complex::new(11.0, -2.0));
    assert_eq!(a.checked_div(&b), Ok(Complex::new(-1.0, 2.0)));
  }

  #[test]
  fn division_undoes_multiplication() {
    let a = Complex::new(-2.5, 0.5);
    let b = Complex::new(4.0, -8.0);
    let back = (a * b).checked_div(&b).unwrap();
    assert!((back.real() - a.real()).abs() < 1e-12);
    assert!((back.imag() - a.imag()).abs() < 1e-12);
  }

  #[test]
  fn division_by_zero_is_rejected() {
    let a = Complex::new(3.0, 4.0);
    assert_eq!(
      a.checked_div(&Complex::default()),
      Err(ArithmeticError::InvalidArgument("Division by zero.".to_string()))
    );
    assert!(a.checked_div(&Complex::new(-0.0, 0.0)).is_err());
    assert!(a.checked_div(&Complex::new(0.0, 1e-300)).is_err());
  }

  #[test]
  fn display() {
    assert_eq!(Complex::new(3.0, 4.0).to_string(), "3 + 4i");
    assert_eq!(Complex::new(3.0, -4.0).to_string(), "3 - 4i");
    assert_eq!(Complex::new(-1.5, 0.0).to_string(), "-1.5 + 0i");
    assert_eq!(Complex::new(0.0, -0.0).to_string(), "0 + 0i");
    assert_eq!(Complex::default().to_string(), "0 + 0i");
  }
}
